// In-memory stand-in for the demo users/groups API.

#![allow(dead_code)]

use std::cell::RefCell;

use demoapi_seeder::config::SeedConfig;
use demoapi_seeder::transport::JsonTransport;
use demoapi_seeder::{Result, SeedError};
use reqwest::header::HeaderMap;
use reqwest::Method;
use serde_json::{json, Value};

pub const BASE: &str = "http://api.test";

#[derive(Debug, Clone)]
pub struct Call {
    pub method: Method,
    pub url: String,
    pub authorization: Option<String>,
    pub body: Value,
}

/// Echoes payloads back: `POST /users` → `{"user": body}`, `POST /groups`
/// → `{"group": body}`, `PUT` → body. Optionally answers one call (by
/// position, 0-based) with a 404.
#[derive(Default)]
pub struct EchoApi {
    calls: RefCell<Vec<Call>>,
    fail_at: Option<usize>,
}

impl EchoApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_at(index: usize) -> Self {
        EchoApi {
            calls: RefCell::default(),
            fail_at: Some(index),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }
}

impl JsonTransport for EchoApi {
    fn request(&self, method: Method, url: &str, headers: &HeaderMap, body: &Value) -> Result<Value> {
        let index = self.calls.borrow().len();
        self.calls.borrow_mut().push(Call {
            method: method.clone(),
            url: url.to_string(),
            authorization: headers
                .get(reqwest::header::AUTHORIZATION)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string),
            body: body.clone(),
        });

        if self.fail_at == Some(index) {
            return Err(SeedError::Request {
                url: url.to_string(),
                status: 404,
                reason: "Not Found".into(),
                message: None,
            });
        }

        let path = url.strip_prefix(BASE).unwrap_or(url);
        Ok(match (method, path) {
            (Method::POST, "/users") => json!({ "user": body }),
            (Method::POST, "/groups") => json!({ "group": body }),
            _ => body.clone(),
        })
    }
}

pub fn config() -> SeedConfig {
    SeedConfig::new(BASE, "dummy_token").expect("valid test config")
}
