// Transport layer: one JSON request, one JSON response. The blocking
// reqwest client keeps the seeder strictly sequential; every call waits
// for its response before the next one is issued.

use reqwest::blocking::Client;
use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode};
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{Result, SeedError};
use crate::models::ErrorBody;

/// Sends `body` as JSON to `url` and returns the decoded response.
///
/// Implementations must treat any status other than 200 as
/// [`SeedError::Request`] and must not retry.
pub trait JsonTransport {
    fn request(&self, method: Method, url: &str, headers: &HeaderMap, body: &Value)
        -> Result<Value>;
}

/// [`JsonTransport`] over a reqwest blocking client with its default
/// timeouts.
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self> {
        let client = Client::builder().build()?;
        Ok(HttpTransport { client })
    }

    pub fn with_client(client: Client) -> Self {
        HttpTransport { client }
    }
}

impl JsonTransport for HttpTransport {
    fn request(
        &self,
        method: Method,
        url: &str,
        headers: &HeaderMap,
        body: &Value,
    ) -> Result<Value> {
        debug!(%method, url, "sending request");
        let res = self
            .client
            .request(method.clone(), url)
            .headers(headers.clone())
            .json(body)
            .send()?;

        let status = res.status();
        if status != StatusCode::OK {
            let reason = status.canonical_reason().unwrap_or_default().to_string();
            // The demo API reports failures as {"error": "..."}; anything
            // else in the body is dropped.
            let message = res
                .text()
                .ok()
                .and_then(|txt| serde_json::from_str::<ErrorBody>(&txt).ok())
                .map(|b| b.error);
            warn!(url, status = status.as_u16(), ?message, "unexpected response status");
            return Err(SeedError::Request {
                url: url.to_string(),
                status: status.as_u16(),
                reason,
                message,
            });
        }

        let bytes = res.bytes()?;
        serde_json::from_slice(&bytes).map_err(|source| SeedError::Decode {
            url: url.to_string(),
            source,
        })
    }
}
