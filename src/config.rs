use crate::error::{Result, SeedError};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
/// The demo API only checks that a bearer token is present, if it checks
/// at all.
pub const DEFAULT_TOKEN: &str = "dummy_token";

pub const BASE_URL_VAR: &str = "DEMOAPI_URL";
pub const TOKEN_VAR: &str = "DEMOAPI_TOKEN";

/// Where to send requests and which bearer token to attach.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedConfig {
    base_url: String,
    token: String,
}

impl SeedConfig {
    /// Validate and build a config. A trailing `/` on the base URL is
    /// dropped so endpoint paths can be appended directly.
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into().trim().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(SeedError::Config("base url is empty".into()));
        }
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(SeedError::Config(format!(
                "base url must start with http:// or https://, got {base_url}"
            )));
        }
        let token = token.into();
        if token.trim().is_empty() {
            return Err(SeedError::Config("auth token is empty".into()));
        }
        Ok(SeedConfig { base_url, token })
    }

    /// Read `DEMOAPI_URL` / `DEMOAPI_TOKEN`, falling back to the local demo
    /// server defaults.
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var(BASE_URL_VAR).unwrap_or_else(|_| DEFAULT_BASE_URL.into());
        let token = std::env::var(TOKEN_VAR).unwrap_or_else(|_| DEFAULT_TOKEN.into());
        Self::new(base_url, token)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn users_url(&self) -> String {
        format!("{}/users", self.base_url)
    }

    pub fn groups_url(&self) -> String {
        format!("{}/groups", self.base_url)
    }

    pub fn user_url(&self, user_id: &str) -> String {
        format!("{}/users/{}", self.base_url, user_id)
    }

    pub fn group_url(&self, group_name: &str) -> String {
        format!("{}/groups/{}", self.base_url, group_name)
    }
}

impl Default for SeedConfig {
    fn default() -> Self {
        SeedConfig {
            base_url: DEFAULT_BASE_URL.into(),
            token: DEFAULT_TOKEN.into(),
        }
    }
}
