// API client module: the four calls the seeder makes against the demo
// users/groups API. Each one builds a typed payload, sends it through the
// transport with the bearer header attached, and decodes the part of the
// response it cares about. Errors are passed through untouched.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::config::SeedConfig;
use crate::error::{Result, SeedError};
use crate::ident;
use crate::models::{
    Envelope, Group, GroupMembershipUpdate, NewGroup, NewUser, User, UserMembershipUpdate,
};
use crate::transport::{HttpTransport, JsonTransport};

/// Client for the users/groups API. Holds the transport, the endpoint
/// configuration and the prebuilt `Authorization` header.
pub struct ApiClient<T = HttpTransport> {
    transport: T,
    config: SeedConfig,
    headers: HeaderMap,
}

impl ApiClient<HttpTransport> {
    /// Create an ApiClient configured from `DEMOAPI_URL` / `DEMOAPI_TOKEN`,
    /// or the local demo server defaults.
    pub fn from_env() -> Result<Self> {
        Self::new(SeedConfig::from_env()?)
    }

    pub fn new(config: SeedConfig) -> Result<Self> {
        Self::with_transport(HttpTransport::new()?, config)
    }
}

impl<T: JsonTransport> ApiClient<T> {
    pub fn with_transport(transport: T, config: SeedConfig) -> Result<Self> {
        let headers = auth_headers(config.token())?;
        Ok(ApiClient {
            transport,
            config,
            headers,
        })
    }

    pub fn config(&self) -> &SeedConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// POST /users with a fresh `user…` id suggestion. Returns the user the
    /// server created, which may carry a different id.
    pub fn create_user(&self, first_name: &str, last_name: &str, groups: &[String]) -> Result<User> {
        let url = self.config.users_url();
        let payload = NewUser {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            userid: ident::user_id_suggestion(),
            groups: groups.to_vec(),
        };
        let resp = self.send(Method::POST, &url, &payload)?;
        let user = open_envelope(&url, resp)?
            .user
            .ok_or(SeedError::MissingEnvelope { url, key: "user" })?;
        info!(userid = %user.userid, first_name, last_name, "created user");
        Ok(user)
    }

    /// POST /groups with a fresh `group…` name suggestion.
    ///
    /// `label` is only used for logging; the server never sees it.
    pub fn create_group(&self, label: &str) -> Result<Group> {
        let url = self.config.groups_url();
        let payload = NewGroup {
            name: ident::group_name_suggestion(),
        };
        let resp = self.send(Method::POST, &url, &payload)?;
        let group = open_envelope(&url, resp)?
            .group
            .ok_or(SeedError::MissingEnvelope { url, key: "group" })?;
        info!(name = %group.name, label, "created group");
        Ok(group)
    }

    /// PUT /users/{user_id}, replacing the user's group list.
    pub fn set_user_membership(&self, user_id: &str, group_names: &[String]) -> Result<Value> {
        let url = self.config.user_url(user_id);
        let payload = UserMembershipUpdate {
            groups: group_names.to_vec(),
        };
        let resp = self.send(Method::PUT, &url, &payload)?;
        info!(user_id, groups = group_names.len(), "set user membership");
        Ok(resp)
    }

    /// PUT /groups/{group_name}, replacing the group's member list.
    pub fn set_group_membership(&self, group_name: &str, user_ids: &[String]) -> Result<Value> {
        let url = self.config.group_url(group_name);
        let payload = GroupMembershipUpdate {
            userids: user_ids.to_vec(),
        };
        let resp = self.send(Method::PUT, &url, &payload)?;
        info!(group_name, members = user_ids.len(), "set group membership");
        Ok(resp)
    }

    fn send<P: Serialize>(&self, method: Method, url: &str, payload: &P) -> Result<Value> {
        let body = serde_json::to_value(payload).map_err(|source| SeedError::Encode {
            url: url.to_string(),
            source,
        })?;
        debug!(%method, url, %body, "request payload");
        self.transport.request(method, url, &self.headers, &body)
    }
}

/// Build the Authorization header map for `token`.
fn auth_headers(token: &str) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    let mut val = HeaderValue::from_str(&format!("Bearer {token}"))?;
    val.set_sensitive(true);
    headers.insert(AUTHORIZATION, val);
    Ok(headers)
}

fn open_envelope(url: &str, resp: Value) -> Result<Envelope> {
    serde_json::from_value(resp).map_err(|source| SeedError::Decode {
        url: url.to_string(),
        source,
    })
}
