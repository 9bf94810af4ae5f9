// Wire shapes for the demo users/groups API. Request payloads are
// separate types from the records the server returns, so a missing field
// in what we send is a compile error instead of a 400.

use serde::{Deserialize, Serialize};

/// Body of `POST /users`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub userid: String,
    pub groups: Vec<String>,
}

/// Body of `POST /groups`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct NewGroup {
    pub name: String,
}

/// Body of `PUT /users/{userid}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserMembershipUpdate {
    pub groups: Vec<String>,
}

/// Body of `PUT /groups/{name}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GroupMembershipUpdate {
    pub userids: Vec<String>,
}

/// A user as returned by the server. `created` is unix seconds and may be
/// `null`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct User {
    pub userid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    pub first_name: String,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<i64>,
    #[serde(default)]
    pub groups: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Group {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<i64>,
    /// Member user ids.
    #[serde(default)]
    pub users: Vec<String>,
}

/// Root object every successful response is wrapped in. Only the keys the
/// seeder reads are modelled; anything else is ignored.
#[derive(Deserialize, Debug, Default)]
pub struct Envelope {
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub group: Option<Group>,
}

/// Error body the server sends with non-2xx statuses.
#[derive(Deserialize, Debug)]
pub struct ErrorBody {
    pub error: String,
}
