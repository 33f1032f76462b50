//! Wire DTOs for the remote authentication service.
//!
//! DESIGN
//! ======
//! Profile fields other than `role` are kept as an open JSON map so the
//! `userData` blob written to storage round-trips whatever the server sent.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Account role returned by the server and chosen on the signup form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    /// Anything the server sends that is not `"admin"` lands here.
    #[default]
    #[serde(other)]
    User,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "user" => Ok(Self::User),
            _ => Err(()),
        }
    }
}

/// User object returned by `POST /login` and persisted as `userData`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub role: Role,
    /// Remaining profile fields (name, email, ids, ...), passed through untouched.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// `POST /login` request body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// `POST /login` success body.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserProfile,
}

/// Completed `POST /login` exchange.
///
/// A 2xx status other than 200 is not an error at the transport level, but
/// it does not carry a session either.
#[derive(Clone, Debug, PartialEq)]
pub enum LoginReply {
    Accepted(LoginResponse),
    Unexpected { status: u16 },
}

/// `POST /post` request body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub mobile_number: String,
    pub role: Role,
    #[serde(rename = "adminToken", skip_serializing_if = "Option::is_none")]
    pub admin_token: Option<String>,
}
