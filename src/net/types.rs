//! User DTOs exchanged with the session endpoints.
//!
//! DESIGN
//! ======
//! Field names follow the backend document schema (camelCase) so the session
//! payload deserialises without an intermediate mapping layer.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Account category. Drives which guarded views a user may open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    /// Diver browsing instructors and resorts.
    #[default]
    Consumer,
    /// Dive instructor with a public profile.
    Instructor,
    /// Dive resort or operator.
    Resort,
    /// Platform administrator.
    Admin,
}

impl UserType {
    /// Wire name of the user type.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Consumer => "consumer",
            Self::Instructor => "instructor",
            Self::Resort => "resort",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name a known [`UserType`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown user type: {0}")]
pub struct UnknownUserType(pub String);

impl FromStr for UserType {
    type Err = UnknownUserType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "consumer" => Ok(Self::Consumer),
            "instructor" => Ok(Self::Instructor),
            "resort" => Ok(Self::Resort),
            "admin" => Ok(Self::Admin),
            _ => Err(UnknownUserType(s.to_owned())),
        }
    }
}

/// An authenticated user as returned by the `/api/auth/me` endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user identifier (document key).
    pub id: String,
    /// Sign-in email address.
    pub email: String,
    /// Display name.
    #[serde(default)]
    pub display_name: String,
    /// Avatar image URL, if available.
    #[serde(default)]
    pub avatar_url: Option<String>,
    /// Account category.
    pub user_type: UserType,
    /// Whether an administrator has approved the profile.
    #[serde(default)]
    pub is_approved: bool,
}

impl User {
    /// Name to show in page chrome, falling back to the email address.
    #[must_use]
    pub fn label(&self) -> &str {
        if self.display_name.trim().is_empty() {
            &self.email
        } else {
            &self.display_name
        }
    }
}
