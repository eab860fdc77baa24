//! Wire DTOs for the feedback backend's REST API.
//!
//! DESIGN
//! ======
//! These types mirror the backend's request/response schemas field for field
//! so serde round-trips stay lossless. Closed categories (role, sentiment)
//! are enums rather than strings, making an invalid value a deserialization
//! error instead of a silent mismatch at comparison sites.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which dashboard and actions a user is entitled to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Writes feedback about employees and reviews what they have submitted.
    Manager,
    /// Receives feedback and acknowledges it.
    Employee,
}

impl Role {
    /// Lowercase wire form, also used for `<select>` option values.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Manager => "manager",
            Self::Employee => "employee",
        }
    }

    /// Landing route for this role after login.
    pub const fn dashboard_path(self) -> &'static str {
        match self {
            Self::Manager => "/manager-dashboard",
            Self::Employee => "/employee-dashboard",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "manager" => Ok(Self::Manager),
            "employee" => Ok(Self::Employee),
            other => Err(format!("unknown role: {other}")),
        }
    }
}

/// Tone classification a manager assigns to a piece of feedback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    /// Lowercase wire form, also used for `<select>` option values.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Neutral => "neutral",
            Self::Negative => "negative",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sentiment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "positive" => Ok(Self::Positive),
            "neutral" => Ok(Self::Neutral),
            "negative" => Ok(Self::Negative),
            other => Err(format!("unknown sentiment: {other}")),
        }
    }
}

/// Credentials posted to `POST /api/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    /// Role the user selected on the form; the backend authenticates on
    /// email + password alone and reports the account's actual role back.
    pub role: Role,
}

/// Registration payload posted to `POST /api/auth/signup`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub department: String,
    pub role: Role,
}

/// The user record embedded in a successful login response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub email: String,
    pub role: Role,
    pub name: String,
}

/// Successful response from `POST /api/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub user: AuthUser,
}

/// A feedback record as returned by the feedback list endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    pub id: i64,
    /// Employee the feedback is about.
    pub employee_id: i64,
    /// Manager who wrote it.
    pub manager_id: i64,
    pub strengths: String,
    pub improvements: String,
    pub sentiment: Sentiment,
    /// The backend's output schema omits this field even though it is
    /// stored, so a missing value means not acknowledged.
    #[serde(default)]
    pub acknowledged: bool,
    /// ISO 8601 creation timestamp, when the backend includes one.
    #[serde(default)]
    pub created_at: Option<String>,
}

/// New-feedback payload posted to `POST /api/feedback/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackCreate {
    pub employee_id: i64,
    pub strengths: String,
    pub improvements: String,
    pub sentiment: Sentiment,
}

/// Acknowledgment payload for `PUT /api/feedback/acknowledge`.
///
/// The flag only ever transitions false to true from this client; there is
/// no un-acknowledge surface.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcknowledgeRequest {
    pub feedback_id: i64,
    pub acknowledged: bool,
}
