/**
 * Login API Wire Types
 *
 * This module defines the JSON shapes exchanged with `POST /api/login` and
 * `GET /api/health`. Every response uses the same envelope:
 *
 * ```json
 * { "success": true, "message": "...", "data": { ... } }
 * ```
 *
 * `data` is only present on a successful login.
 */
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Login request body
///
/// Fields are kept as raw JSON values. A field counts as present when its
/// value is truthy in the JavaScript sense (`""`, `0`, `false` and `null` are
/// not), but only string values can ever match a stored record.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct LoginRequest {
    /// Username to look up
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<Value>,
    /// Email to look up
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<Value>,
    /// Plain-text password compared against the stored record
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<Value>,
}

impl LoginRequest {
    /// Whether a truthy username or email was sent
    pub fn has_identifier(&self) -> bool {
        is_truthy(self.username.as_ref()) || is_truthy(self.email.as_ref())
    }

    /// Whether a truthy password was sent
    pub fn has_password(&self) -> bool {
        is_truthy(self.password.as_ref())
    }

    /// Username as a non-empty string, if it is one
    pub fn username(&self) -> Option<&str> {
        text(self.username.as_ref())
    }

    /// Email as a non-empty string, if it is one
    pub fn email(&self) -> Option<&str> {
        text(self.email.as_ref())
    }

    /// Password as a non-empty string, if it is one
    pub fn password(&self) -> Option<&str> {
        text(self.password.as_ref())
    }

    /// The identifier used for log lines (username first, then email)
    pub fn identifier(&self) -> Option<&str> {
        self.username().or_else(|| self.email())
    }
}

/// JavaScript truthiness of a JSON value; an absent field is falsy
pub fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

fn text(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|v| !v.is_empty())
}

/// Non-secret identity fields of a credential record
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UserSummary {
    pub username: String,
    pub email: String,
}

/// Payload returned inside `data` on a successful login
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LoginData {
    /// Fixed placeholder token
    pub token: String,
    pub user: UserSummary,
}

/// Response envelope shared by every endpoint
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Successful response carrying a payload
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    /// Successful response with only a message
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: None,
        }
    }

    /// Failed response with only a message
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
        }
    }
}
