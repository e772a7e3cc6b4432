/**
 * Identity Provider Client
 *
 * The forms never authenticate anyone themselves. They call an
 * `AuthProvider`, which wraps an external identity service.
 * `HttpAuthProvider` talks to a hosted auth API (GoTrue-style endpoints).
 *
 * Calls are blocking and run on a background thread, never on the UI thread.
 */

use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::egui_app::config::Config;
use crate::egui_app::types::{ProviderUser, Session, SignUpResult};

/// Failure reported by the identity provider
///
/// `Display` yields the human-readable message shown to the user.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProviderError {
    /// The request never produced a response
    #[error("{0}")]
    Network(String),
    /// The provider answered with a non-success status
    #[error("{message}")]
    Rejected { status: u16, message: String },
    /// The response body could not be understood
    #[error("{0}")]
    Decode(String),
}

/// External sign-in/sign-up interface used by the forms
pub trait AuthProvider: Send + Sync {
    fn sign_in(&self, email: &str, password: &str) -> Result<Session, ProviderError>;

    fn sign_up(
        &self,
        email: &str,
        password: &str,
        full_name: &str,
    ) -> Result<SignUpResult, ProviderError>;
}

#[derive(Serialize)]
struct PasswordGrant<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct SignUpMetadata<'a> {
    full_name: &'a str,
}

#[derive(Serialize)]
struct SignUpBody<'a> {
    email: &'a str,
    password: &'a str,
    data: SignUpMetadata<'a>,
}

/// HTTP client for a hosted identity provider
pub struct HttpAuthProvider {
    client: Client,
    config: Config,
}

impl HttpAuthProvider {
    pub fn new(config: Config) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn post(&self, path: &str, body: &impl Serialize) -> Result<Value, ProviderError> {
        let url = self.config.api_url(path);
        tracing::debug!("POST {}", url);

        let mut request = self.client.post(&url).json(body);
        if let Some(key) = self.config.api_key() {
            request = request.header("apikey", key);
        }

        let response = request
            .send()
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        if !status.is_success() {
            let message = rejection_message(status, &text);
            tracing::warn!("Provider rejected {}: {} - {}", path, status, message);
            return Err(ProviderError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_str(&text)
            .map_err(|e| ProviderError::Decode(format!("Failed to parse response: {}", e)))
    }
}

impl AuthProvider for HttpAuthProvider {
    fn sign_in(&self, email: &str, password: &str) -> Result<Session, ProviderError> {
        let body = self.post(
            "/auth/v1/token?grant_type=password",
            &PasswordGrant { email, password },
        )?;

        serde_json::from_value(body)
            .map_err(|e| ProviderError::Decode(format!("Failed to parse session: {}", e)))
    }

    fn sign_up(
        &self,
        email: &str,
        password: &str,
        full_name: &str,
    ) -> Result<SignUpResult, ProviderError> {
        let body = self.post(
            "/auth/v1/signup",
            &SignUpBody {
                email,
                password,
                data: SignUpMetadata { full_name },
            },
        )?;

        parse_sign_up(body)
    }
}

/// Normalize the two sign-up response shapes
///
/// With email confirmation on, the provider returns the bare user. With it
/// off, it returns a full session that embeds the user.
fn parse_sign_up(body: Value) -> Result<SignUpResult, ProviderError> {
    let decode = |e: serde_json::Error| ProviderError::Decode(format!("Failed to parse response: {}", e));

    if body.get("access_token").is_some() {
        let session: Session = serde_json::from_value(body).map_err(decode)?;
        return Ok(SignUpResult {
            user: Some(session.user.clone()),
            session: Some(session),
        });
    }

    let user: ProviderUser = serde_json::from_value(body).map_err(decode)?;
    Ok(SignUpResult {
        user: Some(user),
        session: None,
    })
}

/// Pull the most specific message out of an error body
fn rejection_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| {
            ["error_description", "msg", "message", "error"]
                .iter()
                .find_map(|key| {
                    value
                        .get(key)
                        .and_then(Value::as_str)
                        .filter(|s| !s.is_empty())
                        .map(str::to_string)
                })
        })
        .unwrap_or_else(|| format!("Request failed with status {}", status.as_u16()))
}
