//! Trait abstraction for the authentication gateway to enable mocking in tests

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// JSON body for the login endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// JSON body for the registration endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignupRequest {
    pub email: String,
    pub fullname: String,
    pub age: u32,
    pub gender: String,
    pub password: String,
    #[serde(rename = "confirmPassword")]
    pub confirm_password: String,
}

/// Response body shape shared by both endpoints; only `message` is read
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// Result of a submit attempt that reached the server.
/// `ok` mirrors the HTTP status class (2xx); `message` carries the server's
/// explanation when the body provided one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub ok: bool,
    pub message: Option<String>,
}

#[allow(dead_code)]
impl SubmitOutcome {
    pub fn success() -> Self {
        Self {
            ok: true,
            message: None,
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: Some(message.into()),
        }
    }
}

/// Gateway to the remote authentication API. `Err` means the request never
/// produced a server verdict (connection or decode failure); a server
/// rejection is an `Ok` outcome with `ok == false`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// Submit login credentials
    async fn login(&self, request: &LoginRequest) -> Result<SubmitOutcome>;

    /// Submit a registration profile
    async fn register(&self, request: &SignupRequest) -> Result<SubmitOutcome>;
}
