//! HTTP client for the remote authentication API
//!
//! Both endpoints accept a JSON body and answer with JSON; a 2xx status is
//! success and anything else is a rejection whose body may carry a
//! `message` field. One request per submit, no retry.

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Serialize;
use tracing::debug;

use super::traits::{ApiResponse, AuthGateway, LoginRequest, SignupRequest, SubmitOutcome};
use crate::config::AuthConfig;

/// Default endpoints, matching the hosted authentication service
const DEFAULT_LOGIN_URL: &str = "https://formvalidation-server.onrender.com/api/users/login";
const DEFAULT_REGISTER_URL: &str = "http://localhost:4000/api/users/register";

/// Client for the remote authentication API
pub struct AuthClient {
    http: reqwest::Client,
    login_url: String,
    register_url: String,
}

impl AuthClient {
    /// Create a new client. Endpoint URLs come from the environment when
    /// set, then the config file, then the built-in defaults.
    pub fn new(config: &AuthConfig) -> Self {
        let login_url = std::env::var("AUTH_API_LOGIN_URL")
            .ok()
            .or_else(|| config.login_url.clone())
            .unwrap_or_else(|| DEFAULT_LOGIN_URL.to_string());
        let register_url = std::env::var("AUTH_API_REGISTER_URL")
            .ok()
            .or_else(|| config.register_url.clone())
            .unwrap_or_else(|| DEFAULT_REGISTER_URL.to_string());

        Self {
            http: reqwest::Client::new(),
            login_url,
            register_url,
        }
    }

    async fn post_json<T: Serialize + Sync>(&self, url: &str, body: &T) -> Result<SubmitOutcome> {
        let response = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .with_context(|| format!("request to {url} failed"))?;

        let status = response.status();
        // A missing or malformed body is treated as "no message" rather
        // than a transport failure; the status already carries the verdict.
        let body: ApiResponse = response.json().await.unwrap_or_default();
        debug!(%status, url, "auth api response");

        Ok(SubmitOutcome {
            ok: status.is_success(),
            message: body.message,
        })
    }
}

#[async_trait]
impl AuthGateway for AuthClient {
    async fn login(&self, request: &LoginRequest) -> Result<SubmitOutcome> {
        self.post_json(&self.login_url, request).await
    }

    async fn register(&self, request: &SignupRequest) -> Result<SubmitOutcome> {
        self.post_json(&self.register_url, request).await
    }
}
