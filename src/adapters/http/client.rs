//! HttpApiClient - reqwest implementation of the session service ports.
//!
//! # Configuration
//!
//! ```ignore
//! let config = HttpApiConfig::new("http://localhost:4000/api")
//!     .with_timeout(Duration::from_secs(10));
//!
//! let client = HttpApiClient::new(config)?;
//! let sessions = client.list_sessions().await?;
//! ```
//!
//! Calls are made once; there is no retry or backoff. Non-2xx answers become
//! `ApiError::Rejected` with the body's `message` field when present.

use async_trait::async_trait;
use reqwest::{Client, Response};
use std::time::Duration;

use super::dto::{ErrorBody, LoginRequest, LoginResponse};
use crate::config::ApiConfig;
use crate::domain::session::{NewSession, SessionRecord};
use crate::ports::{AdminGateway, ApiError, AuthToken, LoginCredentials, SessionSource};

/// Configuration for the HTTP client.
#[derive(Debug, Clone)]
pub struct HttpApiConfig {
    /// Base URL of the API, e.g. `http://localhost:4000/api`.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl HttpApiConfig {
    /// Creates a configuration for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl From<&ApiConfig> for HttpApiConfig {
    fn from(config: &ApiConfig) -> Self {
        Self::new(config.base_url.clone()).with_timeout(config.timeout())
    }
}

/// Client for the session service REST API.
pub struct HttpApiClient {
    config: HttpApiConfig,
    client: Client,
}

impl HttpApiClient {
    /// Creates a client with the given configuration.
    pub fn new(config: HttpApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApiError::network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// Joins `path` onto the base URL.
    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
    }

    fn map_send_error(&self, e: reqwest::Error) -> ApiError {
        if e.is_timeout() {
            ApiError::Timeout {
                timeout_secs: self.config.timeout.as_secs(),
            }
        } else if e.is_connect() {
            ApiError::network(format!("Connection failed: {}", e))
        } else {
            ApiError::network(e.to_string())
        }
    }

    /// Passes 2xx responses through and converts the rest into `Rejected`.
    async fn check_status(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = ErrorBody::message_from(&body);
        tracing::warn!(status = status.as_u16(), ?message, "Session API rejected request");

        Err(ApiError::rejected(status.as_u16(), message))
    }
}

#[async_trait]
impl SessionSource for HttpApiClient {
    async fn list_sessions(&self) -> Result<Vec<SessionRecord>, ApiError> {
        let url = self.url("sessions");
        tracing::debug!("Fetching sessions from {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;
        let response = Self::check_status(response).await?;

        let records: Vec<SessionRecord> = response
            .json()
            .await
            .map_err(|e| ApiError::parse(format!("Failed to parse sessions: {}", e)))?;

        tracing::debug!("Fetched {} sessions", records.len());
        Ok(records)
    }
}

#[async_trait]
impl AdminGateway for HttpApiClient {
    async fn login(&self, credentials: &LoginCredentials) -> Result<AuthToken, ApiError> {
        let url = self.url("login");
        tracing::debug!(username = %credentials.username, "Logging in at {}", url);

        let response = self
            .client
            .post(&url)
            .json(&LoginRequest {
                username: &credentials.username,
                password: credentials.password(),
            })
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;
        let response = Self::check_status(response).await?;

        let body: LoginResponse = response
            .json()
            .await
            .map_err(|e| ApiError::parse(format!("Failed to parse login response: {}", e)))?;

        Ok(AuthToken::new(body.token))
    }

    async fn create_session(
        &self,
        token: &AuthToken,
        session: &NewSession,
    ) -> Result<(), ApiError> {
        let url = self.url("sessions");
        tracing::debug!(
            title = %session.title,
            date = %session.date,
            "Creating session at {}",
            url
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(token.expose())
            .json(session)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;
        Self::check_status(response).await?;

        Ok(())
    }
}
