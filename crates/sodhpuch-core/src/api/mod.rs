//! HTTP client for the CollegeSodhpuch API.
//!
//! Three calls are exposed: form-encoded login, bearer-authenticated
//! "current user" lookup, and JSON registration. Failures are mapped to
//! [`ApiError`] with a display-ready message.

mod error;

use std::fmt;
use std::time::Duration;

use anyhow::{Context, Result};
pub use error::{ApiError, ApiErrorKind, ApiResult};
use reqwest::header::{AUTHORIZATION, CACHE_CONTROL, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::session::mask_token;

const LOGIN_FALLBACK: &str = "Login failed";
const PROFILE_FALLBACK: &str = "Failed to fetch user profile";
const REGISTER_FALLBACK: &str = "Registration failed";

/// Response of a successful login.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
}

impl fmt::Debug for LoginResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginResponse")
            .field("access_token", &mask_token(&self.access_token))
            .field("token_type", &self.token_type)
            .finish()
    }
}

/// The signed-in user's profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub email: String,
    pub full_name: String,
    pub is_active: bool,
    /// Creation timestamp, kept exactly as the server sent it
    pub created_at: String,
}

impl UserProfile {
    pub fn active_label(&self) -> &'static str {
        if self.is_active { "Yes" } else { "No" }
    }
}

/// Registration payload.
#[derive(Clone, Serialize)]
pub struct NewUser {
    pub email: String,
    pub full_name: String,
    pub password: String,
}

impl fmt::Debug for NewUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewUser")
            .field("email", &self.email)
            .field("full_name", &self.full_name)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// API client bound to one base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    /// Creates a client for `base_url` (no trailing slash expected).
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().context("Failed to build HTTP client")?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
        })
    }

    /// Creates a client from config, honoring the env override.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.effective_api_base_url(), config.request_timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Exchanges email and password for a bearer token.
    ///
    /// The body is `application/x-www-form-urlencoded` with the email sent
    /// as `username`.
    ///
    /// # Errors
    /// Returns an [`ApiError`] on transport failure, non-2xx status, or a
    /// malformed response body.
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<LoginResponse> {
        let body = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("username", email)
            .append_pair("password", password)
            .finish();

        let url = format!("{}/auth/login", self.base_url);
        tracing::debug!(%url, "POST login");

        let response = self
            .http
            .post(&url)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(body)
            .send()
            .await
            .map_err(|e| ApiError::transport(&e))?;

        read_json(response, "login", LOGIN_FALLBACK).await
    }

    /// Fetches the profile of the user owning `token`.
    ///
    /// # Errors
    /// Returns an [`ApiError`] on transport failure, non-2xx status, or a
    /// malformed response body.
    pub async fn current_user(&self, token: &str) -> ApiResult<UserProfile> {
        let url = format!("{}/users/me", self.base_url);
        tracing::debug!(%url, "GET current user");

        let response = self
            .http
            .get(&url)
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .header(CACHE_CONTROL, "no-store")
            .send()
            .await
            .map_err(|e| ApiError::transport(&e))?;

        read_json(response, "profile", PROFILE_FALLBACK).await
    }

    /// Registers a new account.
    ///
    /// # Errors
    /// Returns an [`ApiError`] on transport failure, non-2xx status, or a
    /// malformed response body.
    pub async fn register(&self, user: &NewUser) -> ApiResult<UserProfile> {
        let url = format!("{}/auth/register", self.base_url);
        tracing::debug!(%url, "POST register");

        let response = self
            .http
            .post(&url)
            .json(user)
            .send()
            .await
            .map_err(|e| ApiError::transport(&e))?;

        read_json(response, "registration", REGISTER_FALLBACK).await
    }
}

async fn read_json<T: DeserializeOwned>(
    response: reqwest::Response,
    what: &str,
    fallback: &str,
) -> ApiResult<T> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::transport(&e))?;

    if !status.is_success() {
        tracing::warn!(status = status.as_u16(), what, "API request rejected");
        return Err(ApiError::http_status(status.as_u16(), &body, fallback));
    }

    serde_json::from_str(&body).map_err(|e| ApiError::parse(what, &e))
}
