//! Login page flow.
//!
//! `begin_submit` disables the form and hands out the credentials,
//! `finish_submit` re-enables it whatever the outcome. Only a successful
//! login produces a token; failures leave the message on the form.

use std::fmt;

use super::Route;
use crate::api::{ApiClient, ApiError, LoginResponse};
use crate::session::TokenStore;

const SUBMIT_LABEL: &str = "Sign in";
const PENDING_LABEL: &str = "Signing in...";
const REDACTED: &str = "<redacted>";

/// Credentials captured from the form at submit time.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &REDACTED)
            .finish()
    }
}

/// What the caller should do after a submit completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Token stored; move to the given page.
    Navigate(Route),
    /// Stay on the login page; the form carries the error.
    Stay,
}

/// State of the login form.
#[derive(Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    error: Option<String>,
    pending: bool,
}

impl fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginForm")
            .field("email", &self.email)
            .field("password", &REDACTED)
            .field("error", &self.error)
            .field("pending", &self.pending)
            .finish()
    }
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// The submit control is disabled while a request is in flight.
    pub fn submit_enabled(&self) -> bool {
        !self.pending
    }

    pub fn submit_label(&self) -> &'static str {
        if self.pending {
            PENDING_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Starts a submit.
    ///
    /// Returns `None` without issuing anything when a request is already
    /// pending, or when the fields fail validation (the form then shows a
    /// validation message).
    pub fn begin_submit(&mut self) -> Option<Credentials> {
        if self.pending {
            return None;
        }

        let email = self.email.trim();
        if email.is_empty() || self.password.is_empty() {
            self.error = Some("Email and password are required".to_string());
            return None;
        }
        if !email.contains('@') {
            self.error = Some("Enter a valid email address".to_string());
            return None;
        }

        self.error = None;
        self.pending = true;
        Some(Credentials {
            email: email.to_string(),
            password: self.password.clone(),
        })
    }

    /// Completes a submit and re-enables the form.
    ///
    /// Returns the token to store on success.
    pub fn finish_submit(&mut self, result: Result<LoginResponse, ApiError>) -> Option<String> {
        self.pending = false;
        match result {
            Ok(response) => {
                self.error = None;
                Some(response.access_token)
            }
            Err(err) => {
                self.error = Some(err.message);
                None
            }
        }
    }

    /// Records a failure that happened after the request (e.g. storing the token).
    pub fn fail(&mut self, message: impl Into<String>) {
        self.pending = false;
        self.error = Some(message.into());
    }
}

/// Runs the whole login flow: validate, call the API, store the token.
pub async fn submit<S>(form: &mut LoginForm, client: &ApiClient, store: &S) -> LoginOutcome
where
    S: TokenStore + ?Sized,
{
    let Some(credentials) = form.begin_submit() else {
        return LoginOutcome::Stay;
    };

    tracing::info!(email = %credentials.email, "signing in");
    let result = client
        .login(&credentials.email, &credentials.password)
        .await;

    let Some(token) = form.finish_submit(result) else {
        tracing::info!(email = %credentials.email, "sign in failed");
        return LoginOutcome::Stay;
    };

    if let Err(e) = store.save(&token) {
        tracing::error!("failed to store session: {e:#}");
        form.fail(format!("Could not save session: {e:#}"));
        return LoginOutcome::Stay;
    }

    tracing::info!(email = %credentials.email, "signed in");
    LoginOutcome::Navigate(Route::Dashboard)
}
