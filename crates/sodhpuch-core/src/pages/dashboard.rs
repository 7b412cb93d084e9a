//! Dashboard page flow.
//!
//! Entering the page consults the session first: with no token the visitor
//! is sent to the login page before any request is made. With a token the
//! profile is fetched fresh; a failed fetch clears the token so the next
//! visit redirects again.

use super::Route;
use crate::api::{ApiClient, ApiError, UserProfile};
use crate::session::TokenStore;

const LOADING_TEXT: &str = "Loading profile...";

/// Result of checking the session on page entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gate {
    /// No session; navigate away without fetching.
    Redirect(Route),
    /// Session present; fetch the profile with this token.
    Proceed(String),
}

/// Checks the stored session.
///
/// A store that cannot be read is treated as holding no session.
pub fn gate<S>(store: &S) -> Gate
where
    S: TokenStore + ?Sized,
{
    match store.load() {
        Ok(Some(token)) => Gate::Proceed(token),
        Ok(None) => Gate::Redirect(Route::Login),
        Err(e) => {
            tracing::warn!("failed to read session, treating as logged out: {e:#}");
            Gate::Redirect(Route::Login)
        }
    }
}

/// What to do with the stored session after a fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    Keep,
    Clear,
}

/// Why the stored session is being removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearReason {
    /// The profile fetch failed.
    FetchFailed,
    /// The user logged out.
    Logout,
}

impl ClearReason {
    pub fn as_str(self) -> &'static str {
        match self {
            ClearReason::FetchFailed => "profile fetch failed",
            ClearReason::Logout => "logout",
        }
    }
}

/// What the dashboard currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DashboardView {
    #[default]
    Loading,
    Ready(UserProfile),
    Failed(String),
}

impl DashboardView {
    /// Applies a profile fetch result.
    ///
    /// Any failure replaces the profile with the error message and asks the
    /// caller to clear the session.
    pub fn apply(&mut self, result: Result<UserProfile, ApiError>) -> SessionAction {
        match result {
            Ok(profile) => {
                *self = DashboardView::Ready(profile);
                SessionAction::Keep
            }
            Err(err) => {
                if err.is_unauthorized() {
                    tracing::info!("session rejected by the API");
                } else {
                    tracing::warn!(kind = %err.kind, "profile fetch failed: {err}");
                }
                *self = DashboardView::Failed(err.message);
                SessionAction::Clear
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, DashboardView::Loading)
    }

    pub fn loading_text(&self) -> Option<&'static str> {
        self.is_loading().then_some(LOADING_TEXT)
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        match self {
            DashboardView::Ready(profile) => Some(profile),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            DashboardView::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Label/value rows shown for a profile.
pub fn profile_rows(profile: &UserProfile) -> [(&'static str, &str); 3] {
    [
        ("Name", profile.full_name.as_str()),
        ("Email", profile.email.as_str()),
        ("Active", profile.active_label()),
    ]
}

/// Outcome of a full dashboard visit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardOutcome {
    Redirect(Route),
    Shown(DashboardView),
}

/// Runs the whole dashboard flow: gate, fetch, and clear the session on failure.
pub async fn load<S>(client: &ApiClient, store: &S) -> DashboardOutcome
where
    S: TokenStore + ?Sized,
{
    let token = match gate(store) {
        Gate::Redirect(route) => {
            tracing::info!("no session, redirecting to {}", route.path());
            return DashboardOutcome::Redirect(route);
        }
        Gate::Proceed(token) => token,
    };

    let mut view = DashboardView::Loading;
    let result = client.current_user(&token).await;
    if view.apply(result) == SessionAction::Clear {
        clear_session(store, ClearReason::FetchFailed);
    }

    DashboardOutcome::Shown(view)
}

/// Clears the session. Failures are only logged.
///
/// Returns true if a session was present.
pub fn clear_session<S>(store: &S, reason: ClearReason) -> bool
where
    S: TokenStore + ?Sized,
{
    match store.clear() {
        Ok(existed) => {
            tracing::info!(reason = reason.as_str(), existed, "session cleared");
            existed
        }
        Err(e) => {
            tracing::error!(reason = reason.as_str(), "failed to clear session: {e:#}");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::session::MemoryTokenStore;

    fn profile_body() -> serde_json::Value {
        serde_json::json!({
            "id": 3,
            "email": "ravi@example.com",
            "full_name": "Ravi Kumar",
            "is_active": false,
            "created_at": "2024-01-05T08:00:00Z"
        })
    }

    #[tokio::test]
    async fn test_no_token_redirects_without_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/me"))
            .respond_with(ResponseTemplate::new(200).set_body_json(profile_body()))
            .expect(0)
            .mount(&server)
            .await;
        let client = ApiClient::new(server.uri(), None).unwrap();
        let store = MemoryTokenStore::new();

        let outcome = load(&client, &store).await;

        assert_eq!(outcome, DashboardOutcome::Redirect(Route::Login));
    }

    #[tokio::test]
    async fn test_rejected_token_is_cleared_and_error_shown() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/me"))
            .respond_with(
                ResponseTemplate::new(401)
                    .set_body_json(serde_json::json!({"detail": "Could not validate credentials"})),
            )
            .mount(&server)
            .await;
        let client = ApiClient::new(server.uri(), None).unwrap();
        let store = MemoryTokenStore::with_token("expired");

        let outcome = load(&client, &store).await;

        assert_eq!(
            outcome,
            DashboardOutcome::Shown(DashboardView::Failed(
                "Could not validate credentials".to_string()
            ))
        );
        assert_eq!(store.load().unwrap(), None);
    }

    #[tokio::test]
    async fn test_valid_token_shows_profile_as_received() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/me"))
            .and(header("authorization", "Bearer good"))
            .respond_with(ResponseTemplate::new(200).set_body_json(profile_body()))
            .expect(1)
            .mount(&server)
            .await;
        let client = ApiClient::new(server.uri(), None).unwrap();
        let store = MemoryTokenStore::with_token("good");

        let DashboardOutcome::Shown(view) = load(&client, &store).await else {
            panic!("expected dashboard to be shown");
        };

        let profile = view.profile().unwrap();
        assert_eq!(
            profile_rows(profile),
            [
                ("Name", "Ravi Kumar"),
                ("Email", "ravi@example.com"),
                ("Active", "No")
            ]
        );
        assert_eq!(store.load().unwrap().as_deref(), Some("good"));
    }

    #[test]
    fn test_view_starts_loading() {
        let view = DashboardView::default();
        assert!(view.is_loading());
        assert_eq!(view.loading_text(), Some("Loading profile..."));
        assert_eq!(view.profile(), None);
        assert_eq!(view.error(), None);
    }

    #[test]
    fn test_apply_failure_requests_clear() {
        let mut view = DashboardView::Loading;
        let action = view.apply(Err(ApiError::http_status(500, "", "Failed to fetch user profile")));
        assert_eq!(action, SessionAction::Clear);
        assert_eq!(view.error(), Some("Failed to fetch user profile"));
        assert_eq!(view.loading_text(), None);
    }

    #[test]
    fn test_clear_session_reports_presence() {
        let store = MemoryTokenStore::with_token("tok");
        assert!(clear_session(&store, ClearReason::Logout));
        assert_eq!(gate(&store), Gate::Redirect(Route::Login));
        assert!(!clear_session(&store, ClearReason::FetchFailed));
        assert_eq!(ClearReason::Logout.as_str(), "logout");
    }

    #[test]
    fn test_gate_with_token_proceeds() {
        let store = MemoryTokenStore::with_token("tok");
        assert_eq!(gate(&store), Gate::Proceed("tok".to_string()));
    }
}
