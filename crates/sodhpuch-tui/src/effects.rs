//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! They represent I/O and task spawning only (no direct UI mutations).

use std::fmt;

use sodhpuch_core::pages::dashboard::ClearReason;
use sodhpuch_core::pages::login::Credentials;
use sodhpuch_core::session::mask_token;

/// Effects returned by the reducer for the runtime to execute.
#[derive(PartialEq, Eq)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// Spawn the login request.
    SubmitLogin(Credentials),

    /// Persist the token returned by login.
    StoreSession { token: String },

    /// Read the stored token for a dashboard visit.
    CheckSession { visit: u64 },

    /// Spawn the profile request for a dashboard visit.
    FetchProfile { visit: u64, token: String },

    /// Remove the stored token.
    ClearSession { reason: ClearReason },
}

// Tokens are masked so effects can be logged or asserted on safely.
impl fmt::Debug for UiEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UiEffect::Quit => f.write_str("Quit"),
            UiEffect::SubmitLogin(credentials) => {
                f.debug_tuple("SubmitLogin").field(credentials).finish()
            }
            UiEffect::StoreSession { token } => f
                .debug_struct("StoreSession")
                .field("token", &mask_token(token))
                .finish(),
            UiEffect::CheckSession { visit } => {
                f.debug_struct("CheckSession").field("visit", visit).finish()
            }
            UiEffect::FetchProfile { visit, token } => f
                .debug_struct("FetchProfile")
                .field("visit", visit)
                .field("token", &mask_token(token))
                .finish(),
            UiEffect::ClearSession { reason } => f
                .debug_struct("ClearSession")
                .field("reason", reason)
                .finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_hides_secrets() {
        let effects = [
            UiEffect::SubmitLogin(Credentials {
                email: "asha@example.com".to_string(),
                password: "s3cret-pass".to_string(),
            }),
            UiEffect::StoreSession {
                token: "tok-abcdefghijklmnopqrstuvwxyz".to_string(),
            },
            UiEffect::FetchProfile {
                visit: 2,
                token: "tok-abcdefghijklmnopqrstuvwxyz".to_string(),
            },
        ];

        let rendered = format!("{effects:?}");
        assert!(rendered.contains("asha@example.com"));
        assert!(!rendered.contains("s3cret-pass"));
        assert!(!rendered.contains("tok-abcdefghijklmnopqrstuvwxyz"));
    }
}
