//! UI events consumed by the reducer.

use std::fmt;

use sodhpuch_core::api::{ApiError, LoginResponse, UserProfile};
use sodhpuch_core::session::mask_token;

/// Everything the reducer reacts to.
pub enum UiEvent {
    /// Periodic tick; the runtime renders after ticks.
    Tick,
    /// Raw terminal input.
    Terminal(crossterm::event::Event),
    /// Session lookup for a dashboard visit finished.
    SessionChecked { visit: u64, token: Option<String> },
    /// Login request finished.
    LoginFinished {
        result: Result<LoginResponse, ApiError>,
    },
    /// Storing the token after a successful login failed.
    SessionSaveFailed { message: String },
    /// Profile request for a dashboard visit finished.
    ProfileLoaded {
        visit: u64,
        result: Result<UserProfile, ApiError>,
    },
}

impl fmt::Debug for UiEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UiEvent::Tick => f.write_str("Tick"),
            UiEvent::Terminal(event) => f.debug_tuple("Terminal").field(event).finish(),
            UiEvent::SessionChecked { visit, token } => f
                .debug_struct("SessionChecked")
                .field("visit", visit)
                .field("token", &token.as_deref().map(mask_token))
                .finish(),
            UiEvent::LoginFinished { result } => f
                .debug_struct("LoginFinished")
                .field("result", result)
                .finish(),
            UiEvent::SessionSaveFailed { message } => f
                .debug_struct("SessionSaveFailed")
                .field("message", message)
                .finish(),
            UiEvent::ProfileLoaded { visit, result } => f
                .debug_struct("ProfileLoaded")
                .field("visit", visit)
                .field("result", result)
                .finish(),
        }
    }
}
