//! Application state.
//!
//! ```text
//! AppState
//! ├── route: Route                 (current page)
//! ├── login: LoginPageState        (fields, focus, form flow)
//! ├── dashboard: DashboardPageState (profile view, visit id)
//! ├── spinner_frame: usize
//! └── should_quit: bool
//! ```

use sodhpuch_core::pages::Route;

use crate::dashboard::DashboardPageState;
use crate::login::LoginPageState;

/// Combined application state for the TUI.
#[derive(Debug, Default)]
pub struct AppState {
    pub route: Route,
    pub login: LoginPageState,
    pub dashboard: DashboardPageState,
    /// Advances on every tick; drives spinner animation
    pub spinner_frame: usize,
    pub should_quit: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true while any request is in flight.
    pub fn is_busy(&self) -> bool {
        self.login.form.is_pending()
            || (self.route == Route::Dashboard && self.dashboard.view.is_loading())
    }
}
