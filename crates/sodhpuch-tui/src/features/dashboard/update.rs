//! Dashboard page reducer.

use crossterm::event::{KeyCode, KeyEvent};

/// Result of a key press on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardAction {
    None,
    /// Fetch the profile again.
    Reload,
    /// Drop the session and go to the login page.
    Logout,
    /// Leave the page.
    Back,
}

pub fn handle_key(key: KeyEvent) -> DashboardAction {
    match key.code {
        KeyCode::Char('r') => DashboardAction::Reload,
        KeyCode::Char('x') => DashboardAction::Logout,
        KeyCode::Esc => DashboardAction::Back,
        _ => DashboardAction::None,
    }
}
