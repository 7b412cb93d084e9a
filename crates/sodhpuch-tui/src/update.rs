//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use sodhpuch_core::pages::Route;
use sodhpuch_core::pages::dashboard::{ClearReason, SessionAction};

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;
use crate::{dashboard, login};

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns effects
/// for the runtime to execute.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => {
            app.spinner_frame = app.spinner_frame.wrapping_add(1);
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
        UiEvent::LoginFinished { result } => {
            // Like a page whose handler outlives it, a successful login stores
            // the token and navigates even if the user already left the form.
            match app.login.form.finish_submit(result) {
                Some(token) => {
                    app.login.password.clear();
                    let mut effects = vec![UiEffect::StoreSession { token }];
                    effects.extend(navigate(app, Route::Dashboard));
                    effects
                }
                None => vec![],
            }
        }
        UiEvent::SessionSaveFailed { message } => {
            app.login.form.fail(message);
            app.route = Route::Login;
            vec![]
        }
        UiEvent::SessionChecked { visit, token } => {
            if app.route != Route::Dashboard || !app.dashboard.is_current(visit) {
                return vec![];
            }
            match token {
                Some(token) => vec![UiEffect::FetchProfile { visit, token }],
                None => {
                    app.route = Route::Login;
                    vec![]
                }
            }
        }
        UiEvent::ProfileLoaded { visit, result } => {
            if app.route != Route::Dashboard || !app.dashboard.is_current(visit) {
                return vec![];
            }
            match app.dashboard.view.apply(result) {
                SessionAction::Keep => vec![],
                SessionAction::Clear => vec![UiEffect::ClearSession {
                    reason: ClearReason::FetchFailed,
                }],
            }
        }
    }
}

/// Switches page. Entering the dashboard starts a new visit.
pub fn navigate(app: &mut AppState, route: Route) -> Vec<UiEffect> {
    app.route = route;
    match route {
        Route::Dashboard => {
            let visit = app.dashboard.start_visit();
            vec![UiEffect::CheckSession { visit }]
        }
        Route::Home | Route::Login => vec![],
    }
}

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
        Event::Paste(text) if app.route == Route::Login => {
            login::handle_paste(&mut app.login, &text);
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return vec![UiEffect::Quit];
    }

    match app.route {
        Route::Login => match login::handle_key(&mut app.login, key) {
            login::LoginAction::Submit(credentials) => vec![UiEffect::SubmitLogin(credentials)],
            login::LoginAction::Back => navigate(app, Route::Home),
            login::LoginAction::None => vec![],
        },
        Route::Dashboard => match dashboard::handle_key(key) {
            dashboard::DashboardAction::Reload => navigate(app, Route::Dashboard),
            dashboard::DashboardAction::Logout => {
                let mut effects = vec![UiEffect::ClearSession {
                    reason: ClearReason::Logout,
                }];
                effects.extend(navigate(app, Route::Login));
                effects
            }
            dashboard::DashboardAction::Back => navigate(app, Route::Home),
            dashboard::DashboardAction::None => handle_nav_key(app, key),
        },
        Route::Home => match key.code {
            KeyCode::Char('q') | KeyCode::Esc => vec![UiEffect::Quit],
            _ => handle_nav_key(app, key),
        },
    }
}

/// Page shortcuts available outside the login form.
fn handle_nav_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    let target = match key.code {
        KeyCode::Char('h' | '1') => Route::Home,
        KeyCode::Char('l' | '2') => Route::Login,
        KeyCode::Char('d' | '3') => Route::Dashboard,
        KeyCode::Char('q') => return vec![UiEffect::Quit],
        _ => return vec![],
    };
    navigate(app, target)
}
