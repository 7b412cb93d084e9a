//! Login page reducer.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use sodhpuch_core::pages::login::Credentials;

use super::LoginPageState;

/// Result of a key press on the login page.
#[derive(Debug, PartialEq, Eq)]
pub enum LoginAction {
    None,
    /// Send these credentials to the API.
    Submit(Credentials),
    /// Leave the page.
    Back,
}

pub fn handle_key(page: &mut LoginPageState, key: KeyEvent) -> LoginAction {
    match key.code {
        KeyCode::Esc => LoginAction::Back,
        KeyCode::Enter => page
            .begin_submit()
            .map_or(LoginAction::None, LoginAction::Submit),
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            page.focus = page.focus.next();
            LoginAction::None
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            page.focused_mut().clear();
            LoginAction::None
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            page.focused_mut().insert_char(c);
            LoginAction::None
        }
        KeyCode::Backspace => {
            page.focused_mut().backspace();
            LoginAction::None
        }
        KeyCode::Delete => {
            page.focused_mut().delete();
            LoginAction::None
        }
        KeyCode::Left => {
            page.focused_mut().move_left();
            LoginAction::None
        }
        KeyCode::Right => {
            page.focused_mut().move_right();
            LoginAction::None
        }
        KeyCode::Home => {
            page.focused_mut().move_home();
            LoginAction::None
        }
        KeyCode::End => {
            page.focused_mut().move_end();
            LoginAction::None
        }
        _ => LoginAction::None,
    }
}

pub fn handle_paste(page: &mut LoginPageState, text: &str) {
    page.focused_mut().insert_str(text);
}
