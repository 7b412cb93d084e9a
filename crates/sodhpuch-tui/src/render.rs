//! Pure view/render functions for the TUI.
//!
//! Functions here take `&AppState`, draw to a ratatui Frame, and never
//! mutate state or return effects.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use sodhpuch_core::pages::Route;
use sodhpuch_core::pages::home::PRODUCT_NAME;

use crate::state::AppState;
use crate::{dashboard, home, login};

/// Height of the navigation header (border + links + border).
const HEADER_HEIGHT: u16 = 3;

/// Height of the key hint footer.
const FOOTER_HEIGHT: u16 = 1;

/// Maximum width of the page body, centered like a card.
const BODY_MAX_WIDTH: u16 = 72;

/// Spinner frames for pending requests.
const SPINNER_FRAMES: &[&str] = &["◐", "◓", "◑", "◒"];

pub(crate) fn spinner_glyph(frame: usize) -> &'static str {
    SPINNER_FRAMES[frame % SPINNER_FRAMES.len()]
}

/// Renders the entire TUI to the frame.
pub fn render(app: &AppState, frame: &mut Frame) {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(area);

    render_nav(frame, app.route, chunks[0]);

    let body = centered(chunks[1], BODY_MAX_WIDTH);
    match app.route {
        Route::Home => home::render_home_page(frame, body),
        Route::Login => login::render_login_page(frame, &app.login, body, app.spinner_frame),
        Route::Dashboard => {
            dashboard::render_dashboard_page(frame, &app.dashboard, body, app.spinner_frame);
        }
    }

    render_footer(frame, app.route, chunks[2]);
}

fn render_nav(frame: &mut Frame, current: Route, area: Rect) {
    let mut spans = Vec::new();
    for (i, route) in Route::ALL.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        let style = if route == current {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(route.title(), style));
    }

    let block = Block::default()
        .borders(Borders::BOTTOM | Borders::TOP)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(format!(" {PRODUCT_NAME} "));
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn render_footer(frame: &mut Frame, route: Route, area: Rect) {
    let hints = match route {
        Route::Home => "l login · d dashboard · q quit",
        Route::Login => "tab switch field · enter sign in · esc back · ctrl+c quit",
        Route::Dashboard => "r reload · x log out · h home · esc back · q quit",
    };
    frame.render_widget(
        Paragraph::new(Span::styled(hints, Style::default().fg(Color::DarkGray))),
        area,
    );
}

fn centered(area: Rect, max_width: u16) -> Rect {
    let width = area.width.min(max_width);
    let x = area.x + (area.width - width) / 2;
    Rect::new(x, area.y, width, area.height)
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use sodhpuch_core::api::{ApiError, UserProfile};

    use super::*;

    fn draw(app: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(90, 24)).unwrap();
        terminal.draw(|frame| render(app, frame)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn test_home_shows_product_and_nav() {
        let app = AppState::new();
        let screen = draw(&app);
        assert!(screen.contains("CollegeSodhpuch"));
        assert!(screen.contains("International university and visa guidance platform"));
        assert!(screen.contains("Dashboard"));
    }

    #[test]
    fn test_login_shows_pending_label() {
        let mut app = AppState::new();
        app.route = Route::Login;
        app.login.email.insert_str("asha@example.com");
        app.login.password.insert_str("secret");
        app.login.begin_submit().unwrap();

        let screen = draw(&app);
        assert!(screen.contains("Signing in..."));
        assert!(!screen.contains("secret"));
    }

    #[test]
    fn test_login_shows_error() {
        let mut app = AppState::new();
        app.route = Route::Login;
        app.login.email.insert_str("asha@example.com");
        app.login.password.insert_str("secret");
        app.login.begin_submit().unwrap();
        app.login.form.finish_submit(Err(ApiError::http_status(
            401,
            "Incorrect credentials",
            "Login failed",
        )));

        let screen = draw(&app);
        assert!(screen.contains("Incorrect credentials"));
        assert!(screen.contains("[ Sign in ]"));
    }

    #[test]
    fn test_dashboard_shows_profile_rows() {
        let mut app = AppState::new();
        app.route = Route::Dashboard;
        app.dashboard.view.apply(Ok(UserProfile {
            id: 4,
            email: "ravi@example.com".to_string(),
            full_name: "Ravi Kumar".to_string(),
            is_active: false,
            created_at: "2024-01-05T08:00:00Z".to_string(),
        }));

        let screen = draw(&app);
        assert!(screen.contains("Name: Ravi Kumar"));
        assert!(screen.contains("Email: ravi@example.com"));
        assert!(screen.contains("Active: No"));
    }

    #[test]
    fn test_dashboard_shows_loading() {
        let mut app = AppState::new();
        app.route = Route::Dashboard;

        let screen = draw(&app);
        assert!(screen.contains("Loading profile..."));
    }
}
