//! Dashboard page view.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use sodhpuch_core::pages::dashboard::{DashboardView, profile_rows};

use super::DashboardPageState;
use crate::render::spinner_glyph;

/// Renders the dashboard card: loading line, error, or profile rows.
pub fn render_dashboard_page(
    frame: &mut Frame,
    page: &DashboardPageState,
    area: Rect,
    spinner: usize,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Dashboard ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![Line::from("")];
    match &page.view {
        DashboardView::Loading => {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{} ", spinner_glyph(spinner)),
                    Style::default().fg(Color::Yellow),
                ),
                Span::raw(page.view.loading_text().unwrap_or_default()),
            ]));
        }
        DashboardView::Failed(message) => {
            lines.push(Line::from(Span::styled(
                message.clone(),
                Style::default().fg(Color::Red),
            )));
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "Your session has been cleared. Log in again to continue.",
                Style::default().fg(Color::DarkGray),
            )));
        }
        DashboardView::Ready(profile) => {
            for (label, value) in profile_rows(profile) {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("{label}: "),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(value.to_string()),
                ]));
            }
        }
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
