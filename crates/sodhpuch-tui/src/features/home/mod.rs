//! Home page view.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use sodhpuch_core::pages::home::HomePage;

pub fn render_home_page(frame: &mut Frame, area: Rect) {
    let page = HomePage;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            page.title(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(page.tagline()),
        Line::from(""),
    ];
    lines.extend(
        page.intro()
            .into_iter()
            .map(|line| Line::from(Span::styled(line, Style::default().fg(Color::Gray)))),
    );

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}
