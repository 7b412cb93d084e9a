//! Login page view.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::{LoginField, LoginPageState, TextField};
use crate::render::spinner_glyph;

const LABEL_WIDTH: u16 = 10;

/// Renders the login card and places the cursor in the focused field.
pub fn render_login_page(frame: &mut Frame, page: &LoginPageState, area: Rect, spinner: usize) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Login ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![
        Line::from(""),
        field_line("Email", &page.email, page.focus == LoginField::Email),
        Line::from(""),
        field_line(
            "Password",
            &page.password,
            page.focus == LoginField::Password,
        ),
        Line::from(""),
        submit_line(page, spinner),
    ];

    if let Some(error) = page.form.error() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            error.to_string(),
            Style::default().fg(Color::Red),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "No account yet? Register one first with `sodhpuch register`.",
        Style::default().fg(Color::DarkGray),
    )));

    frame.render_widget(Paragraph::new(lines), inner);

    if page.form.submit_enabled() {
        let (row, field) = match page.focus {
            LoginField::Email => (1, &page.email),
            LoginField::Password => (3, &page.password),
        };
        let x = inner.x + LABEL_WIDTH + field.cursor_column();
        let y = inner.y + row;
        if x < inner.right() && y < inner.bottom() {
            frame.set_cursor_position((x, y));
        }
    }
}

fn field_line(label: &str, field: &TextField, focused: bool) -> Line<'static> {
    let label_style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    Line::from(vec![
        Span::styled(
            format!("{label:<width$}", width = LABEL_WIDTH as usize),
            label_style,
        ),
        Span::raw(field.display_text()),
    ])
}

fn submit_line(page: &LoginPageState, spinner: usize) -> Line<'static> {
    let label = page.form.submit_label();
    if page.form.submit_enabled() {
        Line::from(vec![
            Span::raw(" ".repeat(LABEL_WIDTH as usize)),
            Span::styled(
                format!("[ {label} ]"),
                Style::default().fg(Color::Black).bg(Color::Cyan),
            ),
        ])
    } else {
        Line::from(vec![
            Span::raw(" ".repeat(LABEL_WIDTH as usize)),
            Span::styled(
                format!("[ {label} ]"),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(
                format!(" {}", spinner_glyph(spinner)),
                Style::default().fg(Color::Yellow),
            ),
        ])
    }
}
