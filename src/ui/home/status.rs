use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{ACCENT, BADGE_TEXT, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR};

pub const LOADING_GLYPH: [&str; 5] = [
    " _____ ",
    " \\   / ",
    "  \\ /  ",
    "  / \\  ",
    " /___\\ ",
];

/// Shared by both error screens.
pub const ERROR_GLYPH: [&str; 6] = [
    "   .--.    ",
    " .(    ).  ",
    "(___.__)__)",
    "    \\ /    ",
    "     X     ",
    "    / \\    ",
];

pub fn retry_button_label(label: &str) -> String {
    format!("[ {} ]", label)
}

/// Static hourglass with a caption.
pub struct LoadingView<'a> {
    caption: &'a str,
}

impl<'a> LoadingView<'a> {
    pub fn new(caption: &'a str) -> Self {
        Self { caption }
    }
}

impl Widget for LoadingView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let glyph_style = Style::default().fg(MUTED_TEXT);
        let mut lines: Vec<Line> = LOADING_GLYPH
            .iter()
            .map(|row| Line::styled(*row, glyph_style))
            .collect();
        lines.push(Line::from(""));
        lines.push(Line::styled(self.caption, Style::default().fg(HEADER_TEXT)));

        render_centered(lines, area, buf);
    }
}

/// Glyph, one message line and the retry control.
pub struct ErrorView<'a> {
    message: &'a str,
    retry_label: &'a str,
}

impl<'a> ErrorView<'a> {
    pub fn new(message: &'a str, retry_label: &'a str) -> Self {
        Self {
            message,
            retry_label,
        }
    }
}

impl Widget for ErrorView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let glyph_style = Style::default().fg(STATUS_ERROR);
        let button_style = Style::default()
            .fg(BADGE_TEXT)
            .bg(ACCENT)
            .add_modifier(Modifier::BOLD);

        let mut lines: Vec<Line> = ERROR_GLYPH
            .iter()
            .map(|row| Line::styled(*row, glyph_style))
            .collect();
        lines.push(Line::from(""));
        lines.push(Line::styled(self.message, Style::default().fg(HEADER_TEXT)));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            retry_button_label(self.retry_label),
            button_style,
        )));

        render_centered(lines, area, buf);
    }
}

fn render_centered(lines: Vec<Line<'_>>, area: Rect, buf: &mut Buffer) {
    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX);
    let target = centered_rect_by_size(area, area.width, height);
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .render(target, buf);
}
