use crate::ui::screen::ViewState;
use crate::ui::theme::{
    GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR, STATUS_OK, STATUS_PENDING,
};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, country: &str, state: &ViewState) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let (summary, color) = summary(state);
        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled("●", Style::default().fg(color)),
            Span::styled("  ", text_style),
            Span::styled("unibrowse", text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(country.to_string(), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(summary, text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

fn summary(state: &ViewState) -> (String, Color) {
    match state {
        ViewState::Loading => ("loading".to_string(), STATUS_PENDING),
        ViewState::Success(items) => (format!("{} universities", items.len()), STATUS_OK),
        ViewState::Error => ("error".to_string(), STATUS_ERROR),
        ViewState::ErrorIo => ("offline".to_string(), STATUS_ERROR),
    }
}
