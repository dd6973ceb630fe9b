use std::borrow::Cow;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Widget};

use crate::model::Item;
use crate::ui::theme::{
    ACCENT, BADGE_BACKGROUND, BADGE_TEXT, CARD_BORDER, CARD_SELECTED, HEADER_TEXT, MUTED_TEXT,
};

/// Border, name line, link line, border.
pub const CARD_HEIGHT: u16 = 4;
pub const BADGE_WIDTH: u16 = 5;
const CHEVRON: &str = "›";
const CHEVRON_WIDTH: u16 = 2;
const ELLIPSIS: char = '…';

/// Clips `name` to `max` display columns, marking the cut with an ellipsis.
///
/// Wide characters count as two columns, so the result never overflows.
pub fn truncate_name(name: &str, max: usize) -> Cow<'_, str> {
    if name.width() <= max {
        return Cow::Borrowed(name);
    }
    if max == 0 {
        return Cow::Borrowed("");
    }
    let budget = max - ELLIPSIS.width().unwrap_or(1);
    let mut used = 0;
    let mut clipped = String::new();
    for ch in name.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width > budget {
            break;
        }
        used += ch_width;
        clipped.push(ch);
    }
    clipped.push(ELLIPSIS);
    Cow::Owned(clipped)
}

/// One item: initial badge, name over first link, trailing chevron.
pub struct ItemCard<'a> {
    item: &'a Item,
    selected: bool,
    name_max_width: u16,
}

impl<'a> ItemCard<'a> {
    pub fn new(item: &'a Item) -> Self {
        Self {
            item,
            selected: false,
            name_max_width: super::DEFAULT_NAME_MAX_WIDTH,
        }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn name_max_width(mut self, width: u16) -> Self {
        self.name_max_width = width;
        self
    }
}

impl Widget for ItemCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(CARD_BORDER));
        if self.selected {
            block = block
                .border_style(Style::default().fg(ACCENT))
                .style(Style::default().bg(CARD_SELECTED));
        }
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let [badge, _, text, chevron] = Layout::horizontal([
            Constraint::Length(BADGE_WIDTH),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(CHEVRON_WIDTH),
        ])
        .areas(inner);

        buf.set_style(badge, Style::default().bg(BADGE_BACKGROUND));
        let initial = Span::styled(
            self.item.initial().to_string(),
            Style::default().fg(BADGE_TEXT).add_modifier(Modifier::BOLD),
        );
        Paragraph::new(Line::from(initial))
            .alignment(Alignment::Center)
            .render(Rect { height: 1, ..badge }, buf);

        let max_name = usize::from(self.name_max_width.min(text.width));
        let name = truncate_name(self.item.name(), max_name);
        let lines = vec![
            Line::styled(
                name,
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            ),
            Line::styled(self.item.primary_link(), Style::default().fg(MUTED_TEXT)),
        ];
        Paragraph::new(lines).render(text, buf);

        Paragraph::new(Line::styled(CHEVRON, Style::default().fg(MUTED_TEXT)))
            .alignment(Alignment::Right)
            .render(Rect { height: 1, ..chevron }, buf);
    }
}
