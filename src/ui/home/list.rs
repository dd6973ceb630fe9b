use std::ops::Range;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Widget};

use crate::model::Item;
use crate::ui::home::card::{ItemCard, CARD_HEIGHT};
use crate::ui::list::{visible_window, ListState};
use crate::ui::theme::MUTED_TEXT;

pub const HEADER_ROWS: u16 = 1;

/// Whole cards that fit in a body of `height` rows.
pub fn cards_per_page(height: u16) -> usize {
    usize::from(height.saturating_sub(HEADER_ROWS) / CARD_HEIGHT)
}

/// Header row plus one card per item, scrolled to `list.offset`.
///
/// Only cards in [`ItemList::window`] are built; of those, the ones
/// from the offset down to the bottom edge are drawn.
pub struct ItemList<'a> {
    items: &'a [Item],
    header: &'a str,
    list: ListState,
    name_max_width: u16,
    overscan: usize,
}

impl<'a> ItemList<'a> {
    pub fn new(items: &'a [Item], header: &'a str) -> Self {
        Self {
            items,
            header,
            list: ListState::default(),
            name_max_width: super::DEFAULT_NAME_MAX_WIDTH,
            overscan: super::DEFAULT_OVERSCAN,
        }
    }

    pub fn list_state(mut self, list: ListState) -> Self {
        self.list = list;
        self
    }

    pub fn name_max_width(mut self, width: u16) -> Self {
        self.name_max_width = width;
        self
    }

    pub fn overscan(mut self, rows: usize) -> Self {
        self.overscan = rows;
        self
    }

    /// Item indices materialized when drawn into `area`.
    pub fn window(&self, area: Rect) -> Range<usize> {
        // A partially visible last card counts as visible.
        let rows = area.height.saturating_sub(HEADER_ROWS);
        let viewport = usize::from(rows.div_ceil(CARD_HEIGHT));
        visible_window(
            self.items.len(),
            self.list.clamped_offset(self.items.len()),
            viewport,
            self.overscan,
        )
    }
}

impl Widget for ItemList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let header = Rect {
            height: HEADER_ROWS.min(area.height),
            ..area
        };
        Paragraph::new(Line::styled(
            format!(" {}", self.header),
            Style::default().fg(MUTED_TEXT),
        ))
        .render(header, buf);

        let window = self.window(area);
        let offset = self.list.clamped_offset(self.items.len());
        let cards: Vec<(usize, ItemCard)> = self.items[window.clone()]
            .iter()
            .zip(window)
            .map(|(item, index)| {
                let card = ItemCard::new(item)
                    .selected(index == self.list.selected)
                    .name_max_width(self.name_max_width);
                (index, card)
            })
            .collect();

        let bottom = area.y + area.height;
        let mut y = area.y + header.height;
        for (_, card) in cards.into_iter().filter(|(index, _)| *index >= offset) {
            if y >= bottom {
                break;
            }
            let height = CARD_HEIGHT.min(bottom - y);
            card.render(
                Rect {
                    x: area.x,
                    y,
                    width: area.width,
                    height,
                },
                buf,
            );
            y += height;
        }
    }
}
