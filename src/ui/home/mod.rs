//! The home screen: one renderer per [`ViewState`] variant.
//!
//! [`HomeScreen`] is the only entry point. It matches the state
//! exhaustively and hands the area to the loading view, the item list or
//! the error view. Nothing here mutates state; the retry control is
//! activated through [`handle_key`] with a caller-supplied
//! [`RetryAction`].

mod card;
mod control;
mod list;
mod status;

pub use card::{truncate_name, ItemCard, BADGE_WIDTH, CARD_HEIGHT};
pub use control::{handle_key, ControlOutcome, RetryAction};
pub use list::{cards_per_page, ItemList, HEADER_ROWS};
pub use status::{retry_button_label, ErrorView, LoadingView, ERROR_GLYPH, LOADING_GLYPH};

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;

use crate::config::Messages;
use crate::ui::list::ListState;
use crate::ui::screen::ViewState;

pub const DEFAULT_NAME_MAX_WIDTH: u16 = 40;
pub const DEFAULT_OVERSCAN: usize = 2;

pub struct HomeScreen<'a> {
    state: &'a ViewState,
    messages: &'a Messages,
    list: ListState,
    name_max_width: u16,
    overscan: usize,
}

impl<'a> HomeScreen<'a> {
    pub fn new(state: &'a ViewState, messages: &'a Messages) -> Self {
        Self {
            state,
            messages,
            list: ListState::default(),
            name_max_width: DEFAULT_NAME_MAX_WIDTH,
            overscan: DEFAULT_OVERSCAN,
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
}

impl Widget for HomeScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match self.state {
            ViewState::Loading => LoadingView::new(&self.messages.loading).render(area, buf),
            ViewState::Success(items) => ItemList::new(items, &self.messages.header)
                .list_state(self.list)
                .name_max_width(self.name_max_width)
                .overscan(self.overscan)
                .render(area, buf),
            ViewState::Error => {
                ErrorView::new(&self.messages.error_generic, &self.messages.retry)
                    .render(area, buf)
            }
            ViewState::ErrorIo => {
                ErrorView::new(&self.messages.error_io, &self.messages.retry_io)
                    .render(area, buf)
            }
        }
    }
}
