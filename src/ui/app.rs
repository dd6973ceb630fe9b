use ratatui::layout::Rect;
use tokio::sync::mpsc;

use crate::config::{Config, Messages, UiConfig};
use crate::model::Item;
use crate::source::FailureKind;
use crate::ui::home::cards_per_page;
use crate::ui::layout::body_rect;
use crate::ui::list::{ListIntent, ListReducer, ListState};
use crate::ui::mvi::Reducer;
use crate::ui::screen::{ScreenIntent, ScreenReducer, ViewState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiCommand {
    Fetch,
}

pub type UiCommandSender = mpsc::Sender<UiCommand>;

/// Cloneable handle that asks the fetch worker for a new fetch.
///
/// This is the retry capability handed to the home screen controls.
#[derive(Clone, Default)]
pub struct FetchRequester {
    sender: Option<UiCommandSender>,
}

impl FetchRequester {
    pub fn new(sender: UiCommandSender) -> Self {
        Self {
            sender: Some(sender),
        }
    }

    pub fn request_fetch(&self) {
        let Some(sender) = &self.sender else {
            tracing::debug!("Fetch requested with no worker attached");
            return;
        };
        match sender.try_send(UiCommand::Fetch) {
            Ok(()) => tracing::debug!("Fetch requested"),
            Err(mpsc::error::TrySendError::Full(_)) => {
                tracing::debug!("Fetch already queued, dropping request")
            }
            Err(mpsc::error::TrySendError::Closed(_)) => {
                tracing::warn!("Fetch worker is gone, request dropped")
            }
        }
    }
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    size: Option<(u16, u16)>,
    /// Screen content (MVI pattern).
    view: ViewState,
    /// Selection and scroll over `view`'s items (MVI pattern).
    list: ListState,
    fetcher: FetchRequester,
    messages: Messages,
    ui: UiConfig,
    country: String,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self {
            should_quit: false,
            size: None,
            view: ViewState::default(),
            list: ListState::default(),
            fetcher: FetchRequester::default(),
            messages: config.messages.clone(),
            ui: config.ui.clone(),
            country: config.source.country.clone(),
        }
    }

    pub fn attach_commands(&mut self, sender: UiCommandSender) {
        self.fetcher = FetchRequester::new(sender);
    }

    pub fn fetcher(&self) -> FetchRequester {
        self.fetcher.clone()
    }

    pub fn request_fetch(&self) {
        self.fetcher.request_fetch();
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn view_state(&self) -> &ViewState {
        &self.view
    }

    pub fn list_state(&self) -> ListState {
        self.list
    }

    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    pub fn ui_config(&self) -> &UiConfig {
        &self.ui
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn on_fetch_started(&mut self) {
        self.dispatch_screen(ScreenIntent::FetchStarted);
    }

    pub fn on_fetch_finished(&mut self, outcome: Result<Vec<Item>, FailureKind>) {
        let intent = match outcome {
            Ok(items) => ScreenIntent::FetchSucceeded { items },
            Err(kind) => ScreenIntent::FetchFailed { kind },
        };
        self.dispatch_screen(intent);
        self.dispatch_list(ListIntent::Reset);
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
        let intent = ListIntent::Fit {
            len: self.item_count(),
            visible: self.visible_cards(),
        };
        self.dispatch_list(intent);
    }

    pub fn select_next(&mut self) {
        let intent = ListIntent::SelectNext {
            len: self.item_count(),
            visible: self.visible_cards(),
        };
        self.dispatch_list(intent);
    }

    pub fn select_prev(&mut self) {
        let intent = ListIntent::SelectPrev {
            visible: self.visible_cards(),
        };
        self.dispatch_list(intent);
    }

    pub fn page_down(&mut self) {
        let intent = ListIntent::PageDown {
            len: self.item_count(),
            visible: self.visible_cards(),
        };
        self.dispatch_list(intent);
    }

    pub fn page_up(&mut self) {
        let intent = ListIntent::PageUp {
            visible: self.visible_cards(),
        };
        self.dispatch_list(intent);
    }

    pub fn select_first(&mut self) {
        self.dispatch_list(ListIntent::First);
    }

    pub fn select_last(&mut self) {
        let intent = ListIntent::Last {
            len: self.item_count(),
            visible: self.visible_cards(),
        };
        self.dispatch_list(intent);
    }

    /// Whole cards visible in the current terminal size.
    pub fn visible_cards(&self) -> usize {
        let Some((cols, rows)) = self.size else {
            return 0;
        };
        let body = body_rect(Rect::new(0, 0, cols, rows));
        cards_per_page(body.height)
    }

    fn item_count(&self) -> usize {
        self.view.items().len()
    }

    fn dispatch_screen(&mut self, intent: ScreenIntent) {
        dispatch_mvi!(self, view, ScreenReducer, intent);
    }

    fn dispatch_list(&mut self, intent: ListIntent) {
        // Navigation only applies to a visible list.
        if !matches!(self.view, ViewState::Success(_)) && intent != ListIntent::Reset {
            return;
        }
        dispatch_mvi!(self, list, ListReducer, intent);
    }
}
