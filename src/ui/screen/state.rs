use crate::model::Item;
use crate::ui::mvi::UiState;

/// What the home screen is currently showing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    Loading,
    /// Items in display order.
    Success(Vec<Item>),
    Error,
    ErrorIo,
}

impl UiState for ViewState {}

/// The leaf renderer a state dispatches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenBranch {
    Loading,
    List,
    Error,
    ErrorIo,
}

impl ViewState {
    pub fn branch(&self) -> ScreenBranch {
        match self {
            ViewState::Loading => ScreenBranch::Loading,
            ViewState::Success(_) => ScreenBranch::List,
            ViewState::Error => ScreenBranch::Error,
            ViewState::ErrorIo => ScreenBranch::ErrorIo,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ViewState::Error | ViewState::ErrorIo)
    }

    /// Items on screen; empty unless `Success`.
    pub fn items(&self) -> &[Item] {
        match self {
            ViewState::Success(items) => items,
            _ => &[],
        }
    }
}
