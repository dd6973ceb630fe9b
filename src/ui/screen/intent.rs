use crate::model::Item;
use crate::source::FailureKind;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum ScreenIntent {
    FetchStarted,
    FetchSucceeded { items: Vec<Item> },
    FetchFailed { kind: FailureKind },
}

impl Intent for ScreenIntent {}
