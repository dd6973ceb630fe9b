use crate::source::FailureKind;
use crate::ui::mvi::Reducer;
use crate::ui::screen::intent::ScreenIntent;
use crate::ui::screen::state::ViewState;

pub struct ScreenReducer;

impl Reducer for ScreenReducer {
    type State = ViewState;
    type Intent = ScreenIntent;

    // The previous state never matters: the latest fetch outcome wins.
    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ScreenIntent::FetchStarted => ViewState::Loading,
            ScreenIntent::FetchSucceeded { items } => ViewState::Success(items),
            ScreenIntent::FetchFailed {
                kind: FailureKind::Generic,
            } => ViewState::Error,
            ScreenIntent::FetchFailed {
                kind: FailureKind::Io,
            } => ViewState::ErrorIo,
        }
    }
}
