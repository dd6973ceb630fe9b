use crate::ui::list::intent::ListIntent;
use crate::ui::list::state::ListState;
use crate::ui::mvi::Reducer;

pub struct ListReducer;

impl Reducer for ListReducer {
    type State = ListState;
    type Intent = ListIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ListIntent::Reset => ListState::default(),
            ListIntent::SelectNext { len, visible } => {
                let selected = (state.selected + 1).min(len.saturating_sub(1));
                state.scrolled_into_view(selected, visible)
            }
            ListIntent::SelectPrev { visible } => {
                state.scrolled_into_view(state.selected.saturating_sub(1), visible)
            }
            ListIntent::PageDown { len, visible } => {
                let selected = state
                    .selected
                    .saturating_add(visible.max(1))
                    .min(len.saturating_sub(1));
                state.scrolled_into_view(selected, visible)
            }
            ListIntent::PageUp { visible } => {
                let selected = state.selected.saturating_sub(visible.max(1));
                state.scrolled_into_view(selected, visible)
            }
            ListIntent::First => ListState::default(),
            ListIntent::Last { len, visible } => {
                state.scrolled_into_view(len.saturating_sub(1), visible)
            }
            ListIntent::Fit { len, visible } => {
                let selected = state.selected.min(len.saturating_sub(1));
                state.scrolled_into_view(selected, visible)
            }
        }
    }
}
