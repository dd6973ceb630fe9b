use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListState {
    /// Index of the highlighted card.
    pub selected: usize,
    /// Index of the first card in the viewport.
    pub offset: usize,
}

impl UiState for ListState {}

impl ListState {
    /// Offset clamped so it never points past the last card.
    pub fn clamped_offset(&self, len: usize) -> usize {
        self.offset.min(len.saturating_sub(1))
    }

    /// Selects `selected`, moving `offset` the least amount needed to
    /// keep it within `visible` cards.
    pub fn scrolled_into_view(self, selected: usize, visible: usize) -> ListState {
        let offset = if visible == 0 || selected < self.offset {
            selected
        } else if selected >= self.offset + visible {
            selected + 1 - visible
        } else {
            self.offset
        };
        ListState { selected, offset }
    }
}
