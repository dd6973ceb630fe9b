use crate::ui::mvi::Intent;

/// Navigation over a list of `len` cards, `visible` of which fit on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListIntent {
    /// New content arrived: back to the top.
    Reset,
    SelectNext { len: usize, visible: usize },
    SelectPrev { visible: usize },
    PageDown { len: usize, visible: usize },
    PageUp { visible: usize },
    First,
    Last { len: usize, visible: usize },
    /// Viewport changed size; keep the selection on screen.
    Fit { len: usize, visible: usize },
}

impl Intent for ListIntent {}
