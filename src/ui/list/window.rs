use std::ops::Range;

/// Indices of the cards worth materializing.
///
/// The viewport starts at `offset` and shows `viewport` cards; `overscan`
/// extra cards are kept on each side so short scrolls have rows ready.
/// Always a sub-range of `0..len`.
pub fn visible_window(len: usize, offset: usize, viewport: usize, overscan: usize) -> Range<usize> {
    let offset = offset.min(len);
    let start = offset.saturating_sub(overscan);
    let end = offset
        .saturating_add(viewport)
        .saturating_add(overscan)
        .min(len);
    start..end
}
