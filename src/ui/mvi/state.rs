/// Marker trait for UI state.
///
/// States are plain values: cloned to derive new ones, compared to detect
/// changes, and self-contained enough to draw from.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
