/// Marker trait for intents: fetch outcomes, navigation, resets.
pub trait Intent: Send + 'static {}
