//! Selection and scrolling over the item list.

mod intent;
mod reducer;
mod state;
mod window;

pub use intent::ListIntent;
pub use reducer::ListReducer;
pub use state::ListState;
pub use window::visible_window;
