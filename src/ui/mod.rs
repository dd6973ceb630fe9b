pub mod app;
pub mod events;
pub mod footer;
pub mod header;
pub mod home;
pub mod input;
pub mod layout;
pub mod list;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod screen;
pub mod terminal_guard;
pub mod theme;
