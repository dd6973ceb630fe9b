pub mod config;
pub mod logging;
pub mod model;
pub mod shutdown;
pub mod source;
pub mod ui;
