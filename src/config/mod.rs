pub mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigOverrides};
pub use types::{Config, LoggingConfig, Messages, SourceConfig, UiConfig};
