//! Configuration file handling.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{CategoriesConfig, ComposerConfig, Config, Defaults, RemoteConfig};
