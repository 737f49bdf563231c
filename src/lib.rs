pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub mod server;

#[cfg(feature = "cli")]
pub use config::cli::CliArgs;

pub use adapters::notion::NotionClient;
pub use config::{toml_config::TomlConfig, RelayConfig};
pub use core::handler::EntryTranslator;
pub use domain::model::{InboundRequest, InboundResponse, Submission};
pub use utils::error::{RelayError, Result};
