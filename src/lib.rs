pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{cli::FolderPersistence, AccountFields, ResolvedConfig};
pub use core::{connector::ScalingoConnector, engine::KonnectorEngine};
pub use utils::error::{KonnectorError, Result};
