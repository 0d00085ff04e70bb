pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{CliArgs, Command};

pub use adapters::http::ReqwestJsonClient;
pub use config::{toml_config::TomlConfig, AdapterConfig};
pub use core::waterbutler::WbProvider;
pub use domain::model::{FolderOutcome, JsonRequest, OperationResult};
pub use domain::ports::{HttpJsonClient, StorageProvider};
pub use utils::error::{AdapterError, Result};
