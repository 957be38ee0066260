pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;

pub use crate::config::{toml_config::FileConfig, ScriptConfig};
pub use crate::core::driver::{Driver, RunSummary};
pub use crate::core::registry::FunctionRegistry;
pub use crate::domain::model::NamedHolder;
pub use crate::utils::error::{FixtureError, Result};
