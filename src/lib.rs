pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{cli::LocalStorage, toml_config::TomlConfig};
pub use crate::core::{engine::RankEngine, pipeline::RankPipeline, ranking::rank};
pub use domain::model::{RankSummary, ReportBundle, TokenFrequency};
pub use utils::error::{RankError, Result};
