pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::{toml_config::TomlConfig, SearchConfig};
pub use crate::core::{
    engine::CombinerEngine,
    pipeline::{combine, starting_fragments, CombinerPipeline},
};
pub use crate::domain::model::{CombineResult, OutputFormat, RunSummary, SearchStrategy};
pub use crate::utils::error::{CombinerError, Result};
