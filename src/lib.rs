pub mod config;
pub mod core;
pub mod domain;
pub mod scrape;
pub mod utils;

pub use config::{cli::LocalStorage, toml_config::TomlConfig, CliConfig};
pub use core::{etl::ScrapeEngine, pipeline::ResultsPipeline};
pub use utils::error::{Result, ScrapeError};
