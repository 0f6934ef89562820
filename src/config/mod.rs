pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

pub const DEFAULT_POOLS_URL: &str = "http://www.hongkongpools.com/";
pub const DEFAULT_LOTTO_URL: &str = "http://www.hongkonglotto.com/";

/// Both sites serve their real markup only to browser user agents.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/114.0.0.0 Safari/537.36";

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "hk-results")]
#[command(about = "Scrapes HK lottery result pages into a local JSON feed")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_POOLS_URL)]
    pub pools_url: String,

    #[arg(long, default_value = DEFAULT_LOTTO_URL)]
    pub lotto_url: String,

    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    #[arg(long, default_value = "data")]
    pub output_path: String,

    #[arg(long, default_value = "hk.json")]
    pub output_file: String,

    #[arg(long, help = "Load settings from a TOML file instead of the flags above")]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log CPU/memory stats per pipeline stage")]
    pub monitor: bool,
}

impl ConfigProvider for CliConfig {
    fn pools_url(&self) -> &str {
        &self.pools_url
    }

    fn lotto_url(&self) -> &str {
        &self.lotto_url
    }

    fn user_agent(&self) -> &str {
        &self.user_agent
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn output_file(&self) -> &str {
        &self.output_file
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("pools_url", &self.pools_url)?;
        validation::validate_url("lotto_url", &self.lotto_url)?;
        validation::validate_path("output_path", &self.output_path)?;
        validation::validate_path("output_file", &self.output_file)?;
        validation::validate_non_empty_string("user_agent", &self.user_agent)?;
        Ok(())
    }
}
