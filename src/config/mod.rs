pub mod cli;

use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "small-calc")]
#[command(about = "A menu-driven calculator: factorial, primality check, string reversal")]
pub struct CliConfig {
    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Tracing filter override, e.g. small_calc=debug")]
    pub log_filter: Option<String>,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(filter) = &self.log_filter {
            validation::validate_non_empty_string("log_filter", filter)?;
        }
        Ok(())
    }
}
