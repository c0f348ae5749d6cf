pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::{cli::LineConsole, CliConfig};
pub use crate::core::{menu::MenuEngine, ops};
pub use crate::domain::{model::MenuChoice, ports::Console};
pub use crate::utils::error::{CalcError, Result};
