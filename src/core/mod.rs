pub mod menu;
pub mod ops;

pub use crate::domain::model::MenuChoice;
pub use crate::domain::ports::Console;
pub use crate::utils::error::Result;
