use crate::utils::error::Result;

/// Line-oriented console the menu loop talks to.
pub trait Console {
    /// Writes `text` without a trailing newline, flushes, and reads the next
    /// input line with its line terminator stripped. Returns `Ok(None)` once
    /// the input is exhausted.
    fn prompt(&mut self, text: &str) -> Result<Option<String>>;

    /// Writes one line of output.
    fn print(&mut self, text: &str) -> Result<()>;
}
