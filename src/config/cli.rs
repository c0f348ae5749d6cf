use crate::domain::ports::Console;
use crate::utils::error::Result;
use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};

/// Console backed by any buffered reader and writer pair. Production code
/// binds it to stdin/stdout via [`LineConsole::stdio`]; tests drive it with
/// in-memory buffers.
#[derive(Debug)]
pub struct LineConsole<R, W> {
    reader: R,
    writer: W,
}

impl LineConsole<BufReader<Stdin>, Stdout> {
    pub fn stdio() -> Self {
        Self {
            reader: BufReader::new(io::stdin()),
            writer: io::stdout(),
        }
    }
}

impl<R: BufRead, W: Write> LineConsole<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> Console for LineConsole<R, W> {
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.writer, "{}", text)?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }

    fn print(&mut self, text: &str) -> Result<()> {
        writeln!(self.writer, "{}", text)?;
        Ok(())
    }
}
