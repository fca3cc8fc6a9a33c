//! Interactive console for the research pipeline.
//!
//! [`Terminal`] wraps any line reader and writer so the pipeline can be driven
//! from stdin/stdout or from in-memory buffers in tests.

mod spinner;

pub use spinner::{offload, SPINNER_FRAMES};

use std::fmt::Display;
use std::io::{self, BufRead, Write};

/// Line-oriented console over a reader and a writer.
pub struct Terminal<R, W> {
    input: R,
    output: W,
    animate: bool,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    /// Create a terminal. `animate` enables spinner frames during backend calls.
    pub fn new(input: R, output: W, animate: bool) -> Self {
        Self {
            input,
            output,
            animate,
        }
    }

    /// Print a line.
    pub fn say(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }

    /// Print `prompt` and read one trimmed line. Returns `None` at end of input.
    pub fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Whether spinner frames are drawn.
    pub fn animates(&self) -> bool {
        self.animate
    }

    /// Mutable access to the writer.
    pub fn output_mut(&mut self) -> &mut W {
        &mut self.output
    }

    /// Consume the terminal and return its writer.
    pub fn into_output(self) -> W {
        self.output
    }
}
