//! Line-oriented terminal I/O
//!
//! `Console` wraps any reader and writer so the session and the setup
//! wizard can be driven by stdin/stdout or by in-memory buffers in tests.

use std::io::{BufRead, Write};

use crate::error::LedgerResult;

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write text as is and flush
    pub fn print(&mut self, text: &str) -> LedgerResult<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }

    pub fn println(&mut self, text: &str) -> LedgerResult<()> {
        self.print(text)?;
        self.print("\n")
    }

    /// Show a prompt and read one trimmed line
    ///
    /// Returns `None` once the input is exhausted. Bytes that are not valid
    /// UTF-8 are replaced rather than treated as an error.
    pub fn prompt(&mut self, prompt: &str) -> LedgerResult<Option<String>> {
        self.print(prompt)?;

        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }

        Ok(Some(String::from_utf8_lossy(&line).trim().to_string()))
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_prompt_reads_trimmed_lines() {
        let mut console = Console::new(Cursor::new("  hello \n\nlast"), Vec::new());

        assert_eq!(console.prompt("> ").unwrap().as_deref(), Some("hello"));
        assert_eq!(console.prompt("> ").unwrap().as_deref(), Some(""));
        assert_eq!(console.prompt("> ").unwrap().as_deref(), Some("last"));
        assert_eq!(console.prompt("> ").unwrap(), None);

        let output = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(output, "> > > > ");
    }

    #[test]
    fn test_invalid_utf8_is_read_lossily() {
        let mut console = Console::new(Cursor::new(b"12\xff\nnext\n".to_vec()), Vec::new());

        let line = console.prompt("> ").unwrap().unwrap();
        assert!(line.starts_with("12"));
        assert_ne!(line, "12");
        assert_eq!(console.prompt("> ").unwrap().as_deref(), Some("next"));
    }

    #[test]
    fn test_println() {
        let mut console = Console::new(Cursor::new(""), Vec::new());
        console.println("see ya").unwrap();
        assert_eq!(console.into_output(), b"see ya\n");
    }
}
