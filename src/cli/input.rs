//! # Prompted Input
//!
//! Everything the menu asks the user for goes through [`InputSource`].
//! Implementations re-prompt until the answer is valid, so callers only
//! ever see values that already satisfy the requested bounds.

use std::io::{self, BufRead, Write};

use log::debug;

pub trait InputSource {
    /// An integer greater than zero.
    fn positive_int(&mut self, prompt: &str) -> io::Result<usize>;

    /// An integer in `1..=max`.
    fn bounded_int(&mut self, prompt: &str, max: usize) -> io::Result<usize>;

    /// A non-blank string of `min..=max` characters.
    fn bounded_string(&mut self, prompt: &str, min: usize, max: usize) -> io::Result<String>;
}

/// Reads answers line by line from `reader`, writing prompts and complaints
/// to `writer`. End of input is reported as `UnexpectedEof`.
pub struct LineInput<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LineInput<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        let trimmed = line.trim_end_matches(['\r', '\n']);
        Ok(trimmed.to_string())
    }
}

impl<R: BufRead, W: Write> InputSource for LineInput<R, W> {
    fn positive_int(&mut self, prompt: &str) -> io::Result<usize> {
        loop {
            let line = self.read_line(prompt)?;
            match line.trim().parse::<i64>() {
                Ok(n) if n > 0 => {
                    if let Ok(n) = usize::try_from(n) {
                        return Ok(n);
                    }
                    writeln!(self.writer, "Value is too large.")?;
                }
                Ok(_) => writeln!(self.writer, "Value must be greater than 0.")?,
                Err(_) => {
                    debug!("Rejected non-numeric input {:?}", line);
                    writeln!(self.writer, "Invalid input. Please enter a whole number.")?;
                }
            }
        }
    }

    fn bounded_int(&mut self, prompt: &str, max: usize) -> io::Result<usize> {
        loop {
            let n = self.positive_int(prompt)?;
            if n <= max {
                return Ok(n);
            }
            writeln!(
                self.writer,
                "Input value not allowed. It must be between 1 and {max}."
            )?;
        }
    }

    fn bounded_string(&mut self, prompt: &str, min: usize, max: usize) -> io::Result<String> {
        loop {
            let line = self.read_line(prompt)?;
            let len = line.chars().count();
            if line.trim().is_empty() || len < min {
                writeln!(
                    self.writer,
                    "String cannot be empty or shorter than {min} characters."
                )?;
            } else if len > max {
                writeln!(self.writer, "String cannot be more than {max} characters.")?;
            } else {
                return Ok(line);
            }
        }
    }
}
