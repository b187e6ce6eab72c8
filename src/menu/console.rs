// src/menu/console.rs
//
// Line-oriented prompt/answer over any BufRead + Write pair.
// The binaries hand in locked stdin/stdout; tests hand in Cursor + Vec<u8>.

use std::{
    fmt::Display,
    io::{self, BufRead, Write},
    str::FromStr,
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("input closed")]
    Closed,

    #[error("'{input}' is not a valid {expected}")]
    Invalid { input: String, expected: &'static str },

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print one line.
    pub fn say(&mut self, msg: impl Display) -> io::Result<()> {
        writeln!(self.output, "{msg}")
    }

    pub fn blank(&mut self) -> io::Result<()> {
        writeln!(self.output)
    }

    /// Block for one line. `None` at end of input.
    /// The line terminator is removed, nothing else.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = s!();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') { line.pop(); }
        if line.ends_with('\r') { line.pop(); }
        Ok(Some(line))
    }

    /// Print `msg` without a newline and wait for the answer.
    pub fn prompt(&mut self, msg: &str) -> Result<String, InputError> {
        write!(self.output, "{msg}")?;
        self.output.flush()?;
        self.read_line()?.ok_or(InputError::Closed)
    }

    /// Prompt and parse the trimmed answer.
    pub fn prompt_parse<T: FromStr>(&mut self, msg: &str, expected: &'static str) -> Result<T, InputError> {
        let answer = self.prompt(msg)?;
        answer
            .trim()
            .parse()
            .map_err(|_| InputError::Invalid { input: answer, expected })
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }
}
