use anyhow::{Context, Result};
use log::trace;
use rust_decimal::Decimal;
use std::io::{BufRead, Write};

use super::validation::{self, AmountRule, InputError};

/// Line-based console over any input/output pair
///
/// Every `read_*` helper keeps asking until the value is valid. `Ok(None)`
/// means the input stream ended; I/O failures are the only errors returned.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print a line of text
    pub fn println(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text).context("Failed to write to console")
    }

    /// Show a prompt and read one line, without its line terminator
    pub fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt).context("Failed to write prompt")?;
        self.output.flush().context("Failed to flush console")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read from console")?;
        if read == 0 {
            trace!("Input closed while waiting for {:?}", prompt);
            return Ok(None);
        }

        let trimmed_len = line.trim_end_matches(&['\n', '\r'][..]).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    /// Ask until `parse` accepts the line, printing each rejection
    pub fn read_validated<T, F>(&mut self, prompt: &str, parse: F) -> Result<Option<T>>
    where
        F: Fn(&str) -> Result<T, InputError>,
    {
        loop {
            let Some(line) = self.read_line(prompt)? else {
                return Ok(None);
            };
            match parse(&line) {
                Ok(value) => return Ok(Some(value)),
                Err(err) => self.println(&err.to_string())?,
            }
        }
    }

    pub fn read_account_id(&mut self, prompt: &str) -> Result<Option<u32>> {
        self.read_validated(prompt, validation::parse_account_id)
    }

    pub fn read_amount(&mut self, prompt: &str, rule: AmountRule) -> Result<Option<Decimal>> {
        self.read_validated(prompt, |line| validation::parse_amount(line, rule))
    }

    pub fn read_name(&mut self, prompt: &str) -> Result<Option<String>> {
        self.read_validated(prompt, validation::validate_name)
    }

    /// Give back the underlying streams
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}
