//! Passenger range queries and the interactive prompt that builds them

use anyhow::{bail, Context, Result};
use std::collections::VecDeque;
use std::io::{BufRead, Write};

/// Inclusive range of passenger counts
///
/// Bounds are signed so negative user input is accepted as-is. A range with
/// `min > max` is valid but matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassengerRange {
    pub min: i64,
    pub max: i64,
}

impl PassengerRange {
    pub fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }

    pub fn contains(&self, passengers: u32) -> bool {
        let passengers = i64::from(passengers);
        self.min <= passengers && passengers <= self.max
    }
}

fn parse_count(token: &str, label: &str) -> Result<i64> {
    token
        .trim()
        .parse::<i64>()
        .with_context(|| format!("Invalid {}: '{}' is not an integer", label, token.trim()))
}

/// Reads whitespace separated tokens, pulling more lines as needed
pub struct TokenReader<R> {
    input: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(input: R) -> Self {
        Self {
            input,
            pending: VecDeque::new(),
        }
    }

    /// Next token, or `None` at end of input
    pub fn next_token(&mut self) -> Result<Option<String>> {
        while self.pending.is_empty() {
            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .context("Failed to read from input")?;
            if read == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
        Ok(self.pending.pop_front())
    }

    /// Read one integer; `label` names the value in error messages
    pub fn next_i64(&mut self, label: &str) -> Result<i64> {
        match self.next_token()? {
            Some(token) => parse_count(&token, label),
            None => bail!("Unexpected end of input while reading {}", label),
        }
    }
}

/// Prompt for a minimum and maximum passenger count
pub fn prompt_range<R: BufRead, W: Write>(
    reader: &mut TokenReader<R>,
    out: &mut W,
) -> Result<PassengerRange> {
    write!(out, "Enter minimum passenger count: ")?;
    out.flush()?;
    let min = reader.next_i64("minimum passenger count")?;

    write!(out, "Enter maximum passenger count: ")?;
    out.flush()?;
    let max = reader.next_i64("maximum passenger count")?;

    Ok(PassengerRange::new(min, max))
}
