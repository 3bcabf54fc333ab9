// SPDX-License-Identifier: GPL-3.0-only

use anyhow::Context;
use eox_client::{Lookup, SearchKind};
use log::debug;
use std::io::{BufRead, Write};

use crate::report::Report;

pub const PROMPT: &str =
    "Enter search string (ex: 'serial {serialnumber}' or 'pid {pid}' or 'quit'): ";

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Quit,
    Empty,
    Search { kind: SearchKind, value: String },
    MissingValue(SearchKind),
    Unknown(String),
}

impl Command {
    /// Splits on the first space only; the rest of the line is the value.
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return Self::Empty;
        }

        let (keyword, value) = match line.split_once(' ') {
            Some((keyword, value)) => (keyword, value.trim()),
            None => (line, ""),
        };
        if keyword == "quit" {
            return Self::Quit;
        }

        match SearchKind::from_str(keyword) {
            None => Self::Unknown(keyword.to_string()),
            Some(kind) if value.is_empty() => Self::MissingValue(kind),
            Some(kind) => Self::Search {
                kind,
                value: value.to_uppercase(),
            },
        }
    }
}

/// Prompt, parse, look up and print until `quit` or end of input. The first
/// failed lookup ends the session.
pub fn run<R, W, F>(mut input: R, output: &mut W, mut lookup: F) -> anyhow::Result<()>
where
    R: BufRead,
    W: Write,
    F: FnMut(SearchKind, &str) -> Result<Lookup, eox_client::Error>,
{
    let mut line = String::new();
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            debug!("end of input");
            writeln!(output)?;
            return Ok(());
        }

        match Command::parse(&line) {
            Command::Quit => return Ok(()),
            Command::Empty => {}
            Command::Unknown(keyword) => writeln!(
                output,
                "Unknown search type: {}. Please try again",
                keyword
            )?,
            Command::MissingValue(kind) => writeln!(
                output,
                "Missing search value for '{}'. Please try again",
                kind.to_str()
            )?,
            Command::Search { kind, value } => {
                writeln!(
                    output,
                    "Performing {} search for: '{}':",
                    kind.to_str(),
                    value
                )?;
                let res = lookup(kind, &value)
                    .with_context(|| format!("{} search for '{}' failed", kind.to_str(), value))?;
                if let Lookup::NotFound(Some(err)) = &res {
                    debug!("{}: {}", err.error_id, err.error_description);
                }
                write!(output, "{}", Report::new(&res))?;
                writeln!(output, "\n")?;
            }
        }
    }
}
