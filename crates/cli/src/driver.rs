// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Runs one line of user input and renders the outcome.

use addrbook::{Command, CommandResult, CoreError, Model, ParseError, execute, parse_command};
use addrbook_domain::Person;
use clap::ValueEnum;
use thiserror::Error;
use tracing::debug;

/// How person lists are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One numbered line per person.
    #[default]
    Text,
    /// A pretty-printed JSON array.
    Json,
}

/// A line that could not be run.
#[derive(Debug, Error)]
pub enum LineError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Command(#[from] CoreError),

    #[error("Failed to render person list: {0}")]
    Render(#[from] serde_json::Error),
}

/// Parses and executes one line, returning everything to print.
///
/// Blank lines produce no output.
///
/// # Errors
///
/// Returns an error if the line does not parse, the command is rejected, or
/// the person list cannot be rendered.
pub fn run_line<M: Model>(
    model: &mut M,
    line: &str,
    format: OutputFormat,
) -> Result<Option<String>, LineError> {
    if line.trim().is_empty() {
        return Ok(None);
    }

    let command: Command = parse_command(line)?;
    let shows_list: bool = matches!(command, Command::List | Command::Find { .. });
    debug!(command = command.kind(), "Running command");

    let result: CommandResult = execute(model, command)?;
    let mut output: String = result.feedback_to_user;
    if shows_list {
        output.push('\n');
        output.push_str(&render_persons(&model.filtered_person_list(), format)?);
    }
    Ok(Some(output))
}

/// Renders persons in the requested format.
///
/// # Errors
///
/// Returns an error if JSON serialisation fails.
pub fn render_persons(persons: &[&Person], format: OutputFormat) -> Result<String, LineError> {
    match format {
        OutputFormat::Text => {
            let lines: Vec<String> = persons
                .iter()
                .enumerate()
                .map(|(i, person)| format!("{}. {person}", i + 1))
                .collect();
            Ok(lines.join("\n"))
        }
        OutputFormat::Json => Ok(serde_json::to_string_pretty(persons)?),
    }
}
