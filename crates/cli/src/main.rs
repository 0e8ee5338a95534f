// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

mod driver;

use addrbook::ModelManager;
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use color_eyre::Result;
use driver::{OutputFormat, run_line};
use std::io::BufRead;
use tracing::info;
use tracing_log::AsTrace;
use tracing_subscriber::EnvFilter;

/// Address book - schedule appointments and reminders for your contacts
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Run these commands in order and exit. Without this flag commands are
    /// read from standard input, one per line.
    #[arg(short, long = "command", value_name = "TEXT")]
    commands: Vec<String>,

    /// How `list` and `find` print persons
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(flatten)]
    verbosity: Verbosity<WarnLevel>,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();

    // RUST_LOG wins over -v/-q when set
    let filter: EnvFilter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::default().add_directive(args.verbosity.log_level_filter().as_trace().into())
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    let mut model: ModelManager = ModelManager::new();

    if args.commands.is_empty() {
        info!("Reading commands from standard input");
        for line in std::io::stdin().lock().lines() {
            let line: String = line?;
            if line.trim() == "exit" {
                break;
            }
            report(run_line(&mut model, &line, args.format));
        }
    } else {
        for line in &args.commands {
            report(run_line(&mut model, line, args.format));
        }
    }

    Ok(())
}

/// Prints the outcome of one line. Failures go to stderr and never stop the loop.
fn report(outcome: Result<Option<String>, driver::LineError>) {
    match outcome {
        Ok(Some(output)) => println!("{output}"),
        Ok(None) => {}
        Err(err) => eprintln!("{err}"),
    }
}
