//! resume library root.
//! Exposes the CLI parser, the high-level run() function, and the
//! reporter modules so they can be driven with an injected clock.

pub mod cli;
pub mod core;
pub mod errors;
pub mod logging;
pub mod models;
pub mod utils;

use cli::parser::Cli;
use crate::core::{FixedClock, History, SystemClock, UnavailableClock, report};
use errors::AppResult;
use std::io::{self, Write};

/// Pick the clock the options ask for and print the report to `out`.
/// Returns the total years of experience.
pub fn dispatch<W: Write>(cli: &Cli, history: &History, out: &mut W) -> AppResult<i32> {
    if cli.no_clock {
        return report(history, &UnavailableClock, out);
    }

    match cli.year {
        Some(year) => report(history, &FixedClock(year), out),
        None => report(history, &SystemClock, out),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // arguments never change the report; unknown ones are dropped
    let cli = Cli::parse_lenient();

    logging::init();

    let history = History::builtin()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    dispatch(&cli, &history, &mut out)?;

    Ok(())
}
