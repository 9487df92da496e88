//! Unified application error type.
//! Every module returns AppError so `main` has a single place to report
//! failures and pick the exit status.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // Runtime
    // ---------------------------
    #[error("Failed to retrieve local time: {0}")]
    ClockUnavailable(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // History table (construction-time)
    // ---------------------------
    #[error("Position history is empty")]
    EmptyHistory,

    #[error("Position history is not strictly increasing: {previous} is followed by {next}")]
    UnorderedHistory { previous: i32, next: i32 },
}

pub type AppResult<T> = Result<T, AppError>;
