//! Top-level error type for the driver
//!
//! Every failure is fatal: syntax errors, producer-side token stream
//! problems, and I/O all abort the run with a rendered message and a
//! non-zero exit.  Nothing is caught and retried.

use crate::parser::parse::SyntaxError;
use crate::parser::reader::ReadError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Read(#[from] ReadError),

    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
