//! Core error type.
//!
//! Format readers define their own error enums and either convert them into
//! `WmError` via `From` impls or keep them separate and wrap `WmError` as one
//! variant.  Both patterns are acceptable; prefer whichever keeps error sites
//! clean.

use thiserror::Error;

/// The top-level error type for `wm-core` and a common base for readers.
#[derive(Debug, Error)]
pub enum WmError {
    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `wm-*` crates.
pub type WmResult<T> = Result<T, WmError>;
