//! Error types for Scribbler operations.
//!
//! This module provides the main error type [`ScribblerError`] which wraps
//! every error condition of a decorate call. All of them are terminal: the
//! call stops at the first error and produces no output.

use std::io;

use thiserror::Error;

use scribbler_parser::ParseError;

/// The main error type for Scribbler operations.
#[derive(Debug, Error)]
pub enum ScribblerError {
    /// A malformed mini-language string.
    #[error(transparent)]
    Syntax(#[from] ParseError),

    /// A value that is well-formed but cannot be rendered, such as a
    /// gradient with fewer than two colors.
    #[error("Precondition failed: {0}")]
    Precondition(String),

    /// Image bytes that cannot be decoded, or a canvas that cannot be encoded.
    #[error("Codec error: {0}")]
    Codec(String),

    /// A required asset was not provided.
    #[error("Missing asset: {0}")]
    MissingAsset(&'static str),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// A type alias for `Result<T, ScribblerError>`.
pub type Result<T> = std::result::Result<T, ScribblerError>;
