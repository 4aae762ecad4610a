//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while validating a task title.
///
/// The display strings are part of the HTTP contract and are returned to
/// clients verbatim.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq, Hash)]
pub enum TitleValidationError {
    /// The title is absent, `null`, or blank after trimming.
    #[error("Title is required")]
    Required,

    /// The title is present but is not a string.
    #[error("Title must be a string")]
    MustBeString,

    /// The trimmed title is shorter than the minimum length.
    #[error("Title must be at least 3 characters long")]
    TooShort,

    /// The trimmed title is longer than the maximum length.
    #[error("Title must be at most 80 characters long")]
    TooLong,
}

/// Error returned when a raw identifier is not a valid task identifier.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("malformed task identifier: {0}")]
pub struct ParseTaskIdError(pub String);
