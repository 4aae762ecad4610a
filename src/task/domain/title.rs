//! Task title normalization and validation.
//!
//! Rules run in a fixed order and the first failing rule wins:
//!
//! 1. a missing or `null` title is [`TitleValidationError::Required`];
//! 2. a present value that is not a string is
//!    [`TitleValidationError::MustBeString`];
//! 3. a string that is blank after trimming is
//!    [`TitleValidationError::Required`];
//! 4. fewer than [`MIN_TITLE_CHARS`] characters is
//!    [`TitleValidationError::TooShort`];
//! 5. more than [`MAX_TITLE_CHARS`] characters is
//!    [`TitleValidationError::TooLong`].
//!
//! Only leading and trailing padding is removed: Unicode whitespace other
//! than U+0085, plus the byte-order mark U+FEFF. Lengths count Unicode scalar
//! values of the trimmed string.

use super::TitleValidationError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Minimum number of characters in a trimmed title.
pub const MIN_TITLE_CHARS: usize = 3;

/// Maximum number of characters in a trimmed title.
pub const MAX_TITLE_CHARS: usize = 80;

/// Raw title input as received from a client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleInput<'a> {
    /// No title was supplied, or it was `null`.
    Missing,
    /// A string title.
    Text(&'a str),
    /// A title of any non-string shape (number, boolean, object, array).
    NotText,
}

impl<'a> From<Option<&'a Value>> for TitleInput<'a> {
    fn from(value: Option<&'a Value>) -> Self {
        match value {
            None | Some(Value::Null) => Self::Missing,
            Some(Value::String(text)) => Self::Text(text),
            Some(_) => Self::NotText,
        }
    }
}

/// A validated, trimmed task title.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TaskTitle(String);

impl TaskTitle {
    /// Validates and trims a string title.
    ///
    /// # Errors
    ///
    /// Returns [`TitleValidationError`] when the trimmed value is blank, too
    /// short or too long.
    pub fn new(value: &str) -> Result<Self, TitleValidationError> {
        validate_title(TitleInput::Text(value))
    }

    /// Returns the title as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the title and returns the owned string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl TryFrom<String> for TaskTitle {
    type Error = TitleValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<TaskTitle> for String {
    fn from(title: TaskTitle) -> Self {
        title.0
    }
}

impl AsRef<str> for TaskTitle {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validates raw title input and returns the trimmed title.
///
/// # Errors
///
/// Returns the [`TitleValidationError`] of the first rule the input breaks.
pub fn validate_title(input: TitleInput<'_>) -> Result<TaskTitle, TitleValidationError> {
    let raw = match input {
        TitleInput::Missing => return Err(TitleValidationError::Required),
        TitleInput::NotText => return Err(TitleValidationError::MustBeString),
        TitleInput::Text(raw) => raw,
    };

    let trimmed = raw.trim_matches(is_title_padding);
    if trimmed.is_empty() {
        return Err(TitleValidationError::Required);
    }

    let length = trimmed.chars().count();
    if length < MIN_TITLE_CHARS {
        return Err(TitleValidationError::TooShort);
    }
    if length > MAX_TITLE_CHARS {
        return Err(TitleValidationError::TooLong);
    }

    Ok(TaskTitle(trimmed.to_owned()))
}

/// Characters stripped from both ends of a title.
fn is_title_padding(c: char) -> bool {
    c == '\u{FEFF}' || (c != '\u{0085}' && c.is_whitespace())
}
