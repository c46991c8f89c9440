//! Structured error records for the SQL VM pipeline
//!
//! An [`Error`] carries two kinds of data. The span and the
//! (category, code) pair are part of the VM ABI and are the only values a
//! contract caller ever sees. Token, prefix and message exist for debugging
//! and are not stable between versions; they must never be returned across
//! the ABI boundary.
//!
//! Compile-time phases report an [`ErrorList`] so a user gets every
//! diagnostic of a pass at once. Runtime execution stops at the first fault
//! and reports a single [`Error`].

use serde::{Deserialize, Serialize};
use std::fmt::{self, Write as _};

pub mod error_codes;
pub use error_codes::*;

/// Result of a batch phase (lexer, parser, semantic analyzer)
pub type PassResult<T> = Result<T, ErrorList>;

/// Result of a fail-fast phase (runtime execution)
pub type ExecResult<T> = Result<T, Error>;

/// Byte range in the original source text.
///
/// A span with both fields zero means the location is unknown. This is
/// indistinguishable from a real zero-length span at offset zero, and the
/// overload is kept because ABI consumers already rely on it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    /// Byte offset of the start of the span
    pub position: u32,
    /// Byte length of the offending token
    pub length: u32,
}

impl Span {
    /// Span for errors with no meaningful location
    pub const UNKNOWN: Span = Span {
        position: 0,
        length: 0,
    };

    pub const fn new(position: u32, length: u32) -> Self {
        Self { position, length }
    }

    /// Create a span from `start..end` byte offsets.
    ///
    /// Offsets beyond `u32::MAX` saturate.
    pub fn from_offsets(start: usize, end: usize) -> Self {
        let position = u32::try_from(start).unwrap_or(u32::MAX);
        let length = u32::try_from(end.saturating_sub(start)).unwrap_or(u32::MAX);
        Self { position, length }
    }

    /// Whether the span carries a location
    pub const fn is_known(&self) -> bool {
        self.position > 0 || self.length > 0
    }
}

/// A single diagnostic occurrence.
///
/// Values are immutable once built; the `with_*` methods consume the record
/// and return a new one.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Error {
    #[serde(default)]
    position: u32,
    #[serde(default)]
    length: u32,
    category: Category,
    code: Code,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    token: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    prefix: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    message: String,
}

impl Error {
    /// Create an error with no location and no debug context
    pub fn new(category: Category, code: Code) -> Self {
        Self {
            category,
            code,
            ..Self::default()
        }
    }

    /// Analysis limit error
    pub fn limit(code: Code) -> Self {
        Self::new(Category::Limit, code)
    }

    /// Lexical or syntactic error
    pub fn grammar(code: Code) -> Self {
        Self::new(Category::Grammar, code)
    }

    /// Static consistency error
    pub fn semantic(code: Code) -> Self {
        Self::new(Category::Semantic, code)
    }

    /// Execution fault
    pub fn runtime(code: Code) -> Self {
        Self::new(Category::Runtime, code)
    }

    /// Attach the source span
    pub fn with_span(mut self, span: Span) -> Self {
        self.position = span.position;
        self.length = span.length;
        self
    }

    /// Attach the offending source text
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = token.into();
        self
    }

    /// Attach a short cause hint
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Attach free-form detail
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn position(&self) -> u32 {
        self.position
    }

    pub fn length(&self) -> u32 {
        self.length
    }

    pub fn span(&self) -> Span {
        Span::new(self.position, self.length)
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn code(&self) -> Code {
        self.code
    }

    /// Source text of the offending span (debug only)
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Cause hint (debug only)
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Detail message (debug only)
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Check that both category and code are set
    pub fn is_valid(&self) -> bool {
        !self.category.is_nil() && !self.code.is_nil()
    }

    /// Format as a single developer-facing line
    pub fn render(&self) -> String {
        self.to_string()
    }

    fn write_rendered(&self, out: &mut impl fmt::Write) -> fmt::Result {
        // Not every error maps to a token. The parser reports unexpected end
        // of input with neither offset nor length.
        if self.span().is_known() {
            write!(out, "offset {}", self.position)?;
            if self.length > 0 {
                write!(out, ", length {}", self.length)?;
            }
        } else {
            out.write_str("unknown location")?;
        }
        write!(
            out,
            ", category {} ({}), code {} ({})",
            self.category.value(),
            self.category.name(),
            self.code.value(),
            self.code.name()
        )?;
        if !self.token.is_empty() {
            write!(out, ", token {:?}", self.token)?;
        }
        if !self.prefix.is_empty() {
            write!(out, ", hint {:?}", self.prefix)?;
        }
        if !self.message.is_empty() {
            write!(out, ", message: {}", self.message)?;
        }
        Ok(())
    }

    /// Format as JSON (diagnostics only, includes debug fields)
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_rendered(f)
    }
}

impl std::error::Error for Error {}

/// Errors detected by one pass, in detection order
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorList {
    errors: Vec<Error>,
}

impl ErrorList {
    /// Create a new empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an error
    pub fn push(&mut self, error: Error) {
        self.errors.push(error);
    }

    /// Iterate in detection order
    pub fn iter(&self) -> std::slice::Iter<'_, Error> {
        self.errors.iter()
    }

    /// First error detected, if any
    pub fn first(&self) -> Option<&Error> {
        self.errors.first()
    }

    /// Get the number of errors
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Check if the list is empty
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Append every error of another list after this one's
    pub fn merge(&mut self, other: ErrorList) {
        self.errors.extend(other.errors);
    }

    /// Combine the lists of independent units, keeping each unit's order
    pub fn concat(lists: impl IntoIterator<Item = ErrorList>) -> ErrorList {
        let mut combined = ErrorList::new();
        for list in lists {
            combined.merge(list);
        }
        combined
    }

    /// `Ok(value)` when nothing was reported, otherwise the whole list
    pub fn into_result<T>(self, value: T) -> PassResult<T> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }

    /// One rendered error per line
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Format all errors as a JSON array
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "[]".to_string())
    }

    /// Parse a JSON array of errors, or a single error object.
    ///
    /// Every record must carry a category and a code.
    pub fn from_json(source: &str) -> Result<ErrorList, serde_json::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Records {
            Many(Vec<Error>),
            One(Error),
        }

        let list = match serde_json::from_str(source)? {
            Records::Many(errors) => ErrorList::from(errors),
            Records::One(error) => ErrorList::from(error),
        };
        if let Some(index) = list.iter().position(|e| !e.is_valid()) {
            return Err(<serde_json::Error as serde::de::Error>::custom(format!(
                "error record {} has no category or code",
                index
            )));
        }
        Ok(list)
    }
}

impl fmt::Display for ErrorList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_char('\n')?;
            }
            error.write_rendered(f)?;
        }
        Ok(())
    }
}

impl std::error::Error for ErrorList {}

impl From<Error> for ErrorList {
    fn from(error: Error) -> Self {
        let mut list = ErrorList::new();
        list.push(error);
        list
    }
}

impl From<Vec<Error>> for ErrorList {
    fn from(errors: Vec<Error>) -> Self {
        Self { errors }
    }
}

impl FromIterator<Error> for ErrorList {
    fn from_iter<I: IntoIterator<Item = Error>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl Extend<Error> for ErrorList {
    fn extend<I: IntoIterator<Item = Error>>(&mut self, iter: I) {
        self.errors.extend(iter);
    }
}

impl IntoIterator for ErrorList {
    type Item = Error;
    type IntoIter = std::vec::IntoIter<Error>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ErrorList {
    type Item = &'a Error;
    type IntoIter = std::slice::Iter<'a, Error>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

#[cfg(test)]
mod tests;
