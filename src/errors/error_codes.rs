//! Error category and code definitions
//!
//! Both enumerations are part of the VM ABI. Numbering is append-only: a
//! variant keeps its value forever and a retired value is never reused.
//! Zero is reserved in both spaces as the unset/invalid marker.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Name reported for raw values that no declared variant carries.
pub const UNKNOWN_NAME: &str = "unknown";

/// Name reported for the reserved zero value.
pub const NIL_NAME: &str = "nil";

/// Raw value outside the declared category range
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("undefined error category {0}")]
pub struct CategoryFromU16Error(pub u16);

/// Raw value outside the declared code range
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("undefined error code {0}")]
pub struct CodeFromU16Error(pub u16);

/// Pipeline phase an error originates from.
#[repr(u16)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
pub enum Category {
    /// Reserved, never produced by a detection site
    #[default]
    Nil = 0,
    /// Resource or recursion-depth limits exceeded
    Limit = 1,
    /// Lexical and syntactic faults
    Grammar = 2,
    /// Static type and consistency faults
    Semantic = 3,
    /// Execution faults
    Runtime = 4,
}

impl Category {
    /// Every category a detection site may produce, in numeric order
    pub const ALL: [Category; 4] = [
        Category::Limit,
        Category::Grammar,
        Category::Semantic,
        Category::Runtime,
    ];

    /// Numeric ABI value
    pub const fn value(self) -> u16 {
        self as u16
    }

    /// Canonical lowercase name, for diagnostics only
    pub const fn name(self) -> &'static str {
        match self {
            Category::Nil => NIL_NAME,
            Category::Limit => "limit",
            Category::Grammar => "grammar",
            Category::Semantic => "semantic",
            Category::Runtime => "runtime",
        }
    }

    /// Check whether this is the reserved zero value
    pub const fn is_nil(self) -> bool {
        matches!(self, Category::Nil)
    }

    /// Look up a category by its canonical name
    pub fn from_name(name: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.name() == name)
    }
}

impl From<Category> for u16 {
    fn from(category: Category) -> u16 {
        category.value()
    }
}

impl TryFrom<u16> for Category {
    type Error = CategoryFromU16Error;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Category::Nil),
            1 => Ok(Category::Limit),
            2 => Ok(Category::Grammar),
            3 => Ok(Category::Semantic),
            4 => Ok(Category::Runtime),
            other => Err(CategoryFromU16Error(other)),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Name of a raw category value; undefined values map to [`UNKNOWN_NAME`].
pub fn category_name(value: u16) -> &'static str {
    Category::try_from(value).map_or(UNKNOWN_NAME, Category::name)
}

/// Documentation grouping of codes. Not part of the numeric encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodeGroup {
    /// Analysis limits
    Limit,
    /// Lexical/syntax and literal errors
    Literal,
    /// Execution faults
    Runtime,
}

impl CodeGroup {
    pub const fn name(self) -> &'static str {
        match self {
            CodeGroup::Limit => "limit",
            CodeGroup::Literal => "literal",
            CodeGroup::Runtime => "runtime",
        }
    }
}

impl fmt::Display for CodeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Specific reason for an error, flat-numbered and independent of [`Category`].
#[repr(u16)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
pub enum Code {
    #[default]
    Nil = 0,

    // Limits
    DepthLimitReached = 1,

    // Lexical/syntax and literals
    Parser = 2,
    InvalidIntegerSyntax = 3,
    InvalidNumberSyntax = 4,
    IntegerOutOfRange = 5,
    NumberOutOfRange = 6,
    FractionalPartTooLong = 7,
    EscapeSequenceTooShort = 8,
    InvalidUnicodeCodePoint = 9,
    UnknownEscapeSequence = 10,
    InvalidBytesSize = 11,
    InvalidIntSize = 12,
    InvalidUintSize = 13,
    InvalidFixedSize = 14,
    InvalidUfixedSize = 15,
    InvalidFixedFractionalDigits = 16,
    InvalidUfixedFractionalDigits = 17,

    // Runtime
    InvalidDataType = 18,
    Overflow = 19,
    Underflow = 20,
    IndexOutOfRange = 21,
    InvalidCastType = 22,
    DividedByZero = 23,
}

impl Code {
    /// Every code a detection site may produce, in numeric order
    pub const ALL: [Code; 23] = [
        Code::DepthLimitReached,
        Code::Parser,
        Code::InvalidIntegerSyntax,
        Code::InvalidNumberSyntax,
        Code::IntegerOutOfRange,
        Code::NumberOutOfRange,
        Code::FractionalPartTooLong,
        Code::EscapeSequenceTooShort,
        Code::InvalidUnicodeCodePoint,
        Code::UnknownEscapeSequence,
        Code::InvalidBytesSize,
        Code::InvalidIntSize,
        Code::InvalidUintSize,
        Code::InvalidFixedSize,
        Code::InvalidUfixedSize,
        Code::InvalidFixedFractionalDigits,
        Code::InvalidUfixedFractionalDigits,
        Code::InvalidDataType,
        Code::Overflow,
        Code::Underflow,
        Code::IndexOutOfRange,
        Code::InvalidCastType,
        Code::DividedByZero,
    ];

    /// Numeric ABI value
    pub const fn value(self) -> u16 {
        self as u16
    }

    /// Canonical lowercase name, for diagnostics only
    pub const fn name(self) -> &'static str {
        match self {
            Code::Nil => NIL_NAME,
            Code::DepthLimitReached => "depth limit reached",
            Code::Parser => "parser error",
            Code::InvalidIntegerSyntax => "invalid integer syntax",
            Code::InvalidNumberSyntax => "invalid number syntax",
            Code::IntegerOutOfRange => "integer out of range",
            Code::NumberOutOfRange => "number out of range",
            Code::FractionalPartTooLong => "fractional part too long",
            Code::EscapeSequenceTooShort => "escape sequence too short",
            Code::InvalidUnicodeCodePoint => "invalid unicode code point",
            Code::UnknownEscapeSequence => "unknown escape sequence",
            Code::InvalidBytesSize => "invalid bytes size",
            Code::InvalidIntSize => "invalid int size",
            Code::InvalidUintSize => "invalid uint size",
            Code::InvalidFixedSize => "invalid fixed size",
            Code::InvalidUfixedSize => "invalid ufixed size",
            Code::InvalidFixedFractionalDigits => "invalid fixed fractional digits",
            Code::InvalidUfixedFractionalDigits => "invalid ufixed fractional digits",
            Code::InvalidDataType => "invalid data type",
            Code::Overflow => "overflow",
            Code::Underflow => "underflow",
            Code::IndexOutOfRange => "index out of range",
            Code::InvalidCastType => "invalid cast type",
            Code::DividedByZero => "divide by zero",
        }
    }

    /// Documentation group, `None` for [`Code::Nil`]
    pub const fn group(self) -> Option<CodeGroup> {
        match self {
            Code::Nil => None,
            Code::DepthLimitReached => Some(CodeGroup::Limit),
            Code::Parser
            | Code::InvalidIntegerSyntax
            | Code::InvalidNumberSyntax
            | Code::IntegerOutOfRange
            | Code::NumberOutOfRange
            | Code::FractionalPartTooLong
            | Code::EscapeSequenceTooShort
            | Code::InvalidUnicodeCodePoint
            | Code::UnknownEscapeSequence
            | Code::InvalidBytesSize
            | Code::InvalidIntSize
            | Code::InvalidUintSize
            | Code::InvalidFixedSize
            | Code::InvalidUfixedSize
            | Code::InvalidFixedFractionalDigits
            | Code::InvalidUfixedFractionalDigits => Some(CodeGroup::Literal),
            Code::InvalidDataType
            | Code::Overflow
            | Code::Underflow
            | Code::IndexOutOfRange
            | Code::InvalidCastType
            | Code::DividedByZero => Some(CodeGroup::Runtime),
        }
    }

    /// Check whether this is the reserved zero value
    pub const fn is_nil(self) -> bool {
        matches!(self, Code::Nil)
    }

    /// Look up a code by its canonical name
    pub fn from_name(name: &str) -> Option<Code> {
        Code::ALL.into_iter().find(|c| c.name() == name)
    }
}

impl From<Code> for u16 {
    fn from(code: Code) -> u16 {
        code.value()
    }
}

impl TryFrom<u16> for Code {
    type Error = CodeFromU16Error;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        if value == 0 {
            return Ok(Code::Nil);
        }
        Code::ALL
            .get(usize::from(value) - 1)
            .copied()
            .filter(|code| code.value() == value)
            .ok_or(CodeFromU16Error(value))
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Name of a raw code value; undefined values map to [`UNKNOWN_NAME`].
pub fn code_name(value: u16) -> &'static str {
    Code::try_from(value).map_or(UNKNOWN_NAME, Code::name)
}

#[cfg(test)]
#[path = "error_codes_tests.rs"]
mod tests;
