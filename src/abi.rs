//! Fixed-layout error record returned to VM callers
//!
//! Only the span and the numeric (category, code) pair cross this boundary.
//! Category and code stay raw `u16` here so a record written by a newer VM,
//! carrying values this build does not know, still decodes.

use crate::errors::{category_name, code_name, Category, Code, Error, ErrorList, Span};

/// Encoded size of one record in bytes
pub const ABI_RECORD_SIZE: usize = 12;

/// Failure to decode or convert an ABI record
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AbiDecodeError {
    #[error("ABI error record must be 12 bytes, got {0}")]
    Length(usize),

    #[error("undefined error category {0}")]
    UndefinedCategory(u16),

    #[error("undefined error code {0}")]
    UndefinedCode(u16),

    #[error("error record has no category")]
    NilCategory,

    #[error("error record has no code")]
    NilCode,
}

/// The ABI view of an [`Error`]
#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AbiError {
    pub position: u32,
    pub length: u32,
    pub category: u16,
    pub code: u16,
}

impl AbiError {
    /// Big-endian `position | length | category | code`
    pub fn to_bytes(&self) -> [u8; ABI_RECORD_SIZE] {
        let mut out = [0u8; ABI_RECORD_SIZE];
        out[0..4].copy_from_slice(&self.position.to_be_bytes());
        out[4..8].copy_from_slice(&self.length.to_be_bytes());
        out[8..10].copy_from_slice(&self.category.to_be_bytes());
        out[10..12].copy_from_slice(&self.code.to_be_bytes());
        out
    }

    /// Decode a record produced by [`AbiError::to_bytes`]
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, AbiDecodeError> {
        let bytes: &[u8; ABI_RECORD_SIZE] = bytes
            .try_into()
            .map_err(|_| AbiDecodeError::Length(bytes.len()))?;
        Ok(Self {
            position: u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]),
            length: u32::from_be_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]),
            category: u16::from_be_bytes([bytes[8], bytes[9]]),
            code: u16::from_be_bytes([bytes[10], bytes[11]]),
        })
    }

    /// Convert back to a typed error. Debug fields are not recoverable.
    ///
    /// Category and code must both be defined and nonzero.
    pub fn to_error(&self) -> Result<Error, AbiDecodeError> {
        let category = Category::try_from(self.category)
            .map_err(|e| AbiDecodeError::UndefinedCategory(e.0))?;
        if category.is_nil() {
            return Err(AbiDecodeError::NilCategory);
        }
        let code = Code::try_from(self.code).map_err(|e| AbiDecodeError::UndefinedCode(e.0))?;
        if code.is_nil() {
            return Err(AbiDecodeError::NilCode);
        }
        Ok(Error::new(category, code).with_span(Span::new(self.position, self.length)))
    }

    /// Render the record the way [`Error::render`] would, using the
    /// fallback name for values this build does not define
    pub fn describe(&self) -> String {
        let location = if Span::new(self.position, self.length).is_known() {
            if self.length > 0 {
                format!("offset {}, length {}", self.position, self.length)
            } else {
                format!("offset {}", self.position)
            }
        } else {
            "unknown location".to_string()
        };
        format!(
            "{}, category {} ({}), code {} ({})",
            location,
            self.category,
            category_name(self.category),
            self.code,
            code_name(self.code)
        )
    }
}

impl From<&Error> for AbiError {
    fn from(error: &Error) -> Self {
        Self {
            position: error.position(),
            length: error.length(),
            category: error.category().value(),
            code: error.code().value(),
        }
    }
}

impl From<Error> for AbiError {
    fn from(error: Error) -> Self {
        Self::from(&error)
    }
}

impl ErrorList {
    /// ABI records in detection order
    pub fn to_abi(&self) -> Vec<AbiError> {
        self.iter().map(AbiError::from).collect()
    }
}

#[cfg(test)]
#[path = "abi_tests.rs"]
mod tests;
