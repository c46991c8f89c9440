//! SQL VM error model
//!
//! Structured error records shared by the lexer, parser, semantic analyzer
//! and runtime of the SQL VM. The numeric surface (span, category, code) is
//! a frozen ABI; everything else is developer diagnostics.

pub mod abi;
pub mod cli;
pub mod errors;
pub mod logger;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::abi::AbiError;
    pub use crate::errors::{Category, Code, Error, ErrorList, ExecResult, PassResult, Span};
    pub use crate::logger::Logger;
}
