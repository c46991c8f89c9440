//! Handler for the `sqlvm-errors explain` subcommand.

use crate::errors::Code;

use super::CliError;

pub(crate) fn run_explain(query: &str, json: bool) -> Result<(), CliError> {
    let code = parse_code(query).ok_or_else(|| CliError::UnknownCode(query.to_string()))?;
    let explanation = get_code_explanation(code).unwrap_or_default();
    tracing::debug!(code = code.value(), "explaining error code");

    if json {
        let value = serde_json::json!({
            "value": code.value(),
            "name": code.name(),
            "group": code.group(),
            "explanation": explanation,
        });
        println!("{}", value);
    } else {
        println!("code {} ({})", code.value(), code.name());
        if let Some(group) = code.group() {
            println!("group: {}", group);
        }
        println!();
        println!("{}", explanation);
    }
    Ok(())
}

/// Resolve a numeric value or a canonical name to a defined code.
pub(super) fn parse_code(query: &str) -> Option<Code> {
    let query = query.trim();
    match query.parse::<u16>() {
        Ok(value) => Code::try_from(value).ok().filter(|code| !code.is_nil()),
        Err(_) => Code::from_name(&query.to_lowercase()),
    }
}

/// Get a detailed explanation for an error code.
pub(super) fn get_code_explanation(code: Code) -> Option<&'static str> {
    let explanation = match code {
        Code::Nil => return None,
        Code::DepthLimitReached => {
            "The statement nests deeper than the analyzer allows. Analysis stops at \
             this point and no further errors are reported for the statement.\n\n\
             Fix: flatten nested expressions or subqueries."
        }
        Code::Parser => {
            "The parser could not match the input against the grammar. When the \
             input ends unexpectedly the error has no location.\n\n\
             Fix: check the statement near the reported offset."
        }
        Code::InvalidIntegerSyntax => {
            "An integer literal contains characters that are not digits.\n\n\
             Example:\n  SELECT 12a3;"
        }
        Code::InvalidNumberSyntax => {
            "A decimal literal is malformed.\n\n\
             Example:\n  SELECT 1.e;"
        }
        Code::IntegerOutOfRange => {
            "An integer literal does not fit in the widest supported integer type."
        }
        Code::NumberOutOfRange => {
            "A decimal literal does not fit in the widest supported fixed-point type."
        }
        Code::FractionalPartTooLong => {
            "A decimal literal has more fractional digits than any fixed-point type \
             can hold."
        }
        Code::EscapeSequenceTooShort => {
            "A string escape ends before all required hex digits were read.\n\n\
             Example:\n  SELECT '\\x4';"
        }
        Code::InvalidUnicodeCodePoint => {
            "A unicode escape names a surrogate or a value beyond U+10FFFF."
        }
        Code::UnknownEscapeSequence => {
            "A backslash is followed by a character that starts no escape sequence."
        }
        Code::InvalidBytesSize => {
            "A BYTES type declares a size outside 1-32.\n\n\
             Example:\n  CREATE TABLE t (b BYTES33);"
        }
        Code::InvalidIntSize => {
            "An INT type declares a bit size that is not a multiple of 8 between \
             8 and 256."
        }
        Code::InvalidUintSize => {
            "A UINT type declares a bit size that is not a multiple of 8 between \
             8 and 256."
        }
        Code::InvalidFixedSize => {
            "A FIXED type declares a bit size that is not a multiple of 8 between \
             8 and 256."
        }
        Code::InvalidUfixedSize => {
            "A UFIXED type declares a bit size that is not a multiple of 8 between \
             8 and 256."
        }
        Code::InvalidFixedFractionalDigits => {
            "A FIXED type declares more fractional digits than allowed (0-80)."
        }
        Code::InvalidUfixedFractionalDigits => {
            "A UFIXED type declares more fractional digits than allowed (0-80)."
        }
        Code::InvalidDataType => {
            "An operation received an operand of a type it does not accept. \
             Execution stops at the first runtime error."
        }
        Code::Overflow => "An arithmetic result exceeds the maximum of its type.",
        Code::Underflow => "An arithmetic result is below the minimum of its type.",
        Code::IndexOutOfRange => "An index refers past the end of a value or column list.",
        Code::InvalidCastType => "A value cannot be cast to the requested type.",
        Code::DividedByZero => "The divisor of a division or modulo is zero.",
    };
    Some(explanation)
}
