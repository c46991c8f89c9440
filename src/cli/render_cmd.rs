//! Handlers for the `sqlvm-errors render` and `sqlvm-errors decode` subcommands.

use std::path::Path;

use crate::abi::AbiError;
use crate::errors::ErrorList;
use crate::logger::{log_error, TracingLogger};

use super::CliError;

pub(crate) fn run_render(path: &Path, abi: bool, log: bool, json: bool) -> Result<(), CliError> {
    let source = std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let errors = ErrorList::from_json(&source)?;
    tracing::debug!(path = ?path, count = errors.len(), "loaded error records");

    if log {
        for error in &errors {
            log_error(&TracingLogger, error);
        }
    }

    if abi {
        for record in errors.to_abi() {
            println!("{}", encode_hex(&record.to_bytes()));
        }
    } else if json {
        println!("{}", errors.to_json());
    } else if !errors.is_empty() {
        println!("{}", errors.render());
    }
    Ok(())
}

pub(crate) fn run_decode(hex: &str, json: bool) -> Result<(), CliError> {
    let bytes = decode_hex(hex)?;
    let record = AbiError::from_bytes(&bytes)?;

    if json {
        let value = serde_json::json!({
            "position": record.position,
            "length": record.length,
            "category": record.category,
            "code": record.code,
            "description": record.describe(),
        });
        println!("{}", value);
    } else {
        println!("{}", record.describe());
    }
    Ok(())
}

pub(super) fn encode_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

/// Parse hex digits, ignoring an optional `0x` prefix and whitespace
pub(super) fn decode_hex(input: &str) -> Result<Vec<u8>, CliError> {
    let trimmed = input.trim();
    let digits: String = trimmed
        .strip_prefix("0x")
        .unwrap_or(trimmed)
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();

    if digits.len() % 2 != 0 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(CliError::InvalidHex(input.to_string()));
    }

    (0..digits.len())
        .step_by(2)
        .map(|i| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| CliError::InvalidHex(input.to_string()))
        })
        .collect()
}
