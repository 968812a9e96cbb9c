//! `application/json` decoding backed by `serde_json`.
//!
//! Field paths for type errors are tracked with `serde_path_to_error`, byte offsets are
//! recovered from the line and column `serde_json` reports.

use super::{BodyDecoder, DecodeError};
use serde::de::DeserializeOwned;
use serde_json::error::Category;

/// Decodes JSON bodies.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonDecoder;

impl BodyDecoder for JsonDecoder {
    fn decode<T>(&self, body: &[u8]) -> Result<T, DecodeError>
    where
        T: DeserializeOwned,
    {
        let mut deserializer = serde_json::Deserializer::from_slice(body);

        let value = serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
            let field = e.path().to_string();
            classify(body, &e.into_inner(), field)
        })?;

        // only whitespace may follow the value
        deserializer.end().map_err(|e| classify(body, &e, ".".to_string()))?;

        Ok(value)
    }
}

fn classify(body: &[u8], err: &serde_json::Error, field: String) -> DecodeError {
    let offset = byte_offset(body, err.line(), err.column());

    match err.classify() {
        Category::Syntax | Category::Eof => DecodeError::syntax(offset, bare_message(err)),
        Category::Data => match split_mismatch(&bare_message(err)) {
            Some((got, expected)) => DecodeError::TypeMismatch { expected, got, field, offset },
            None => DecodeError::other(err),
        },
        Category::Io => DecodeError::other(err),
    }
}

/// Message without the ` at line L column C` suffix `serde_json` appends.
fn bare_message(err: &serde_json::Error) -> String {
    let full = err.to_string();
    if err.line() == 0 {
        return full;
    }

    let suffix = format!(" at line {} column {}", err.line(), err.column());
    match full.strip_suffix(&suffix) {
        Some(message) => message.to_string(),
        None => full,
    }
}

/// Splits `invalid type: <got>, expected <expected>` (or `invalid value: ...`) into its parts.
fn split_mismatch(message: &str) -> Option<(String, String)> {
    let rest = message.strip_prefix("invalid type: ").or_else(|| message.strip_prefix("invalid value: "))?;
    // the expectation comes from the destination type, the unexpected part may echo client input
    let (got, expected) = rest.rsplit_once(", expected ")?;
    Some((got.to_string(), expected.to_string()))
}

/// Converts a 1-based line and a column into a byte offset within `input`.
fn byte_offset(input: &[u8], line: usize, column: usize) -> usize {
    let line_start: usize =
        input.split_inclusive(|b| *b == b'\n').take(line.saturating_sub(1)).map(<[u8]>::len).sum();

    (line_start + column).min(input.len())
}
