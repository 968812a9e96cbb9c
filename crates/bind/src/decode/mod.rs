//! Decode strategies that turn a buffered request body into a typed value.
//!
//! A strategy implements [`BodyDecoder`] and reports failures as a [`DecodeError`], a tagged
//! result the binder classifies without looking at the concrete error type of the underlying
//! format library.
//!
//! Two strategies are bundled:
//! - [`JsonDecoder`]: `application/json`, registered by default
//! - [`FormDecoder`]: `application/x-www-form-urlencoded`, opt-in through
//!   [`PayloadBinder::register`](crate::PayloadBinder::register)

mod form;
mod json;

pub use form::FormDecoder;
pub use json::JsonDecoder;

use serde::de::DeserializeOwned;
use thiserror::Error;

/// A pluggable procedure decoding raw bytes for one specific content type.
pub trait BodyDecoder: Send + Sync {
    fn decode<T>(&self, body: &[u8]) -> Result<T, DecodeError>
    where
        T: DeserializeOwned;
}

impl<D: BodyDecoder> BodyDecoder for &D {
    #[inline]
    fn decode<T>(&self, body: &[u8]) -> Result<T, DecodeError>
    where
        T: DeserializeOwned,
    {
        (**self).decode(body)
    }
}

/// Classified failure of a [`BodyDecoder`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// the payload is not well formed
    #[error("syntax error at offset {offset}: {reason}")]
    Syntax { offset: usize, reason: String },

    /// a value didn't match the type expected by the destination field
    #[error("invalid type at `{field}` (offset {offset}): {got}, expected {expected}")]
    TypeMismatch { expected: String, got: String, field: String, offset: usize },

    #[error("{0}")]
    Other(String),
}

impl DecodeError {
    pub fn syntax<S: ToString>(offset: usize, reason: S) -> Self {
        Self::Syntax { offset, reason: reason.to_string() }
    }

    pub fn type_mismatch<E, G, F>(expected: E, got: G, field: F, offset: usize) -> Self
    where
        E: ToString,
        G: ToString,
        F: ToString,
    {
        Self::TypeMismatch { expected: expected.to_string(), got: got.to_string(), field: field.to_string(), offset }
    }

    pub fn other<S: ToString>(str: S) -> Self {
        Self::Other(str.to_string())
    }
}
