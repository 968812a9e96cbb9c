use super::{BodyDecoder, DecodeError};
use serde::de::DeserializeOwned;

/// Decodes `application/x-www-form-urlencoded` bodies.
///
/// Form data carries no type information, so every failure is reported as
/// [`DecodeError::Other`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FormDecoder;

impl BodyDecoder for FormDecoder {
    fn decode<T>(&self, body: &[u8]) -> Result<T, DecodeError>
    where
        T: DeserializeOwned,
    {
        serde_urlencoded::from_bytes(body).map_err(DecodeError::other)
    }
}
