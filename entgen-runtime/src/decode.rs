use std::str::FromStr;

use serde::de::DeserializeOwned;

use crate::{DecodeError, InvalidEnumValue};

/// Decode a JSON column scanned into a raw buffer.
///
/// An empty buffer leaves the field at its zero value.
pub fn decode_json<T>(field: &'static str, raw: &[u8]) -> Result<T, DecodeError>
where
    T: DeserializeOwned + Default,
{
    if raw.is_empty() {
        return Ok(T::default());
    }
    serde_json::from_slice(raw).map_err(|source| DecodeError::Json { field, source })
}

/// Decode an enum column scanned as text.
pub fn decode_enum<T>(field: &'static str, raw: &str) -> Result<T, DecodeError>
where
    T: FromStr<Err = InvalidEnumValue>,
{
    raw.parse()
        .map_err(|source| DecodeError::Enum { field, source })
}
