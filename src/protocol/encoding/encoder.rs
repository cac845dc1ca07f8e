use serde::{de::DeserializeOwned, Serialize};
use crate::config::enums::wire_encoding::WireEncoding;
use crate::protocol::enums::encoding_error::EncodingError;

/// Encode a message using the specified encoding format
pub fn encode<T: Serialize>(encoding: &WireEncoding, value: &T) -> Result<Vec<u8>, EncodingError> {
    match encoding {
        WireEncoding::msgpack => encode_msgpack(value),
        WireEncoding::json => encode_json(value),
    }
}

/// Decode a message using the specified encoding format
pub fn decode<T: DeserializeOwned>(encoding: &WireEncoding, data: &[u8]) -> Result<T, EncodingError> {
    match encoding {
        WireEncoding::msgpack => decode_msgpack(data),
        WireEncoding::json => decode_json(data),
    }
}

// Field names are kept so tagged enums decode the same way as JSON.
fn encode_msgpack<T: Serialize>(value: &T) -> Result<Vec<u8>, EncodingError> {
    rmp_serde::to_vec_named(value)
        .map_err(|e| EncodingError::SerializationError(e.to_string()))
}

fn decode_msgpack<T: DeserializeOwned>(data: &[u8]) -> Result<T, EncodingError> {
    rmp_serde::from_slice(data)
        .map_err(|e| EncodingError::DeserializationError(e.to_string()))
}

fn encode_json<T: Serialize>(value: &T) -> Result<Vec<u8>, EncodingError> {
    serde_json::to_vec(value)
        .map_err(|e| EncodingError::SerializationError(e.to_string()))
}

fn decode_json<T: DeserializeOwned>(data: &[u8]) -> Result<T, EncodingError> {
    serde_json::from_slice(data)
        .map_err(|e| EncodingError::DeserializationError(e.to_string()))
}
