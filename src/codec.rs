//! Codec Module
//!
//! Turns serde values into bytes and back, for callers that keep opaque
//! payloads in a `Cache<Vec<u8>>`. The cache itself never calls the codec.

use serde::{de::DeserializeOwned, Serialize};

use crate::error::CodecError;

/// A byte codec for serde values.
pub trait Codec {
    /// Serializes `value` into bytes.
    fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>, CodecError>;

    /// Deserializes bytes produced by [`Codec::encode`] into a `T`.
    fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, CodecError>;
}

/// JSON codec backed by `serde_json`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl Codec for JsonCodec {
    fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>, CodecError> {
        serde_json::to_vec(value).map_err(CodecError::Encode)
    }

    fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, CodecError> {
        serde_json::from_slice(bytes).map_err(CodecError::Decode)
    }
}

/// Encodes `value` with [`JsonCodec`].
pub fn encode<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, CodecError> {
    JsonCodec.encode(value)
}

/// Decodes `bytes` into a `T` with [`JsonCodec`].
///
/// ```
/// use expiring_cache::{decode, encode};
///
/// let bytes = encode(&vec![1u32, 2, 3]).unwrap();
/// let numbers: Vec<u32> = decode(&bytes).unwrap();
/// assert_eq!(numbers, vec![1, 2, 3]);
/// ```
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, CodecError> {
    JsonCodec.decode(bytes)
}
