use bytes::Bytes;
use serde::{Deserialize, Serialize};
use shared::Result;

/// A fully materialized response snapshot: status code plus the exact bytes
/// that were sent to the client. Serialized as a single opaque JSON value
/// with the `Code`/`Body` field names of the original wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheEntry {
    #[serde(rename = "Code")]
    pub code: u16,
    #[serde(rename = "Body")]
    pub body: Vec<u8>,
}

impl CacheEntry {
    pub fn new(code: u16, body: Vec<u8>) -> Self {
        Self { code, body }
    }

    pub fn to_bytes(&self) -> Result<Bytes> {
        Ok(Bytes::from(serde_json::to_vec(self)?))
    }

    pub fn from_bytes(raw: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(raw)?)
    }
}
