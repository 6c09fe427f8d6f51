//! Canonical CBOR encoding and digests of ledger state.
//!
//! - CBOR via `ciborium`
//! - Deterministic as long as maps are sorted (`BTreeMap`)
//! - Digest = SHA-256 over the encoded bytes

use serde::Serialize;
use sha2::{Digest, Sha256};
use thiserror::Error;

/// Serialization errors.
#[derive(Debug, Error)]
pub enum SerializationError {
    /// CBOR encoding failed.
    #[error("CBOR encoding failed: {0}")]
    Encode(String),
}

/// Serialize to CBOR bytes.
pub fn to_cbor<T: Serialize>(value: &T) -> Result<Vec<u8>, SerializationError> {
    let mut bytes = Vec::new();
    ciborium::into_writer(value, &mut bytes)
        .map_err(|e| SerializationError::Encode(format!("{:?}", e)))?;
    Ok(bytes)
}

/// SHA-256 of the CBOR encoding of `value`.
pub fn sha256_of_cbor<T: Serialize>(value: &T) -> Result<[u8; 32], SerializationError> {
    let bytes = to_cbor(value)?;
    Ok(Sha256::digest(&bytes).into())
}
