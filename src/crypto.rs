//! Ed25519 key and signature decoding, plus payload digests.

use crate::LicheckError;
use base64::{engine::general_purpose::STANDARD, Engine};
use ed25519_dalek::{Signature, VerifyingKey};
use once_cell::sync::OnceCell;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::sync::RwLock;

/// Cache for decoded verifying keys.
static KEY_CACHE: OnceCell<RwLock<HashMap<String, VerifyingKey>>> = OnceCell::new();

/// Decode a hex-encoded Ed25519 public key (64 hex characters).
///
/// The key is cached after first decode so repeated chains pay the point
/// validation cost once.
pub fn decode_public_key(hex_key: &str) -> Result<VerifyingKey, LicheckError> {
    let cache = KEY_CACHE.get_or_init(|| RwLock::new(HashMap::new()));
    if let Ok(guard) = cache.read() {
        if let Some(key) = guard.get(hex_key) {
            return Ok(*key);
        }
    }

    let bytes = hex::decode(hex_key)
        .map_err(|e| LicheckError::InvalidPublicKey(format!("invalid hex: {}", e)))?;

    let key_array: [u8; 32] = bytes
        .try_into()
        .map_err(|_| LicheckError::InvalidPublicKey("key must be 32 bytes".to_string()))?;

    let verifying_key = VerifyingKey::from_bytes(&key_array)
        .map_err(|e| LicheckError::InvalidPublicKey(format!("invalid Ed25519 point: {}", e)))?;

    // Best-effort insert. If locking fails, still return the decoded key.
    if let Ok(mut guard) = cache.write() {
        guard.insert(hex_key.to_string(), verifying_key);
    }

    Ok(verifying_key)
}

/// Decode a base64-encoded detached Ed25519 signature (64 bytes).
pub fn decode_signature_b64(signature_b64: &str) -> Result<Signature, LicheckError> {
    let bytes = STANDARD
        .decode(signature_b64)
        .map_err(|e| LicheckError::InvalidSignatureEncoding(format!("invalid base64: {}", e)))?;

    let sig_array: [u8; 64] = bytes.try_into().map_err(|_| {
        LicheckError::InvalidSignatureEncoding("signature must be 64 bytes".to_string())
    })?;

    Ok(Signature::from_bytes(&sig_array))
}

/// Hex-encoded SHA-256 digest of a byte slice.
///
/// Used to fingerprint license payloads for log correlation without
/// exposing the payload itself.
pub fn sha256_hex(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}
