//! The license collaborator: what a validation chain needs from a license.
//!
//! The chain never inspects license internals. It needs exactly two
//! capabilities — an expiration timestamp and a signature-verification
//! predicate — so those form the [`License`] trait and chains are generic
//! over it. [`SignedLicense`] is the bundled implementation for licenses
//! carrying a detached Ed25519 signature over an opaque payload.

use crate::crypto::{decode_signature_b64, sha256_hex};
use crate::LicheckError;
use chrono::{DateTime, Utc};
use ed25519_dalek::{Signature, Verifier, VerifyingKey};

/// Capabilities a license must expose to be validated by a chain.
///
/// Implementations must be read-only for the duration of a validation call.
pub trait License {
    /// When this license expires.
    fn expiration(&self) -> DateTime<Utc>;

    /// Verify the license's signature against a public key.
    ///
    /// Returns `false` for any mismatch; the chain turns that into an
    /// `InvalidSignature` failure descriptor.
    fn verify_signature(&self, key: &VerifyingKey) -> bool;
}

/// A parsed license with a detached Ed25519 signature over its payload.
///
/// The payload is opaque to validation: whatever serialized license body
/// the vendor signed. Parsing that body into expiration and payload bytes
/// is the caller's concern.
#[derive(Debug, Clone)]
pub struct SignedLicense {
    expiration: DateTime<Utc>,
    payload: Vec<u8>,
    signature: Signature,
}

impl SignedLicense {
    /// Build a license from its expiration, signed payload bytes, and a
    /// base64-encoded detached signature.
    ///
    /// # Errors
    /// Returns [`LicheckError::InvalidSignatureEncoding`] if the signature
    /// is not valid base64 or not 64 bytes. A syntactically valid but
    /// *wrong* signature is not a construction error; it surfaces later as
    /// a failed signature check.
    pub fn new(
        expiration: DateTime<Utc>,
        payload: Vec<u8>,
        signature_b64: &str,
    ) -> Result<Self, LicheckError> {
        let signature = decode_signature_b64(signature_b64)?;
        Ok(Self::from_parts(expiration, payload, signature))
    }

    /// Build a license from an already-decoded signature.
    pub fn from_parts(expiration: DateTime<Utc>, payload: Vec<u8>, signature: Signature) -> Self {
        Self {
            expiration,
            payload,
            signature,
        }
    }

    /// The signed payload bytes.
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Hex SHA-256 of the payload, for log correlation.
    ///
    /// Safe to emit in logs and diagnostics where the payload itself
    /// (which may embed customer data) is not.
    pub fn fingerprint(&self) -> String {
        sha256_hex(&self.payload)
    }
}

impl License for SignedLicense {
    fn expiration(&self) -> DateTime<Utc> {
        self.expiration
    }

    fn verify_signature(&self, key: &VerifyingKey) -> bool {
        key.verify(&self.payload, &self.signature).is_ok()
    }
}
