//! Licheck error types.

use thiserror::Error;

/// Errors that can occur while constructing validation inputs.
///
/// These cover construction-time misuse only: malformed keys, signatures,
/// or timestamps handed to constructors. A license *failing a check* is not
/// an error — failed checks are reported as [`crate::ValidationFailure`]
/// values by the chain's terminal assertion.
#[derive(Debug, Error)]
pub enum LicheckError {
    /// Public key is not valid hex, the wrong length, or not a valid
    /// Ed25519 point.
    #[error("Invalid public key: {0}")]
    InvalidPublicKey(String),

    /// Signature is not valid base64 or not 64 bytes.
    #[error("Invalid signature encoding: {0}")]
    InvalidSignatureEncoding(String),

    /// Timestamp string could not be parsed as RFC 3339.
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),
}
