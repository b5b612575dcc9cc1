//! Validation failure descriptors.
//!
//! A failed check produces a [`ValidationFailure`] value instead of an error:
//! the chain's propagation policy is "accumulate and return", never "abort on
//! first failure". Each descriptor carries a human-readable message plus
//! remediation guidance suitable for showing to an end user.

use serde::Serialize;

/// Discriminant identifying which built-in check produced a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// License expiration cutoff exceeded, by wall clock or by a product
    /// build timestamp.
    Expired,

    /// Cryptographic signature mismatch (corruption or tampering).
    InvalidSignature,

    /// Caller-defined failure from a custom assertion.
    Custom,
}

/// One failed check: kind, message, and how to resolve it.
///
/// Pure data, immutable once constructed. Two failures compare equal when
/// all three fields match, which makes repeated assertions comparable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationFailure {
    kind: FailureKind,
    message: String,
    how_to_resolve: String,
}

impl ValidationFailure {
    /// Failure reported when a license is past its expiration cutoff.
    ///
    /// The build-date consistency check reports this same descriptor: a
    /// license whose protected software was built after the expiration
    /// cutoff is treated as expired, not as a distinct failure kind.
    pub fn expired() -> Self {
        Self {
            kind: FailureKind::Expired,
            message: "Licensing for this product has expired!".to_string(),
            how_to_resolve: "Contact the vendor to renew your license.".to_string(),
        }
    }

    /// Failure reported when signature verification fails.
    pub fn invalid_signature() -> Self {
        Self {
            kind: FailureKind::InvalidSignature,
            message: "License signature validation error!".to_string(),
            how_to_resolve:
                "The license data may be corrupted or tampered with. Request a fresh copy from the vendor."
                    .to_string(),
        }
    }

    /// Caller-defined failure for custom assertions.
    pub fn custom(message: impl Into<String>, how_to_resolve: impl Into<String>) -> Self {
        Self {
            kind: FailureKind::Custom,
            message: message.into(),
            how_to_resolve: how_to_resolve.into(),
        }
    }

    /// Which built-in check kind this failure belongs to.
    pub fn kind(&self) -> FailureKind {
        self.kind
    }

    /// Human-readable description of what failed.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Human-readable remediation guidance.
    pub fn how_to_resolve(&self) -> &str {
        &self.how_to_resolve
    }
}
