//! # Licheck
//!
//! **Composable offline license validation chains for Rust.**
//!
//! Licheck validates an already-parsed license object through an ordered
//! chain of independent checks — expiration, build-date consistency,
//! Ed25519 signature, and arbitrary custom predicates — and reports every
//! violation as structured data instead of aborting on the first one.
//!
//! ## Features
//!
//! - **Accumulating failures** — the terminal assertion returns *all*
//!   failed checks, in registration order, never a thrown error
//! - **Execution-time clocks** — expiration evaluates against the wall
//!   clock at assertion, not at chain construction
//! - **Build-date consistency** — detects licenses stale relative to when
//!   the protected software was built
//! - **Ed25519 signature checks** — detached signatures over an opaque
//!   signed payload
//! - **Open for extension** — new check kinds plug in through
//!   [`ValidationChain::append_validator`] without modifying the chain
//!
//! ## Quickstart
//!
//! ```no_run
//! use chrono::{TimeZone, Utc};
//! use licheck::{crypto, validate, SignedLicense};
//!
//! fn main() -> Result<(), licheck::LicheckError> {
//!     let public_key = crypto::decode_public_key("your-vendor-ed25519-public-key-hex")?;
//!     let license = SignedLicense::new(
//!         Utc.with_ymd_and_hms(2027, 1, 1, 0, 0, 0).unwrap(),
//!         std::fs::read("license.bin").expect("license payload"),
//!         "base64-signature-from-vendor",
//!     )?;
//!
//!     let failures = validate(license)
//!         .expiration_date()
//!         .signature(&public_key)
//!         .assert_valid_license();
//!
//!     for failure in &failures {
//!         eprintln!("{}: {}", failure.message(), failure.how_to_resolve());
//!     }
//!     if failures.is_empty() {
//!         println!("License valid!");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## What this is not
//!
//! Licheck is not a PKI and not a licensing server client. It performs
//! local, offline validation of a license you have already parsed; how the
//! license was obtained, serialized, or keyed is your application's
//! concern. Rejecting, warning, or degrading on a non-empty failure list
//! is deliberately left to the caller — the chain itself is policy-free.

#![deny(warnings)]
#![deny(missing_docs)]
#![doc(html_root_url = "https://docs.rs/licheck/0.1.0")]

// Core modules
pub mod clock;
pub mod errors;
pub mod failure;

// Crypto layer
pub mod crypto;

// License collaborators
pub mod buildinfo;
pub mod license;

// Chain (main public API)
pub mod chain;

// Re-exports for public API
pub use buildinfo::{BuildRecord, BuildUnit};
pub use chain::{validate, ValidationChain, Validator};
pub use clock::{Clock, SystemClock};
pub use errors::LicheckError;
pub use failure::{FailureKind, ValidationFailure};
pub use license::{License, SignedLicense};

#[cfg(any(test, feature = "test-seams"))]
pub use clock::FixedClock;
