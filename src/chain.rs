//! The validation chain: fluent composition of license checks.
//!
//! A chain wraps one license and accumulates an ordered list of validators.
//! The terminal [`ValidationChain::assert_valid_license`] runs every
//! predicate and returns the failure descriptors of the ones that did not
//! hold, in append order. Failed checks are data, not errors: the chain
//! never aborts early and never panics on an invalid license.
//!
//! Built-in checks cover expiration, build-date consistency, and signature
//! verification. New check kinds plug in through
//! [`ValidationChain::append_validator`] without touching the chain itself.

use crate::buildinfo::BuildUnit;
use crate::clock::{Clock, SystemClock};
use crate::failure::ValidationFailure;
use crate::license::License;
use ed25519_dalek::VerifyingKey;
use std::sync::Arc;
use tracing::{debug, warn};

/// One unit of validation work: a predicate over the license and the
/// failure descriptor to report when the predicate does not hold.
///
/// Both halves are constructor arguments, so a half-built validator is
/// unrepresentable.
pub struct Validator<L> {
    predicate: Box<dyn Fn(&L) -> bool + Send + Sync>,
    failure_result: ValidationFailure,
}

impl<L> Validator<L> {
    /// Pair a predicate with the failure to report when it returns false.
    pub fn new(
        predicate: impl Fn(&L) -> bool + Send + Sync + 'static,
        failure_result: ValidationFailure,
    ) -> Self {
        Self {
            predicate: Box::new(predicate),
            failure_result,
        }
    }

    /// The failure reported when this validator's predicate does not hold.
    pub fn failure_result(&self) -> &ValidationFailure {
        &self.failure_result
    }

    fn holds_for(&self, license: &L) -> bool {
        (self.predicate)(license)
    }
}

/// An ordered chain of validators against one license.
///
/// Built fluently, executed by [`Self::assert_valid_license`]. Each chain is
/// independent: concurrent validations never share state, and the license is
/// only read. Re-asserting the same chain re-runs every predicate, so
/// clock-dependent checks evaluate against the time of assertion, not the
/// time the check was appended.
pub struct ValidationChain<L> {
    license: L,
    clock: Arc<dyn Clock>,
    validators: Vec<Validator<L>>,
}

/// Start a validation chain for a license.
///
/// Entry point of the crate:
///
/// ```
/// use licheck::{validate, FailureKind, License};
/// use chrono::{DateTime, TimeZone, Utc};
/// use ed25519_dalek::VerifyingKey;
///
/// struct Expired2020;
///
/// impl License for Expired2020 {
///     fn expiration(&self) -> DateTime<Utc> {
///         Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap()
///     }
///     fn verify_signature(&self, _key: &VerifyingKey) -> bool {
///         true
///     }
/// }
///
/// let failures = validate(Expired2020).expiration_date().assert_valid_license();
/// assert_eq!(failures.len(), 1);
/// assert_eq!(failures[0].kind(), FailureKind::Expired);
/// ```
pub fn validate<L: License>(license: L) -> ValidationChain<L> {
    ValidationChain::new(license)
}

impl<L: License> ValidationChain<L> {
    /// Start an empty chain for a license, using the system clock for
    /// time-dependent checks.
    pub fn new(license: L) -> Self {
        Self::build(license, Arc::new(SystemClock))
    }

    /// Start a chain with an injected clock (for testing).
    #[cfg(any(test, feature = "test-seams"))]
    pub fn with_clock(license: L, clock: Arc<dyn Clock>) -> Self {
        Self::build(license, clock)
    }

    fn build(license: L, clock: Arc<dyn Clock>) -> Self {
        Self {
            license,
            clock,
            validators: Vec::new(),
        }
    }

    /// Append a validator to the chain.
    ///
    /// This is the extension point every check goes through, built-in or
    /// not. A new check kind is a function that constructs a [`Validator`]
    /// and calls this; the chain itself never changes.
    pub fn append_validator(mut self, validator: Validator<L>) -> Self {
        self.validators.push(validator);
        self
    }

    /// Check that the license has not expired.
    ///
    /// The clock is read when the chain is asserted, not when this check is
    /// appended: a chain built long before execution evaluates against the
    /// wall clock at the moment of assertion.
    pub fn expiration_date(self) -> Self {
        let clock = Arc::clone(&self.clock);
        self.append_validator(Validator::new(
            move |license: &L| license.expiration() > clock.now_utc(),
            ValidationFailure::expired(),
        ))
    }

    /// Check that every declared build timestamp of every unit is strictly
    /// earlier than the license expiration.
    ///
    /// Catches licenses that are unexpired by clock but whose protected
    /// software was built after the expiration cutoff. Units without
    /// timestamps pass vacuously. Reports the same `Expired` descriptor as
    /// [`Self::expiration_date`].
    pub fn product_build_date(self, units: &[&dyn BuildUnit]) -> Self {
        let stamps: Vec<_> = units
            .iter()
            .flat_map(|unit| unit.build_timestamps())
            .collect();
        self.append_validator(Validator::new(
            move |license: &L| stamps.iter().all(|stamp| *stamp < license.expiration()),
            ValidationFailure::expired(),
        ))
    }

    /// Check the license signature against a public key.
    pub fn signature(self, key: &VerifyingKey) -> Self {
        let key = *key;
        self.append_validator(Validator::new(
            move |license: &L| license.verify_signature(&key),
            ValidationFailure::invalid_signature(),
        ))
    }

    /// Check a caller-supplied predicate, reporting the supplied failure
    /// when it does not hold.
    pub fn assert_that(
        self,
        predicate: impl Fn(&L) -> bool + Send + Sync + 'static,
        failure: ValidationFailure,
    ) -> Self {
        self.append_validator(Validator::new(predicate, failure))
    }

    /// Run every validator and return the failures, in append order.
    ///
    /// An empty result is the sole success signal. A non-empty result is
    /// the caller's policy decision to act on; the chain itself neither
    /// rejects nor warns. No memoization: asserting again re-runs every
    /// predicate against current external state.
    pub fn assert_valid_license(&self) -> Vec<ValidationFailure> {
        debug!(checks = self.validators.len(), "running validation chain");

        let mut failures = Vec::new();
        for validator in &self.validators {
            if validator.holds_for(&self.license) {
                continue;
            }
            let failure = validator.failure_result().clone();
            warn!(
                kind = ?failure.kind(),
                message = %failure.message(),
                "license check failed"
            );
            failures.push(failure);
        }
        failures
    }

    /// Number of checks registered on this chain.
    pub fn len(&self) -> usize {
        self.validators.len()
    }

    /// Whether the chain has no checks registered.
    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }

    /// The license under validation.
    pub fn license(&self) -> &L {
        &self.license
    }
}
