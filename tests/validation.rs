//! End-to-end validation chains over real Ed25519-signed licenses.
//!
//! These tests exercise the public API only: a vendor keypair signs a
//! license payload, and chains of built-in checks run against the system
//! clock. Expiration dates are far in the past or future so the tests stay
//! deterministic without clock injection.

use base64::{engine::general_purpose::STANDARD, Engine};
use chrono::{DateTime, TimeZone, Utc};
use ed25519_dalek::{Signer, SigningKey, VerifyingKey};
use licheck::{validate, BuildRecord, FailureKind, SignedLicense, ValidationFailure};

// Test keypair (RFC 8032 test vector — DO NOT USE IN PRODUCTION)
const TEST_PRIVATE_KEY_HEX: &str =
    "9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60";
const TEST_PUBLIC_KEY_HEX: &str =
    "d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a";

fn vendor_signing_key() -> SigningKey {
    let bytes = hex::decode(TEST_PRIVATE_KEY_HEX).unwrap();
    SigningKey::from_bytes(&bytes.try_into().unwrap())
}

fn vendor_public_key() -> VerifyingKey {
    licheck::crypto::decode_public_key(TEST_PUBLIC_KEY_HEX).unwrap()
}

fn signed_license(expiration: DateTime<Utc>, payload: &[u8]) -> SignedLicense {
    let sig_b64 = STANDARD.encode(vendor_signing_key().sign(payload).to_bytes());
    SignedLicense::new(expiration, payload.to_vec(), &sig_b64).unwrap()
}

fn far_future() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2999, 1, 1, 0, 0, 0).unwrap()
}

fn far_past() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap()
}

#[test]
fn genuine_unexpired_license_passes_full_chain() {
    let license = signed_license(far_future(), b"product=widget;tier=pro");
    let build = BuildRecord::from_rfc3339("widget-core", &["2024-03-01T00:00:00Z"]).unwrap();

    let failures = validate(license)
        .expiration_date()
        .product_build_date(&[&build])
        .signature(&vendor_public_key())
        .assert_valid_license();

    assert!(failures.is_empty());
}

#[test]
fn expired_license_with_valid_signature_reports_only_expiry() {
    let license = signed_license(far_past(), b"product=widget;tier=pro");

    let failures = validate(license)
        .expiration_date()
        .signature(&vendor_public_key())
        .assert_valid_license();

    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].kind(), FailureKind::Expired);
}

#[test]
fn single_byte_tamper_flips_signature_check() {
    let payload = b"product=widget;tier=pro".to_vec();
    let sig_b64 = STANDARD.encode(vendor_signing_key().sign(&payload).to_bytes());

    // Untampered copy passes.
    let genuine = SignedLicense::new(far_future(), payload.clone(), &sig_b64).unwrap();
    assert!(validate(genuine)
        .signature(&vendor_public_key())
        .assert_valid_license()
        .is_empty());

    // Flipping any single byte of the signed data fails the check.
    for index in 0..payload.len() {
        let mut tampered = payload.clone();
        tampered[index] ^= 0x01;
        let license = SignedLicense::new(far_future(), tampered, &sig_b64).unwrap();

        let failures = validate(license)
            .signature(&vendor_public_key())
            .assert_valid_license();
        assert_eq!(failures.len(), 1, "byte {} tamper not caught", index);
        assert_eq!(failures[0].kind(), FailureKind::InvalidSignature);
    }
}

#[test]
fn build_unit_newer_than_expiration_is_reported_as_expired() {
    // Unexpired by clock, but one module was built after the cutoff.
    let cutoff = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();
    let license = signed_license(cutoff, b"product=widget");
    let stale = BuildRecord::from_rfc3339("widget-core", &["2024-01-01T00:00:00Z"]).unwrap();
    let fresh = BuildRecord::from_rfc3339("widget-gui", &["2031-06-01T00:00:00Z"]).unwrap();

    let failures = validate(license)
        .expiration_date()
        .product_build_date(&[&stale, &fresh])
        .signature(&vendor_public_key())
        .assert_valid_license();

    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].kind(), FailureKind::Expired);
    assert_eq!(failures[0].message(), "Licensing for this product has expired!");
}

#[test]
fn mixed_chain_reports_all_failures_in_order() {
    // Expired, tampered, and over a custom seat limit: three failures,
    // in registration order.
    let payload = b"product=widget".to_vec();
    let sig_b64 = STANDARD.encode(vendor_signing_key().sign(&payload).to_bytes());
    let mut tampered = payload;
    tampered[0] ^= 0xff;
    let license = SignedLicense::new(far_past(), tampered, &sig_b64).unwrap();

    let failures = validate(license)
        .expiration_date()
        .signature(&vendor_public_key())
        .assert_that(
            |_license| false,
            ValidationFailure::custom("seat limit exceeded", "purchase more seats"),
        )
        .assert_valid_license();

    let kinds: Vec<_> = failures.iter().map(|f| f.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            FailureKind::Expired,
            FailureKind::InvalidSignature,
            FailureKind::Custom
        ]
    );
    assert_eq!(failures[2].message(), "seat limit exceeded");
}

#[test]
fn custom_predicate_reads_the_license() {
    let license = signed_license(far_future(), b"tier=community");

    let failures = validate(license)
        .assert_that(
            |license| license.payload().starts_with(b"tier=pro"),
            ValidationFailure::custom(
                "license tier does not include this product",
                "upgrade to the pro tier",
            ),
        )
        .assert_valid_license();

    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].kind(), FailureKind::Custom);
}

#[test]
fn reasserting_a_chain_is_idempotent() {
    let license = signed_license(far_past(), b"product=widget");
    let chain = validate(license)
        .expiration_date()
        .signature(&vendor_public_key());

    assert_eq!(chain.assert_valid_license(), chain.assert_valid_license());
}

#[test]
fn failures_serialize_for_reporting() {
    let license = signed_license(far_past(), b"product=widget");
    let failures = validate(license).expiration_date().assert_valid_license();

    let json = serde_json::to_value(&failures).unwrap();
    assert_eq!(json[0]["kind"], "expired");
    assert_eq!(json[0]["message"], "Licensing for this product has expired!");
}
