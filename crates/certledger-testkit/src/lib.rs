//! # Certificate Ledger Testkit
//!
//! Testing utilities for the certificate ledger.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Known certificates with their expected canonical
//!   form and fingerprint
//! - **Generators**: Proptest strategies for certificates and harmless
//!   disguises (re-casing, padding)
//! - **Fixtures**: A ledger with deterministic ids and time
//!
//! ## Golden Vectors
//!
//! ```rust
//! use certledger_testkit::vectors::verify_all_vectors;
//!
//! assert!(verify_all_vectors().is_empty());
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use certledger_testkit::generators::{certificate, Disguise};
//!
//! proptest! {
//!     #[test]
//!     fn disguise_is_harmless(cert in certificate(), d: Disguise) {
//!         let f = certledger_core::fingerprint;
//!         prop_assert_eq!(f(&cert), f(&d.apply(&cert)));
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use certledger_testkit::fixtures::{bob_lee, TestFixture};
//!
//! let fixture = TestFixture::new();
//! let document = bob_lee();
//! // fixture.ledger.issue(&document).await
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{bob_lee, certificate, ScriptedIds, TestFixture, FIXTURE_TIME};
pub use generators::Disguise;
pub use vectors::{all_vectors, verify_all_vectors, GoldenVector};
