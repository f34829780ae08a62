//! Minimal cryptographic primitives
//!
//! This crate provides two small, independent building blocks written from
//! the standards, with no runtime dependencies.
//!
//! The focus is on **clarity, predictability, and auditability**, rather
//! than on providing a large or high-level cryptographic API.
//!
//! # Module overview
//!
//! - `hash`
//!   The SHA-1 message digest (FIPS 180-4). Messages are limited to
//!   536 870 911 bytes so that their bit length fits in 32 bits; longer
//!   messages are rejected before any work is done.
//!
//! - `encryption`
//!   The ECB block cipher mode (NIST SP 800-38A) over any 16-byte block
//!   cipher supplied through the `BlockCipher` trait. Buffers must hold a
//!   whole number of blocks; this is checked, not assumed.
//!
//! # Design goals
//!
//! - No heap allocations in core primitives
//! - No global state: every call owns its working buffers, so all
//!   functions can be called concurrently from independent threads
//! - Explicit `Result` errors instead of silent failure
//!
//! SHA-1 is broken for collision resistance and ECB leaks plaintext
//! structure. Both are provided for interoperability with existing formats,
//! not as a recommendation for new designs.

pub mod encryption;
pub mod hash;
