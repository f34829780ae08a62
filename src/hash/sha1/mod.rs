//! SHA-1 message digest (FIPS 180-4).
//!
//! The engine is split the same way the standard describes it:
//!
//! - `padding`: turns the message into finalized 64-byte blocks
//! - `schedule`: expands one block into the 80-word message schedule
//! - `computations`: round functions and the 80-round compression
//! - `core`: the driver loop and the public digest functions
//!
//! The message length is limited to [`MAX_MESSAGE_LEN`] bytes so that the
//! bit length always fits in the low 32 bits of the length field.

use std::fmt::{Display, Formatter, Result};

pub mod computations;
pub mod core;
pub mod padding;
pub mod schedule;

/// Size of one message block in bytes.
pub const BLOCK_LEN: usize = 64;

/// Size of the digest in bytes.
pub const DIGEST_LEN: usize = 20;

/// Largest accepted message, in bytes (`0xFFFF_FFFF / 8`).
pub const MAX_MESSAGE_LEN: usize = 536_870_911;

/// Initial hash value `H(0)`.
pub const H160_INIT: [u32; 5] = [0x67452301, 0xEFCDAB89, 0x98BADCFE, 0x10325476, 0xC3D2E1F0];

/// Round constants, one per 20-round segment.
pub const K160: [u32; 4] = [0x5A827999, 0x6ED9EBA1, 0x8F1BBCDC, 0xCA62C1D6];

/// Errors returned by the SHA-1 digest functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sha1Error {
    /// The message is longer than [`MAX_MESSAGE_LEN`] bytes.
    LengthExceeded {
        /// Length of the rejected message in bytes.
        len: usize,
    },
}

impl Display for Sha1Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Sha1Error::LengthExceeded { len } => write!(
                f,
                "message of {} bytes exceeds the {}-byte SHA-1 limit",
                len, MAX_MESSAGE_LEN
            ),
        }
    }
}

impl std::error::Error for Sha1Error {}
