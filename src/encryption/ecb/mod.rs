//! ECB mode over a 16-byte block cipher.
//!
//! The mode is split into two layers:
//!
//! - this module: the [`BlockCipher`] contract and the error type
//! - `core`: the block loops for encryption and decryption
//!
//! Buffers must hold a whole number of blocks. Lengths are checked before
//! any block is touched, so a rejected call leaves the output unchanged.

use std::fmt::{Display, Formatter, Result};

mod core;

pub use self::core::{decrypt, decrypt_in_place, encrypt, encrypt_in_place};

/// Block size in bytes.
pub const BLOCK_SIZE: usize = 16;

/// A keyed cipher transforming exactly one 16-byte block in place.
///
/// The key (`4 × Nk` bytes for AES) is held by the implementor, so one
/// value encrypts every block of a buffer under the same key.
pub trait BlockCipher {
    /// Encrypts one block in place.
    fn encrypt_block(&self, block: &mut [u8; BLOCK_SIZE]);

    /// Decrypts one block in place.
    fn decrypt_block(&self, block: &mut [u8; BLOCK_SIZE]);
}

impl<C: BlockCipher + ?Sized> BlockCipher for &C {
    fn encrypt_block(&self, block: &mut [u8; BLOCK_SIZE]) {
        (**self).encrypt_block(block)
    }

    fn decrypt_block(&self, block: &mut [u8; BLOCK_SIZE]) {
        (**self).decrypt_block(block)
    }
}

/// Errors that can occur during ECB processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EcbError {
    /// The input length is not a multiple of [`BLOCK_SIZE`].
    UnalignedLength {
        /// Length of the rejected input in bytes.
        len: usize,
    },
    /// The input and output buffers have different lengths.
    LengthMismatch {
        /// Input length in bytes.
        input: usize,
        /// Output length in bytes.
        output: usize,
    },
}

impl Display for EcbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            EcbError::UnalignedLength { len } => write!(
                f,
                "length {} is not a multiple of the {}-byte block size",
                len, BLOCK_SIZE
            ),
            EcbError::LengthMismatch { input, output } => write!(
                f,
                "output buffer of {} bytes does not match input of {} bytes",
                output, input
            ),
        }
    }
}

impl std::error::Error for EcbError {}
