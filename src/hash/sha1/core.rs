//! SHA-1 core hashing functions
//!
//! This module drives the SHA-1 engine: it validates the message length,
//! walks the padded blocks of the message in order and folds each of them
//! into the running hash state.
//!
//! It provides:
//! - the compression function operating on 512-bit blocks
//! - one-shot digest functions returning either the five state words or
//!   the 20-byte big-endian serialization

use crate::hash::sha1::computations::all_rounds;
use crate::hash::sha1::padding::PaddedBlocks;
use crate::hash::sha1::schedule::expand;
use crate::hash::sha1::{BLOCK_LEN, DIGEST_LEN, H160_INIT, MAX_MESSAGE_LEN, Sha1Error};

/// Checks that a message of `len` bytes can be hashed.
///
/// # Returns
/// - The length as `u32` if it is at most [`MAX_MESSAGE_LEN`]
/// - [`Sha1Error::LengthExceeded`] otherwise
pub fn check_length(len: usize) -> Result<u32, Sha1Error> {
    if len > MAX_MESSAGE_LEN {
        return Err(Sha1Error::LengthExceeded { len });
    }

    Ok(len as u32)
}

/// Compresses a single 512-bit message block.
///
/// Expands the block into its message schedule, runs the 80 rounds and
/// adds the result into `state` modulo 2^32.
pub fn compress(block: &[u8; BLOCK_LEN], state: &mut [u32; 5]) {
    let w = expand(block);

    all_rounds(state, &w);
}

/// Computes the SHA-1 digest of `input` as five 32-bit words.
///
/// # Parameters
/// - `input`: message of at most [`MAX_MESSAGE_LEN`] bytes
///
/// # Returns
/// - The final hash state `H0..H4`, in order
/// - [`Sha1Error::LengthExceeded`] if the message is too long; no block is
///   processed in that case
///
/// # Notes
/// - The words are native integers. Use [`digest_to_bytes`] or
///   [`sha1_bytes`] for the standard big-endian byte form.
/// - No heap allocations are performed.
pub fn sha1(input: &[u8]) -> Result<[u32; 5], Sha1Error> {
    let mut state = H160_INIT;

    for block in PaddedBlocks::new(input)? {
        compress(&block, &mut state);
    }

    Ok(state)
}

/// Computes the SHA-1 digest of `input` as 20 big-endian bytes.
pub fn sha1_bytes(input: &[u8]) -> Result<[u8; DIGEST_LEN], Sha1Error> {
    sha1(input).map(|words| digest_to_bytes(&words))
}

/// Serializes the five digest words into big-endian bytes.
pub fn digest_to_bytes(words: &[u32; 5]) -> [u8; DIGEST_LEN] {
    let mut out = [0u8; DIGEST_LEN];

    for (chunk, word) in out.chunks_exact_mut(4).zip(words) {
        chunk.copy_from_slice(&word.to_be_bytes());
    }

    out
}
