//! SHA-1 message padding
//!
//! Every message is consumed in 64-byte blocks. The last bytes of the
//! message are followed by a single `0x80` byte, zero bytes, and the
//! message length in bits as a big-endian integer in the last 8 bytes of
//! the final block. Because the length is limited to 32 bits, bytes
//! 56..60 of the final block are always zero.
//!
//! When the tail of the message is 56 to 63 bytes long the length field no
//! longer fits, so one extra block made only of padding is emitted.

use std::iter::FusedIterator;

use super::core::check_length;
use super::{BLOCK_LEN, Sha1Error};

/// Offset of the length field inside the final block.
const LENGTH_OFFSET: usize = 56;

/// Outcome of filling one block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Padding {
    /// At least one more block follows this one.
    MoreData,
    /// This block carries the length field and ends the message.
    Final,
}

/// Fills `block` with the next block of the message.
///
/// # Parameters
/// - `tail`: the message starting at the first byte not yet consumed
/// - `total_len`: length of the whole message in bytes
/// - `remaining`: number of message bytes not yet consumed, updated in place
/// - `block`: output block
///
/// # Returns
/// [`Padding::Final`] when `block` is the last block of the message.
///
/// # Panics
/// Panics if `tail` is shorter than `*remaining`.
///
/// # Notes
/// - A tail of 64 bytes or more is copied verbatim.
/// - A tail of 56 to 63 bytes gets the `0x80` terminator and zero fill; the
///   length goes into a following block.
/// - A shorter tail gets the terminator, zero fill and the length field.
///   The terminator is skipped when the tail is empty, unless the message
///   length is a multiple of 64 (including the empty message): in that
///   case no earlier block has appended it.
pub fn pad_block(
    tail: &[u8],
    total_len: u32,
    remaining: &mut u32,
    block: &mut [u8; BLOCK_LEN],
) -> Padding {
    let rem = *remaining as usize;

    if rem >= BLOCK_LEN {
        block.copy_from_slice(&tail[..BLOCK_LEN]);
        *remaining -= BLOCK_LEN as u32;

        return Padding::MoreData;
    }

    block[..rem].copy_from_slice(&tail[..rem]);

    if rem >= LENGTH_OFFSET {
        block[rem] = 0x80;
        block[rem + 1..].fill(0);
        *remaining = 0;

        return Padding::MoreData;
    }

    let mut i = rem;
    if rem != 0 || total_len % BLOCK_LEN as u32 == 0 {
        block[i] = 0x80;
        i += 1;
    }

    // Upper half of the 64-bit length field is always zero
    block[i..LENGTH_OFFSET + 4].fill(0);

    let bit_len = total_len << 3;
    block[LENGTH_OFFSET + 4..].copy_from_slice(&bit_len.to_be_bytes());

    Padding::Final
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Running,
    Done,
}

/// Iterator over the finalized blocks of a message.
///
/// Yields every 64-byte block the compression function consumes, in
/// order, with padding and the length field already applied. The iterator
/// ends right after the block for which [`pad_block`] reports
/// [`Padding::Final`].
#[derive(Debug, Clone)]
pub struct PaddedBlocks<'a> {
    message: &'a [u8],
    total_len: u32,
    remaining: u32,
    state: State,
}

impl<'a> PaddedBlocks<'a> {
    /// Prepares the blocks of `message`.
    ///
    /// # Errors
    /// Returns [`Sha1Error::LengthExceeded`] if the message is longer than
    /// [`super::MAX_MESSAGE_LEN`] bytes.
    pub fn new(message: &'a [u8]) -> Result<Self, Sha1Error> {
        let total_len = check_length(message.len())?;

        Ok(Self {
            message,
            total_len,
            remaining: total_len,
            state: State::Running,
        })
    }

    fn blocks_left(&self) -> usize {
        match self.state {
            State::Done => 0,
            State::Running => (self.remaining as usize + 8) / BLOCK_LEN + 1,
        }
    }
}

impl Iterator for PaddedBlocks<'_> {
    type Item = [u8; BLOCK_LEN];

    fn next(&mut self) -> Option<Self::Item> {
        if self.state == State::Done {
            return None;
        }

        let offset = (self.total_len - self.remaining) as usize;
        let mut block = [0u8; BLOCK_LEN];

        let padding = pad_block(
            &self.message[offset..],
            self.total_len,
            &mut self.remaining,
            &mut block,
        );

        if padding == Padding::Final {
            self.state = State::Done;
        }

        Some(block)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.blocks_left();
        (n, Some(n))
    }
}

impl ExactSizeIterator for PaddedBlocks<'_> {}

impl FusedIterator for PaddedBlocks<'_> {}
