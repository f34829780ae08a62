use super::BLOCK_LEN;

/// Expands one block into the 80-word SHA-1 message schedule.
///
/// Words 0..16 are the block read as big-endian `u32`s. Each later word is
/// `ROTL1(W[t-3] ^ W[t-8] ^ W[t-14] ^ W[t-16])`.
pub fn expand(block: &[u8; BLOCK_LEN]) -> [u32; 80] {
    let mut w = [0u32; 80];

    for (slot, chunk) in w.iter_mut().zip(block.chunks_exact(4)) {
        *slot = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }

    for t in 16..80 {
        w[t] = (w[t - 3] ^ w[t - 8] ^ w[t - 14] ^ w[t - 16]).rotate_left(1);
    }

    w
}
