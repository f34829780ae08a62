use super::{BLOCK_SIZE, BlockCipher, EcbError};

fn check_lengths(input: usize, output: usize) -> Result<(), EcbError> {
    if input % BLOCK_SIZE != 0 {
        return Err(EcbError::UnalignedLength { len: input });
    }

    if input != output {
        return Err(EcbError::LengthMismatch { input, output });
    }

    Ok(())
}

fn for_each_block(buf: &mut [u8], mut f: impl FnMut(&mut [u8; BLOCK_SIZE])) {
    for chunk in buf.chunks_exact_mut(BLOCK_SIZE) {
        if let Ok(block) = <&mut [u8; BLOCK_SIZE]>::try_from(chunk) {
            f(block);
        }
    }
}

/// Encrypts `input` block by block into `output`.
///
/// Each 16-byte block is copied to `output` and encrypted there in place,
/// in order. The number of blocks is `input.len() / 16`.
///
/// # Errors
///
/// - `UnalignedLength` if `input.len()` is not a multiple of 16
/// - `LengthMismatch` if `output.len() != input.len()`
pub fn encrypt<C: BlockCipher>(
    cipher: &C,
    input: &[u8],
    output: &mut [u8],
) -> Result<(), EcbError> {
    check_lengths(input.len(), output.len())?;

    output.copy_from_slice(input);
    for_each_block(output, |block| cipher.encrypt_block(block));

    Ok(())
}

/// Decrypts `input` block by block into `output`.
///
/// Mirror of [`encrypt`], with the same length rules.
pub fn decrypt<C: BlockCipher>(
    cipher: &C,
    input: &[u8],
    output: &mut [u8],
) -> Result<(), EcbError> {
    check_lengths(input.len(), output.len())?;

    output.copy_from_slice(input);
    for_each_block(output, |block| cipher.decrypt_block(block));

    Ok(())
}

/// Encrypts `buf` in place.
pub fn encrypt_in_place<C: BlockCipher>(cipher: &C, buf: &mut [u8]) -> Result<(), EcbError> {
    check_lengths(buf.len(), buf.len())?;

    for_each_block(buf, |block| cipher.encrypt_block(block));

    Ok(())
}

/// Decrypts `buf` in place.
pub fn decrypt_in_place<C: BlockCipher>(cipher: &C, buf: &mut [u8]) -> Result<(), EcbError> {
    check_lengths(buf.len(), buf.len())?;

    for_each_block(buf, |block| cipher.decrypt_block(block));

    Ok(())
}
