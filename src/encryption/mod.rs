//! Block cipher modes of operation.
//!
//! This module wraps a single-block cipher into a mode that processes
//! buffers made of several blocks.
//!
//! Only ECB (Electronic Codebook, NIST SP 800-38A) is provided. Each block
//! is transformed independently with the same key, so equal plaintext
//! blocks produce equal ciphertext blocks. ECB performs no padding and
//! offers no integrity protection.
//!
//! The block cipher itself is supplied by the caller through the
//! [`ecb::BlockCipher`] trait.

pub mod ecb;
