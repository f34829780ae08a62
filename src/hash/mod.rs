//! Hash algorithms exposed by the crate.
//!
//! Currently includes SHA-1 with a pure-Rust implementation.

pub mod sha1;

/// Re-export of the SHA-1 convenience functions.
pub use self::sha1::core::{sha1, sha1_bytes};

pub use self::sha1::Sha1Error;
