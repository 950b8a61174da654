//! Cryptographic primitives for token issuance
//!
//! - Secure random pools from the operating system CSPRNG
//! - Base-62 alphabet encoding of random bytes
//! - SHA-512 digests for database storage
//! - Constant-time comparison of digests

mod digest;
mod random;

pub use digest::{constant_time_compare, sha512_hex, SHA512_HEX_LENGTH};
pub use random::{
    encode_alphanumeric, generate_alphanumeric_with, RANDOM_POOL_BYTES, TOKEN_ALPHABET,
};
