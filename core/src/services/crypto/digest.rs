//! Database hashes

use constant_time_eq::constant_time_eq;
use sha2::{Digest, Sha512};

/// Length of a hex-encoded SHA-512 digest
pub const SHA512_HEX_LENGTH: usize = 128;

/// SHA-512 of the UTF-8 bytes of `input`, lowercase hex
///
/// Unsalted: tokens carry enough entropy that a known hash does not make
/// offline guessing practical.
pub fn sha512_hex(input: &str) -> String {
    let mut hasher = Sha512::new();
    hasher.update(input.as_bytes());
    hex::encode(hasher.finalize())
}

/// Compare two strings without an early exit on the first differing byte
pub fn constant_time_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    constant_time_eq(a.as_bytes(), b.as_bytes())
}
