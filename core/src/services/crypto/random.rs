//! Secure random token material

use rand::{CryptoRng, RngCore};

use crate::errors::{DomainResult, TokenError};

/// Bytes drawn from the random source per pool
pub const RANDOM_POOL_BYTES: usize = 128;

/// Digits, then upper case, then lower case letters
pub const TOKEN_ALPHABET: &[u8; 62] =
    b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

// Largest multiple of 62 that fits in a byte; bytes at or above it are
// discarded so every alphabet character is equally likely.
const REJECTION_THRESHOLD: u8 = 248;

/// Append base-62 characters derived from `pool` to `out` until it holds
/// `wanted` characters or the pool is exhausted
pub fn encode_alphanumeric(pool: &[u8], out: &mut String, wanted: usize) {
    for &byte in pool {
        if out.len() >= wanted {
            break;
        }
        if byte < REJECTION_THRESHOLD {
            let index = (byte % TOKEN_ALPHABET.len() as u8) as usize;
            out.push(TOKEN_ALPHABET[index] as char);
        }
    }
}

/// Generate a random base-62 string of exactly `length` characters
///
/// A failing random source is reported as
/// [`TokenError::TokenGenerationFailed`]; there is no fallback. Draws
/// [`RANDOM_POOL_BYTES`]-sized pools until enough characters survive
/// rejection. In practice one pool covers tokens of up to ~120 characters.
pub fn generate_alphanumeric_with<R>(rng: &mut R, length: usize) -> DomainResult<String>
where
    R: RngCore + CryptoRng + ?Sized,
{
    let mut token = String::with_capacity(length);
    let mut pool = [0u8; RANDOM_POOL_BYTES];

    while token.len() < length {
        fill_from(rng, &mut pool)?;
        encode_alphanumeric(&pool, &mut token, length);
    }

    Ok(token)
}

fn fill_from<R>(rng: &mut R, buf: &mut [u8]) -> DomainResult<()>
where
    R: RngCore + ?Sized,
{
    rng.try_fill_bytes(buf).map_err(|e| {
        tracing::error!(
            error = %e,
            event = "random_source_failure",
            "Secure random source failed"
        );
        TokenError::TokenGenerationFailed {
            reason: e.to_string(),
        }
        .into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::DomainError;
    use rand::rngs::OsRng;
    use std::collections::HashSet;

    /// Random source that always fails
    struct BrokenRng;

    impl RngCore for BrokenRng {
        fn next_u32(&mut self) -> u32 {
            unreachable!("only try_fill_bytes is used")
        }

        fn next_u64(&mut self) -> u64 {
            unreachable!("only try_fill_bytes is used")
        }

        fn fill_bytes(&mut self, _dest: &mut [u8]) {
            unreachable!("only try_fill_bytes is used")
        }

        fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), rand::Error> {
            Err(rand::Error::new("entropy source unavailable"))
        }
    }

    impl CryptoRng for BrokenRng {}

    #[test]
    fn test_alphabet_is_base62() {
        let unique: HashSet<u8> = TOKEN_ALPHABET.iter().copied().collect();
        assert_eq!(unique.len(), 62);
        assert!(TOKEN_ALPHABET.iter().all(|b| b.is_ascii_alphanumeric()));
        assert_eq!(REJECTION_THRESHOLD as usize, 62 * 4);
    }

    #[test]
    fn test_encode_maps_bytes_onto_alphabet() {
        let mut out = String::new();
        encode_alphanumeric(&[0, 9, 10, 35, 36, 61, 62, 247], &mut out, 16);
        assert_eq!(out, "09AZaz0z");
    }

    #[test]
    fn test_encode_rejects_high_bytes() {
        let mut out = String::new();
        encode_alphanumeric(&[248, 255, 1, 250, 2], &mut out, 16);
        assert_eq!(out, "12");
    }

    #[test]
    fn test_encode_stops_at_wanted_length() {
        let mut out = String::from("ab");
        encode_alphanumeric(&[1, 2, 3, 4], &mut out, 4);
        assert_eq!(out, "ab12");
    }

    #[test]
    fn test_generate_exact_lengths() {
        for length in [1, 2, 24, 32, 64, 128, 300, 512] {
            let token = generate_alphanumeric_with(&mut OsRng, length).unwrap();
            assert_eq!(token.len(), length);
            assert!(token.bytes().all(|b| b.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn test_generate_zero_length_is_empty() {
        assert_eq!(generate_alphanumeric_with(&mut OsRng, 0).unwrap(), "");
    }

    #[test]
    fn test_generate_propagates_rng_failure() {
        let err = generate_alphanumeric_with(&mut BrokenRng, 24).unwrap_err();
        match err {
            DomainError::Token(TokenError::TokenGenerationFailed { reason }) => {
                assert!(reason.contains("entropy source unavailable"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_generate_draws_fresh_pools() {
        let a = generate_alphanumeric_with(&mut OsRng, 64).unwrap();
        let b = generate_alphanumeric_with(&mut OsRng, 64).unwrap();
        assert_ne!(a, b);
    }
}
