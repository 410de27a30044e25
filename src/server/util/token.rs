//! Random tokens and their digests.

use std::fmt::Write;

use rand::{distr::Alphanumeric, Rng};
use sha2::{Digest, Sha256};

/// Length of password reset tokens sent by email.
pub const RESET_TOKEN_LENGTH: usize = 48;

/// Generates a random alphanumeric token of `length` characters.
pub fn generate_token(length: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

/// Lowercase hex SHA-256 digest of `value`.
pub fn sha256_hex(value: &str) -> String {
    let digest = Sha256::digest(value.as_bytes());

    let mut hex = String::with_capacity(digest.len() * 2);
    for byte in digest {
        // Writing to a String cannot fail.
        let _ = write!(hex, "{:02x}", byte);
    }
    hex
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_alphanumeric_tokens() {
        let token = generate_token(RESET_TOKEN_LENGTH);

        assert_eq!(token.len(), 48);
        assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_ne!(token, generate_token(RESET_TOKEN_LENGTH));
    }

    #[test]
    fn hashes_known_value() {
        assert_eq!(
            sha256_hex("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    /// Tests that bytes below 0x10 keep their leading zero.
    ///
    /// Expected: 64 lowercase hex characters for the empty input's digest
    #[test]
    fn pads_every_byte_to_two_digits() {
        let hex = sha256_hex("");

        assert_eq!(hex.len(), 64);
        assert_eq!(
            hex,
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }
}
