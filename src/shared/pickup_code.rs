use lazy_static::lazy_static;
use rand::Rng;
use regex::Regex;

use crate::shared::constants::{CODE_PREFIX, CODE_SUFFIX_LEN};

/// Characters a pickup code may draw from after the prefix
const CODE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

lazy_static! {
    /// Shape of an issued pickup code, e.g. "FV-AB12CD".
    /// Incoming codes are NOT validated against this; it describes
    /// what the generator produces.
    pub static ref PICKUP_CODE_REGEX: Regex = Regex::new(r"^FV-[A-Z0-9]{6}$").unwrap();
}

/// Generate a pickup code: "FV-" followed by 6 uppercase alphanumerics.
///
/// The code is a convenience handle, not a secret, so a thread-local
/// non-cryptographic RNG is enough. Uniqueness is probabilistic; there
/// is no collision retry. A colliding code fails the metadata insert on
/// the primary key and surfaces as an upload failure.
pub fn generate() -> String {
    let mut rng = rand::rng();
    let suffix: String = (0..CODE_SUFFIX_LEN)
        .map(|_| CODE_ALPHABET[rng.random_range(0..CODE_ALPHABET.len())] as char)
        .collect();
    format!("{}{}", CODE_PREFIX, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_codes_match_expected_shape() {
        for _ in 0..100 {
            let code = generate();
            assert!(
                PICKUP_CODE_REGEX.is_match(&code),
                "unexpected code shape: {}",
                code
            );
        }
    }

    #[test]
    fn sequential_codes_differ() {
        // 36^6 possibilities; 20 draws colliding would indicate a broken RNG
        let codes: std::collections::HashSet<String> = (0..20).map(|_| generate()).collect();
        assert!(codes.len() > 1);
    }

    #[test]
    fn regex_rejects_malformed_codes() {
        assert!(!PICKUP_CODE_REGEX.is_match("FV-ab12cd")); // lowercase
        assert!(!PICKUP_CODE_REGEX.is_match("FV-AB12C")); // too short
        assert!(!PICKUP_CODE_REGEX.is_match("FV-AB12CDE")); // too long
        assert!(!PICKUP_CODE_REGEX.is_match("XX-AB12CD")); // wrong prefix
        assert!(!PICKUP_CODE_REGEX.is_match("")); // empty
    }
}
