use crate::{hex, s7};
use md5::{Digest, Md5};

const PREFIX: &[u8] = b"s7";
const TOKEN_START: usize = 6;
const TOKEN_LEN: usize = 5;

/// Derives the S7T token for an encoded string: the MD5 digest of `"s7"`
/// concatenated with the text, rendered as lowercase hex, characters 6..11.
/// The digest is unkeyed, so the token is a consistency tag for the
/// encode/decode/token triple, not an authenticity or tamper-detection
/// mechanism.
pub fn compute_token(encoded: impl AsRef<[u8]>) -> String {
    let mut hasher = Md5::new();
    hasher.update(PREFIX);
    hasher.update(encoded);
    let digest = hex::encode(hasher.finalize());
    digest[TOKEN_START..TOKEN_START + TOKEN_LEN].to_string()
}

/// Re-derives the token a plaintext would have been issued at encode time,
/// by re-encoding it and computing the token of the result.
pub fn rederive_token(plaintext: impl AsRef<[u8]>) -> String {
    compute_token(s7::encode(plaintext))
}

#[cfg(test)]
mod tests {
    #[test]
    fn compute_token() {
        // MD5("s7") = 9d7115b42254d59b82440ebe8084927f, characters 6..11.
        assert_eq!(super::compute_token(""), "b4225");
        assert_eq!(super::compute_token("rOR1"), "b06d6");
        assert_eq!(super::compute_token("abc"), "7e483");
    }

    #[test]
    fn token_is_five_lowercase_hex_characters() {
        for input in ["", "rOR1", "aihJHiQG", "m53Ev5zYLXhGv5r_"] {
            let token = super::compute_token(input);
            assert_eq!(token.len(), 5);
            assert!(token.bytes().all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b)));
        }
    }

    #[test]
    fn token_is_deterministic() {
        assert_eq!(super::compute_token("aihJHiQG"), super::compute_token("aihJHiQG"));
    }

    #[test]
    fn rederive_token() {
        assert_eq!(super::rederive_token(b"foobar"), "37d06");
        assert_eq!(super::rederive_token(b"foobar"), super::compute_token(crate::s7::encode(b"foobar")));
        assert_eq!(super::rederive_token(b"ABC"), super::compute_token("rOR1"));
    }

    mod properties {
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn token_shape(input in ".*") {
                let token = super::super::compute_token(&input);
                prop_assert_eq!(token.len(), 5);
                prop_assert!(token.bytes().all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b)));
            }

            #[test]
            fn rederivation_survives_a_round_trip(input in ".*") {
                let encoded = crate::s7::encode(input.as_bytes());
                let decoded = crate::s7::decode_string(&encoded).unwrap();
                prop_assert_eq!(super::super::rederive_token(decoded.as_bytes()), super::super::compute_token(&encoded));
            }
        }
    }
}
