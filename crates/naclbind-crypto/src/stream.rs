//! `XSalsa20` keystream.
//!
//! `crypto_stream_xor` is its own inverse: applying it twice with the same
//! nonce and key restores the input. Encrypt and decrypt are the same call,
//! and nothing authenticates the result.

use salsa20::{
    XSalsa20,
    cipher::{KeyIvInit, StreamCipher},
};

use crate::{PrimitiveError, exact};

/// Key size
pub const STREAM_KEY_BYTES: usize = 32;

/// Nonce size
pub const STREAM_NONCE_BYTES: usize = 24;

/// Produce `length` bytes of keystream.
///
/// Key and nonce are checked before the output is allocated, so a malformed
/// call fails without reserving `length` bytes.
pub fn crypto_stream(length: usize, nonce: &[u8], key: &[u8]) -> Result<Vec<u8>, PrimitiveError> {
    let mut cipher = xsalsa20(nonce, key)?;

    let mut keystream = vec![0u8; length];
    cipher.apply_keystream(&mut keystream);
    Ok(keystream)
}

/// XOR `message` with the keystream.
pub fn crypto_stream_xor(
    message: &[u8],
    nonce: &[u8],
    key: &[u8],
) -> Result<Vec<u8>, PrimitiveError> {
    let mut cipher = xsalsa20(nonce, key)?;

    let mut output = message.to_vec();
    cipher.apply_keystream(&mut output);
    Ok(output)
}

fn xsalsa20(nonce: &[u8], key: &[u8]) -> Result<XSalsa20, PrimitiveError> {
    let key = exact::<STREAM_KEY_BYTES>(key, PrimitiveError::IncorrectKeyLength)?;
    let nonce = exact::<STREAM_NONCE_BYTES>(nonce, PrimitiveError::IncorrectNonceLength)?;

    Ok(XSalsa20::new(salsa20::Key::from_slice(key), salsa20::XNonce::from_slice(nonce)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: [u8; 32] = [0x5C; 32];
    const NONCE: [u8; 24] = [0xC5; 24];

    #[test]
    fn zero_length_stream_is_empty() {
        assert!(crypto_stream(0, &NONCE, &KEY).unwrap().is_empty());
    }

    #[test]
    fn xor_of_zeros_is_keystream() {
        let stream = crypto_stream(1000, &NONCE, &KEY).unwrap();
        let xored = crypto_stream_xor(&[0u8; 1000], &NONCE, &KEY).unwrap();

        assert_eq!(stream, xored);
    }

    #[test]
    fn xor_twice_restores_message() {
        let message = b"Hello world";

        let once = crypto_stream_xor(message, &NONCE, &KEY).unwrap();
        assert_ne!(once.as_slice(), message);

        let twice = crypto_stream_xor(&once, &NONCE, &KEY).unwrap();
        assert_eq!(twice, message);
    }

    #[test]
    fn shorter_stream_is_prefix_of_longer() {
        let short = crypto_stream(100, &NONCE, &KEY).unwrap();
        let long = crypto_stream(300, &NONCE, &KEY).unwrap();

        assert_eq!(short.as_slice(), &long[..100]);
    }

    #[test]
    fn malformed_lengths_are_rejected() {
        assert_eq!(
            crypto_stream(10, &NONCE, &KEY[..31]),
            Err(PrimitiveError::IncorrectKeyLength)
        );
        assert_eq!(
            crypto_stream_xor(b"m", &NONCE[..16], &KEY),
            Err(PrimitiveError::IncorrectNonceLength)
        );
    }

    #[test]
    fn malformed_lengths_fail_before_allocating() {
        // Would abort on allocation if the output were reserved first
        assert_eq!(
            crypto_stream(usize::MAX, &NONCE[..23], &KEY),
            Err(PrimitiveError::IncorrectNonceLength)
        );
        assert_eq!(
            crypto_stream(usize::MAX, &NONCE, &KEY[..31]),
            Err(PrimitiveError::IncorrectKeyLength)
        );
    }
}
