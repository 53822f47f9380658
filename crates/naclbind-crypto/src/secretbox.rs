//! Secret-key authenticated encryption (xsalsa20poly1305).

use crypto_secretbox::{
    XSalsa20Poly1305,
    aead::{AeadInPlace, KeyInit, generic_array::GenericArray},
};
use zeroize::Zeroize;

use crate::{PrimitiveError, exact};

/// Shared key size
pub const SECRETBOX_KEY_BYTES: usize = 32;

/// `XSalsa20` nonce size
pub const SECRETBOX_NONCE_BYTES: usize = 24;

/// Poly1305 tag prepended to every secretbox
pub const SECRETBOX_MAC_BYTES: usize = 16;

/// Encrypt and authenticate `message` under a shared key.
///
/// Returns `tag ‖ ciphertext`.
pub fn crypto_secretbox(
    message: &[u8],
    nonce: &[u8],
    key: &[u8],
) -> Result<Vec<u8>, PrimitiveError> {
    let (cipher, nonce) = cipher_and_nonce(nonce, key)?;

    let mut sealed = vec![0u8; SECRETBOX_MAC_BYTES];
    sealed.extend_from_slice(message);

    let Ok(tag) = cipher.encrypt_in_place_detached(
        GenericArray::from_slice(nonce),
        b"",
        &mut sealed[SECRETBOX_MAC_BYTES..],
    ) else {
        unreachable!("XSalsa20-Poly1305 encryption cannot fail with valid inputs");
    };
    sealed[..SECRETBOX_MAC_BYTES].copy_from_slice(tag.as_slice());

    Ok(sealed)
}

/// Verify and decrypt a secretbox produced by [`crypto_secretbox`].
pub fn crypto_secretbox_open(
    ciphertext: &[u8],
    nonce: &[u8],
    key: &[u8],
) -> Result<Vec<u8>, PrimitiveError> {
    let (cipher, nonce) = cipher_and_nonce(nonce, key)?;

    if ciphertext.len() < SECRETBOX_MAC_BYTES {
        return Err(PrimitiveError::CiphertextTooShort);
    }
    let (tag, body) = ciphertext.split_at(SECRETBOX_MAC_BYTES);

    let mut message = body.to_vec();
    let opened = cipher.decrypt_in_place_detached(
        GenericArray::from_slice(nonce),
        b"",
        &mut message,
        GenericArray::from_slice(tag),
    );
    if opened.is_err() {
        message.zeroize();
        return Err(PrimitiveError::VerificationFailed);
    }

    Ok(message)
}

fn cipher_and_nonce<'n>(
    nonce: &'n [u8],
    key: &[u8],
) -> Result<(XSalsa20Poly1305, &'n [u8; SECRETBOX_NONCE_BYTES]), PrimitiveError> {
    let key = exact::<SECRETBOX_KEY_BYTES>(key, PrimitiveError::IncorrectKeyLength)?;
    let nonce = exact::<SECRETBOX_NONCE_BYTES>(nonce, PrimitiveError::IncorrectNonceLength)?;

    Ok((XSalsa20Poly1305::new(GenericArray::from_slice(key)), nonce))
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: [u8; 32] = [0x33; 32];
    const NONCE: [u8; 24] = [0x44; 24];

    #[test]
    fn roundtrip() {
        let sealed = crypto_secretbox(b"shared secret", &NONCE, &KEY).unwrap();
        let opened = crypto_secretbox_open(&sealed, &NONCE, &KEY).unwrap();

        assert_eq!(opened, b"shared secret");
        assert_eq!(sealed.len(), b"shared secret".len() + SECRETBOX_MAC_BYTES);
    }

    #[test]
    fn large_message_roundtrip() {
        let message = vec![0x42u8; 64 * 1024];

        let sealed = crypto_secretbox(&message, &NONCE, &KEY).unwrap();
        let opened = crypto_secretbox_open(&sealed, &NONCE, &KEY).unwrap();

        assert_eq!(opened, message);
    }

    #[test]
    fn sealing_is_deterministic_per_nonce() {
        let first = crypto_secretbox(b"same", &NONCE, &KEY).unwrap();
        let second = crypto_secretbox(b"same", &NONCE, &KEY).unwrap();
        let other_nonce = crypto_secretbox(b"same", &[0u8; 24], &KEY).unwrap();

        assert_eq!(first, second);
        assert_ne!(first, other_nonce);
    }

    #[test]
    fn wrong_key_fails_verification() {
        let sealed = crypto_secretbox(b"secret", &NONCE, &KEY).unwrap();

        let mut wrong_key = KEY;
        wrong_key[0] ^= 1;

        assert_eq!(
            crypto_secretbox_open(&sealed, &NONCE, &wrong_key),
            Err(PrimitiveError::VerificationFailed)
        );
    }

    #[test]
    fn truncated_ciphertext_fails() {
        let sealed = crypto_secretbox(b"secret", &NONCE, &KEY).unwrap();

        assert_eq!(
            crypto_secretbox_open(&sealed[..sealed.len() - 1], &NONCE, &KEY),
            Err(PrimitiveError::VerificationFailed)
        );
        assert_eq!(
            crypto_secretbox_open(&sealed[..4], &NONCE, &KEY),
            Err(PrimitiveError::CiphertextTooShort)
        );
    }

    #[test]
    fn malformed_lengths_are_rejected() {
        assert_eq!(
            crypto_secretbox(b"m", &NONCE, &KEY[..16]),
            Err(PrimitiveError::IncorrectKeyLength)
        );
        assert_eq!(
            crypto_secretbox(b"m", &NONCE[..8], &KEY),
            Err(PrimitiveError::IncorrectNonceLength)
        );
    }
}
