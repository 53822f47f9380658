//! Public-key authenticated encryption (curve25519xsalsa20poly1305).

use crypto_box::{
    PublicKey, SalsaBox, SecretKey,
    aead::{AeadInPlace, generic_array::GenericArray},
};
use zeroize::Zeroize;

use crate::{KeyPair, PrimitiveError, exact};

/// Curve25519 public key size
pub const BOX_PUBLIC_KEY_BYTES: usize = 32;

/// Curve25519 secret key size
pub const BOX_SECRET_KEY_BYTES: usize = 32;

/// `XSalsa20` nonce size
pub const BOX_NONCE_BYTES: usize = 24;

/// Poly1305 tag prepended to every box
pub const BOX_MAC_BYTES: usize = 16;

/// Encrypt and authenticate `message` from the holder of `secret_key` to the
/// holder of the secret matching `public_key`.
///
/// Returns `tag ‖ ciphertext`, `BOX_MAC_BYTES` longer than the message.
pub fn crypto_box(
    message: &[u8],
    nonce: &[u8],
    public_key: &[u8],
    secret_key: &[u8],
) -> Result<Vec<u8>, PrimitiveError> {
    let cipher = salsa_box(public_key, secret_key)?;
    let nonce = exact::<BOX_NONCE_BYTES>(nonce, PrimitiveError::IncorrectNonceLength)?;

    let mut sealed = vec![0u8; BOX_MAC_BYTES];
    sealed.extend_from_slice(message);

    let Ok(tag) = cipher.encrypt_in_place_detached(
        GenericArray::from_slice(nonce),
        b"",
        &mut sealed[BOX_MAC_BYTES..],
    ) else {
        unreachable!("XSalsa20-Poly1305 encryption cannot fail with valid inputs");
    };
    sealed[..BOX_MAC_BYTES].copy_from_slice(tag.as_slice());

    Ok(sealed)
}

/// Verify and decrypt a box produced by [`crypto_box`].
///
/// # Errors
///
/// - Length errors for malformed keys or nonce
/// - `CiphertextTooShort`: fewer bytes than the tag
/// - `VerificationFailed`: wrong keys, wrong nonce, or tampered ciphertext
pub fn crypto_box_open(
    ciphertext: &[u8],
    nonce: &[u8],
    public_key: &[u8],
    secret_key: &[u8],
) -> Result<Vec<u8>, PrimitiveError> {
    let cipher = salsa_box(public_key, secret_key)?;
    let nonce = exact::<BOX_NONCE_BYTES>(nonce, PrimitiveError::IncorrectNonceLength)?;

    if ciphertext.len() < BOX_MAC_BYTES {
        return Err(PrimitiveError::CiphertextTooShort);
    }
    let (tag, body) = ciphertext.split_at(BOX_MAC_BYTES);

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

/// Build a box keypair from 32 caller-supplied random bytes.
///
/// The random bytes become the secret key verbatim; Curve25519 clamping
/// happens at key agreement.
pub fn crypto_box_keypair(random: &[u8; BOX_SECRET_KEY_BYTES]) -> KeyPair {
    let secret = SecretKey::from(*random);
    let public = secret.public_key();

    KeyPair::new(public.as_bytes().to_vec(), random.to_vec())
}

fn salsa_box(public_key: &[u8], secret_key: &[u8]) -> Result<SalsaBox, PrimitiveError> {
    let public =
        exact::<BOX_PUBLIC_KEY_BYTES>(public_key, PrimitiveError::IncorrectPublicKeyLength)?;
    let secret =
        exact::<BOX_SECRET_KEY_BYTES>(secret_key, PrimitiveError::IncorrectSecretKeyLength)?;

    let secret = SecretKey::from(*secret);
    Ok(SalsaBox::new(&PublicKey::from(*public), &secret))
}
