//! Typed entry points, one per operation.
//!
//! Each function forwards to its primitive and translates the primitive's
//! failure into a [`BindingError`] tagged with the operation. Exact key,
//! nonce and tag sizes are enforced by the primitive alone.

use naclbind_crypto::{self as nacl, KeyPair};
use zeroize::Zeroizing;

use crate::{env::Entropy, error::BindingError, operation::Operation};

fn tagged<T>(
    operation: Operation,
    result: Result<T, nacl::PrimitiveError>,
) -> Result<T, BindingError> {
    result.map_err(|reason| BindingError::from_primitive(operation, reason))
}

/// Encrypt and authenticate `message` for the owner of `public_key`.
pub fn box_seal(
    message: &[u8],
    nonce: &[u8],
    public_key: &[u8],
    secret_key: &[u8],
) -> Result<Vec<u8>, BindingError> {
    tagged(Operation::Box, nacl::crypto_box(message, nonce, public_key, secret_key))
}

/// Verify and decrypt a box. All-or-nothing.
pub fn box_open(
    ciphertext: &[u8],
    nonce: &[u8],
    public_key: &[u8],
    secret_key: &[u8],
) -> Result<Vec<u8>, BindingError> {
    tagged(Operation::BoxOpen, nacl::crypto_box_open(ciphertext, nonce, public_key, secret_key))
}

/// Generate a box keypair from `entropy`.
pub fn box_keypair(entropy: &dyn Entropy) -> KeyPair {
    let mut random = Zeroizing::new([0u8; nacl::BOX_SECRET_KEY_BYTES]);
    entropy.random_bytes(random.as_mut_slice());
    nacl::crypto_box_keypair(&random)
}

/// Sign `message`, returning `signature ‖ message`.
pub fn sign(message: &[u8], secret_key: &[u8]) -> Result<Vec<u8>, BindingError> {
    tagged(Operation::Sign, nacl::crypto_sign(message, secret_key))
}

/// Verify a signed message and return its message. All-or-nothing.
pub fn sign_open(signed: &[u8], public_key: &[u8]) -> Result<Vec<u8>, BindingError> {
    tagged(Operation::SignOpen, nacl::crypto_sign_open(signed, public_key))
}

/// Generate a signing keypair from `entropy`.
pub fn sign_keypair(entropy: &dyn Entropy) -> KeyPair {
    let mut seed = Zeroizing::new([0u8; nacl::SIGN_SEED_BYTES]);
    entropy.random_bytes(seed.as_mut_slice());
    nacl::crypto_sign_keypair(&seed)
}

/// Derive the signing keypair for `seed`. Deterministic.
pub fn sign_publickey(seed: &[u8]) -> Result<KeyPair, BindingError> {
    tagged(Operation::SignPublickey, nacl::crypto_sign_publickey(seed))
}

/// Encrypt and authenticate `message` under a shared key.
pub fn secretbox_seal(message: &[u8], nonce: &[u8], key: &[u8]) -> Result<Vec<u8>, BindingError> {
    tagged(Operation::Secretbox, nacl::crypto_secretbox(message, nonce, key))
}

/// Verify and decrypt a secretbox. All-or-nothing.
pub fn secretbox_open(
    ciphertext: &[u8],
    nonce: &[u8],
    key: &[u8],
) -> Result<Vec<u8>, BindingError> {
    tagged(Operation::SecretboxOpen, nacl::crypto_secretbox_open(ciphertext, nonce, key))
}

/// Poly1305 authenticator. The key must never authenticate a second message.
pub fn onetimeauth(message: &[u8], key: &[u8]) -> Result<Vec<u8>, BindingError> {
    tagged(Operation::Onetimeauth, nacl::crypto_onetimeauth(message, key))
}

/// Check a Poly1305 authenticator. Success carries no value.
pub fn onetimeauth_verify(
    authenticator: &[u8],
    message: &[u8],
    key: &[u8],
) -> Result<(), BindingError> {
    tagged(
        Operation::OnetimeauthVerify,
        nacl::crypto_onetimeauth_verify(authenticator, message, key),
    )
}

/// HMAC-SHA-512-256 authenticator.
pub fn auth(message: &[u8], key: &[u8]) -> Result<Vec<u8>, BindingError> {
    tagged(Operation::Auth, nacl::crypto_auth(message, key))
}

/// Check an HMAC-SHA-512-256 authenticator. Success carries no value.
pub fn auth_verify(authenticator: &[u8], message: &[u8], key: &[u8]) -> Result<(), BindingError> {
    tagged(Operation::AuthVerify, nacl::crypto_auth_verify(authenticator, message, key))
}

/// `length` bytes of `XSalsa20` keystream.
pub fn stream(length: u32, nonce: &[u8], key: &[u8]) -> Result<Vec<u8>, BindingError> {
    tagged(Operation::Stream, nacl::crypto_stream(length as usize, nonce, key))
}

/// XOR `message` with the `XSalsa20` keystream.
///
/// Symmetric: the same call with the same nonce and key decrypts. The output
/// is not authenticated.
pub fn stream_xor(message: &[u8], nonce: &[u8], key: &[u8]) -> Result<Vec<u8>, BindingError> {
    tagged(Operation::StreamXor, nacl::crypto_stream_xor(message, nonce, key))
}
