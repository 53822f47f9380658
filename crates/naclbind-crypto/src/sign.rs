//! Ed25519 signatures in the NaCl key format.
//!
//! Secret keys are 64 bytes: the 32-byte seed followed by the public key.
//! Signed messages are the 64-byte signature followed by the message.

use ed25519_dalek::{Signature, Signer, SigningKey, Verifier, VerifyingKey};
use zeroize::Zeroizing;

use crate::{KeyPair, PrimitiveError, exact};

/// Ed25519 public key size
pub const SIGN_PUBLIC_KEY_BYTES: usize = 32;

/// NaCl Ed25519 secret key size (seed ‖ public key)
pub const SIGN_SECRET_KEY_BYTES: usize = 64;

/// Seed size for deterministic key derivation
pub const SIGN_SEED_BYTES: usize = 32;

/// Signature prepended to every signed message
pub const SIGN_BYTES: usize = 64;

/// Sign `message`, returning `signature ‖ message`.
///
/// Ed25519 signing is deterministic: the same key and message always produce
/// the same signed message.
///
/// # Errors
///
/// - `IncorrectSecretKeyLength`: key is not 64 bytes
/// - `MismatchedSecretKey`: trailing 32 bytes are not the seed's public key
pub fn crypto_sign(message: &[u8], secret_key: &[u8]) -> Result<Vec<u8>, PrimitiveError> {
    let keypair_bytes =
        exact::<SIGN_SECRET_KEY_BYTES>(secret_key, PrimitiveError::IncorrectSecretKeyLength)?;
    let signing_key = SigningKey::from_keypair_bytes(keypair_bytes)
        .map_err(|_| PrimitiveError::MismatchedSecretKey)?;

    let signature = signing_key.sign(message);

    let mut signed = Vec::with_capacity(SIGN_BYTES + message.len());
    signed.extend_from_slice(&signature.to_bytes());
    signed.extend_from_slice(message);
    Ok(signed)
}

/// Verify a signed message and return the message it carries.
///
/// A signed message shorter than a signature, a public key that is not a
/// valid curve point, and a bad signature all fail the same way: no part of
/// the message is returned.
pub fn crypto_sign_open(signed: &[u8], public_key: &[u8]) -> Result<Vec<u8>, PrimitiveError> {
    let public =
        exact::<SIGN_PUBLIC_KEY_BYTES>(public_key, PrimitiveError::IncorrectPublicKeyLength)?;

    if signed.len() < SIGN_BYTES {
        return Err(PrimitiveError::VerificationFailed);
    }
    let (signature, message) = signed.split_at(SIGN_BYTES);
    let signature = exact::<SIGN_BYTES>(signature, PrimitiveError::VerificationFailed)?;

    let verifying_key =
        VerifyingKey::from_bytes(public).map_err(|_| PrimitiveError::VerificationFailed)?;
    verifying_key
        .verify(message, &Signature::from_bytes(signature))
        .map_err(|_| PrimitiveError::VerificationFailed)?;

    Ok(message.to_vec())
}

/// Derive the signing keypair for a 32-byte seed.
///
/// Pure function: identical seeds yield identical keypairs.
pub fn crypto_sign_publickey(seed: &[u8]) -> Result<KeyPair, PrimitiveError> {
    let seed = exact::<SIGN_SEED_BYTES>(seed, PrimitiveError::IncorrectSeedLength)?;
    Ok(keypair_from_seed(seed))
}

/// Build a signing keypair from 32 caller-supplied random bytes.
pub fn crypto_sign_keypair(random: &[u8; SIGN_SEED_BYTES]) -> KeyPair {
    keypair_from_seed(random)
}

fn keypair_from_seed(seed: &[u8; SIGN_SEED_BYTES]) -> KeyPair {
    let signing_key = SigningKey::from_bytes(seed);
    let secret = Zeroizing::new(signing_key.to_keypair_bytes());

    KeyPair::new(signing_key.verifying_key().to_bytes().to_vec(), secret.to_vec())
}
