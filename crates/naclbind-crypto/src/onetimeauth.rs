//! One-time authenticator (poly1305).
//!
//! A key must authenticate a single message. Reusing it lets an observer of
//! two tags forge others; nothing here can detect reuse.

use poly1305::{Poly1305, universal_hash::KeyInit};
use subtle::ConstantTimeEq;

use crate::{PrimitiveError, exact};

/// Poly1305 tag size
pub const ONETIMEAUTH_BYTES: usize = 16;

/// Poly1305 one-time key size
pub const ONETIMEAUTH_KEY_BYTES: usize = 32;

/// Compute the authenticator of `message` under a one-time key.
pub fn crypto_onetimeauth(message: &[u8], key: &[u8]) -> Result<Vec<u8>, PrimitiveError> {
    let key = exact::<ONETIMEAUTH_KEY_BYTES>(key, PrimitiveError::IncorrectKeyLength)?;
    Ok(compute(message, key).to_vec())
}

/// Check `authenticator` against `message` under `key`.
///
/// Success carries no value; a mismatch is `InvalidAuthenticator`.
pub fn crypto_onetimeauth_verify(
    authenticator: &[u8],
    message: &[u8],
    key: &[u8],
) -> Result<(), PrimitiveError> {
    let authenticator = exact::<ONETIMEAUTH_BYTES>(
        authenticator,
        PrimitiveError::IncorrectAuthenticatorLength,
    )?;
    let key = exact::<ONETIMEAUTH_KEY_BYTES>(key, PrimitiveError::IncorrectKeyLength)?;

    let expected = compute(message, key);
    if bool::from(expected[..].ct_eq(&authenticator[..])) {
        Ok(())
    } else {
        Err(PrimitiveError::InvalidAuthenticator)
    }
}

fn compute(message: &[u8], key: &[u8; ONETIMEAUTH_KEY_BYTES]) -> [u8; ONETIMEAUTH_BYTES] {
    let tag = Poly1305::new(poly1305::Key::from_slice(key)).compute_unpadded(message);

    let mut out = [0u8; ONETIMEAUTH_BYTES];
    out.copy_from_slice(tag.as_slice());
    out
}
