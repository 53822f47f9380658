//! Keyed message authentication (HMAC-SHA-512 truncated to 256 bits).

use hmac::{Hmac, Mac};
use sha2::Sha512;

use crate::{PrimitiveError, exact};

type HmacSha512 = Hmac<Sha512>;

/// Authenticator size: the leading half of HMAC-SHA-512
pub const AUTH_BYTES: usize = 32;

/// Key size
pub const AUTH_KEY_BYTES: usize = 32;

/// Compute the authenticator of `message` under `key`.
pub fn crypto_auth(message: &[u8], key: &[u8]) -> Result<Vec<u8>, PrimitiveError> {
    let mac = keyed(message, key)?;
    let full = mac.finalize().into_bytes();

    Ok(full[..AUTH_BYTES].to_vec())
}

/// Check `authenticator` against `message` under `key` in constant time.
pub fn crypto_auth_verify(
    authenticator: &[u8],
    message: &[u8],
    key: &[u8],
) -> Result<(), PrimitiveError> {
    let authenticator =
        exact::<AUTH_BYTES>(authenticator, PrimitiveError::IncorrectAuthenticatorLength)?;
    let mac = keyed(message, key)?;

    mac.verify_truncated_left(authenticator).map_err(|_| PrimitiveError::InvalidAuthenticator)
}

fn keyed(message: &[u8], key: &[u8]) -> Result<HmacSha512, PrimitiveError> {
    let key = exact::<AUTH_KEY_BYTES>(key, PrimitiveError::IncorrectKeyLength)?;

    let Ok(mut mac) = HmacSha512::new_from_slice(key) else {
        unreachable!("HMAC-SHA512 accepts any key size");
    };
    mac.update(message);
    Ok(mac)
}
