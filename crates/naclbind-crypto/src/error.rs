//! Failure signal raised by the primitive layer.
//!
//! Every variant carries the exact reason string callers see. No variant
//! carries output bytes: a failed primitive call produces nothing but the
//! reason.

use thiserror::Error;

/// Reasons a primitive call can fail.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveError {
    /// Public key is not `*_PUBLIC_KEY_BYTES` long
    #[error("incorrect public-key length")]
    IncorrectPublicKeyLength,

    /// Secret key is not `*_SECRET_KEY_BYTES` long
    #[error("incorrect secret-key length")]
    IncorrectSecretKeyLength,

    /// Ed25519 secret key whose trailing half is not the public key derived
    /// from its seed
    #[error("secret key does not match its public key")]
    MismatchedSecretKey,

    /// Nonce is not 24 bytes
    #[error("incorrect nonce length")]
    IncorrectNonceLength,

    /// Symmetric key is not 32 bytes
    #[error("incorrect key length")]
    IncorrectKeyLength,

    /// Signing seed is not 32 bytes
    #[error("incorrect seed length")]
    IncorrectSeedLength,

    /// Authenticator is not the algorithm's tag length
    #[error("incorrect authenticator length")]
    IncorrectAuthenticatorLength,

    /// Ciphertext is shorter than the authentication tag
    #[error("ciphertext too short")]
    CiphertextTooShort,

    /// Box, secretbox or signed message failed authentication
    #[error("ciphertext fails verification")]
    VerificationFailed,

    /// Authenticator does not match the message under the key
    #[error("invalid authenticator")]
    InvalidAuthenticator,
}

impl PrimitiveError {
    /// Returns true if the input was well-formed but did not authenticate.
    ///
    /// Everything else is a length/format failure: the input never reached
    /// the cryptographic check.
    pub fn is_authentication_failure(&self) -> bool {
        matches!(self, Self::VerificationFailed | Self::InvalidAuthenticator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_nacl_reasons() {
        assert_eq!(PrimitiveError::IncorrectNonceLength.to_string(), "incorrect nonce length");
        assert_eq!(
            PrimitiveError::VerificationFailed.to_string(),
            "ciphertext fails verification"
        );
        assert_eq!(PrimitiveError::InvalidAuthenticator.to_string(), "invalid authenticator");
    }

    #[test]
    fn only_verification_outcomes_are_authentication_failures() {
        assert!(PrimitiveError::VerificationFailed.is_authentication_failure());
        assert!(PrimitiveError::InvalidAuthenticator.is_authentication_failure());

        assert!(!PrimitiveError::CiphertextTooShort.is_authentication_failure());
        assert!(!PrimitiveError::IncorrectKeyLength.is_authentication_failure());
        assert!(!PrimitiveError::MismatchedSecretKey.is_authentication_failure());
    }
}
