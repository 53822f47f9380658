//! Keypair container shared by `box` and `sign`.

use zeroize::Zeroizing;

/// A public/secret key pair, public half first.
///
/// The secret half is wiped when the pair is dropped.
#[derive(Clone)]
pub struct KeyPair {
    /// Public key bytes
    pub public: Vec<u8>,
    /// Secret key bytes
    pub secret: Zeroizing<Vec<u8>>,
}

impl KeyPair {
    pub(crate) fn new(public: Vec<u8>, secret: Vec<u8>) -> Self {
        Self { public, secret: Zeroizing::new(secret) }
    }
}

impl std::fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyPair")
            .field("public", &self.public)
            .field("secret", &"<redacted>")
            .finish()
    }
}
