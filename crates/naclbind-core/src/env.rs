//! Randomness source for keypair generation.
//!
//! Decouples key generation from the OS RNG so tests can pin the bytes a
//! keypair is built from, while production uses real entropy.

/// Source of random bytes.
///
/// # Safety
///
/// Implementations MUST use cryptographically secure entropy in production.
/// Fixed or seeded sources are for tests only.
pub trait Entropy: Send + Sync {
    /// Fills the provided buffer with random bytes.
    fn random_bytes(&self, buffer: &mut [u8]);
}

/// Production entropy from the operating system (getrandom).
///
/// # Panics
///
/// Panics if the OS RNG fails. A keypair built without functioning
/// randomness would be predictable; there is no safe fallback.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl Entropy for OsEntropy {
    #[allow(clippy::expect_used)]
    fn random_bytes(&self, buffer: &mut [u8]) {
        getrandom::fill(buffer)
            .expect("invariant: OS RNG failure is unrecoverable - keys cannot be generated");
    }
}
