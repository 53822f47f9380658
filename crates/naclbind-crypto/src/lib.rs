//! NaCl Primitive Layer
//!
//! The fifteen `crypto_*` operations the binding surface forwards to. Pure
//! functions with deterministic outputs: keypair generation takes its random
//! bytes from the caller so tests can pin them.
//!
//! # Wire Layout
//!
//! Outputs follow the NaCl string API, without the zero padding of the C
//! array API:
//!
//! ```text
//! box / secretbox   tag (16) ‖ encrypted message
//! sign              signature (64) ‖ message
//! onetimeauth       tag (16)
//! auth              tag (32)
//! stream_xor        message ⊕ keystream
//! ```
//!
//! # Failure
//!
//! Every function either returns its full output or a [`PrimitiveError`].
//! Open and verify operations are all-or-nothing: a tampered input never
//! yields plaintext, and tags are compared in constant time.
//!
//! # Caller Responsibilities
//!
//! - A nonce must never repeat under the same key (or key pair).
//! - A `onetimeauth` key must authenticate exactly one message. Nothing here
//!   can detect reuse.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod auth;
pub mod curve_box;
mod error;
mod keypair;
pub mod onetimeauth;
pub mod secretbox;
pub mod sign;
pub mod stream;

pub use auth::{AUTH_BYTES, AUTH_KEY_BYTES, crypto_auth, crypto_auth_verify};
pub use curve_box::{
    BOX_MAC_BYTES, BOX_NONCE_BYTES, BOX_PUBLIC_KEY_BYTES, BOX_SECRET_KEY_BYTES, crypto_box,
    crypto_box_keypair, crypto_box_open,
};
pub use error::PrimitiveError;
pub use keypair::KeyPair;
pub use onetimeauth::{
    ONETIMEAUTH_BYTES, ONETIMEAUTH_KEY_BYTES, crypto_onetimeauth, crypto_onetimeauth_verify,
};
pub use secretbox::{
    SECRETBOX_KEY_BYTES, SECRETBOX_MAC_BYTES, SECRETBOX_NONCE_BYTES, crypto_secretbox,
    crypto_secretbox_open,
};
pub use sign::{
    SIGN_BYTES, SIGN_PUBLIC_KEY_BYTES, SIGN_SECRET_KEY_BYTES, SIGN_SEED_BYTES, crypto_sign,
    crypto_sign_keypair, crypto_sign_open, crypto_sign_publickey,
};
pub use stream::{STREAM_KEY_BYTES, STREAM_NONCE_BYTES, crypto_stream, crypto_stream_xor};

/// Borrow `bytes` as a fixed-size array, or fail with `err`.
///
/// Never truncates or pads: any length other than `N` is rejected.
pub(crate) fn exact<const N: usize>(
    bytes: &[u8],
    err: PrimitiveError,
) -> Result<&[u8; N], PrimitiveError> {
    bytes.try_into().map_err(|_| err)
}
