//! Size constants exported to callers.
//!
//! Re-exported from the primitive layer, so the values callers size buffers
//! with are the values the primitives enforce.

pub use naclbind_crypto::{
    AUTH_BYTES, AUTH_KEY_BYTES, BOX_MAC_BYTES, BOX_NONCE_BYTES, BOX_PUBLIC_KEY_BYTES,
    BOX_SECRET_KEY_BYTES, ONETIMEAUTH_BYTES, ONETIMEAUTH_KEY_BYTES, SECRETBOX_KEY_BYTES,
    SECRETBOX_MAC_BYTES, SECRETBOX_NONCE_BYTES, SIGN_BYTES, SIGN_PUBLIC_KEY_BYTES,
    SIGN_SECRET_KEY_BYTES, SIGN_SEED_BYTES, STREAM_KEY_BYTES, STREAM_NONCE_BYTES,
};

/// Constants published by the host surface, by host-visible name.
pub const EXPORTED: [(&str, usize); 5] = [
    ("box_NONCEBYTES", BOX_NONCE_BYTES),
    ("box_PUBLICKEYBYTES", BOX_PUBLIC_KEY_BYTES),
    ("box_SECRETKEYBYTES", BOX_SECRET_KEY_BYTES),
    ("sign_PUBLICKEYBYTES", SIGN_PUBLIC_KEY_BYTES),
    ("sign_SECRETKEYBYTES", SIGN_SECRET_KEY_BYTES),
];
