//! Fuzz target for the authenticated open/verify paths
//!
//! Seals a message, applies an arbitrary edit to the sealed bytes, then opens.
//!
//! # Strategy
//!
//! - Arbitrary messages, nonces and keys
//! - Edits: flip one byte, truncate, extend, or leave intact
//! - Every authenticated construction: box, secretbox, sign, onetimeauth, auth
//!
//! # Invariants
//!
//! - Unmodified input always opens to the original message
//! - Modified input never opens and never yields partial output
//! - Failure is reported as authentication or length, never a panic

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use naclbind_core::{ErrorKind, api};
use naclbind_crypto::{crypto_box_keypair, crypto_sign_publickey};

#[derive(Debug, Clone, Arbitrary)]
struct TamperScenario {
    construction: Construction,
    message: Vec<u8>,
    nonce: [u8; 24],
    key: [u8; 32],
    peer_seed: [u8; 32],
    edit: Edit,
}

#[derive(Debug, Clone, Copy, Arbitrary)]
enum Construction {
    Box,
    Secretbox,
    Sign,
    Onetimeauth,
    Auth,
}

#[derive(Debug, Clone, Arbitrary)]
enum Edit {
    /// Leave sealed bytes intact
    None,
    /// XOR one byte (position taken modulo length)
    Flip { position: u16, mask: u8 },
    /// Drop trailing bytes
    Truncate { count: u8 },
    /// Append bytes
    Extend { tail: Vec<u8> },
}

impl Edit {
    /// Apply the edit. Returns false when the bytes are unchanged.
    fn apply(&self, bytes: &mut Vec<u8>) -> bool {
        match self {
            Edit::None => false,
            Edit::Flip { position, mask } => {
                if bytes.is_empty() || *mask == 0 {
                    return false;
                }
                let i = usize::from(*position) % bytes.len();
                bytes[i] ^= mask;
                true
            },
            Edit::Truncate { count } => {
                let count = usize::from(*count).min(bytes.len());
                bytes.truncate(bytes.len() - count);
                count > 0
            },
            Edit::Extend { tail } => {
                bytes.extend_from_slice(tail);
                !tail.is_empty()
            },
        }
    }
}

fuzz_target!(|scenario: TamperScenario| {
    let TamperScenario { construction, message, nonce, key, peer_seed, edit } = scenario;

    let result = match construction {
        Construction::Box => {
            let ours = crypto_box_keypair(&key);
            let theirs = crypto_box_keypair(&peer_seed);
            let mut sealed = api::box_seal(&message, &nonce, &theirs.public, &ours.secret).unwrap();
            let modified = edit.apply(&mut sealed);
            (modified, api::box_open(&sealed, &nonce, &ours.public, &theirs.secret).map(Some))
        },
        Construction::Secretbox => {
            let mut sealed = api::secretbox_seal(&message, &nonce, &key).unwrap();
            let modified = edit.apply(&mut sealed);
            (modified, api::secretbox_open(&sealed, &nonce, &key).map(Some))
        },
        Construction::Sign => {
            let pair = crypto_sign_publickey(&key).unwrap();
            let mut signed = api::sign(&message, &pair.secret).unwrap();
            let modified = edit.apply(&mut signed);
            (modified, api::sign_open(&signed, &pair.public).map(Some))
        },
        Construction::Onetimeauth => {
            let mut tag = api::onetimeauth(&message, &key).unwrap();
            let modified = edit.apply(&mut tag);
            (modified, api::onetimeauth_verify(&tag, &message, &key).map(|()| None))
        },
        Construction::Auth => {
            let mut tag = api::auth(&message, &key).unwrap();
            let modified = edit.apply(&mut tag);
            (modified, api::auth_verify(&tag, &message, &key).map(|()| None))
        },
    };

    match result {
        // INVARIANT 1: Unmodified input opens to the original message
        (false, outcome) => {
            let opened = outcome.unwrap();
            if let Some(opened) = opened {
                assert_eq!(opened, message, "open must return the sealed message");
            }
        },
        // INVARIANT 2: Modified input is rejected with a classified error
        (true, outcome) => {
            let err = outcome.expect_err("tampered input must not open");
            assert!(
                matches!(err.kind(), ErrorKind::Authentication | ErrorKind::Length),
                "unexpected error kind {:?}",
                err.kind()
            );
        },
    }
});
