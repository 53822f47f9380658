//! Known-answer tests against published NaCl vectors
//!
//! The stream vector comes from the NaCl reference distribution: the SHA-256
//! of 4 MiB of XSalsa20 keystream under its standard test key and nonce.

use naclbind_crypto::{
    AUTH_BYTES, crypto_auth, crypto_auth_verify, crypto_stream, crypto_stream_xor,
};
use sha2::{Digest, Sha256};

fn unhex(s: &str) -> Vec<u8> {
    hex::decode(s).unwrap()
}

fn nacl_stream_nonce() -> Vec<u8> {
    unhex("69696ee955b62b73cd62bda875fc73d68219e0036b7a0b37")
}

fn nacl_stream_key() -> Vec<u8> {
    unhex("1b27556473e985d462cd51197a9a46c76009549eac6474f206c4ee0844f68389")
}

#[test]
fn four_mebibyte_keystream_digest() {
    let keystream = crypto_stream(4_194_304, &nacl_stream_nonce(), &nacl_stream_key()).unwrap();
    assert_eq!(keystream.len(), 4_194_304);

    let digest = Sha256::digest(&keystream);
    assert_eq!(
        hex::encode(digest),
        "662b9d0e3463029156069b12f918691a98f7dfb2ca0393c96bbfc6b1fbd630a2"
    );
}

#[test]
fn stream_xor_matches_stream_on_nacl_key() {
    let nonce = nacl_stream_nonce();
    let key = nacl_stream_key();
    let zeros = vec![0u8; 1000];

    let stream = crypto_stream(1000, &nonce, &key).unwrap();
    let xored = crypto_stream_xor(&zeros, &nonce, &key).unwrap();
    assert_eq!(stream, xored);

    let restored = crypto_stream_xor(&xored, &nonce, &key).unwrap();
    assert_eq!(restored, zeros);
}

/// RFC 4231 cases 3 and 4, keys zero-padded to 32 bytes
#[test]
fn hmac_sha512_256_rfc4231() {
    let cases = [
        (
            "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
            "dd".repeat(50),
            "fa73b0089d56a284efb0f0756c890be9b1b5dbdd8ee81a3655f83e33b2279d39",
        ),
        (
            "0102030405060708090a0b0c0d0e0f10111213141516171819",
            "cd".repeat(50),
            "b0ba465637458c6990e5a8c5f61d4af7e576d97ff94b872de76f8050361ee3db",
        ),
    ];

    for (key_hex, message_hex, tag_hex) in cases {
        let mut key = unhex(key_hex);
        key.resize(32, 0);
        let message = unhex(&message_hex);

        let tag = crypto_auth(&message, &key).unwrap();
        assert_eq!(tag.len(), AUTH_BYTES);
        assert_eq!(hex::encode(&tag), tag_hex);

        crypto_auth_verify(&tag, &message, &key).unwrap();
    }
}

/// RFC 4231 case 5 publishes only the leading 128 bits of the tag.
#[test]
fn hmac_sha512_256_truncation_case() {
    let mut key = unhex("0c0c0c0c0c0c0c0c0c0c0c0c0c0c0c0c0c0c0c0c");
    key.resize(32, 0);

    let tag = crypto_auth(b"Test With Truncation", &key).unwrap();
    assert_eq!(hex::encode(&tag[..16]), "415fad6271580a531d4179bc891d87a6");
}
