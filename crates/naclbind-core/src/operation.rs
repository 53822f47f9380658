//! The fifteen operations of the binding surface and their parameter lists.
//!
//! Each operation has a fixed, ordered parameter list. The list drives arity
//! and type validation and the usage text shown on arity failures.

use std::fmt;

/// Coarse shape a parameter must have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamKind {
    /// A byte buffer of any length
    Buffer,
    /// A non-negative integer that fits in 32 bits
    Integer,
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Buffer => write!(f, "a Buffer"),
            Self::Integer => write!(f, "an Integer"),
        }
    }
}

/// One positional parameter: its role name and required shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Param {
    /// Role name shown in diagnostics (e.g. `nonce`)
    pub role: &'static str,
    /// Required shape
    pub kind: ParamKind,
}

const fn buffer(role: &'static str) -> Param {
    Param { role, kind: ParamKind::Buffer }
}

const fn integer(role: &'static str) -> Param {
    Param { role, kind: ParamKind::Integer }
}

/// Operations exposed by the binding surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Operation {
    /// Public-key authenticated encryption
    Box,
    /// Public-key authenticated decryption
    BoxOpen,
    /// Random box keypair
    BoxKeypair,
    /// Ed25519 signing
    Sign,
    /// Ed25519 verification
    SignOpen,
    /// Random signing keypair
    SignKeypair,
    /// Signing keypair from a seed
    SignPublickey,
    /// Secret-key authenticated encryption
    Secretbox,
    /// Secret-key authenticated decryption
    SecretboxOpen,
    /// Poly1305 one-time authenticator
    Onetimeauth,
    /// Poly1305 verification
    OnetimeauthVerify,
    /// HMAC-SHA-512-256 authenticator
    Auth,
    /// HMAC-SHA-512-256 verification
    AuthVerify,
    /// `XSalsa20` keystream
    Stream,
    /// `XSalsa20` encryption/decryption
    StreamXor,
}

impl Operation {
    /// Every operation, in registration order.
    pub const ALL: [Self; 15] = [
        Self::Box,
        Self::BoxOpen,
        Self::BoxKeypair,
        Self::Sign,
        Self::SignOpen,
        Self::SignKeypair,
        Self::SignPublickey,
        Self::Secretbox,
        Self::SecretboxOpen,
        Self::Onetimeauth,
        Self::OnetimeauthVerify,
        Self::Auth,
        Self::AuthVerify,
        Self::Stream,
        Self::StreamXor,
    ];

    /// Host-visible name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Box => "box",
            Self::BoxOpen => "box_open",
            Self::BoxKeypair => "box_keypair",
            Self::Sign => "sign",
            Self::SignOpen => "sign_open",
            Self::SignKeypair => "sign_keypair",
            Self::SignPublickey => "sign_publickey",
            Self::Secretbox => "secretbox",
            Self::SecretboxOpen => "secretbox_open",
            Self::Onetimeauth => "onetimeauth",
            Self::OnetimeauthVerify => "onetimeauth_verify",
            Self::Auth => "auth",
            Self::AuthVerify => "auth_verify",
            Self::Stream => "stream",
            Self::StreamXor => "stream_xor",
        }
    }

    /// Look up an operation by its host-visible name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.name() == name)
    }

    /// Ordered parameter list.
    pub fn params(self) -> &'static [Param] {
        const BOX: &[Param] =
            &[buffer("message"), buffer("nonce"), buffer("pubkey"), buffer("privkey")];
        const BOX_OPEN: &[Param] =
            &[buffer("ciphertext"), buffer("nonce"), buffer("pubkey"), buffer("privkey")];
        const SIGN: &[Param] = &[buffer("message"), buffer("signingkey")];
        const SIGN_OPEN: &[Param] = &[buffer("signedmessage"), buffer("verifyingkey")];
        const SEED: &[Param] = &[buffer("seed")];
        const SECRETBOX: &[Param] = &[buffer("message"), buffer("nonce"), buffer("key")];
        const SECRETBOX_OPEN: &[Param] = &[buffer("ciphertext"), buffer("nonce"), buffer("key")];
        const MAC: &[Param] = &[buffer("message"), buffer("key")];
        const MAC_VERIFY: &[Param] =
            &[buffer("authenticator"), buffer("message"), buffer("key")];
        const STREAM: &[Param] = &[integer("length"), buffer("nonce"), buffer("key")];

        match self {
            Self::Box => BOX,
            Self::BoxOpen => BOX_OPEN,
            Self::BoxKeypair | Self::SignKeypair => &[],
            Self::Sign => SIGN,
            Self::SignOpen => SIGN_OPEN,
            Self::SignPublickey => SEED,
            Self::Secretbox | Self::StreamXor => SECRETBOX,
            Self::SecretboxOpen => SECRETBOX_OPEN,
            Self::Onetimeauth | Self::Auth => MAC,
            Self::OnetimeauthVerify | Self::AuthVerify => MAC_VERIFY,
            Self::Stream => STREAM,
        }
    }

    /// Usage line reported when the argument count is wrong.
    ///
    /// ```
    /// use naclbind_core::Operation;
    ///
    /// assert_eq!(Operation::Auth.usage(), "Args: message, key");
    /// assert_eq!(Operation::BoxKeypair.usage(), "Args: none");
    /// ```
    pub fn usage(self) -> String {
        let params = self.params();
        if params.is_empty() {
            return "Args: none".to_string();
        }

        let roles: Vec<&str> = params.iter().map(|p| p.role).collect();
        format!("Args: {}", roles.join(", "))
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_roundtrip() {
        for op in Operation::ALL {
            assert_eq!(Operation::from_name(op.name()), Some(op));
        }
        assert_eq!(Operation::from_name("crypto_box"), None);
    }

    #[test]
    fn usage_lists_roles_in_order() {
        assert_eq!(Operation::Box.usage(), "Args: message, nonce, pubkey, privkey");
        assert_eq!(Operation::BoxOpen.usage(), "Args: ciphertext, nonce, pubkey, privkey");
        assert_eq!(Operation::Sign.usage(), "Args: message, signingkey");
        assert_eq!(Operation::SignOpen.usage(), "Args: signedmessage, verifyingkey");
        assert_eq!(Operation::SignPublickey.usage(), "Args: seed");
        assert_eq!(Operation::AuthVerify.usage(), "Args: authenticator, message, key");
        assert_eq!(Operation::Stream.usage(), "Args: length, nonce, key");
        assert_eq!(Operation::StreamXor.usage(), "Args: message, nonce, key");
    }

    #[test]
    fn only_stream_takes_an_integer() {
        for op in Operation::ALL {
            let integers = op.params().iter().filter(|p| p.kind == ParamKind::Integer).count();
            let expected = usize::from(op == Operation::Stream);
            assert_eq!(integers, expected, "{op}");
        }
    }
}
