//! Immutable registration table for the host surface.
//!
//! Maps each host-visible operation name to its handler and each constant
//! name to its value. The table is built once and only ever read, so one
//! registry can serve any number of threads without locking.

use std::{collections::BTreeMap, sync::LazyLock};

use naclbind_crypto::KeyPair;

use crate::{
    api,
    args::Args,
    config::RegistryConfig,
    constants,
    env::{Entropy, OsEntropy},
    error::BindingError,
    operation::Operation,
    value::{Value, from_owned_bytes},
};

type Handler = fn(&Registry, &Args) -> Result<Value, BindingError>;

static GLOBAL: LazyLock<Registry> =
    LazyLock::new(|| Registry::new(RegistryConfig::default(), OsEntropy));

/// Operation and constant table.
pub struct Registry {
    config: RegistryConfig,
    entropy: Box<dyn Entropy>,
    operations: BTreeMap<&'static str, (Operation, Handler)>,
    constants: BTreeMap<&'static str, usize>,
}

impl Registry {
    /// Build a registry with the given configuration and randomness source.
    pub fn new(config: RegistryConfig, entropy: impl Entropy + 'static) -> Self {
        let operations =
            Operation::ALL.into_iter().map(|op| (op.name(), (op, handler(op)))).collect();
        let constants = constants::EXPORTED.into_iter().collect();

        Self { config, entropy: Box::new(entropy), operations, constants }
    }

    /// Process-wide registry: default configuration, OS entropy.
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    /// Configuration this registry was built with.
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Invoke the operation registered under `name` with host `args`.
    ///
    /// Returns a `Buffer` for seal/open/stream operations, `Array([public,
    /// secret])` for keypairs, and `Null` for successful verification.
    ///
    /// # Errors
    ///
    /// - `UnknownOperation`: nothing registered under `name`
    /// - `Arity` / `Type`: arguments do not fit the operation
    /// - `Length` / `Authentication`: the primitive rejected the input
    pub fn call(&self, name: &str, args: &[Value]) -> Result<Value, BindingError> {
        let Some(&(operation, handler)) = self.operations.get(name) else {
            tracing::warn!(operation = name, "call to unregistered operation");
            return Err(BindingError::UnknownOperation { name: name.to_string() });
        };

        tracing::trace!(%operation, args = args.len(), "dispatch");

        let result = Args::extract(operation, args).and_then(|args| handler(self, &args));
        if let Err(err) = &result {
            if err.is_validation() {
                tracing::warn!(%operation, kind = ?err.kind(), "rejected malformed call: {err}");
            } else {
                tracing::debug!(%operation, kind = ?err.kind(), "operation failed: {err}");
            }
        }
        result
    }

    /// Value of the constant registered under `name`.
    pub fn constant(&self, name: &str) -> Option<usize> {
        self.constants.get(name).copied()
    }

    /// Registered operation names, sorted.
    pub fn operations(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.operations.keys().copied()
    }

    /// Registered constants, sorted by name.
    pub fn constants(&self) -> impl Iterator<Item = (&'static str, usize)> + '_ {
        self.constants.iter().map(|(name, value)| (*name, *value))
    }

    fn stream(&self, args: &Args) -> Result<Value, BindingError> {
        let length = args.length(0)?;
        let limit = self.config.max_stream_length;
        if length > limit {
            return Err(BindingError::StreamTooLong {
                operation: args.operation(),
                requested: length,
                limit,
            });
        }

        api::stream(length, args.bytes(1)?, args.bytes(2)?).map(from_owned_bytes)
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("config", &self.config)
            .field("operations", &self.operations.len())
            .field("constants", &self.constants)
            .finish_non_exhaustive()
    }
}

fn handler(operation: Operation) -> Handler {
    match operation {
        Operation::Box => |_, a| {
            api::box_seal(a.bytes(0)?, a.bytes(1)?, a.bytes(2)?, a.bytes(3)?).map(from_owned_bytes)
        },
        Operation::BoxOpen => |_, a| {
            api::box_open(a.bytes(0)?, a.bytes(1)?, a.bytes(2)?, a.bytes(3)?).map(from_owned_bytes)
        },
        Operation::BoxKeypair => |r, _| Ok(keypair_value(&api::box_keypair(&*r.entropy))),
        Operation::Sign => |_, a| api::sign(a.bytes(0)?, a.bytes(1)?).map(from_owned_bytes),
        Operation::SignOpen => |_, a| {
            api::sign_open(a.bytes(0)?, a.bytes(1)?).map(from_owned_bytes)
        },
        Operation::SignKeypair => |r, _| Ok(keypair_value(&api::sign_keypair(&*r.entropy))),
        Operation::SignPublickey => |_, a| {
            api::sign_publickey(a.bytes(0)?).map(|pair| keypair_value(&pair))
        },
        Operation::Secretbox => |_, a| {
            api::secretbox_seal(a.bytes(0)?, a.bytes(1)?, a.bytes(2)?).map(from_owned_bytes)
        },
        Operation::SecretboxOpen => |_, a| {
            api::secretbox_open(a.bytes(0)?, a.bytes(1)?, a.bytes(2)?).map(from_owned_bytes)
        },
        Operation::Onetimeauth => |_, a| {
            api::onetimeauth(a.bytes(0)?, a.bytes(1)?).map(from_owned_bytes)
        },
        Operation::OnetimeauthVerify => |_, a| {
            api::onetimeauth_verify(a.bytes(0)?, a.bytes(1)?, a.bytes(2)?).map(|()| Value::Null)
        },
        Operation::Auth => |_, a| api::auth(a.bytes(0)?, a.bytes(1)?).map(from_owned_bytes),
        Operation::AuthVerify => |_, a| {
            api::auth_verify(a.bytes(0)?, a.bytes(1)?, a.bytes(2)?).map(|()| Value::Null)
        },
        Operation::Stream => Registry::stream,
        Operation::StreamXor => |_, a| {
            api::stream_xor(a.bytes(0)?, a.bytes(1)?, a.bytes(2)?).map(from_owned_bytes)
        },
    }
}

/// `[public, secret]`, each a fresh buffer.
fn keypair_value(pair: &KeyPair) -> Value {
    Value::Array(vec![
        from_owned_bytes(pair.public.clone()),
        from_owned_bytes(pair.secret.to_vec()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CountingEntropy(std::sync::atomic::AtomicU8);

    impl Entropy for CountingEntropy {
        fn random_bytes(&self, buffer: &mut [u8]) {
            let n = self.0.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
            buffer.fill(n);
        }
    }

    fn registry() -> Registry {
        Registry::new(RegistryConfig::default(), CountingEntropy(0.into()))
    }

    #[test]
    fn every_operation_and_constant_is_registered() {
        let registry = registry();

        assert_eq!(registry.operations().count(), 15);
        for op in Operation::ALL {
            assert!(registry.operations().any(|name| name == op.name()), "{op}");
        }

        assert_eq!(registry.constant("box_NONCEBYTES"), Some(24));
        assert_eq!(registry.constant("sign_SECRETKEYBYTES"), Some(64));
        assert_eq!(registry.constant("box_MACBYTES"), None);
    }

    #[test]
    fn unknown_operation_is_rejected() {
        let err = registry().call("box_beforenm", &[]).unwrap_err();
        assert_eq!(err, BindingError::UnknownOperation { name: "box_beforenm".into() });
    }

    #[test]
    fn keypair_is_array_public_first() {
        let registry = registry();
        let value = registry.call("sign_keypair", &[]).unwrap();

        let Value::Array(parts) = value else {
            unreachable!("keypair must be an array");
        };
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0].as_buffer().unwrap().len(), 32);
        assert_eq!(parts[1].as_buffer().unwrap().len(), 64);
        assert_eq!(&parts[1].as_buffer().unwrap()[32..], parts[0].as_buffer().unwrap());
    }

    #[test]
    fn successive_keypairs_draw_fresh_entropy() {
        let registry = registry();

        let first = registry.call("box_keypair", &[]).unwrap();
        let second = registry.call("box_keypair", &[]).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn verify_success_is_null() {
        let registry = registry();
        let key = Value::Buffer(vec![0x42; 32]);
        let message = Value::Buffer(b"hello".to_vec());

        let tag = registry.call("auth", &[message.clone(), key.clone()]).unwrap();
        assert_eq!(registry.call("auth_verify", &[tag, message, key]), Ok(Value::Null));
    }

    #[test]
    fn stream_respects_configured_limit() {
        let registry =
            Registry::new(RegistryConfig { max_stream_length: 64 }, CountingEntropy(0.into()));
        let nonce = Value::Buffer(vec![0; 24]);
        let key = Value::Buffer(vec![0; 32]);

        let ok = registry.call("stream", &[Value::Integer(64), nonce.clone(), key.clone()]);
        assert_eq!(ok.unwrap().as_buffer().map(<[u8]>::len), Some(64));

        let err = registry.call("stream", &[Value::Integer(65), nonce, key]).unwrap_err();
        assert_eq!(
            err,
            BindingError::StreamTooLong { operation: Operation::Stream, requested: 65, limit: 64 }
        );
    }

    #[test]
    fn global_registry_is_shared() {
        assert!(std::ptr::eq(Registry::global(), Registry::global()));
        assert_eq!(Registry::global().config(), &RegistryConfig::default());
    }
}
