//! NaCl Binding Surface
//!
//! The host-facing layer over [`naclbind_crypto`]. A call flows one way:
//!
//! ```text
//! host values ──► Args::extract ──► api::* ──► crypto_* primitive
//!      ▲            (arity, type,      (error            │
//!      │             copy-in)           translation)     │
//!      └──────────── Value / BindingError ◄──────────────┘
//! ```
//!
//! Two ways in:
//!
//! - [`api`]: typed functions over byte slices, for Rust callers.
//! - [`Registry`]: name → handler table over loosely-typed [`Value`]s, for
//!   a dynamic host. [`Registry::global`] is built once and never mutated.
//!
//! # Guarantees
//!
//! - Wrong-length keys, nonces and tags are rejected, never truncated or
//!   padded.
//! - Open and verify are all-or-nothing; a failed call returns an error and
//!   no bytes.
//! - Every result is a fresh allocation that aliases no input.
//! - No state is shared between calls except the immutable registry.
//!
//! # Caller Responsibilities
//!
//! - Never reuse a nonce with the same key or key pair.
//! - Never authenticate two messages with one `onetimeauth` key. `auth` has
//!   the same argument shape but a reusable key; the surface cannot tell the
//!   two uses apart.
//! - `stream_xor` is symmetric and unauthenticated: the same call encrypts
//!   and decrypts, and tampering goes undetected.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod api;
pub mod args;
pub mod config;
pub mod constants;
pub mod env;
pub mod error;
pub mod operation;
pub mod registry;
pub mod value;

pub use args::Args;
pub use config::RegistryConfig;
pub use env::{Entropy, OsEntropy};
pub use error::{BindingError, ErrorKind};
pub use naclbind_crypto::{KeyPair, PrimitiveError};
pub use operation::{Operation, Param, ParamKind};
pub use registry::Registry;
pub use value::{Value, from_owned_bytes, to_owned_bytes};
