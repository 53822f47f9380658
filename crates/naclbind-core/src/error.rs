//! Caller-visible errors of the binding surface.
//!
//! Validation failures (arity, type) and primitive failures (length,
//! authentication) share one error channel but stay distinct variants. A
//! call returns either a value or one of these, never both: no variant
//! carries output bytes.

use naclbind_crypto::PrimitiveError;
use thiserror::Error;

use crate::operation::{Operation, ParamKind};

/// Coarse classification of a [`BindingError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Wrong number of arguments
    Arity,
    /// Argument of the wrong shape
    Type,
    /// Key, nonce, tag or length outside the algorithm's constraints
    Length,
    /// Open/verify could not authenticate its input
    Authentication,
    /// No operation registered under the requested name
    Unknown,
}

/// Errors raised by the binding surface.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BindingError {
    /// Wrong number of arguments; message is the operation's usage line
    #[error("{usage}")]
    Arity {
        /// Operation that was called
        operation: Operation,
        /// Usage line, e.g. `Args: message, key`
        usage: String,
    },

    /// Positional argument of the wrong shape
    #[error("arg[{index}] '{role}' must be {expected}")]
    Type {
        /// Operation that was called
        operation: Operation,
        /// Zero-based argument position
        index: usize,
        /// Role name of the parameter
        role: &'static str,
        /// Shape the parameter requires
        expected: ParamKind,
    },

    /// Primitive rejected a malformed key, nonce, tag or ciphertext
    #[error("{reason}")]
    Length {
        /// Operation that was called
        operation: Operation,
        /// Primitive failure reason, surfaced verbatim
        reason: PrimitiveError,
    },

    /// Open/verify failed to authenticate its input
    #[error("{reason}")]
    Authentication {
        /// Operation that was called
        operation: Operation,
        /// Primitive failure reason, surfaced verbatim
        reason: PrimitiveError,
    },

    /// Requested keystream longer than the configured limit
    #[error("stream length {requested} exceeds limit {limit}")]
    StreamTooLong {
        /// Operation that was called
        operation: Operation,
        /// Requested length
        requested: u32,
        /// Configured limit
        limit: u32,
    },

    /// No operation registered under this name
    #[error("unknown operation: {name}")]
    UnknownOperation {
        /// Name that was looked up
        name: String,
    },
}

impl BindingError {
    /// Translate a primitive failure raised while running `operation`.
    pub fn from_primitive(operation: Operation, reason: PrimitiveError) -> Self {
        if reason.is_authentication_failure() {
            Self::Authentication { operation, reason }
        } else {
            Self::Length { operation, reason }
        }
    }

    pub(crate) fn arity(operation: Operation) -> Self {
        Self::Arity { operation, usage: operation.usage() }
    }

    /// Classification of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Arity { .. } => ErrorKind::Arity,
            Self::Type { .. } => ErrorKind::Type,
            Self::Length { .. } | Self::StreamTooLong { .. } => ErrorKind::Length,
            Self::Authentication { .. } => ErrorKind::Authentication,
            Self::UnknownOperation { .. } => ErrorKind::Unknown,
        }
    }

    /// Operation that raised this error. `None` for unknown operations.
    pub fn operation(&self) -> Option<Operation> {
        match self {
            Self::Arity { operation, .. }
            | Self::Type { operation, .. }
            | Self::Length { operation, .. }
            | Self::Authentication { operation, .. }
            | Self::StreamTooLong { operation, .. } => Some(*operation),
            Self::UnknownOperation { .. } => None,
        }
    }

    /// Returns true for failures detected before any primitive ran.
    ///
    /// Validation failures indicate a caller bug; the rest indicate bad or
    /// hostile input data.
    pub fn is_validation(&self) -> bool {
        matches!(self.kind(), ErrorKind::Arity | ErrorKind::Type | ErrorKind::Unknown)
    }
}
