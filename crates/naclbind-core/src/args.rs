//! Argument validation and copy-in.
//!
//! Checks arity, then each position's shape left to right, and copies every
//! buffer into boundary-owned memory. The first failure wins. Exact
//! cryptographic sizes are not checked here: the primitive layer owns them.

use zeroize::Zeroizing;

use crate::{
    error::BindingError,
    operation::{Operation, ParamKind},
    value::{Value, to_owned_bytes},
};

#[derive(Debug)]
enum Arg {
    Bytes(Zeroizing<Vec<u8>>),
    Length(u32),
}

/// Validated, owned arguments for one call.
///
/// Copies are wiped on drop, since they may hold key material.
#[derive(Debug)]
pub struct Args {
    operation: Operation,
    args: Vec<Arg>,
}

impl Args {
    /// Validate `values` against `operation`'s parameter list.
    ///
    /// # Errors
    ///
    /// - `Arity`: wrong number of values
    /// - `Type`: first value whose shape does not match its parameter
    pub fn extract(operation: Operation, values: &[Value]) -> Result<Self, BindingError> {
        let params = operation.params();
        if values.len() != params.len() {
            return Err(BindingError::arity(operation));
        }

        let mut args = Vec::with_capacity(params.len());
        for (index, (param, value)) in params.iter().zip(values).enumerate() {
            let type_error = || BindingError::Type {
                operation,
                index,
                role: param.role,
                expected: param.kind,
            };

            let arg = match param.kind {
                ParamKind::Buffer => {
                    Arg::Bytes(Zeroizing::new(to_owned_bytes(value).ok_or_else(type_error)?))
                },
                ParamKind::Integer => Arg::Length(as_u32(value).ok_or_else(type_error)?),
            };
            args.push(arg);
        }

        Ok(Self { operation, args })
    }

    /// Operation these arguments were validated for.
    pub fn operation(&self) -> Operation {
        self.operation
    }

    /// Buffer argument at `index`.
    pub fn bytes(&self, index: usize) -> Result<&[u8], BindingError> {
        match self.args.get(index) {
            Some(Arg::Bytes(bytes)) => Ok(bytes.as_slice()),
            _ => Err(self.mismatch(index, ParamKind::Buffer)),
        }
    }

    /// Integer argument at `index`.
    pub fn length(&self, index: usize) -> Result<u32, BindingError> {
        match self.args.get(index) {
            Some(Arg::Length(n)) => Ok(*n),
            _ => Err(self.mismatch(index, ParamKind::Integer)),
        }
    }

    /// Error for a handler asking for a position its parameter list does
    /// not declare with that shape.
    fn mismatch(&self, index: usize, expected: ParamKind) -> BindingError {
        let role = self.operation.params().get(index).map_or("?", |p| p.role);
        BindingError::Type { operation: self.operation, index, role, expected }
    }
}

/// Host integers are accepted only in the unsigned 32-bit range.
fn as_u32(value: &Value) -> Option<u32> {
    match value {
        Value::Integer(n) => u32::try_from(*n).ok(),
        _ => None,
    }
}
