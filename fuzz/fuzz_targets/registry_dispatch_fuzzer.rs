//! Fuzz target for host-side dispatch
//!
//! Drives the registry with arbitrary operation names and argument lists,
//! the way an untrusted host script would.
//!
//! # Strategy
//!
//! - Registered and unregistered operation names
//! - Argument lists of any length mixing buffers, integers, text, null
//! - Buffers of boundary sizes (empty, near key/nonce sizes) and random
//!
//! # Invariants
//!
//! - Dispatch never panics
//! - Wrong arity is always reported as an arity error
//! - Every error names the operation it came from (unless unknown)
//! - Successful calls return the shape the operation documents

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use naclbind_core::{ErrorKind, Operation, Registry, RegistryConfig, Value};

/// Keeps keystream requests small enough to run quickly.
const MAX_STREAM: u32 = 1 << 16;

#[derive(Debug, Clone, Arbitrary)]
struct DispatchScenario {
    target: Target,
    args: Vec<FuzzValue>,
}

#[derive(Debug, Clone, Arbitrary)]
enum Target {
    Registered(u8),
    Unregistered(String),
}

#[derive(Debug, Clone, Arbitrary)]
enum FuzzValue {
    Buffer(Vec<u8>),
    Sized { size: SizeHint, fill: u8 },
    Integer(i64),
    Text(String),
    Null,
}

#[derive(Debug, Clone, Copy, Arbitrary)]
enum SizeHint {
    Empty,
    Tag,
    Nonce,
    Key,
    SignSecret,
    OffByOne(u8),
}

impl From<FuzzValue> for Value {
    fn from(value: FuzzValue) -> Self {
        match value {
            FuzzValue::Buffer(bytes) => Value::Buffer(bytes),
            FuzzValue::Sized { size, fill } => {
                let len = match size {
                    SizeHint::Empty => 0,
                    SizeHint::Tag => 16,
                    SizeHint::Nonce => 24,
                    SizeHint::Key => 32,
                    SizeHint::SignSecret => 64,
                    SizeHint::OffByOne(n) => [15, 17, 23, 25, 31, 33, 63, 65][usize::from(n % 8)],
                };
                Value::Buffer(vec![fill; len])
            },
            FuzzValue::Integer(n) => Value::Integer(n),
            FuzzValue::Text(s) => Value::Text(s),
            FuzzValue::Null => Value::Null,
        }
    }
}

fuzz_target!(|scenario: DispatchScenario| {
    let registry = Registry::new(
        RegistryConfig { max_stream_length: MAX_STREAM },
        naclbind_core::OsEntropy,
    );
    let args: Vec<Value> = scenario.args.into_iter().map(Value::from).collect();

    let (name, operation) = match scenario.target {
        Target::Registered(i) => {
            let op = Operation::ALL[usize::from(i) % Operation::ALL.len()];
            (op.name().to_string(), Some(op))
        },
        Target::Unregistered(name) => {
            let op = Operation::from_name(&name);
            (name, op)
        },
    };

    // INVARIANT 1: Dispatch never panics
    let result = registry.call(&name, &args);

    let Some(operation) = operation else {
        // INVARIANT 2: Unregistered names are always unknown
        assert_eq!(result.unwrap_err().kind(), ErrorKind::Unknown);
        return;
    };

    match result {
        Ok(value) => {
            // INVARIANT 3: Success shape follows the operation
            match operation {
                Operation::BoxKeypair | Operation::SignKeypair | Operation::SignPublickey => {
                    assert!(matches!(value, Value::Array(ref parts) if parts.len() == 2));
                },
                Operation::OnetimeauthVerify | Operation::AuthVerify => {
                    assert_eq!(value, Value::Null);
                },
                _ => assert!(value.as_buffer().is_some(), "{operation} must return a buffer"),
            }
        },
        Err(err) => {
            // INVARIANT 4: Errors are tagged with their operation
            assert_eq!(err.operation(), Some(operation));

            // INVARIANT 5: Arity is checked before anything else
            if args.len() != operation.params().len() {
                assert_eq!(err.kind(), ErrorKind::Arity);
            }
        },
    }
});
