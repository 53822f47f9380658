//! Registry configuration.

/// Configuration for a [`crate::Registry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Longest keystream `stream` will allocate, in bytes.
    ///
    /// Defaults to `u32::MAX`, the full range of the length argument.
    pub max_stream_length: u32,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self { max_stream_length: u32::MAX }
    }
}
