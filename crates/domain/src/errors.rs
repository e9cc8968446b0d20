use thiserror::Error;

/// Failures raised by the wire codec.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WireError {
    #[error("Cannot encode message: {0}")]
    Encode(String),

    #[error("Truncated header: {available} bytes available, 12 required")]
    TruncatedHeader { available: usize },

    #[error("Malformed name at offset {offset}: {reason}")]
    MalformedName { offset: usize, reason: &'static str },

    #[error(
        "Truncated record at offset {offset}: rdata length {declared} exceeds {remaining} remaining bytes"
    )]
    TruncatedRecord {
        offset: usize,
        declared: usize,
        remaining: usize,
    },

    #[error("Buffer overrun at offset {offset}: {needed} bytes requested from a {len} byte buffer")]
    BufferOverrun {
        offset: usize,
        needed: usize,
        len: usize,
    },
}

impl WireError {
    /// True when the input simply ended too early.
    pub fn is_truncation(&self) -> bool {
        matches!(
            self,
            WireError::TruncatedHeader { .. }
                | WireError::TruncatedRecord { .. }
                | WireError::BufferOverrun { .. }
        )
    }
}

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Failed to encode DNS query: {0}")]
    Encode(#[source] WireError),

    #[error("Failed to parse DNS response: {0}")]
    Protocol(#[source] WireError),

    #[error("Transport error with {server}: {reason}")]
    Transport { server: String, reason: String },

    #[error("Query timeout: no reply from {server} within {timeout_ms} ms")]
    QueryTimeout { server: String, timeout_ms: u64 },

    #[error("No nameserver found in resolver configuration")]
    EmptyResolverList,

    #[error("Invalid resolver address: {0}")]
    InvalidResolverAddress(String),

    #[error("Response does not match query: {0}")]
    ResponseMismatch(String),

    #[error("Exchange is {actual}, expected {expected}")]
    ExchangeState {
        expected: &'static str,
        actual: &'static str,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl DomainError {
    /// No usable reply came back from the server.
    pub fn is_transport_error(&self) -> bool {
        matches!(
            self,
            DomainError::Transport { .. } | DomainError::QueryTimeout { .. }
        )
    }

    /// A reply came back but cannot be trusted.
    pub fn is_bad_reply(&self) -> bool {
        matches!(
            self,
            DomainError::Protocol(_) | DomainError::ResponseMismatch(_)
        )
    }
}
