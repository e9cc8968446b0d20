//! Ferrous Dig Domain Layer
//!
//! DNS message model, RFC 1035 wire codec and query construction.
pub mod config;
pub mod dns_message;
pub mod dns_record;
pub mod errors;
pub mod wire;

pub use config::{CliOverrides, Config, ConfigError, LoggingConfig, ResolverConfig};
pub use dns_message::{
    DomainName, Header, Message, MessageBuilder, Opcode, Question, ResourceRecord, ResponseCode,
};
pub use dns_record::{RecordClass, RecordType};
pub use errors::{DomainError, WireError};
