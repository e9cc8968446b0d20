//! Ferrous Dig Infrastructure Layer
//!
//! Adapters behind the application ports: UDP transport and the
//! resolv.conf reader.
pub mod dns;
pub mod system;
