//! Ferrous Dig Application Layer
//!
//! Ports for the outside world and the lookup use case driving one
//! query/response exchange.
pub mod ports;
pub mod use_cases;
