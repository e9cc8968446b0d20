pub mod udp;

pub use ferrous_dig_application::ports::{DnsTransport, TransportResponse};
