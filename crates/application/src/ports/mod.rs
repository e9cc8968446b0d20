mod dns_transport;
mod resolver_config;

pub use dns_transport::{DnsTransport, TransportResponse};
pub use resolver_config::ResolverConfigProvider;
