use async_trait::async_trait;
use ferrous_dig_domain::DomainError;
use std::net::SocketAddr;
use std::time::Duration;

#[derive(Debug)]
pub struct TransportResponse {
    /// Reply datagram, cut to the bytes actually received
    pub bytes: Vec<u8>,

    pub protocol_used: &'static str,
}

/// Moves one encoded query to a server and brings back one reply.
#[async_trait]
pub trait DnsTransport: Send + Sync {
    async fn send(
        &self,
        server: SocketAddr,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError>;

    fn protocol_name(&self) -> &'static str;
}
