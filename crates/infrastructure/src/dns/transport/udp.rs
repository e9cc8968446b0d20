//! UDP Transport for DNS queries (RFC 1035 §4.2.1)
//!
//! One datagram out, one datagram back. No TCP fallback: a reply with the
//! TC bit set is returned as received.

use super::{DnsTransport, TransportResponse};
use async_trait::async_trait;
use ferrous_dig_domain::DomainError;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::{debug, warn};

/// Receive buffer size used by [`UdpTransport::default`]
pub const DEFAULT_MAX_RESPONSE_SIZE: usize = 1024;

/// DNS over UDP transport
#[derive(Debug, Clone)]
pub struct UdpTransport {
    max_response_size: usize,
}

impl UdpTransport {
    /// Replies longer than `max_response_size` are cut at that length.
    pub fn new(max_response_size: usize) -> Self {
        Self { max_response_size }
    }

    pub fn max_response_size(&self) -> usize {
        self.max_response_size
    }

    async fn exchange(
        &self,
        socket: &UdpSocket,
        server: SocketAddr,
        message_bytes: &[u8],
    ) -> Result<Vec<u8>, DomainError> {
        let bytes_sent = socket
            .send_to(message_bytes, server)
            .await
            .map_err(|e| transport_error(server, format!("send failed: {}", e)))?;

        debug!(server = %server, bytes_sent, "UDP query sent");

        let mut recv_buf = vec![0u8; self.max_response_size];
        loop {
            let (bytes_received, from_addr) = socket
                .recv_from(&mut recv_buf)
                .await
                .map_err(|e| transport_error(server, format!("receive failed: {}", e)))?;

            if from_addr != server {
                warn!(
                    expected = %server,
                    received_from = %from_addr,
                    bytes = bytes_received,
                    "Ignoring UDP datagram from unexpected source"
                );
                continue;
            }

            recv_buf.truncate(bytes_received);
            debug!(server = %server, bytes_received, "UDP response received");
            return Ok(recv_buf);
        }
    }
}

impl Default for UdpTransport {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_RESPONSE_SIZE)
    }
}

#[async_trait]
impl DnsTransport for UdpTransport {
    async fn send(
        &self,
        server: SocketAddr,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        // Ephemeral port of the server's address family
        let bind_ip: IpAddr = if server.is_ipv4() {
            Ipv4Addr::UNSPECIFIED.into()
        } else {
            Ipv6Addr::UNSPECIFIED.into()
        };

        let socket = UdpSocket::bind(SocketAddr::new(bind_ip, 0))
            .await
            .map_err(|e| transport_error(server, format!("failed to bind UDP socket: {}", e)))?;

        let bytes = tokio::time::timeout(timeout, self.exchange(&socket, server, message_bytes))
            .await
            .map_err(|_| {
                warn!(server = %server, timeout_ms = timeout.as_millis() as u64, "UDP query timed out");
                DomainError::QueryTimeout {
                    server: server.to_string(),
                    timeout_ms: timeout.as_millis() as u64,
                }
            })??;

        Ok(TransportResponse {
            bytes,
            protocol_used: self.protocol_name(),
        })
    }

    fn protocol_name(&self) -> &'static str {
        "UDP"
    }
}

fn transport_error(server: SocketAddr, reason: String) -> DomainError {
    DomainError::Transport {
        server: server.to_string(),
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_udp_transport_creation() {
        let transport = UdpTransport::new(512);
        assert_eq!(transport.max_response_size(), 512);
        assert_eq!(transport.protocol_name(), "UDP");
    }

    #[test]
    fn test_udp_transport_default_buffer() {
        assert_eq!(
            UdpTransport::default().max_response_size(),
            DEFAULT_MAX_RESPONSE_SIZE
        );
    }

    #[tokio::test]
    async fn test_udp_transport_times_out_without_reply() {
        // Bound but never read, so the query goes unanswered.
        let silent = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let server = silent.local_addr().unwrap();

        let err = UdpTransport::default()
            .send(server, &[0u8; 12], Duration::from_millis(50))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::QueryTimeout { timeout_ms: 50, .. }));
    }
}
