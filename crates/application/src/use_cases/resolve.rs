use super::exchange::Exchange;
use crate::ports::{DnsTransport, ResolverConfigProvider};
use ferrous_dig_domain::{DomainError, Message, MessageBuilder, RecordClass, RecordType};
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Outcome of one successful lookup.
#[derive(Debug, Clone)]
pub struct Lookup {
    pub query: Message,
    pub response: Message,
    pub server: SocketAddr,
    pub elapsed: Duration,
    /// Size of the reply datagram in bytes
    pub response_size: usize,
}

/// Use case: send one `IN A` query to a nameserver and return its reply
pub struct ResolveUseCase {
    resolvers: Arc<dyn ResolverConfigProvider>,
    transport: Arc<dyn DnsTransport>,
    port: u16,
    timeout: Duration,
}

impl ResolveUseCase {
    pub fn new(
        resolvers: Arc<dyn ResolverConfigProvider>,
        transport: Arc<dyn DnsTransport>,
        port: u16,
        timeout: Duration,
    ) -> Self {
        Self {
            resolvers,
            transport,
            port,
            timeout,
        }
    }

    /// Queries the first nameserver from the resolver configuration.
    pub async fn execute(&self, domain: &str) -> Result<Lookup, DomainError> {
        let nameservers = self.resolvers.nameservers().await?;
        let server = nameservers
            .first()
            .ok_or(DomainError::EmptyResolverList)?;

        debug!(
            server = %server,
            configured = nameservers.len(),
            "Using first configured nameserver"
        );

        self.execute_with_server(server, domain).await
    }

    /// Queries `server` directly, bypassing the resolver configuration.
    pub async fn execute_with_server(
        &self,
        server: &str,
        domain: &str,
    ) -> Result<Lookup, DomainError> {
        let server = resolver_socket_addr(server, self.port)?;
        let query = MessageBuilder::build_query(domain, RecordType::A, RecordClass::IN)?;

        let header = &query.header;
        debug!(
            id = header.id,
            opcode = %header.opcode,
            flags = ?header.flag_names(),
            qdcount = header.qdcount,
            domain = %domain,
            "Built query"
        );

        let mut exchange = Exchange::new(query);
        let bytes = exchange.begin()?;

        let start = Instant::now();
        let reply = self.transport.send(server, &bytes, self.timeout).await?;
        let elapsed = start.elapsed();

        debug!(
            server = %server,
            protocol = reply.protocol_used,
            bytes = reply.bytes.len(),
            elapsed_ms = elapsed.as_millis() as u64,
            "Reply received"
        );

        let response = exchange.complete(&reply.bytes)?;

        info!(
            domain = %domain,
            server = %server,
            rcode = %response.header.rcode,
            answers = response.answers.len(),
            "Lookup complete"
        );

        Ok(Lookup {
            query: exchange.into_query(),
            response,
            server,
            elapsed,
            response_size: reply.bytes.len(),
        })
    }
}

/// Turns a configured nameserver into a socket address.
///
/// Accepts a bare IP (`port` is applied) or an explicit `ip:port` /
/// `[v6]:port`.
pub fn resolver_socket_addr(address: &str, port: u16) -> Result<SocketAddr, DomainError> {
    let address = address.trim();

    if let Ok(addr) = address.parse::<SocketAddr>() {
        return Ok(addr);
    }

    let bare = address
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .unwrap_or(address);

    bare.parse::<IpAddr>()
        .map(|ip| SocketAddr::new(ip, port))
        .map_err(|_| DomainError::InvalidResolverAddress(address.to_string()))
}
