#![allow(dead_code)]

use async_trait::async_trait;
use ferrous_dig_application::ports::{DnsTransport, ResolverConfigProvider, TransportResponse};
use ferrous_dig_domain::{DomainError, Message, ResourceRecord};
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub struct MockResolverConfig {
    result: Result<Vec<String>, DomainError>,
}

impl MockResolverConfig {
    pub fn with_servers(servers: &[&str]) -> Self {
        Self {
            result: Ok(servers.iter().map(|s| s.to_string()).collect()),
        }
    }

    pub fn failing(error: DomainError) -> Self {
        Self { result: Err(error) }
    }
}

#[async_trait]
impl ResolverConfigProvider for MockResolverConfig {
    async fn nameservers(&self) -> Result<Vec<String>, DomainError> {
        self.result.clone()
    }
}

type Responder = dyn Fn(&Message) -> Result<Vec<u8>, DomainError> + Send + Sync;

#[derive(Debug, Clone)]
pub struct SentDatagram {
    pub server: SocketAddr,
    pub bytes: Vec<u8>,
    pub timeout: Duration,
}

/// Transport answering from a closure over the decoded query.
pub struct MockTransport {
    responder: Box<Responder>,
    sent: Arc<Mutex<Vec<SentDatagram>>>,
}

impl MockTransport {
    pub fn new<F>(responder: F) -> Self
    where
        F: Fn(&Message) -> Result<Vec<u8>, DomainError> + Send + Sync + 'static,
    {
        Self {
            responder: Box::new(responder),
            sent: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Answers every query with the given A records, mirroring id and question.
    pub fn answering(addresses: Vec<Ipv4Addr>) -> Self {
        Self::new(move |query| Ok(reply_with(query, &addresses).encode().unwrap()))
    }

    pub fn failing(error: DomainError) -> Self {
        Self::new(move |_| Err(error.clone()))
    }

    pub fn sent(&self) -> Vec<SentDatagram> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl DnsTransport for MockTransport {
    async fn send(
        &self,
        server: SocketAddr,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        self.sent.lock().unwrap().push(SentDatagram {
            server,
            bytes: message_bytes.to_vec(),
            timeout,
        });

        let query = Message::decode(message_bytes).unwrap();
        let bytes = (self.responder)(&query)?;
        Ok(TransportResponse {
            bytes,
            protocol_used: "MOCK",
        })
    }

    fn protocol_name(&self) -> &'static str {
        "MOCK"
    }
}

pub fn reply_with(query: &Message, addresses: &[Ipv4Addr]) -> Message {
    let mut reply = query.clone();
    reply.header.qr = true;
    reply.header.ra = true;
    let name = query.questions[0].name.clone();
    reply.answers = addresses
        .iter()
        .map(|addr| ResourceRecord::a(name.clone(), 300, *addr))
        .collect();
    reply.header.ancount = reply.answers.len() as u16;
    reply
}
