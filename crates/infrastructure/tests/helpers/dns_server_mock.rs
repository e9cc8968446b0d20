#![allow(dead_code)]
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::net::UdpSocket;
use tokio::sync::oneshot;

/// How the mock server reacts to each query.
#[derive(Debug, Clone)]
pub enum MockBehaviour {
    /// Echo id and question, answer with these A records.
    Answer(Vec<Ipv4Addr>),
    /// Never reply.
    Silent,
    /// Answer with the transaction id off by one.
    WrongId,
    /// Send a stray datagram from another socket first, then answer.
    StrayThenAnswer(Vec<Ipv4Addr>),
    /// Reply with these bytes verbatim.
    Raw(Vec<u8>),
}

pub struct MockDnsServer {
    addr: SocketAddr,
    queries: Arc<AtomicUsize>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    pub async fn start(behaviour: MockBehaviour) -> Result<Self, std::io::Error> {
        let socket = UdpSocket::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let stray = UdpSocket::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = socket.local_addr()?;
        let queries = Arc::new(AtomicUsize::new(0));

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();
        let counter = queries.clone();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        let Ok((len, peer)) = result else { continue };
                        counter.fetch_add(1, Ordering::SeqCst);
                        let query = &buf[..len];

                        let response = match &behaviour {
                            MockBehaviour::Silent => continue,
                            MockBehaviour::Answer(addrs) => build_mock_response(query, addrs),
                            MockBehaviour::WrongId => {
                                let mut response = build_mock_response(query, &[Ipv4Addr::LOCALHOST]);
                                if response.len() >= 2 {
                                    response[1] = response[1].wrapping_add(1);
                                }
                                response
                            }
                            MockBehaviour::StrayThenAnswer(addrs) => {
                                let decoy = build_mock_response(query, &[Ipv4Addr::new(6, 6, 6, 6)]);
                                let _ = stray.send_to(&decoy, peer).await;
                                build_mock_response(query, addrs)
                            }
                            MockBehaviour::Raw(bytes) => bytes.clone(),
                        };
                        let _ = socket.send_to(&response, peer).await;
                    }
                }
            }
        });

        Ok(Self {
            addr,
            queries,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn queries_received(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

/// Echoes the query's id and question section and appends one A record per
/// address, each owner name a pointer to the question (offset 12).
pub fn build_mock_response(query: &[u8], addrs: &[Ipv4Addr]) -> Vec<u8> {
    if query.len() < 12 {
        return vec![];
    }

    let mut response = Vec::with_capacity(512);

    response.extend_from_slice(&query[0..2]);
    response.push(0x81);
    response.push(0x80);
    response.extend_from_slice(&query[4..6]);
    response.extend_from_slice(&(addrs.len() as u16).to_be_bytes());
    response.extend_from_slice(&[0x00, 0x00, 0x00, 0x00]);
    response.extend_from_slice(&query[12..]);

    for addr in addrs {
        response.extend_from_slice(&[
            0xc0, 0x0c, // name
            0x00, 0x01, // A
            0x00, 0x01, // IN
            0x00, 0x00, 0x00, 0x3c, // ttl 60
            0x00, 0x04,
        ]);
        response.extend_from_slice(&addr.octets());
    }

    response
}
