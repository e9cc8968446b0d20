pub mod transport;

pub use transport::udp::UdpTransport;
