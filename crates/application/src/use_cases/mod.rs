pub mod exchange;
pub mod resolve;

pub use exchange::{verify_response, Exchange, ExchangeState};
pub use resolve::{resolver_socket_addr, Lookup, ResolveUseCase};
