//! RFC 1035 §4 wire format.
//!
//! Encoding always emits uncompressed names. Decoding follows compression
//! pointers with bounded chains and never reads outside the input slice.

mod decode;
mod encode;
mod name;
mod reader;
mod writer;

pub use decode::decode;
pub use encode::encode;
pub use name::MAX_POINTER_HOPS;
pub use reader::WireReader;
pub use writer::WireWriter;
