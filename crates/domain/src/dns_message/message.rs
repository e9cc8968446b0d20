use super::{Header, Question, ResourceRecord};
use crate::errors::WireError;
use crate::wire;
use std::net::Ipv4Addr;

/// A complete DNS message: header, one question section and three record
/// sections, in wire order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Message {
    pub header: Header,

    pub questions: Vec<Question>,

    pub answers: Vec<ResourceRecord>,

    pub authorities: Vec<ResourceRecord>,

    pub additionals: Vec<ResourceRecord>,
}

impl Message {
    pub fn new(header: Header) -> Self {
        Self {
            header,
            ..Self::default()
        }
    }

    /// Serializes to wire format. Header counts are derived from the
    /// sections, not taken from `self.header`.
    pub fn encode(&self) -> Result<Vec<u8>, WireError> {
        wire::encode(self)
    }

    /// Parses an untrusted wire-format buffer.
    pub fn decode(buf: &[u8]) -> Result<Self, WireError> {
        wire::decode(buf)
    }

    pub fn question(&self) -> Option<&Question> {
        self.questions.first()
    }

    /// Addresses from the `IN A` records of the answer section.
    pub fn ipv4_answers(&self) -> Vec<Ipv4Addr> {
        self.answers.iter().filter_map(ResourceRecord::ipv4).collect()
    }
}
