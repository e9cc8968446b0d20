//! DNS Message Builder
//!
//! Constructs outbound query messages. The result is a plain [`Message`];
//! serializing it is the wire codec's job.

use super::{DomainName, Header, Message, Opcode, Question, ResponseCode};
use crate::dns_record::{RecordClass, RecordType};
use crate::errors::DomainError;

/// Builds DNS query messages
pub struct MessageBuilder;

impl MessageBuilder {
    /// Build a standard recursive query with a random transaction id
    ///
    /// Creates a query with:
    /// - Random ID for request/response matching
    /// - RD (Recursion Desired) flag set
    /// - Single question section
    pub fn build_query(
        domain: &str,
        record_type: RecordType,
        record_class: RecordClass,
    ) -> Result<Message, DomainError> {
        Self::build_query_with_id(fastrand::u16(..), domain, record_type, record_class)
    }

    /// Same as [`MessageBuilder::build_query`] with a caller-chosen id.
    ///
    /// Deterministic: equal arguments always yield equal messages.
    pub fn build_query_with_id(
        id: u16,
        domain: &str,
        record_type: RecordType,
        record_class: RecordClass,
    ) -> Result<Message, DomainError> {
        let name = DomainName::parse(domain)?;

        let header = Header {
            id,
            qr: false,
            opcode: Opcode::Query,
            rd: true,
            rcode: ResponseCode::NoError,
            qdcount: 1,
            ..Header::default()
        };

        let mut message = Message::new(header);
        message
            .questions
            .push(Question::new(name, record_type, record_class));
        Ok(message)
    }
}
