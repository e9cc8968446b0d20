#![allow(dead_code)]
use ferrous_dig_domain::{
    DomainName, Header, Message, MessageBuilder, RecordClass, RecordType, ResourceRecord,
    ResponseCode,
};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Builds the reply a recursive resolver would send for a query.
pub struct ResponseBuilder {
    query: Message,
    rcode: ResponseCode,
    answers: Vec<ResourceRecord>,
    authorities: Vec<ResourceRecord>,
    additionals: Vec<ResourceRecord>,
}

impl ResponseBuilder {
    pub fn for_query(query: &Message) -> Self {
        Self {
            query: query.clone(),
            rcode: ResponseCode::NoError,
            answers: vec![],
            authorities: vec![],
            additionals: vec![],
        }
    }

    pub fn answer(mut self, address: &str, ttl: u32) -> Self {
        let name = self.query.questions[0].name.clone();
        let address = Ipv4Addr::from_str(address).expect("Invalid IPv4 address");
        self.answers.push(ResourceRecord::a(name, ttl, address));
        self
    }

    pub fn authority(mut self, record: ResourceRecord) -> Self {
        self.authorities.push(record);
        self
    }

    pub fn additional(mut self, record: ResourceRecord) -> Self {
        self.additionals.push(record);
        self
    }

    pub fn rcode(mut self, rcode: ResponseCode) -> Self {
        self.rcode = rcode;
        self
    }

    pub fn build(self) -> Message {
        let header = Header {
            qr: true,
            ra: true,
            rcode: self.rcode,
            qdcount: self.query.questions.len() as u16,
            ancount: self.answers.len() as u16,
            nscount: self.authorities.len() as u16,
            arcount: self.additionals.len() as u16,
            ..self.query.header
        };
        Message {
            header,
            questions: self.query.questions,
            answers: self.answers,
            authorities: self.authorities,
            additionals: self.additionals,
        }
    }
}

pub fn example_query(id: u16) -> Message {
    MessageBuilder::build_query_with_id(id, "example.com", RecordType::A, RecordClass::IN)
        .expect("example.com is a valid name")
}

pub fn name(s: &str) -> DomainName {
    DomainName::parse(s).expect("Invalid domain name")
}

/// Reply to an `example.com A` query as servers send it: the answer owner
/// name is a compression pointer back to the question (offset 12).
pub fn compressed_example_reply(id: u16) -> Vec<u8> {
    let mut buf = Vec::new();
    buf.extend_from_slice(&id.to_be_bytes());
    buf.extend_from_slice(&[0x81, 0x80]);
    buf.extend_from_slice(&[0x00, 0x01, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00]);
    buf.extend_from_slice(b"\x07example\x03com\x00");
    buf.extend_from_slice(&[0x00, 0x01, 0x00, 0x01]);
    buf.extend_from_slice(&[
        0xc0, 0x0c, // pointer to offset 12
        0x00, 0x01, // A
        0x00, 0x01, // IN
        0x00, 0x00, 0x01, 0x2c, // ttl 300
        0x00, 0x04, // rdlength
        93, 184, 216, 34,
    ]);
    buf
}
