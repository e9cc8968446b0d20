use super::DomainName;
use crate::dns_record::{RecordClass, RecordType};
use std::net::Ipv4Addr;

/// One answer, authority or additional entry with its rdata kept opaque.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    pub name: DomainName,

    pub rtype: RecordType,

    pub class: RecordClass,

    pub ttl: u32,

    /// Declared rdata length. The encoder refuses a record where this
    /// disagrees with `rdata.len()`.
    pub rdlength: u16,

    pub rdata: Vec<u8>,
}

impl ResourceRecord {
    /// Builds a record whose `rdlength` is taken from `rdata`.
    pub fn new(
        name: DomainName,
        rtype: RecordType,
        class: RecordClass,
        ttl: u32,
        rdata: Vec<u8>,
    ) -> Self {
        Self {
            name,
            rtype,
            class,
            ttl,
            rdlength: u16::try_from(rdata.len()).unwrap_or(u16::MAX),
            rdata,
        }
    }

    pub fn a(name: DomainName, ttl: u32, address: Ipv4Addr) -> Self {
        Self::new(
            name,
            RecordType::A,
            RecordClass::IN,
            ttl,
            address.octets().to_vec(),
        )
    }

    /// The address carried by an `IN A` record, if this is one.
    pub fn ipv4(&self) -> Option<Ipv4Addr> {
        if self.rtype != RecordType::A || self.class != RecordClass::IN {
            return None;
        }
        let octets: [u8; 4] = self.rdata.as_slice().try_into().ok()?;
        Some(Ipv4Addr::from(octets))
    }
}
