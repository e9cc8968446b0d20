use super::DomainName;
use crate::dns_record::{RecordClass, RecordType};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub name: DomainName,

    pub qtype: RecordType,

    pub qclass: RecordClass,
}

impl Question {
    pub fn new(name: DomainName, qtype: RecordType, qclass: RecordClass) -> Self {
        Self {
            name,
            qtype,
            qclass,
        }
    }

    /// Same question as far as a resolver is concerned: names compare
    /// case-insensitively, type and class exactly.
    pub fn matches(&self, other: &Question) -> bool {
        self.qtype == other.qtype
            && self.qclass == other.qclass
            && self.name.eq_ignore_ascii_case(&other.name)
    }
}
