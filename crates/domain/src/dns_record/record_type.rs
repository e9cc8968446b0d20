use std::fmt;

/// Resource record TYPE / QTYPE (RFC 1035 §3.2.2, §3.2.3).
///
/// Codes outside the modeled set decode into `Unknown` so that a reply carrying
/// newer record types can still be parsed and printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    A,
    NS,
    CNAME,
    SOA,
    PTR,
    MX,
    TXT,
    AAAA,
    SRV,
    OPT,
    ANY,
    Unknown(u16),
}

impl RecordType {
    pub fn to_u16(&self) -> u16 {
        match self {
            RecordType::A => 1,
            RecordType::NS => 2,
            RecordType::CNAME => 5,
            RecordType::SOA => 6,
            RecordType::PTR => 12,
            RecordType::MX => 15,
            RecordType::TXT => 16,
            RecordType::AAAA => 28,
            RecordType::SRV => 33,
            RecordType::OPT => 41,
            RecordType::ANY => 255,
            RecordType::Unknown(code) => *code,
        }
    }

    pub fn from_u16(code: u16) -> Self {
        match code {
            1 => RecordType::A,
            2 => RecordType::NS,
            5 => RecordType::CNAME,
            6 => RecordType::SOA,
            12 => RecordType::PTR,
            15 => RecordType::MX,
            16 => RecordType::TXT,
            28 => RecordType::AAAA,
            33 => RecordType::SRV,
            41 => RecordType::OPT,
            255 => RecordType::ANY,
            other => RecordType::Unknown(other),
        }
    }

    /// Mnemonic for modeled types, `None` for `Unknown`.
    pub fn as_str(&self) -> Option<&'static str> {
        match self {
            RecordType::A => Some("A"),
            RecordType::NS => Some("NS"),
            RecordType::CNAME => Some("CNAME"),
            RecordType::SOA => Some("SOA"),
            RecordType::PTR => Some("PTR"),
            RecordType::MX => Some("MX"),
            RecordType::TXT => Some("TXT"),
            RecordType::AAAA => Some("AAAA"),
            RecordType::SRV => Some("SRV"),
            RecordType::OPT => Some("OPT"),
            RecordType::ANY => Some("ANY"),
            RecordType::Unknown(_) => None,
        }
    }
}

impl From<u16> for RecordType {
    fn from(code: u16) -> Self {
        Self::from_u16(code)
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_str() {
            Some(name) => write!(f, "{}", name),
            None => write!(f, "unknown({})", self.to_u16()),
        }
    }
}
