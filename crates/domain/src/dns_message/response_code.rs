use std::fmt;

/// Four-bit RCODE field of the header (RFC 1035, RFC 2136).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ResponseCode {
    #[default]
    NoError,
    FormErr,
    ServFail,
    NXDomain,
    NotImp,
    Refused,
    YXDomain,
    YXRRSet,
    NXRRSet,
    NotAuth,
    NotZone,
    Unknown(u8),
}

impl ResponseCode {
    pub fn to_u8(&self) -> u8 {
        match self {
            ResponseCode::NoError => 0,
            ResponseCode::FormErr => 1,
            ResponseCode::ServFail => 2,
            ResponseCode::NXDomain => 3,
            ResponseCode::NotImp => 4,
            ResponseCode::Refused => 5,
            ResponseCode::YXDomain => 6,
            ResponseCode::YXRRSet => 7,
            ResponseCode::NXRRSet => 8,
            ResponseCode::NotAuth => 9,
            ResponseCode::NotZone => 10,
            ResponseCode::Unknown(code) => *code & 0x0F,
        }
    }

    pub fn from_u8(code: u8) -> Self {
        match code & 0x0F {
            0 => ResponseCode::NoError,
            1 => ResponseCode::FormErr,
            2 => ResponseCode::ServFail,
            3 => ResponseCode::NXDomain,
            4 => ResponseCode::NotImp,
            5 => ResponseCode::Refused,
            6 => ResponseCode::YXDomain,
            7 => ResponseCode::YXRRSet,
            8 => ResponseCode::NXRRSet,
            9 => ResponseCode::NotAuth,
            10 => ResponseCode::NotZone,
            other => ResponseCode::Unknown(other),
        }
    }

    /// Status mnemonic as printed in the `->>HEADER<<-` line.
    pub fn as_status(&self) -> Option<&'static str> {
        match self {
            ResponseCode::NoError => Some("NOERROR"),
            ResponseCode::FormErr => Some("FORMERR"),
            ResponseCode::ServFail => Some("SERVFAIL"),
            ResponseCode::NXDomain => Some("NXDOMAIN"),
            ResponseCode::NotImp => Some("NOTIMP"),
            ResponseCode::Refused => Some("REFUSED"),
            ResponseCode::YXDomain => Some("YXDOMAIN"),
            ResponseCode::YXRRSet => Some("YXRRSET"),
            ResponseCode::NXRRSet => Some("NXRRSET"),
            ResponseCode::NotAuth => Some("NOTAUTH"),
            ResponseCode::NotZone => Some("NOTZONE"),
            ResponseCode::Unknown(_) => None,
        }
    }
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_status() {
            Some(status) => write!(f, "{}", status),
            None => write!(f, "unknown({})", self.to_u8()),
        }
    }
}
