use super::{Opcode, ResponseCode};

/// Size of the fixed header on the wire.
pub const HEADER_LEN: usize = 12;

const QR: u16 = 0x8000;
const AA: u16 = 0x0400;
const TC: u16 = 0x0200;
const RD: u16 = 0x0100;
const RA: u16 = 0x0080;
const Z: u16 = 0x0040;
const AD: u16 = 0x0020;
const CD: u16 = 0x0010;

/// Message header (RFC 1035 §4.1.1, AD/CD from RFC 4035).
///
/// The four counts mirror the section lengths of the owning [`super::Message`].
/// The encoder always recomputes them, so a stale value here never reaches
/// the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Header {
    pub id: u16,
    pub qr: bool,
    pub opcode: Opcode,
    pub aa: bool,
    pub tc: bool,
    pub rd: bool,
    pub ra: bool,
    pub z: bool,
    pub ad: bool,
    pub cd: bool,
    pub rcode: ResponseCode,
    pub qdcount: u16,
    pub ancount: u16,
    pub nscount: u16,
    pub arcount: u16,
}

impl Header {
    /// Packs the second and third header bytes.
    pub fn flags(&self) -> u16 {
        let mut flags = ((self.opcode.to_u8() as u16) << 11) | self.rcode.to_u8() as u16;
        for (set, bit) in [
            (self.qr, QR),
            (self.aa, AA),
            (self.tc, TC),
            (self.rd, RD),
            (self.ra, RA),
            (self.z, Z),
            (self.ad, AD),
            (self.cd, CD),
        ] {
            if set {
                flags |= bit;
            }
        }
        flags
    }

    /// Builds a header from its id and packed flags; counts start at zero.
    pub fn from_flags(id: u16, flags: u16) -> Self {
        Self {
            id,
            qr: flags & QR != 0,
            opcode: Opcode::from_u8(((flags >> 11) & 0x0F) as u8),
            aa: flags & AA != 0,
            tc: flags & TC != 0,
            rd: flags & RD != 0,
            ra: flags & RA != 0,
            z: flags & Z != 0,
            ad: flags & AD != 0,
            cd: flags & CD != 0,
            rcode: ResponseCode::from_u8((flags & 0x0F) as u8),
            qdcount: 0,
            ancount: 0,
            nscount: 0,
            arcount: 0,
        }
    }

    /// Lower-case names of the set flags, in dig order.
    pub fn flag_names(&self) -> Vec<&'static str> {
        [
            (self.qr, "qr"),
            (self.aa, "aa"),
            (self.tc, "tc"),
            (self.rd, "rd"),
            (self.ra, "ra"),
            (self.ad, "ad"),
            (self.cd, "cd"),
        ]
        .into_iter()
        .filter_map(|(set, name)| set.then_some(name))
        .collect()
    }
}
