use super::name::read_name;
use super::WireReader;
use crate::dns_message::{Header, Message, Question, ResourceRecord, HEADER_LEN};
use crate::dns_record::{RecordClass, RecordType};
use crate::errors::WireError;

/// Smallest possible question: root name + type + class.
const MIN_QUESTION_LEN: usize = 5;

/// Smallest possible record: root name + type + class + ttl + rdlength.
const MIN_RECORD_LEN: usize = 11;

/// Decodes an untrusted buffer into a [`Message`].
///
/// Sections are read in wire order with exactly as many entries as the
/// header announces, so a successful decode always has counts equal to the
/// section lengths. Bytes after the last record are ignored.
pub fn decode(buf: &[u8]) -> Result<Message, WireError> {
    if buf.len() < HEADER_LEN {
        return Err(WireError::TruncatedHeader {
            available: buf.len(),
        });
    }

    let mut reader = WireReader::new(buf);
    let id = reader.read_u16()?;
    let flags = reader.read_u16()?;
    let mut header = Header::from_flags(id, flags);
    header.qdcount = reader.read_u16()?;
    header.ancount = reader.read_u16()?;
    header.nscount = reader.read_u16()?;
    header.arcount = reader.read_u16()?;

    let mut questions = Vec::with_capacity(capacity(header.qdcount, &reader, MIN_QUESTION_LEN));
    for _ in 0..header.qdcount {
        questions.push(read_question(&mut reader)?);
    }

    let answers = read_section(&mut reader, header.ancount)?;
    let authorities = read_section(&mut reader, header.nscount)?;
    let additionals = read_section(&mut reader, header.arcount)?;

    Ok(Message {
        header,
        questions,
        answers,
        authorities,
        additionals,
    })
}

/// Caps preallocation at what the rest of the buffer could actually hold.
fn capacity(count: u16, reader: &WireReader<'_>, min_len: usize) -> usize {
    (count as usize).min(reader.remaining() / min_len)
}

fn read_question(reader: &mut WireReader<'_>) -> Result<Question, WireError> {
    let name = read_name(reader)?;
    let qtype = RecordType::from_u16(reader.read_u16()?);
    let qclass = RecordClass::from_u16(reader.read_u16()?);
    Ok(Question::new(name, qtype, qclass))
}

fn read_section(
    reader: &mut WireReader<'_>,
    count: u16,
) -> Result<Vec<ResourceRecord>, WireError> {
    let mut records = Vec::with_capacity(capacity(count, reader, MIN_RECORD_LEN));
    for _ in 0..count {
        records.push(read_record(reader)?);
    }
    Ok(records)
}

fn read_record(reader: &mut WireReader<'_>) -> Result<ResourceRecord, WireError> {
    let name = read_name(reader)?;
    let rtype = RecordType::from_u16(reader.read_u16()?);
    let class = RecordClass::from_u16(reader.read_u16()?);
    let ttl = reader.read_u32()?;
    let rdlength = reader.read_u16()?;

    let declared = rdlength as usize;
    if declared > reader.remaining() {
        return Err(WireError::TruncatedRecord {
            offset: reader.position(),
            declared,
            remaining: reader.remaining(),
        });
    }
    let rdata = reader.read_bytes(declared)?.to_vec();

    Ok(ResourceRecord {
        name,
        rtype,
        class,
        ttl,
        rdlength,
        rdata,
    })
}
