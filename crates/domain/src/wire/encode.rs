use super::WireWriter;
use crate::dns_message::{Message, Question, ResourceRecord};
use crate::errors::WireError;

/// Encodes `message` into wire format.
///
/// The header counts written are the actual section lengths; whatever the
/// caller left in `message.header` for them is ignored.
pub fn encode(message: &Message) -> Result<Vec<u8>, WireError> {
    let mut header = message.header;
    header.qdcount = section_count(message.questions.len(), "question")?;
    header.ancount = section_count(message.answers.len(), "answer")?;
    header.nscount = section_count(message.authorities.len(), "authority")?;
    header.arcount = section_count(message.additionals.len(), "additional")?;

    let mut writer = WireWriter::with_capacity(512);
    writer.write_u16(header.id);
    writer.write_u16(header.flags());
    writer.write_u16(header.qdcount);
    writer.write_u16(header.ancount);
    writer.write_u16(header.nscount);
    writer.write_u16(header.arcount);

    for question in &message.questions {
        write_question(&mut writer, question)?;
    }
    for record in message
        .answers
        .iter()
        .chain(&message.authorities)
        .chain(&message.additionals)
    {
        write_record(&mut writer, record)?;
    }

    Ok(writer.into_bytes())
}

fn section_count(len: usize, section: &str) -> Result<u16, WireError> {
    u16::try_from(len).map_err(|_| {
        WireError::Encode(format!(
            "{} section has {} entries, maximum is {}",
            section,
            len,
            u16::MAX
        ))
    })
}

fn write_question(writer: &mut WireWriter, question: &Question) -> Result<(), WireError> {
    writer.write_name(&question.name)?;
    writer.write_u16(question.qtype.to_u16());
    writer.write_u16(question.qclass.to_u16());
    Ok(())
}

fn write_record(writer: &mut WireWriter, record: &ResourceRecord) -> Result<(), WireError> {
    if record.rdlength as usize != record.rdata.len() {
        return Err(WireError::Encode(format!(
            "record '{}' declares {} bytes of rdata but carries {}",
            record.name,
            record.rdlength,
            record.rdata.len()
        )));
    }

    writer.write_name(&record.name)?;
    writer.write_u16(record.rtype.to_u16());
    writer.write_u16(record.class.to_u16());
    writer.write_u32(record.ttl);
    writer.write_u16(record.rdlength);
    writer.write_bytes(&record.rdata);
    Ok(())
}
