use super::WireReader;
use crate::dns_message::{DomainName, MAX_NAME_LEN};
use crate::errors::WireError;

/// Upper bound on compression pointers followed while reading one name.
pub const MAX_POINTER_HOPS: usize = 64;

const POINTER: u8 = 0xC0;

/// Reads a possibly compressed name at the reader's position.
///
/// On success the reader sits just past the name as it appears in place:
/// after the terminating zero, or after the first pointer when the name was
/// compressed. Pointers must target an offset strictly before themselves, at
/// most [`MAX_POINTER_HOPS`] of them are followed, and the expanded name may
/// not exceed [`MAX_NAME_LEN`] bytes.
pub(crate) fn read_name(reader: &mut WireReader<'_>) -> Result<DomainName, WireError> {
    let mut pos = reader.position();
    let mut resume_at: Option<usize> = None;
    let mut labels = Vec::new();
    let mut encoded_len = 1;
    let mut hops = 0;

    loop {
        let len = reader.byte_at(pos)?;
        match len & POINTER {
            0x00 if len == 0 => {
                pos += 1;
                break;
            }
            0x00 => {
                let len = len as usize;
                encoded_len += len + 1;
                if encoded_len > MAX_NAME_LEN {
                    return Err(malformed(pos, "name exceeds 255 bytes"));
                }
                labels.push(reader.slice_at(pos + 1, len)?.to_vec());
                pos += len + 1;
            }
            POINTER => {
                let low = reader.byte_at(pos + 1)?;
                let target = (((len & !POINTER) as usize) << 8) | low as usize;
                if target >= pos {
                    return Err(malformed(pos, "compression pointer does not point backwards"));
                }
                hops += 1;
                if hops > MAX_POINTER_HOPS {
                    return Err(malformed(pos, "too many compression pointers"));
                }
                resume_at.get_or_insert(pos + 2);
                pos = target;
            }
            _ => return Err(malformed(pos, "reserved label type")),
        }
    }

    reader.seek(resume_at.unwrap_or(pos));
    Ok(DomainName::from_labels(labels))
}

fn malformed(offset: usize, reason: &'static str) -> WireError {
    WireError::MalformedName { offset, reason }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_at(buf: &[u8], offset: usize) -> (Result<DomainName, WireError>, usize) {
        let mut reader = WireReader::new(buf);
        reader.seek(offset);
        let result = read_name(&mut reader);
        (result, reader.position())
    }

    #[test]
    fn test_plain_name() {
        let buf = b"\x03www\x07example\x03com\x00\xFF";
        let (name, pos) = read_at(buf, 0);
        assert_eq!(name.unwrap().to_string(), "www.example.com.");
        assert_eq!(pos, 17);
    }

    #[test]
    fn test_root_name() {
        let (name, pos) = read_at(&[0x00], 0);
        assert!(name.unwrap().is_root());
        assert_eq!(pos, 1);
    }

    #[test]
    fn test_pointer_resumes_after_pointer() {
        // "example.com" at 0, then "www" + pointer to 0 at 13.
        let mut buf = b"\x07example\x03com\x00".to_vec();
        buf.extend_from_slice(b"\x03www\xC0\x00\xAA");

        let (name, pos) = read_at(&buf, 13);
        assert_eq!(name.unwrap().to_string(), "www.example.com.");
        assert_eq!(pos, 19);
    }

    #[test]
    fn test_chained_pointers() {
        let mut buf = b"\x03com\x00".to_vec(); // 0..5
        buf.extend_from_slice(b"\x07example\xC0\x00"); // 5..15
        buf.extend_from_slice(b"\x03www\xC0\x05"); // 15..21

        let (name, pos) = read_at(&buf, 15);
        assert_eq!(name.unwrap().to_string(), "www.example.com.");
        assert_eq!(pos, 21);
    }

    #[test]
    fn test_self_pointer_is_malformed() {
        let (name, _) = read_at(&[0xC0, 0x00], 0);
        assert!(matches!(name, Err(WireError::MalformedName { .. })));
    }

    #[test]
    fn test_forward_pointer_is_malformed() {
        let buf = [0xC0, 0x02, 0x00];
        let (name, _) = read_at(&buf, 0);
        assert!(matches!(name, Err(WireError::MalformedName { .. })));
    }

    #[test]
    fn test_cycle_through_labels_is_malformed() {
        // 0: "a" label, 2: pointer to 4, 4: pointer to 0.
        // The pointer at 2 points forward and is rejected before any cycle.
        let buf = [0x01, b'a', 0xC0, 0x04, 0xC0, 0x00];
        let (name, _) = read_at(&buf, 4);
        assert!(matches!(name, Err(WireError::MalformedName { .. })));
    }

    #[test]
    fn test_reserved_label_types_are_malformed() {
        let (extended, _) = read_at(&[0x40, 0x00], 0);
        assert!(matches!(extended, Err(WireError::MalformedName { .. })));

        let (reserved, _) = read_at(&[0x80, 0x00], 0);
        assert!(matches!(reserved, Err(WireError::MalformedName { .. })));
    }

    #[test]
    fn test_truncated_label_overruns() {
        let (name, _) = read_at(b"\x07exam", 0);
        assert!(matches!(name, Err(WireError::BufferOverrun { .. })));
    }

    #[test]
    fn test_truncated_pointer_overruns() {
        let (name, _) = read_at(&[0x00, 0xC0], 1);
        assert!(matches!(name, Err(WireError::BufferOverrun { .. })));
    }

    fn pointer_chain(pointers: usize) -> Vec<u8> {
        // Root name at 0, then each pointer targets the one before it.
        let mut buf = vec![0x00];
        for k in 0..pointers {
            let target = if k == 0 { 0 } else { 1 + 2 * (k - 1) };
            buf.push(POINTER | (target >> 8) as u8);
            buf.push(target as u8);
        }
        buf
    }

    #[test]
    fn test_pointer_hops_are_capped() {
        let at_limit = pointer_chain(MAX_POINTER_HOPS);
        let (name, pos) = read_at(&at_limit, at_limit.len() - 2);
        assert!(name.unwrap().is_root());
        assert_eq!(pos, at_limit.len());

        let over_limit = pointer_chain(MAX_POINTER_HOPS + 1);
        let (name, _) = read_at(&over_limit, over_limit.len() - 2);
        assert!(matches!(name, Err(WireError::MalformedName { .. })));
    }

    #[test]
    fn test_expanded_name_length_is_capped() {
        // Five 63-byte labels laid out back to back expand past 255 bytes.
        let mut buf = Vec::new();
        for _ in 0..5 {
            buf.push(63);
            buf.extend_from_slice(&[b'x'; 63]);
        }
        buf.push(0);

        let (name, _) = read_at(&buf, 0);
        assert!(matches!(name, Err(WireError::MalformedName { .. })));
    }
}
