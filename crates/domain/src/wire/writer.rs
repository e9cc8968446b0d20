use crate::dns_message::{DomainName, MAX_LABEL_LEN, MAX_NAME_LEN};
use crate::errors::WireError;

/// Append-only big-endian writer backing the encoder.
#[derive(Debug, Default)]
pub struct WireWriter {
    buf: Vec<u8>,
}

impl WireWriter {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    pub fn write_u8(&mut self, value: u8) {
        self.buf.push(value);
    }

    pub fn write_u16(&mut self, value: u16) {
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    pub fn write_u32(&mut self, value: u32) {
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Writes `name` as uncompressed length-prefixed labels.
    pub fn write_name(&mut self, name: &DomainName) -> Result<(), WireError> {
        for label in name.labels() {
            if label.is_empty() {
                return Err(WireError::Encode(format!("empty label in '{}'", name)));
            }
            if label.len() > MAX_LABEL_LEN {
                return Err(WireError::Encode(format!(
                    "label of {} bytes in '{}' exceeds {}",
                    label.len(),
                    name,
                    MAX_LABEL_LEN
                )));
            }
        }
        if name.encoded_len() > MAX_NAME_LEN {
            return Err(WireError::Encode(format!(
                "name '{}' encodes to {} bytes, maximum is {}",
                name,
                name.encoded_len(),
                MAX_NAME_LEN
            )));
        }

        for label in name.labels() {
            self.write_u8(label.len() as u8);
            self.write_bytes(label);
        }
        self.write_u8(0);
        Ok(())
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}
