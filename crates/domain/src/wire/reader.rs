use crate::errors::WireError;

/// Bounds-checked cursor over an immutable byte slice.
///
/// Every read either returns data that lies inside the slice or fails with
/// [`WireError::BufferOverrun`] without moving the cursor.
#[derive(Debug, Clone)]
pub struct WireReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> WireReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    pub fn buffer(&self) -> &'a [u8] {
        self.buf
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.buf.len().saturating_sub(self.pos)
    }

    pub(crate) fn seek(&mut self, pos: usize) {
        self.pos = pos.min(self.buf.len());
    }

    /// Byte at an absolute offset, without moving the cursor.
    pub fn byte_at(&self, offset: usize) -> Result<u8, WireError> {
        self.buf
            .get(offset)
            .copied()
            .ok_or_else(|| self.overrun(offset, 1))
    }

    /// `len` bytes at an absolute offset, without moving the cursor.
    pub fn slice_at(&self, offset: usize, len: usize) -> Result<&'a [u8], WireError> {
        offset
            .checked_add(len)
            .and_then(|end| self.buf.get(offset..end))
            .ok_or_else(|| self.overrun(offset, len))
    }

    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8], WireError> {
        let bytes = self.slice_at(self.pos, len)?;
        self.pos += len;
        Ok(bytes)
    }

    pub fn read_u8(&mut self) -> Result<u8, WireError> {
        let byte = self.byte_at(self.pos)?;
        self.pos += 1;
        Ok(byte)
    }

    pub fn read_u16(&mut self) -> Result<u16, WireError> {
        let bytes = self.read_bytes(2)?;
        Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
    }

    pub fn read_u32(&mut self) -> Result<u32, WireError> {
        let bytes = self.read_bytes(4)?;
        Ok(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    fn overrun(&self, offset: usize, needed: usize) -> WireError {
        WireError::BufferOverrun {
            offset,
            needed,
            len: self.buf.len(),
        }
    }
}
