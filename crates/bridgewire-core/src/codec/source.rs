use super::error::CodecError;

/// Forward-only reader over a borrowed byte slice.
///
/// Every `next_*` call either returns a complete value and advances the
/// cursor, or fails and leaves the cursor where it was. Byte-string reads
/// borrow from the underlying slice instead of copying.
#[derive(Debug, Clone)]
pub struct Source<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Source<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Bytes consumed so far.
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    /// The unread tail of the input.
    pub fn rest(&self) -> &'a [u8] {
        &self.data[self.pos..]
    }

    /// Read exactly `len` raw bytes.
    pub fn next_bytes(&mut self, len: u64) -> Result<&'a [u8], CodecError> {
        let remaining = self.remaining();
        let len = usize::try_from(len)
            .ok()
            .filter(|&n| n <= remaining)
            .ok_or(CodecError::UnexpectedEof {
                needed: len,
                remaining,
            })?;
        let bytes = &self.data[self.pos..self.pos + len];
        self.pos += len;
        Ok(bytes)
    }

    fn next_array<const N: usize>(&mut self) -> Result<[u8; N], CodecError> {
        let bytes = self.next_bytes(N as u64)?;
        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        Ok(out)
    }

    pub fn next_u8(&mut self) -> Result<u8, CodecError> {
        let [byte] = self.next_array::<1>()?;
        Ok(byte)
    }

    pub fn next_bool(&mut self) -> Result<bool, CodecError> {
        let mut ahead = self.clone();
        let value = match ahead.next_u8()? {
            0 => false,
            1 => true,
            other => return Err(CodecError::InvalidBool(other)),
        };
        *self = ahead;
        Ok(value)
    }

    pub fn next_u16(&mut self) -> Result<u16, CodecError> {
        self.next_array().map(u16::from_le_bytes)
    }

    pub fn next_u32(&mut self) -> Result<u32, CodecError> {
        self.next_array().map(u32::from_le_bytes)
    }

    pub fn next_u64(&mut self) -> Result<u64, CodecError> {
        self.next_array().map(u64::from_le_bytes)
    }

    pub fn next_i64(&mut self) -> Result<i64, CodecError> {
        self.next_array().map(i64::from_le_bytes)
    }

    /// Read a CompactSize value, rejecting any encoding wider than the
    /// shortest one for its value.
    pub fn next_var_uint(&mut self) -> Result<u64, CodecError> {
        let mut ahead = self.clone();
        let marker = ahead.next_u8()?;
        let (value, min) = match marker {
            0xFD => (u64::from(ahead.next_u16()?), 0xFD),
            0xFE => (u64::from(ahead.next_u32()?), 0x1_0000),
            0xFF => (ahead.next_u64()?, 0x1_0000_0000),
            byte => (u64::from(byte), 0),
        };
        if value < min {
            return Err(CodecError::NonCanonicalVarUint { marker, value });
        }
        *self = ahead;
        Ok(value)
    }

    /// Read a CompactSize length followed by that many bytes.
    pub fn next_var_bytes(&mut self) -> Result<&'a [u8], CodecError> {
        let mut ahead = self.clone();
        let len = ahead.next_var_uint()?;
        let bytes = ahead.next_bytes(len)?;
        *self = ahead;
        Ok(bytes)
    }

    /// Read a length-prefixed UTF-8 string.
    pub fn next_string(&mut self) -> Result<&'a str, CodecError> {
        let mut ahead = self.clone();
        let text = std::str::from_utf8(ahead.next_var_bytes()?)?;
        *self = ahead;
        Ok(text)
    }
}
