/// Append-only writer over a growable byte buffer.
///
/// Writes never fail. Integers are fixed-width little-endian; variable
/// length fields carry a CompactSize prefix (see [`Sink::write_var_uint`]).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sink {
    buf: Vec<u8>,
}

impl Sink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    pub fn write_u8(&mut self, value: u8) {
        self.buf.push(value);
    }

    pub fn write_bool(&mut self, value: bool) {
        self.write_u8(u8::from(value));
    }

    pub fn write_u16(&mut self, value: u16) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    pub fn write_u32(&mut self, value: u32) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    pub fn write_u64(&mut self, value: u64) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    /// Two's complement, little-endian.
    pub fn write_i64(&mut self, value: i64) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    /// Raw bytes with no length prefix.
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// CompactSize length prefix: one byte below `0xFD`, otherwise a marker
    /// byte (`0xFD`/`0xFE`/`0xFF`) followed by a u16/u32/u64. Always emits
    /// the shortest form.
    pub fn write_var_uint(&mut self, value: u64) {
        match value {
            0..=0xFC => self.write_u8(value as u8),
            0xFD..=0xFFFF => {
                self.write_u8(0xFD);
                self.write_u16(value as u16);
            }
            0x1_0000..=0xFFFF_FFFF => {
                self.write_u8(0xFE);
                self.write_u32(value as u32);
            }
            _ => {
                self.write_u8(0xFF);
                self.write_u64(value);
            }
        }
    }

    pub fn write_var_bytes(&mut self, bytes: &[u8]) {
        self.write_var_uint(bytes.len() as u64);
        self.write_bytes(bytes);
    }

    /// Same layout as [`Sink::write_var_bytes`] over the UTF-8 bytes.
    pub fn write_string(&mut self, value: &str) {
        self.write_var_bytes(value.as_bytes());
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}

impl AsRef<[u8]> for Sink {
    fn as_ref(&self) -> &[u8] {
        &self.buf
    }
}

impl From<Sink> for Vec<u8> {
    fn from(sink: Sink) -> Self {
        sink.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_are_little_endian() {
        let mut sink = Sink::new();
        sink.write_u16(0x0102);
        sink.write_u32(0x01020304);
        sink.write_u64(0x0102030405060708);
        assert_eq!(
            sink.as_bytes(),
            &[
                0x02, 0x01, //
                0x04, 0x03, 0x02, 0x01, //
                0x08, 0x07, 0x06, 0x05, 0x04, 0x03, 0x02, 0x01,
            ]
        );
    }

    #[test]
    fn negative_i64_is_twos_complement() {
        let mut sink = Sink::new();
        sink.write_i64(-42);
        assert_eq!(
            sink.as_bytes(),
            &[0xD6, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF]
        );
    }

    #[test]
    fn var_uint_uses_shortest_form_at_each_boundary() {
        let cases: &[(u64, &[u8])] = &[
            (0, &[0x00]),
            (0xFC, &[0xFC]),
            (0xFD, &[0xFD, 0xFD, 0x00]),
            (0xFFFF, &[0xFD, 0xFF, 0xFF]),
            (0x1_0000, &[0xFE, 0x00, 0x00, 0x01, 0x00]),
            (0xFFFF_FFFF, &[0xFE, 0xFF, 0xFF, 0xFF, 0xFF]),
            (
                0x1_0000_0000,
                &[0xFF, 0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00],
            ),
        ];
        for (value, expected) in cases {
            let mut sink = Sink::new();
            sink.write_var_uint(*value);
            assert_eq!(sink.as_bytes(), *expected, "value {value:#x}");
        }
    }

    #[test]
    fn string_and_var_bytes_share_layout() {
        let mut a = Sink::new();
        a.write_string("abc");
        let mut b = Sink::new();
        b.write_var_bytes(b"abc");
        assert_eq!(a, b);
        assert_eq!(a.into_bytes(), vec![0x03, b'a', b'b', b'c']);
    }

    #[test]
    fn bool_is_single_byte() {
        let mut sink = Sink::with_capacity(2);
        sink.write_bool(true);
        sink.write_bool(false);
        assert_eq!(sink.len(), 2);
        assert_eq!(Vec::from(sink), vec![1, 0]);
    }
}
