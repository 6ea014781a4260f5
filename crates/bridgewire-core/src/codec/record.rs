use super::{CodecError, Sink, Source};

/// A record with a fixed, canonical wire layout.
///
/// `serialize` writes fields in declaration order and cannot fail.
/// `deserialize` reads them back in the same order and either returns the
/// whole record or a [`CodecError::Field`] naming the first field it could
/// not read.
pub trait WireRecord: Sized {
    /// Record name used in decode errors.
    const NAME: &'static str;

    fn serialize(&self, sink: &mut Sink);

    fn deserialize(source: &mut Source<'_>) -> Result<Self, CodecError>;

    /// Encode into a fresh buffer.
    fn to_bytes(&self) -> Vec<u8> {
        let mut sink = Sink::new();
        self.serialize(&mut sink);
        sink.into_bytes()
    }

    /// Decode a buffer holding exactly one record. Bytes left over after the
    /// record are an error.
    fn from_bytes(bytes: &[u8]) -> Result<Self, CodecError> {
        let mut source = Source::new(bytes);
        let record = Self::deserialize(&mut source)?;
        if !source.is_exhausted() {
            return Err(CodecError::TrailingBytes {
                record: Self::NAME,
                remaining: source.remaining(),
            });
        }
        Ok(record)
    }
}
