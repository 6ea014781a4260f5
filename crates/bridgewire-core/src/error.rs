/// Errors outside the wire codec itself, raised when converting records to
/// and from `bitcoin` types. Decode failures are [`crate::CodecError`].
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("outpoint hash must be 32 bytes to form a txid, got {0}")]
    InvalidTxidLength(usize),
}
