use bitcoin::hashes::Hash as _;
use bitcoin::Txid;

use crate::codec::{CodecError, Sink, Source, WireRecord, WithField};
use crate::error::CoreError;

/// Reference to a previous transaction output.
///
/// `hash` is carried as opaque bytes; its length is whatever the caller put
/// there and is not checked on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct OutPoint {
    #[serde(with = "crate::serde_hex")]
    pub hash: Vec<u8>,
    pub index: u32,
}

impl OutPoint {
    pub fn new(hash: impl Into<Vec<u8>>, index: u32) -> Self {
        Self {
            hash: hash.into(),
            index,
        }
    }
}

impl WireRecord for OutPoint {
    const NAME: &'static str = "OutPoint";

    fn serialize(&self, sink: &mut Sink) {
        sink.write_var_bytes(&self.hash);
        sink.write_u32(self.index);
    }

    fn deserialize(source: &mut Source<'_>) -> Result<Self, CodecError> {
        let hash = source.next_var_bytes().field(Self::NAME, "hash")?.to_vec();
        let index = source.next_u32().field(Self::NAME, "index")?;
        Ok(Self { hash, index })
    }
}

/// The txid is stored in its internal (little-endian) byte order, the same
/// bytes that appear in a serialized Bitcoin transaction input.
impl From<bitcoin::OutPoint> for OutPoint {
    fn from(op: bitcoin::OutPoint) -> Self {
        Self {
            hash: op.txid.to_byte_array().to_vec(),
            index: op.vout,
        }
    }
}

impl TryFrom<&OutPoint> for bitcoin::OutPoint {
    type Error = CoreError;

    fn try_from(op: &OutPoint) -> Result<Self, Self::Error> {
        let bytes = <[u8; 32]>::try_from(op.hash.as_slice())
            .map_err(|_| CoreError::InvalidTxidLength(op.hash.len()))?;
        Ok(bitcoin::OutPoint::new(Txid::from_byte_array(bytes), op.index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::txid_from_byte;

    #[test]
    fn layout_is_var_bytes_then_index() {
        let op = OutPoint::new(vec![0xAA, 0xBB], 3);
        assert_eq!(
            op.to_bytes(),
            vec![0x02, 0xAA, 0xBB, 0x03, 0x00, 0x00, 0x00]
        );
    }

    #[test]
    fn missing_index_names_the_field() {
        let err = OutPoint::from_bytes(&[0x01, 0xAA, 0x03, 0x00])
            .expect_err("two bytes short of an index");
        assert_eq!(err.field_path(), "OutPoint.index");
        assert!(err.is_truncation());
    }

    #[test]
    fn bitcoin_outpoint_conversion_round_trips() {
        let original = bitcoin::OutPoint::new(txid_from_byte(0x42), 7);
        let wire = OutPoint::from(original);
        assert_eq!(wire.hash.len(), 32);
        assert_eq!(wire.hash[0], 0x42);
        assert_eq!(wire.index, 7);

        let back = bitcoin::OutPoint::try_from(&wire).expect("32-byte hash converts");
        assert_eq!(back, original);
    }

    #[test]
    fn short_hash_cannot_become_a_txid() {
        let wire = OutPoint::new(vec![1, 2, 3], 0);
        let err = bitcoin::OutPoint::try_from(&wire).expect_err("3-byte hash");
        assert!(matches!(err, CoreError::InvalidTxidLength(3)));
    }
}
