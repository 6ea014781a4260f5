use std::cmp::Ordering;

use crate::codec::{CodecError, Sink, Source, WireRecord, WithField};

use super::OutPoint;

// ==============================================================================
// Utxo
// ==============================================================================

/// A spendable output plus the bridge's bookkeeping for it.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Utxo {
    pub outpoint: OutPoint,
    /// Block height where the output was confirmed, 0 for unconfirmed.
    pub at_height: u32,
    /// Amount in satoshis. Higher is better for selection.
    pub value: u64,
    #[serde(with = "crate::serde_hex")]
    pub script_pubkey: Vec<u8>,
    /// Confirmation count filled in by the caller from live chain state.
    /// Only coin selection reads it; it is never written to the wire and is
    /// 0 on every decoded `Utxo`.
    #[serde(default)]
    pub confirmations: u32,
}

impl Utxo {
    /// Build from a chain output. `confirmations` starts at 0.
    pub fn from_tx_out(
        outpoint: bitcoin::OutPoint,
        tx_out: &bitcoin::TxOut,
        at_height: u32,
    ) -> Self {
        Self {
            outpoint: outpoint.into(),
            at_height,
            value: tx_out.value.to_sat(),
            script_pubkey: tx_out.script_pubkey.to_bytes(),
            confirmations: 0,
        }
    }

    /// Coin-selection weight, `value * confirmations`. A u64 times a u32
    /// always fits in u128.
    pub fn weight(&self) -> u128 {
        u128::from(self.value) * u128::from(self.confirmations)
    }

    /// Order by ascending weight. Equal weights compare `Equal`; there is no
    /// tie-breaker.
    pub fn cmp_weight(&self, other: &Self) -> Ordering {
        self.weight().cmp(&other.weight())
    }
}

impl WireRecord for Utxo {
    const NAME: &'static str = "Utxo";

    fn serialize(&self, sink: &mut Sink) {
        self.outpoint.serialize(sink);
        sink.write_u32(self.at_height);
        sink.write_u64(self.value);
        sink.write_var_bytes(&self.script_pubkey);
    }

    fn deserialize(source: &mut Source<'_>) -> Result<Self, CodecError> {
        let outpoint = OutPoint::deserialize(source).field(Self::NAME, "outpoint")?;
        let at_height = source.next_u32().field(Self::NAME, "at_height")?;
        let value = source.next_u64().field(Self::NAME, "value")?;
        let script_pubkey = source
            .next_var_bytes()
            .field(Self::NAME, "script_pubkey")?
            .to_vec();
        Ok(Self {
            outpoint,
            at_height,
            value,
            script_pubkey,
            confirmations: 0,
        })
    }
}

// ==============================================================================
// Utxos
// ==============================================================================

/// An ordered set of coin-selection candidates.
///
/// Encoded as a u64 count followed by each element in stored order. Sorting
/// is something the caller asks for through [`Utxos::sort_by_weight`]; the
/// encoding never reorders.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Utxos {
    pub utxos: Vec<Utxo>,
}

impl Utxos {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.utxos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.utxos.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Utxo> {
        self.utxos.iter()
    }

    /// Stable ascending sort by [`Utxo::weight`]: entries with equal weight
    /// keep their relative order, so repeated runs over the same input
    /// select the same coins.
    pub fn sort_by_weight(&mut self) {
        self.utxos.sort_by(Utxo::cmp_weight);
    }
}

impl From<Vec<Utxo>> for Utxos {
    fn from(utxos: Vec<Utxo>) -> Self {
        Self { utxos }
    }
}

impl FromIterator<Utxo> for Utxos {
    fn from_iter<I: IntoIterator<Item = Utxo>>(iter: I) -> Self {
        Self {
            utxos: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Utxos {
    type Item = Utxo;
    type IntoIter = std::vec::IntoIter<Utxo>;

    fn into_iter(self) -> Self::IntoIter {
        self.utxos.into_iter()
    }
}

impl WireRecord for Utxos {
    const NAME: &'static str = "Utxos";

    fn serialize(&self, sink: &mut Sink) {
        sink.write_u64(self.utxos.len() as u64);
        for utxo in &self.utxos {
            utxo.serialize(sink);
        }
    }

    fn deserialize(source: &mut Source<'_>) -> Result<Self, CodecError> {
        let count = source.next_u64().field(Self::NAME, "length")?;
        // The count is untrusted: grow as elements actually decode.
        let mut utxos = Vec::new();
        for i in 0..count {
            let utxo = Utxo::deserialize(source)
                .field_with(Self::NAME, || format!("utxos[{i}]"))?;
            utxos.push(utxo);
        }
        Ok(Self { utxos })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{make_utxo, txid_from_byte};

    #[test]
    fn confirmations_are_not_on_the_wire() {
        let mut utxo = make_utxo(1, 50_000, 6);
        let bytes = utxo.to_bytes();

        let decoded = Utxo::from_bytes(&bytes).expect("decode utxo");
        assert_eq!(decoded.confirmations, 0);

        utxo.confirmations = 0;
        assert_eq!(decoded, utxo);

        utxo.confirmations = 1_000;
        assert_eq!(utxo.to_bytes(), bytes);
    }

    #[test]
    fn weight_does_not_overflow() {
        let utxo = Utxo {
            value: u64::MAX,
            confirmations: u32::MAX,
            ..Utxo::default()
        };
        assert_eq!(utxo.weight(), u128::from(u64::MAX) * u128::from(u32::MAX));

        let smaller = Utxo {
            value: u64::MAX,
            confirmations: u32::MAX - 1,
            ..Utxo::default()
        };
        assert_eq!(smaller.cmp_weight(&utxo), Ordering::Less);
    }

    #[test]
    fn equal_weights_keep_input_order() {
        // Weights 30, 30, 30.
        let mut utxos = Utxos::from(vec![
            make_utxo(1, 10, 3),
            make_utxo(2, 6, 5),
            make_utxo(3, 10, 3),
        ]);
        utxos.sort_by_weight();

        let order: Vec<u8> = utxos.iter().map(|u| u.outpoint.hash[0]).collect();
        assert_eq!(order, vec![1, 2, 3]);
        assert!(utxos.iter().all(|u| u.weight() == 30));
    }

    #[test]
    fn sort_is_ascending_by_weight_not_value() {
        let mut utxos: Utxos = [
            make_utxo(1, 100, 1), // 100
            make_utxo(2, 5, 10),  // 50
            make_utxo(3, 1, 0),   // 0
            make_utxo(4, 20, 5),  // 100
        ]
        .into_iter()
        .collect();
        utxos.sort_by_weight();

        let order: Vec<u8> = utxos.iter().map(|u| u.outpoint.hash[0]).collect();
        assert_eq!(order, vec![3, 2, 1, 4]);
    }

    #[test]
    fn empty_collection_is_eight_zero_bytes() {
        let bytes = Utxos::new().to_bytes();
        assert_eq!(bytes, vec![0u8; 8]);
        let decoded = Utxos::from_bytes(&bytes).expect("empty collection decodes");
        assert!(decoded.is_empty());
    }

    #[test]
    fn truncated_element_reports_its_index() {
        let utxos = Utxos::from(vec![make_utxo(1, 10, 0), make_utxo(2, 20, 0)]);
        let bytes = utxos.to_bytes();

        let err = Utxos::from_bytes(&bytes[..bytes.len() - 1]).expect_err("last byte missing");
        assert_eq!(err.field_path(), "Utxos.utxos[1] > Utxo.script_pubkey");
        assert!(err.is_truncation());
    }

    #[test]
    fn nested_outpoint_error_is_wrapped() {
        // One Utxo announced, outpoint hash claims 32 bytes but only 2 follow.
        let mut bytes = 1u64.to_le_bytes().to_vec();
        bytes.extend_from_slice(&[0x20, 0xAA, 0xBB]);

        let err = Utxos::from_bytes(&bytes).expect_err("outpoint hash truncated");
        assert_eq!(
            err.field_path(),
            "Utxos.utxos[0] > Utxo.outpoint > OutPoint.hash"
        );
    }

    #[test]
    fn huge_count_with_no_elements_fails_fast() {
        let bytes = u64::MAX.to_le_bytes();
        let err = Utxos::from_bytes(&bytes).expect_err("count without elements");
        assert_eq!(
            err.field_path(),
            "Utxos.utxos[0] > Utxo.outpoint > OutPoint.hash"
        );
    }

    #[test]
    fn from_tx_out_copies_value_and_script() {
        let tx_out = bitcoin::TxOut {
            value: bitcoin::Amount::from_sat(12_345),
            script_pubkey: bitcoin::ScriptBuf::from_bytes(vec![0x51]),
        };
        let utxo = Utxo::from_tx_out(
            bitcoin::OutPoint::new(txid_from_byte(9), 2),
            &tx_out,
            800_000,
        );
        assert_eq!(utxo.value, 12_345);
        assert_eq!(utxo.script_pubkey, vec![0x51]);
        assert_eq!(utxo.at_height, 800_000);
        assert_eq!(utxo.outpoint.index, 2);
        assert_eq!(utxo.confirmations, 0);
    }
}
