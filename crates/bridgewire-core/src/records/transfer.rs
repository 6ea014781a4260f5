use crate::codec::{CodecError, Sink, Source, WireRecord, WithField};

// ==============================================================================
// Args
// ==============================================================================

/// A cross-chain transfer instruction.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Args {
    pub to_chain_id: u64,
    /// Signed on the wire; negative values are carried as-is.
    pub fee: i64,
    #[serde(with = "crate::serde_hex")]
    pub to_contract_address: Vec<u8>,
    #[serde(with = "crate::serde_hex")]
    pub address: Vec<u8>,
}

impl WireRecord for Args {
    const NAME: &'static str = "Args";

    fn serialize(&self, sink: &mut Sink) {
        sink.write_u64(self.to_chain_id);
        sink.write_i64(self.fee);
        sink.write_var_bytes(&self.to_contract_address);
        sink.write_var_bytes(&self.address);
    }

    fn deserialize(source: &mut Source<'_>) -> Result<Self, CodecError> {
        let to_chain_id = source.next_u64().field(Self::NAME, "to_chain_id")?;
        let fee = source.next_i64().field(Self::NAME, "fee")?;
        let to_contract_address = source
            .next_var_bytes()
            .field(Self::NAME, "to_contract_address")?
            .to_vec();
        let address = source
            .next_var_bytes()
            .field(Self::NAME, "address")?
            .to_vec();
        Ok(Self {
            to_chain_id,
            fee,
            to_contract_address,
            address,
        })
    }
}

// ==============================================================================
// BtcFromInfo
// ==============================================================================

/// Where an inbound transaction came from.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BtcFromInfo {
    #[serde(with = "crate::serde_hex")]
    pub from_tx_hash: Vec<u8>,
    pub from_chain_id: u64,
}

impl WireRecord for BtcFromInfo {
    const NAME: &'static str = "BtcFromInfo";

    fn serialize(&self, sink: &mut Sink) {
        sink.write_var_bytes(&self.from_tx_hash);
        sink.write_u64(self.from_chain_id);
    }

    fn deserialize(source: &mut Source<'_>) -> Result<Self, CodecError> {
        let from_tx_hash = source
            .next_var_bytes()
            .field(Self::NAME, "from_tx_hash")?
            .to_vec();
        let from_chain_id = source.next_u64().field(Self::NAME, "from_chain_id")?;
        Ok(Self {
            from_tx_hash,
            from_chain_id,
        })
    }
}
