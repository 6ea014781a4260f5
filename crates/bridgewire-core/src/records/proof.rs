use crate::codec::{CodecError, Sink, Source, WireRecord, WithField};

/// Evidence that `tx` was included at `height`, actionable once
/// `blocks_to_wait` confirmations have passed. The proof itself is checked
/// elsewhere; here it is opaque bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BtcProof {
    #[serde(with = "crate::serde_hex")]
    pub tx: Vec<u8>,
    #[serde(with = "crate::serde_hex")]
    pub proof: Vec<u8>,
    pub height: u32,
    pub blocks_to_wait: u64,
}

impl WireRecord for BtcProof {
    const NAME: &'static str = "BtcProof";

    fn serialize(&self, sink: &mut Sink) {
        sink.write_var_bytes(&self.tx);
        sink.write_var_bytes(&self.proof);
        sink.write_u32(self.height);
        sink.write_u64(self.blocks_to_wait);
    }

    fn deserialize(source: &mut Source<'_>) -> Result<Self, CodecError> {
        let tx = source.next_var_bytes().field(Self::NAME, "tx")?.to_vec();
        let proof = source.next_var_bytes().field(Self::NAME, "proof")?.to_vec();
        let height = source.next_u32().field(Self::NAME, "height")?;
        let blocks_to_wait = source.next_u64().field(Self::NAME, "blocks_to_wait")?;
        Ok(Self {
            tx,
            proof,
            height,
            blocks_to_wait,
        })
    }
}
