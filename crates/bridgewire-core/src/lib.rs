//! Canonical wire codec for the records a Bitcoin bridge relays between
//! validators: unspent outputs, inclusion proofs, multisig material and
//! cross-chain transfer instructions.
//!
//! Encoding is deterministic and decoding rejects truncated or malformed
//! input with a field-qualified [`CodecError`].

pub mod codec;
pub mod error;
pub mod records;
pub mod serde_hex;
#[cfg(test)]
mod test_util;

pub use codec::{CodecError, Sink, Source, WireRecord};
pub use error::CoreError;
pub use records::{Args, BtcFromInfo, BtcProof, MultiSignInfo, OutPoint, Utxo, Utxos};
