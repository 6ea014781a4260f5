//! Shared test helpers for `bridgewire-core` unit tests.
//!
//! Builders for outpoints and UTXOs so tests across modules share one source
//! of dummy data.

use bitcoin::hashes::Hash as _;
use bitcoin::Txid;

use crate::records::{OutPoint, Utxo};

/// Create a deterministic `Txid` from a single distinguishing byte.
pub fn txid_from_byte(b: u8) -> Txid {
    let mut bytes = [0u8; 32];
    bytes[0] = b;
    Txid::from_byte_array(bytes)
}

/// A 32-byte outpoint whose hash starts with `id`, so tests can tell
/// entries apart after sorting.
pub fn make_outpoint(id: u8, index: u32) -> OutPoint {
    OutPoint::from(bitcoin::OutPoint::new(txid_from_byte(id), index))
}

/// A P2WPKH-shaped UTXO with the given value and confirmation count.
pub fn make_utxo(id: u8, value: u64, confirmations: u32) -> Utxo {
    let mut script_pubkey = vec![0x00, 0x14];
    script_pubkey.extend_from_slice(&[id; 20]);
    Utxo {
        outpoint: make_outpoint(id, 0),
        at_height: 100,
        value,
        script_pubkey,
        confirmations,
    }
}
