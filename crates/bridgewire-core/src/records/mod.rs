//! The closed set of bridge records and their wire layouts.
//!
//! Field order in each struct is the wire order. All records implement
//! [`WireRecord`](crate::codec::WireRecord).

mod multisign;
mod outpoint;
mod proof;
mod transfer;
mod utxo;

pub use multisign::MultiSignInfo;
pub use outpoint::OutPoint;
pub use proof::BtcProof;
pub use transfer::{Args, BtcFromInfo};
pub use utxo::{Utxo, Utxos};
