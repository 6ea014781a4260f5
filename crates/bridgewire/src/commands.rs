//! Subcommand bodies, kept free of process I/O so they can be tested
//! directly.

use bridgewire_core::{
    Args, BtcFromInfo, BtcProof, MultiSignInfo, OutPoint, Source, Utxo, Utxos, WireRecord,
};
use eyre::WrapErr;

use crate::cli::{RecordKind, WireFormat};

// ==============================================================================
// Wire I/O
// ==============================================================================

/// Interpret raw input as wire bytes.
pub fn read_wire(input: &[u8], format: WireFormat) -> eyre::Result<Vec<u8>> {
    match format {
        WireFormat::Raw => Ok(input.to_vec()),
        WireFormat::Hex => {
            let text = std::str::from_utf8(input).wrap_err("hex input is not UTF-8")?;
            bridgewire_core::serde_hex::decode(text.trim()).wrap_err("invalid hex input")
        }
    }
}

/// Render wire bytes for output. Hex output ends with a newline.
pub fn write_wire(bytes: &[u8], format: WireFormat) -> Vec<u8> {
    match format {
        WireFormat::Raw => bytes.to_vec(),
        WireFormat::Hex => format!("{}\n", hex::encode(bytes)).into_bytes(),
    }
}

// ==============================================================================
// Decode / Encode
// ==============================================================================

/// Decode wire bytes and render the record as pretty-printed JSON.
pub fn decode(kind: RecordKind, bytes: &[u8], allow_trailing: bool) -> eyre::Result<Vec<u8>> {
    match kind {
        RecordKind::OutPoint => decode_as::<OutPoint>(bytes, allow_trailing),
        RecordKind::Utxo => decode_as::<Utxo>(bytes, allow_trailing),
        RecordKind::Utxos => decode_as::<Utxos>(bytes, allow_trailing),
        RecordKind::BtcProof => decode_as::<BtcProof>(bytes, allow_trailing),
        RecordKind::MultiSignInfo => decode_as::<MultiSignInfo>(bytes, allow_trailing),
        RecordKind::Args => decode_as::<Args>(bytes, allow_trailing),
        RecordKind::BtcFromInfo => decode_as::<BtcFromInfo>(bytes, allow_trailing),
    }
}

fn decode_as<T>(bytes: &[u8], allow_trailing: bool) -> eyre::Result<Vec<u8>>
where
    T: WireRecord + serde::Serialize,
{
    let record = if allow_trailing {
        let mut source = Source::new(bytes);
        let record = <T as WireRecord>::deserialize(&mut source)
            .wrap_err_with(|| format!("decode {}", T::NAME))?;
        if !source.is_exhausted() {
            tracing::warn!(
                record = T::NAME,
                trailing = source.remaining(),
                "ignoring trailing bytes"
            );
        }
        record
    } else {
        T::from_bytes(bytes).wrap_err_with(|| format!("decode {}", T::NAME))?
    };
    tracing::debug!(record = T::NAME, size = bytes.len(), "decoded record");
    render_json(&record).wrap_err("render record as JSON")
}

/// Serialize straight to text so the key order a type writes is kept.
/// Going through `serde_json::Value` would re-sort object keys.
fn render_json<T: serde::Serialize>(value: &T) -> serde_json::Result<Vec<u8>> {
    let mut out = serde_json::to_vec_pretty(value)?;
    out.push(b'\n');
    Ok(out)
}

pub fn encode(kind: RecordKind, json: &str) -> eyre::Result<Vec<u8>> {
    match kind {
        RecordKind::OutPoint => encode_as::<OutPoint>(json),
        RecordKind::Utxo => encode_as::<Utxo>(json),
        RecordKind::Utxos => encode_as::<Utxos>(json),
        RecordKind::BtcProof => encode_as::<BtcProof>(json),
        RecordKind::MultiSignInfo => encode_as::<MultiSignInfo>(json),
        RecordKind::Args => encode_as::<Args>(json),
        RecordKind::BtcFromInfo => encode_as::<BtcFromInfo>(json),
    }
}

fn encode_as<T>(json: &str) -> eyre::Result<Vec<u8>>
where
    T: WireRecord + serde::de::DeserializeOwned,
{
    let record: T =
        serde_json::from_str(json).wrap_err_with(|| format!("parse {} JSON", T::NAME))?;
    let bytes = record.to_bytes();
    tracing::debug!(record = T::NAME, size = bytes.len(), "encoded record");
    Ok(bytes)
}

// ==============================================================================
// Rank
// ==============================================================================

#[derive(serde::Serialize)]
struct RankedUtxo<'a> {
    /// Decimal string; the product can exceed what JSON numbers carry safely.
    weight: String,
    #[serde(flatten)]
    utxo: &'a Utxo,
}

/// Stable-sort a JSON array of UTXOs by ascending weight and render the
/// result with each entry's `weight` first.
pub fn rank(json: &str) -> eyre::Result<Vec<u8>> {
    let mut utxos: Utxos = serde_json::from_str(json).wrap_err("parse UTXO array")?;
    utxos.sort_by_weight();

    let ranked: Vec<RankedUtxo<'_>> = utxos
        .iter()
        .map(|utxo| RankedUtxo {
            weight: utxo.weight().to_string(),
            utxo,
        })
        .collect();
    render_json(&ranked).wrap_err("render ranking as JSON")
}
