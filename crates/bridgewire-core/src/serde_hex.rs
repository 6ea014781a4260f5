//! Serde helper rendering opaque byte fields as lowercase hex strings.
//!
//! Use with `#[serde(with = "crate::serde_hex")]`. Deserialization accepts
//! an optional `0x` prefix.

use serde::{de::Error, Deserialize, Deserializer, Serializer};

pub fn serialize<T, S>(bytes: &T, s: S) -> Result<S::Ok, S::Error>
where
    T: AsRef<[u8]>,
    S: Serializer,
{
    s.serialize_str(&hex::encode(bytes))
}

pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<u8>, D::Error> {
    let s = String::deserialize(d)?;
    decode(&s).map_err(|e| D::Error::custom(format!("invalid hex `{s}`: {e}")))
}

/// Decode a hex string, tolerating a leading `0x`.
pub fn decode(s: &str) -> Result<Vec<u8>, hex::FromHexError> {
    hex::decode(s.strip_prefix("0x").unwrap_or(s))
}
