use std::collections::HashMap;

use crate::codec::{CodecError, Sink, Source, WireRecord, WithField};

/// Signature material keyed by participant (typically a public key string).
///
/// The map itself has no order. Encoding walks keys in descending byte-wise
/// order ([`MultiSignInfo::canonical_keys`]) so every party produces the same
/// bytes; each key's list of shares keeps its insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultiSignInfo {
    pub entries: HashMap<String, Vec<Vec<u8>>>,
}

impl MultiSignInfo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the shares for `key`, returning the previous list.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        shares: Vec<Vec<u8>>,
    ) -> Option<Vec<Vec<u8>>> {
        self.entries.insert(key.into(), shares)
    }

    /// Append one share to `key`'s list, creating it if absent.
    pub fn push_share(&mut self, key: impl Into<String>, share: Vec<u8>) {
        self.entries.entry(key.into()).or_default().push(share);
    }

    pub fn get(&self, key: &str) -> Option<&[Vec<u8>]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys in wire order: descending, comparing raw UTF-8 bytes.
    pub fn canonical_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        keys.sort_unstable_by(|a, b| b.cmp(a));
        keys
    }
}

impl From<HashMap<String, Vec<Vec<u8>>>> for MultiSignInfo {
    fn from(entries: HashMap<String, Vec<Vec<u8>>>) -> Self {
        Self { entries }
    }
}

impl FromIterator<(String, Vec<Vec<u8>>)> for MultiSignInfo {
    fn from_iter<I: IntoIterator<Item = (String, Vec<Vec<u8>>)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl WireRecord for MultiSignInfo {
    const NAME: &'static str = "MultiSignInfo";

    fn serialize(&self, sink: &mut Sink) {
        sink.write_u64(self.entries.len() as u64);
        for key in self.canonical_keys() {
            let shares = &self.entries[key];
            sink.write_string(key);
            sink.write_u64(shares.len() as u64);
            for share in shares {
                sink.write_var_bytes(share);
            }
        }
    }

    fn deserialize(source: &mut Source<'_>) -> Result<Self, CodecError> {
        let count = source.next_u64().field(Self::NAME, "length")?;
        let mut entries = HashMap::new();
        for i in 0..count {
            let key = source
                .next_string()
                .field_with(Self::NAME, || format!("key[{i}]"))?
                .to_owned();
            let share_count = source
                .next_u64()
                .field_with(Self::NAME, || format!("{key}.length"))?;
            let mut shares = Vec::new();
            for j in 0..share_count {
                let share = source
                    .next_var_bytes()
                    .field_with(Self::NAME, || format!("{key}[{j}]"))?;
                shares.push(share.to_vec());
            }
            if entries.contains_key(&key) {
                tracing::warn!(
                    key = %key,
                    index = i,
                    "duplicate MultiSignInfo key overwrites previous entry"
                );
            }
            entries.insert(key, shares);
        }
        Ok(Self { entries })
    }
}

// JSON form is an object in canonical key order with hex-encoded shares.
impl serde::Serialize for MultiSignInfo {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for key in self.canonical_keys() {
            let shares: Vec<String> = self.entries[key].iter().map(hex::encode).collect();
            map.serialize_entry(key, &shares)?;
        }
        map.end()
    }
}

impl<'de> serde::Deserialize<'de> for MultiSignInfo {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::de::Error;

        let raw: HashMap<String, Vec<String>> = serde::Deserialize::deserialize(deserializer)?;
        let mut entries = HashMap::with_capacity(raw.len());
        for (key, shares) in raw {
            let shares = shares
                .iter()
                .map(|s| crate::serde_hex::decode(s))
                .collect::<Result<Vec<_>, _>>()
                .map_err(|e| D::Error::custom(format!("invalid hex share for `{key}`: {e}")))?;
            entries.insert(key, shares);
        }
        Ok(Self { entries })
    }
}
