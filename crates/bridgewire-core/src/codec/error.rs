/// Failure while decoding wire bytes.
///
/// Primitive reads fail with one of the leaf variants. Record decoders wrap
/// those in [`CodecError::Field`] so the error names the record and field
/// that could not be read; nested records wrap again, producing a chain that
/// `std::error::Error::source` walks from the outermost record inward.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    #[error("unexpected end of data: needed {needed} bytes, {remaining} remaining")]
    UnexpectedEof { needed: u64, remaining: usize },

    #[error("non-canonical var-uint: value {value} encoded with marker {marker:#04x}")]
    NonCanonicalVarUint { marker: u8, value: u64 },

    #[error("string field is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),

    #[error("invalid bool byte {0:#04x}")]
    InvalidBool(u8),

    #[error("{remaining} trailing bytes after {record}")]
    TrailingBytes {
        record: &'static str,
        remaining: usize,
    },

    #[error("{record} deserialize {field} error")]
    Field {
        record: &'static str,
        field: String,
        #[source]
        source: Box<CodecError>,
    },
}

impl CodecError {
    /// The primitive failure at the bottom of a field chain.
    pub fn root_cause(&self) -> &CodecError {
        let mut current = self;
        while let CodecError::Field { source, .. } = current {
            current = &**source;
        }
        current
    }

    /// `true` when the input ran out before a field was complete.
    pub fn is_truncation(&self) -> bool {
        matches!(self.root_cause(), CodecError::UnexpectedEof { .. })
    }

    /// Render the record/field chain, outermost first, e.g.
    /// `Utxos.utxos[1] > Utxo.outpoint > OutPoint.hash`.
    pub fn field_path(&self) -> String {
        let mut segments = Vec::new();
        let mut current = self;
        while let CodecError::Field {
            record,
            field,
            source,
        } = current
        {
            segments.push(format!("{record}.{field}"));
            current = &**source;
        }
        segments.join(" > ")
    }
}

/// Attaches record/field context to a failed read.
pub trait WithField<T> {
    /// Wrap an error with a static field name.
    fn field(self, record: &'static str, field: &'static str) -> Result<T, CodecError>;

    /// Wrap an error with a field name built only on failure, for indexed
    /// or keyed positions such as `utxos[3]`.
    fn field_with<F>(self, record: &'static str, field: F) -> Result<T, CodecError>
    where
        F: FnOnce() -> String;
}

impl<T> WithField<T> for Result<T, CodecError> {
    fn field(self, record: &'static str, field: &'static str) -> Result<T, CodecError> {
        self.field_with(record, || field.to_owned())
    }

    fn field_with<F>(self, record: &'static str, field: F) -> Result<T, CodecError>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|source| CodecError::Field {
            record,
            field: field(),
            source: Box::new(source),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eof() -> CodecError {
        CodecError::UnexpectedEof {
            needed: 4,
            remaining: 1,
        }
    }

    #[test]
    fn field_chain_reports_path_and_root() {
        let inner = Err::<(), _>(eof()).field("OutPoint", "hash");
        let outer = inner
            .field("Utxo", "outpoint")
            .field_with("Utxos", || format!("utxos[{}]", 2))
            .expect_err("error should propagate");

        assert_eq!(
            outer.field_path(),
            "Utxos.utxos[2] > Utxo.outpoint > OutPoint.hash"
        );
        assert_eq!(outer.root_cause(), &eof());
        assert!(outer.is_truncation());
        assert_eq!(outer.to_string(), "Utxos deserialize utxos[2] error");
    }

    #[test]
    fn source_chain_reaches_primitive_error() {
        let err = Err::<(), _>(eof())
            .field("Args", "fee")
            .expect_err("error should propagate");
        let source = std::error::Error::source(&err).expect("field error has a source");
        assert_eq!(
            source.to_string(),
            "unexpected end of data: needed 4 bytes, 1 remaining"
        );
    }

    #[test]
    fn malformed_input_is_not_truncation() {
        let err = Err::<(), _>(CodecError::InvalidBool(7))
            .field("Args", "flag")
            .expect_err("error should propagate");
        assert!(!err.is_truncation());
    }

    #[test]
    fn success_passes_through_untouched() {
        let ok: Result<u32, CodecError> = Ok(5);
        assert_eq!(ok.field("Args", "fee"), Ok(5));
    }
}
