use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// bridgewire: encode, decode and rank Bitcoin bridge wire records.
#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    /// Representation of wire bytes on input and output.
    #[arg(
        long,
        value_enum,
        default_value = "hex",
        env = "BRIDGEWIRE_FORMAT",
        global = true
    )]
    pub format: WireFormat,

    /// Decode a record from the start of the input and ignore any bytes
    /// after it instead of failing.
    #[arg(long, env = "BRIDGEWIRE_ALLOW_TRAILING", global = true)]
    pub allow_trailing: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Decode wire bytes into pretty-printed JSON.
    Decode {
        /// Record type to decode.
        #[arg(value_enum)]
        record: RecordKind,

        /// Input file; reads stdin when omitted.
        input: Option<PathBuf>,
    },

    /// Encode a JSON record into wire bytes.
    Encode {
        /// Record type to encode.
        #[arg(value_enum)]
        record: RecordKind,

        /// Input file; reads stdin when omitted.
        input: Option<PathBuf>,
    },

    /// Sort a JSON array of UTXOs by ascending coin-selection weight
    /// (value × confirmations), keeping input order for ties.
    Rank {
        /// Input file; reads stdin when omitted.
        input: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RecordKind {
    #[value(name = "outpoint")]
    OutPoint,
    Utxo,
    Utxos,
    BtcProof,
    #[value(name = "multisign")]
    MultiSignInfo,
    Args,
    BtcFromInfo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum WireFormat {
    /// Hex text, optional `0x` prefix, surrounding whitespace ignored.
    Hex,
    /// Raw bytes.
    Raw,
}
