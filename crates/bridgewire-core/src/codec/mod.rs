//! Primitive wire codec shared by every bridge record.
//!
//! A [`Sink`] appends little-endian integers and length-prefixed byte
//! strings to a growable buffer; a [`Source`] reads them back through a
//! forward-only cursor. Records plug into both through [`WireRecord`].

mod error;
mod record;
mod sink;
mod source;

pub use error::{CodecError, WithField};
pub use record::WireRecord;
pub use sink::Sink;
pub use source::Source;
