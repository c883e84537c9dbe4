//! NFC Data Exchange Format records, with a focus on URI records
//!
//! [`NdefRecordUri`] is the well-known `U` record: the URI is stored with its most common
//! scheme collapsed into a single prefix byte from [`uri::URI_PREFIXES`]. Records are
//! parsed with [`parser`] and written with [`NdefRecord::to_bytes`] / [`NdefMessage::to_bytes`].

pub mod header;
pub mod message;
pub mod ndef_type;
pub mod parser;
pub mod payload;
pub mod record;
pub mod uri;

pub use message::NdefMessage;
pub use ndef_type::NdefType;
pub use payload::NdefPayload;
pub use record::NdefRecord;
pub use uri::{NdefRecordUri, UriError};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NdefError {
    #[error("error parsing the NDEF message: {0}")]
    ParsingError(String),

    #[error("not enough data to parse the NDEF message")]
    NotEnoughData,

    #[error("an NDEF message needs at least one record")]
    EmptyMessage,

    #[error("record type is {0} bytes, at most 255 fit in a record")]
    TypeTooLong(usize),

    #[error("record id is {0} bytes, at most 255 fit in a record")]
    IdTooLong(usize),

    #[error("record payload is {0} bytes, too long for a single record")]
    PayloadTooLong(usize),
}
