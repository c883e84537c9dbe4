use tracing::{debug, trace};
use winnow::error::ErrMode;

use periph_macros::impl_default_for;
use periph_util::format::format_hex_pretty;

use crate::{
    NdefError,
    parser::{self, stream::StreamExt as _},
    record::NdefRecord,
    uri::NdefRecordUri,
};

impl_default_for!(NdefMessage);

/// An ordered list of records
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NdefMessage {
    records: Vec<NdefRecord>,
}

impl NdefMessage {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Parse a complete message, trailing bytes after the last record are ignored
    pub fn parse(data: &[u8]) -> Result<Self, NdefError> {
        trace!("parsing ndef message {}", format_hex_pretty(data));

        let mut stream = parser::stream::new(data);
        let records = match parser::parse_ndef_message(&mut stream) {
            Ok(records) => records,
            Err(ErrMode::Incomplete(_)) => return Err(NdefError::NotEnoughData),
            Err(error) => {
                return Err(NdefError::ParsingError(format!(
                    "error parsing message: {error}"
                )));
            }
        };

        if !stream.is_empty() {
            debug!("{} bytes left over after the last record", stream.len());
        }

        Ok(Self { records })
    }

    pub fn push(&mut self, record: NdefRecord) {
        self.records.push(record);
    }

    pub fn push_uri(&mut self, uri: &NdefRecordUri) -> Result<(), NdefError> {
        self.push(uri.to_record()?);
        Ok(())
    }

    pub fn records(&self) -> &[NdefRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<NdefRecord> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Every record that decodes as a URI record
    pub fn uris(&self) -> Vec<NdefRecordUri> {
        self.records
            .iter()
            .filter_map(|record| NdefRecordUri::try_from(record).ok())
            .collect()
    }

    /// Serialize with the begin flag on the first record and the end flag on the last
    pub fn to_bytes(&self) -> Result<Vec<u8>, NdefError> {
        if self.records.is_empty() {
            return Err(NdefError::EmptyMessage);
        }

        let last = self.records.len() - 1;
        let mut bytes = Vec::new();

        for (index, record) in self.records.iter().enumerate() {
            let mut record = record.clone();
            record.header.message_begin = index == 0;
            record.header.message_end = index == last;
            bytes.extend(record.to_bytes()?);
        }

        Ok(bytes)
    }
}

impl From<Vec<NdefRecord>> for NdefMessage {
    fn from(records: Vec<NdefRecord>) -> Self {
        Self { records }
    }
}
