use crate::{NdefError, header::NdefHeader, ndef_type::NdefType, payload::NdefPayload};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NdefRecord {
    pub header: NdefHeader,
    pub type_: Vec<u8>,
    pub id: Option<Vec<u8>>,
    pub payload: NdefPayload,
}

impl NdefRecord {
    /// Build a record, the header lengths are taken from the data
    pub fn new(
        type_name_format: NdefType,
        type_: impl Into<Vec<u8>>,
        id: Option<Vec<u8>>,
        payload: NdefPayload,
    ) -> Result<Self, NdefError> {
        let type_ = type_.into();
        let lengths = Lengths::of(&type_, id.as_deref(), &payload.to_bytes())?;

        Ok(Self {
            header: NdefHeader::new(
                type_name_format,
                lengths.type_length,
                lengths.payload_length,
                lengths.id_length,
            ),
            type_,
            id,
            payload,
        })
    }

    pub fn type_string(&self) -> Option<String> {
        String::from_utf8(self.type_.clone()).ok()
    }

    pub fn id_string(&self) -> Option<String> {
        let id = self.id.as_ref()?;
        String::from_utf8(id.clone()).ok()
    }

    /// Serialize the record
    ///
    /// Flags and TNF come from the header, the lengths are taken from the data itself
    pub fn to_bytes(&self) -> Result<Vec<u8>, NdefError> {
        let payload = self.payload.to_bytes();
        let lengths = Lengths::of(&self.type_, self.id.as_deref(), &payload)?;

        let header = NdefHeader {
            short_record: lengths.payload_length <= u8::MAX as u32,
            has_id_length: lengths.id_length.is_some(),
            type_length: lengths.type_length,
            payload_length: lengths.payload_length,
            id_length: lengths.id_length,
            ..self.header.clone()
        };

        let mut bytes = header.to_bytes();
        bytes.extend_from_slice(&self.type_);
        if let Some(id) = &self.id {
            bytes.extend_from_slice(id);
        }
        bytes.extend_from_slice(&payload);

        Ok(bytes)
    }
}

/// Header length fields, checked against what one record can describe
struct Lengths {
    type_length: u8,
    payload_length: u32,
    id_length: Option<u8>,
}

impl Lengths {
    fn of(type_: &[u8], id: Option<&[u8]>, payload: &[u8]) -> Result<Self, NdefError> {
        let type_length =
            u8::try_from(type_.len()).map_err(|_| NdefError::TypeTooLong(type_.len()))?;

        let id_length = id
            .map(|id| u8::try_from(id.len()).map_err(|_| NdefError::IdTooLong(id.len())))
            .transpose()?;

        let payload_length =
            u32::try_from(payload.len()).map_err(|_| NdefError::PayloadTooLong(payload.len()))?;

        Ok(Self {
            type_length,
            payload_length,
            id_length,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_bytes_recompute_lengths() {
        let mut record = NdefRecord::new(
            NdefType::WellKnown,
            "U",
            None,
            NdefPayload::Uri("https://www.example.com/".into()),
        )
        .unwrap();
        record.header.message_begin = true;
        record.header.message_end = true;

        let mut expected = vec![0xD1, 0x01, 0x0D, 0x55, 0x02];
        expected.extend_from_slice(b"example.com/");
        assert_eq!(record.to_bytes().unwrap(), expected);

        // a change of payload after construction is reflected in the lengths
        record.payload = NdefPayload::Uri("tel:1".into());
        assert_eq!(
            record.to_bytes().unwrap(),
            vec![0xD1, 0x01, 0x02, 0x55, 0x05, b'1']
        );
    }

    #[test]
    fn test_record_bytes_with_id() {
        let record = NdefRecord::new(
            NdefType::Mime,
            "a/b",
            Some(b"x".to_vec()),
            NdefPayload::Data(vec![1, 2]),
        )
        .unwrap();

        assert_eq!(
            record.to_bytes().unwrap(),
            vec![0x1A, 3, 2, 1, b'a', b'/', b'b', b'x', 1, 2]
        );
        assert_eq!(record.type_string().as_deref(), Some("a/b"));
        assert_eq!(record.id_string().as_deref(), Some("x"));
    }

    #[test]
    fn test_id_longer_than_one_length_byte() {
        let payload = NdefPayload::Uri("tel:1".into());

        let at_limit = NdefRecord::new(
            NdefType::WellKnown,
            "U",
            Some(vec![b'i'; 255]),
            payload.clone(),
        );
        assert!(at_limit.is_ok());

        let result = NdefRecord::new(NdefType::WellKnown, "U", Some(vec![b'i'; 256]), payload);
        assert_eq!(result, Err(NdefError::IdTooLong(256)));

        // an id grown after construction is caught when writing
        let mut record = at_limit.unwrap();
        record.id = Some(vec![b'i'; 300]);
        assert_eq!(record.to_bytes(), Err(NdefError::IdTooLong(300)));
    }

    #[test]
    fn test_type_longer_than_one_length_byte() {
        let result = NdefRecord::new(
            NdefType::Mime,
            vec![b't'; 256],
            None,
            NdefPayload::Data(vec![]),
        );

        assert_eq!(result, Err(NdefError::TypeTooLong(256)));
    }
}
