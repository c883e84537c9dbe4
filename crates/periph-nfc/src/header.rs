use crate::ndef_type::NdefType;

const MESSAGE_BEGIN: u8 = 0x80;
const MESSAGE_END: u8 = 0x40;
const CHUNKED: u8 = 0x20;
const SHORT_RECORD: u8 = 0x10;
const HAS_ID_LENGTH: u8 = 0x08;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NdefHeader {
    pub message_begin: bool,
    pub message_end: bool,
    pub chunked: bool,
    pub short_record: bool,
    pub has_id_length: bool,
    pub type_name_format: NdefType,
    pub type_length: u8,
    pub payload_length: u32,
    pub id_length: Option<u8>,
}

impl NdefHeader {
    /// Header for a standalone record, short form when the payload fits in one length byte
    pub fn new(type_name_format: NdefType, type_length: u8, payload_length: u32, id_length: Option<u8>) -> Self {
        Self {
            message_begin: false,
            message_end: false,
            chunked: false,
            short_record: payload_length <= u8::MAX as u32,
            has_id_length: id_length.is_some(),
            type_name_format,
            type_length,
            payload_length,
            id_length,
        }
    }

    /// The flags + TNF byte
    pub fn flags_byte(&self) -> u8 {
        let mut byte = self.type_name_format.tnf();

        for (set, flag) in [
            (self.message_begin, MESSAGE_BEGIN),
            (self.message_end, MESSAGE_END),
            (self.chunked, CHUNKED),
            (self.short_record, SHORT_RECORD),
            (self.has_id_length, HAS_ID_LENGTH),
        ] {
            if set {
                byte |= flag;
            }
        }

        byte
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = vec![self.flags_byte(), self.type_length];

        if self.short_record {
            bytes.push(self.payload_length as u8);
        } else {
            bytes.extend_from_slice(&self.payload_length.to_be_bytes());
        }

        if let Some(id_length) = self.id_length {
            bytes.push(id_length);
        }

        bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_uri_header_bytes() {
        let mut header = NdefHeader::new(NdefType::WellKnown, 1, 13, None);
        header.message_begin = true;
        header.message_end = true;

        assert_eq!(header.to_bytes(), vec![0xD1, 0x01, 0x0D]);
    }

    #[test]
    fn test_long_record_with_id() {
        let header = NdefHeader::new(NdefType::Mime, 16, 3009, Some(2));
        assert!(!header.short_record);
        assert_eq!(header.to_bytes(), vec![0x0A, 16, 0x00, 0x00, 0x0B, 0xC1, 2]);
    }
}
