use crate::uri;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NdefPayload {
    Text(TextPayload),
    Uri(String),
    Data(Vec<u8>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextPayload {
    pub format: TextPayloadFormat,
    pub language: String,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextPayloadFormat {
    Utf8,
    Utf16,
}

const UTF16_FLAG: u8 = 0x80;
const LANGUAGE_LENGTH_MASK: u8 = 0x3F;

impl NdefPayload {
    /// The payload as it is written after the record header
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            Self::Text(text) => text.to_bytes(),
            Self::Uri(uri) => uri::encode_uri(uri),
            Self::Data(data) => data.clone(),
        }
    }
}

impl TextPayload {
    pub fn utf8(language: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            format: TextPayloadFormat::Utf8,
            language: language.into(),
            text: text.into(),
        }
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let language = self.language.as_bytes();
        let mut status = language.len() as u8 & LANGUAGE_LENGTH_MASK;
        if self.format == TextPayloadFormat::Utf16 {
            status |= UTF16_FLAG;
        }

        let mut bytes = vec![status];
        bytes.extend_from_slice(&language[..(status & LANGUAGE_LENGTH_MASK) as usize]);

        match self.format {
            TextPayloadFormat::Utf8 => bytes.extend_from_slice(self.text.as_bytes()),
            TextPayloadFormat::Utf16 => {
                bytes.extend(self.text.encode_utf16().flat_map(u16::to_be_bytes))
            }
        }

        bytes
    }
}
