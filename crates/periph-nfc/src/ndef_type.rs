/// Type Name Format, the 3 low bits of the record header
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum NdefType {
    Empty,
    WellKnown,
    Mime,
    AbsoluteUri,
    External,
    Unknown,
    Unchanged,
    Reserved,
}

impl NdefType {
    /// Only the low 3 bits are looked at
    pub const fn from_tnf(bits: u8) -> Self {
        match bits & 0b111 {
            0 => Self::Empty,
            1 => Self::WellKnown,
            2 => Self::Mime,
            3 => Self::AbsoluteUri,
            4 => Self::External,
            5 => Self::Unknown,
            6 => Self::Unchanged,
            _ => Self::Reserved,
        }
    }

    pub const fn tnf(self) -> u8 {
        match self {
            Self::Empty => 0,
            Self::WellKnown => 1,
            Self::Mime => 2,
            Self::AbsoluteUri => 3,
            Self::External => 4,
            Self::Unknown => 5,
            Self::Unchanged => 6,
            Self::Reserved => 7,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tnf_round_trip() {
        for bits in 0..8 {
            assert_eq!(NdefType::from_tnf(bits).tnf(), bits);
        }
    }

    #[test]
    fn test_from_tnf_ignores_flag_bits() {
        assert_eq!(NdefType::from_tnf(0xD1), NdefType::WellKnown);
        assert_eq!(NdefType::from_tnf(0xC2), NdefType::Mime);
    }
}
