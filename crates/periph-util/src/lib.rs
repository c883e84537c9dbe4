pub mod format;
pub mod result_ext;

pub use result_ext::ResultExt;

/// Combine two register bytes into a big-endian `u16`
pub const fn combine_bytes(msb: u8, lsb: u8) -> u16 {
    ((msb as u16) << 8) | lsb as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combine_bytes() {
        assert_eq!(combine_bytes(0x00, 0x00), 0);
        assert_eq!(combine_bytes(0x00, 0xFF), 0x00FF);
        assert_eq!(combine_bytes(0x01, 0x02), 0x0102);
        assert_eq!(combine_bytes(0xFF, 0xFF), u16::MAX);
    }
}
