/// Format a sensor value with a fixed number of decimals
///
/// Negative accuracy rounds to tens, hundreds, etc.
pub fn value_accuracy_to_string(value: f32, accuracy_decimals: i8) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }

    if accuracy_decimals < 0 {
        let factor = 10f32.powi(-(accuracy_decimals as i32));
        let rounded = (value / factor).round() * factor;
        return format!("{rounded:.0}");
    }

    format!("{value:.prec$}", prec = accuracy_decimals as usize)
}

/// Hex dump in `AA.BB.CC (3)` form, used when logging raw payloads
pub fn format_hex_pretty(bytes: &[u8]) -> String {
    if bytes.is_empty() {
        return String::new();
    }

    let hex = hex::encode_upper(bytes);
    let dotted = hex
        .as_bytes()
        .chunks(2)
        .map(|pair| std::str::from_utf8(pair).unwrap_or_default())
        .collect::<Vec<_>>()
        .join(".");

    format!("{dotted} ({})", bytes.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_accuracy_to_string() {
        assert_eq!(value_accuracy_to_string(21.34, 1), "21.3");
        assert_eq!(value_accuracy_to_string(0.0, 1), "0.0");
        assert_eq!(value_accuracy_to_string(3.0, 0), "3");
        assert_eq!(value_accuracy_to_string(1234.0, -2), "1200");
        assert_eq!(value_accuracy_to_string(f32::NAN, 1), "NaN");
    }

    #[test]
    fn test_format_hex_pretty() {
        assert_eq!(format_hex_pretty(&[]), "");
        assert_eq!(format_hex_pretty(&[0xD1, 0x01, 0x0D]), "D1.01.0D (3)");
    }
}
