//! Subfield splitting and type coercion.
//!
//! ISO 8211 field data is a sequence of subfields separated by the
//! subfield delimiter `0x1F`. This module turns that raw byte data into
//! typed [`SubfieldValue`]s the S-57 semantic layer can work with.

use byteorder::{ByteOrder, LittleEndian};

const SUBFIELD_DELIMITER: u8 = 0x1F;

/// A subfield's coerced value.
#[derive(Debug, Clone, PartialEq)]
pub enum SubfieldValue {
    /// Empty subfield.
    Empty,
    /// Parsed as an integer.
    Integer(i64),
    /// Parsed as a floating point number.
    Float(f64),
    /// Left as a (trimmed) string; the catch-all for anything that isn't
    /// cleanly numeric.
    Text(String),
    /// Raw bytes, for binary subfields too long to treat as a scalar.
    Bytes(Vec<u8>),
}

impl SubfieldValue {
    /// Coerces trimmed subfield bytes into a typed value, per the rules in
    /// the subfield coercion component: empty, then integer, then float,
    /// then string.
    pub fn coerce(raw: &[u8]) -> SubfieldValue {
        let text = String::from_utf8_lossy(raw);
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return SubfieldValue::Empty;
        }
        if let Ok(i) = trimmed.parse::<i64>() {
            return SubfieldValue::Integer(i);
        }
        if let Ok(f) = trimmed.parse::<f64>() {
            return SubfieldValue::Float(f);
        }
        SubfieldValue::Text(trimmed.to_string())
    }

    /// Coerces a binary attribute value by byte length, per the specialized
    /// binary coercion rules: 1 byte -> u8, 2 -> little-endian u16, 4 ->
    /// little-endian i32, longer -> a subfield-delimited list recursed into
    /// individual values.
    pub fn coerce_binary(raw: &[u8]) -> SubfieldValue {
        match raw.len() {
            0 => SubfieldValue::Empty,
            1 => SubfieldValue::Integer(raw[0] as i64),
            2 => SubfieldValue::Integer(LittleEndian::read_u16(raw) as i64),
            4 => SubfieldValue::Integer(LittleEndian::read_i32(raw) as i64),
            _ => {
                let parts: Vec<SubfieldValue> = split_subfields(raw)
                    .into_iter()
                    .map(SubfieldValue::coerce)
                    .collect();
                // A list collapses to text for simplicity of downstream
                // consumers that don't need the nested shape.
                SubfieldValue::Text(
                    parts
                        .iter()
                        .map(|value| value.as_text())
                        .collect::<Vec<_>>()
                        .join(","),
                )
            }
        }
    }

    /// Renders any variant as text, for attribute decoding and display.
    pub fn as_text(&self) -> String {
        match self {
            SubfieldValue::Empty => String::new(),
            SubfieldValue::Integer(i) => i.to_string(),
            SubfieldValue::Float(f) => f.to_string(),
            SubfieldValue::Text(s) => s.clone(),
            SubfieldValue::Bytes(b) => format!("{b:?}"),
        }
    }

    /// Returns the integer value, if this is an `Integer`.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            SubfieldValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the float value, coercing an `Integer` if necessary.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            SubfieldValue::Float(f) => Some(*f),
            SubfieldValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }
}

/// Splits raw field data on the subfield delimiter (`0x1F`).
pub fn split_subfields(raw: &[u8]) -> Vec<&[u8]> {
    raw.split(|&b| b == SUBFIELD_DELIMITER).collect()
}

/// Decodes a little-endian 4-byte signed coordinate value, scaled by
/// `scale` (the cell's coordinate multiplication factor, or an explicit
/// override).
pub fn decode_coordinate(raw: &[u8], scale: f64) -> Option<f64> {
    if raw.len() != 4 {
        return None;
    }
    Some(LittleEndian::read_i32(raw) as f64 / scale)
}

/// Decodes a little-endian 4-byte signed depth/sounding value, scaled by
/// `scale` (the cell's sounding multiplication factor).
pub fn decode_depth(raw: &[u8], scale: f64) -> Option<f64> {
    decode_coordinate(raw, scale)
}

/// Decodes a record identifier from a 1, 2, or 4-byte little-endian
/// unsigned integer, or a decimal string. Returns `None` for anything
/// else, per the "invalid inputs produce no value" rule.
pub fn decode_record_id(raw: &[u8]) -> Option<u32> {
    match raw.len() {
        1 => Some(raw[0] as u32),
        2 => Some(LittleEndian::read_u16(raw) as u32),
        4 => Some(LittleEndian::read_u32(raw)),
        _ => std::str::from_utf8(raw).ok()?.trim().parse().ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coerce_distinguishes_numeric_from_text() {
        assert_eq!(SubfieldValue::coerce(b"42"), SubfieldValue::Integer(42));
        assert_eq!(SubfieldValue::coerce(b"3.5"), SubfieldValue::Float(3.5));
        assert_eq!(SubfieldValue::coerce(b"DEPARE"), SubfieldValue::Text("DEPARE".into()));
        assert_eq!(SubfieldValue::coerce(b"   "), SubfieldValue::Empty);
    }

    #[test]
    fn coerce_binary_picks_width_by_length() {
        assert_eq!(SubfieldValue::coerce_binary(&[7]), SubfieldValue::Integer(7));
        assert_eq!(SubfieldValue::coerce_binary(&[0x01, 0x00]), SubfieldValue::Integer(1));
        assert_eq!(
            SubfieldValue::coerce_binary(&[0xFF, 0xFF, 0xFF, 0xFF]),
            SubfieldValue::Integer(-1)
        );
    }

    #[test]
    fn decode_coordinate_applies_comf() {
        let raw = 123_456_789i32.to_le_bytes();
        let decoded = decode_coordinate(&raw, 10_000_000.0).unwrap();
        assert!((decoded - 12.3456789).abs() < 1e-9);
    }

    #[test]
    fn decode_record_id_rejects_odd_lengths() {
        assert_eq!(decode_record_id(&[1, 2, 3]), None);
        assert_eq!(decode_record_id(b"118"), Some(118));
    }

    #[test]
    fn split_subfields_handles_empty_trailing() {
        let parts = split_subfields(b"a\x1Fb\x1F");
        assert_eq!(parts, vec![&b"a"[..], &b"b"[..], &b""[..]]);
    }
}
