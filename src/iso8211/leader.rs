//! The 24-byte ISO 8211 record leader.

use crate::error::Iso8211Error;

/// Fixed-position leader fields that precede every ISO 8211 record's
/// directory and field area.
///
/// See ISO 8211 section 3.7.2. All multi-byte numeric fields are ASCII
/// decimal, not binary integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Leader {
    /// Total length of the record in bytes (positions 0-4).
    pub record_length: usize,
    /// Interchange level (position 5).
    pub interchange_level: char,
    /// Leader identifier: `'L'` for a Data Descriptive Record, `'D'` for a
    /// Data Record (position 6).
    pub leader_identifier: char,
    /// Inline code extension indicator (position 7).
    pub inline_code_extension_indicator: char,
    /// Version number (position 8).
    pub version_number: char,
    /// Application indicator (position 9).
    pub application_indicator: char,
    /// Base address of field area (positions 12-16).
    pub base_address_of_field_area: usize,
    /// Entry map: size of the field length subfield (position 20).
    pub size_of_field_length_field: usize,
    /// Entry map: size of the field position subfield (position 21).
    pub size_of_field_position_field: usize,
    /// Entry map: size of the field tag (position 23).
    pub size_of_field_tag: usize,
}

impl Leader {
    /// Parses a leader from the first 24 bytes of a record.
    pub fn parse(data: &[u8]) -> Result<Leader, Iso8211Error> {
        if data.len() < 24 {
            return Err(Iso8211Error::LeaderLenMismatch {
                declared: 24,
                available: data.len(),
            });
        }

        let record_length = ascii_decimal(&data[0..5]).unwrap_or(0);
        let interchange_level = data[5] as char;
        let leader_identifier = data[6] as char;
        let inline_code_extension_indicator = data[7] as char;
        let version_number = data[8] as char;
        let application_indicator = data[9] as char;
        let base_address_of_field_area = ascii_decimal(&data[12..17]).ok_or(
            Iso8211Error::BadBaseAddress {
                base: 0,
                record_len: record_length,
            },
        )?;

        if base_address_of_field_area < 24 || base_address_of_field_area >= record_length.max(24) {
            return Err(Iso8211Error::BadBaseAddress {
                base: base_address_of_field_area,
                record_len: record_length,
            });
        }

        let size_of_field_length_field = digit(data[20]);
        let size_of_field_position_field = digit(data[21]);
        let size_of_field_tag = digit(data[23]);

        log::trace!(
            "iso8211: leader length={record_length} type={leader_identifier} base={base_address_of_field_area} entry_size={}",
            size_of_field_tag + size_of_field_length_field + size_of_field_position_field
        );

        Ok(Leader {
            record_length,
            interchange_level,
            leader_identifier,
            inline_code_extension_indicator,
            version_number,
            application_indicator,
            base_address_of_field_area,
            size_of_field_length_field,
            size_of_field_position_field,
            size_of_field_tag,
        })
    }

    /// True if this leader belongs to a Data Descriptive Record.
    pub fn is_ddr(&self) -> bool {
        self.leader_identifier == 'L'
    }

    /// True if this leader belongs to a Data Record.
    pub fn is_dr(&self) -> bool {
        self.leader_identifier == 'D'
    }

    /// The byte size of one directory entry (tag + length + position).
    pub fn directory_entry_size(&self) -> usize {
        self.size_of_field_tag + self.size_of_field_length_field + self.size_of_field_position_field
    }
}

fn digit(byte: u8) -> usize {
    (byte as char).to_digit(10).unwrap_or(0) as usize
}

fn ascii_decimal(bytes: &[u8]) -> Option<usize> {
    std::str::from_utf8(bytes).ok()?.trim().parse().ok()
}
