//! Directory-encoded ISO 8211 records and the lazy reader over a byte
//! stream of them.

use crate::error::Iso8211Error;
use crate::iso8211::leader::Leader;
use crate::warning::{Collector, Severity, Warning};

const FIELD_TERMINATOR: u8 = 0x1E;

/// One directory entry: a field's tag, byte length, and position relative
/// to the record's base address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    /// Field tag, e.g. `"DSID"`.
    pub tag: String,
    /// Length of the field's data, including its own terminator.
    pub length: usize,
    /// Byte offset of the field from the base address of the field area.
    pub position: usize,
}

/// A single parsed ISO 8211 record: its leader, directory, and the raw
/// field-area bytes.
#[derive(Debug, Clone)]
pub struct Record {
    /// The parsed 24-byte leader.
    pub leader: Leader,
    directory: Vec<DirectoryEntry>,
    field_area: Vec<u8>,
}

impl Record {
    /// Parses one record starting at the beginning of `data`. Returns the
    /// record and the number of bytes it consumed.
    fn parse(data: &[u8], collector: &mut Collector) -> Result<(Record, usize), crate::error::Error> {
        let leader = Leader::parse(data)?;

        if data.len() < leader.record_length {
            return Err(Iso8211Error::LeaderLenMismatch {
                declared: leader.record_length,
                available: data.len(),
            }
            .into());
        }

        let entry_size = leader.directory_entry_size();
        let mut directory = Vec::new();
        let mut cursor = 24usize;

        loop {
            if cursor >= data.len() {
                return Err(Iso8211Error::DirectoryTruncated.into());
            }
            if data[cursor] == FIELD_TERMINATOR {
                cursor += 1;
                break;
            }
            if entry_size == 0 || cursor + entry_size > leader.base_address_of_field_area {
                return Err(Iso8211Error::DirectoryTruncated.into());
            }
            let tag_end = cursor + leader.size_of_field_tag;
            let len_end = tag_end + leader.size_of_field_length_field;
            let pos_end = len_end + leader.size_of_field_position_field;

            let tag = String::from_utf8_lossy(&data[cursor..tag_end]).to_string();
            let length = ascii_decimal(&data[tag_end..len_end]);
            let position = ascii_decimal(&data[len_end..pos_end]);

            directory.push(DirectoryEntry {
                tag,
                length,
                position,
            });
            cursor = pos_end;
        }

        let field_area = data[leader.base_address_of_field_area..leader.record_length].to_vec();

        for entry in &directory {
            if entry.position + entry.length > field_area.len() {
                collector.push(
                    "FIELD_BOUNDS",
                    Severity::Warning,
                    format!(
                        "field `{}` at {}+{} exceeds field area of {} bytes",
                        entry.tag,
                        entry.position,
                        entry.length,
                        field_area.len()
                    ),
                )?;
            }
        }

        let consumed = leader.record_length;
        Ok((
            Record {
                leader,
                directory,
                field_area,
            },
            consumed,
        ))
    }

    /// True if a field with this tag is present in the directory.
    pub fn has_field(&self, tag: &str) -> bool {
        self.directory.iter().any(|entry| entry.tag == tag)
    }

    /// Returns the raw bytes of the named field, if present. The trailing
    /// field terminator, if any, is stripped.
    pub fn get_field_data(&self, tag: &str) -> Option<&[u8]> {
        let entry = self.directory.iter().find(|entry| entry.tag == tag)?;
        let end = (entry.position + entry.length).min(self.field_area.len());
        let mut bytes = &self.field_area[entry.position.min(end)..end];
        if bytes.last() == Some(&FIELD_TERMINATOR) {
            bytes = &bytes[..bytes.len() - 1];
        }
        Some(bytes)
    }

    /// Iterates over every field tag present in the directory, in order.
    pub fn field_tags(&self) -> impl Iterator<Item = &str> {
        self.directory.iter().map(|entry| entry.tag.as_str())
    }
}

fn ascii_decimal(bytes: &[u8]) -> usize {
    std::str::from_utf8(bytes)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(0)
}

/// Lazily parses a byte stream into a sequence of [`Record`]s, skipping
/// malformed records with a warning rather than aborting, per the reader's
/// recovery policy. Iteration terminates (without erroring further) once a
/// record is too short to contain its declared length, unless strict mode
/// is enabled, in which case that condition is raised immediately.
pub struct Reader<'a> {
    data: &'a [u8],
    offset: usize,
    record_index: u32,
}

impl<'a> Reader<'a> {
    /// Creates a reader over the given byte slice.
    pub fn new(data: &'a [u8]) -> Reader<'a> {
        Reader {
            data,
            offset: 0,
            record_index: 0,
        }
    }

    /// Reads the next record, threading warnings through `collector`.
    ///
    /// Returns `Ok(None)` at end of input. Returns `Ok(Some(_))` for a
    /// successfully parsed record. A malformed record whose leader still
    /// yields a trustworthy declared length (a bad base address, a
    /// truncated directory) is skipped and iteration continues at the next
    /// record boundary; a record too short to contain any usable length at
    /// all is fatal to further progress and ends iteration. Either way a
    /// warning is emitted via `collector`, which raises `Err` instead in
    /// strict mode.
    pub fn next_record(
        &mut self,
        collector: &mut Collector,
    ) -> Result<Option<Record>, crate::error::Error> {
        loop {
            if self.offset >= self.data.len() {
                return Ok(None);
            }
            let remaining = &self.data[self.offset..];
            match Record::parse(remaining, collector) {
                Ok((record, consumed)) => {
                    self.offset += consumed;
                    self.record_index += 1;
                    return Ok(Some(record));
                }
                Err(crate::error::Error::Iso8211(err @ Iso8211Error::LeaderLenMismatch { .. })) => {
                    let warning = Warning::new(
                        "LEADER_LEN_MISMATCH",
                        Severity::Error,
                        err.to_string(),
                    )
                    .with_record(self.record_index);
                    collector.warn(warning)?;
                    // Fewer bytes remain than any leader could declare: no
                    // further progress is possible.
                    return Ok(None);
                }
                Err(crate::error::Error::Iso8211(err @ Iso8211Error::BadBaseAddress { record_len, .. })) => {
                    let warning = Warning::new("BAD_BASE_ADDR", Severity::Error, err.to_string())
                        .with_record(self.record_index);
                    collector.warn(warning)?;
                    // The leader itself parsed, so its declared length is
                    // trustworthy enough to skip past this record and keep
                    // reading, per the reader's "skip malformed, continue"
                    // recovery policy.
                    if record_len >= 24 && record_len <= remaining.len() {
                        self.offset += record_len;
                        self.record_index += 1;
                        continue;
                    }
                    return Ok(None);
                }
                Err(crate::error::Error::Iso8211(err @ Iso8211Error::DirectoryTruncated)) => {
                    let warning =
                        Warning::new("DIR_TRUNCATED", Severity::Error, err.to_string())
                            .with_record(self.record_index);
                    collector.warn(warning)?;
                    if let Ok(leader) = Leader::parse(remaining) {
                        if leader.record_length >= 24 && leader.record_length <= remaining.len() {
                            self.offset += leader.record_length;
                            self.record_index += 1;
                            continue;
                        }
                    }
                    return Ok(None);
                }
                Err(crate::error::Error::Iso8211(Iso8211Error::FieldOutOfBounds { .. })) => unreachable!(
                    "Record::parse never returns FieldOutOfBounds directly; it is only used by higher layers"
                ),
                Err(other) => return Err(other),
            }
        }
    }
}
