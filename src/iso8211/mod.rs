//! ISO 8211 record framing: the physical encoding layer S-57 is built on.
//!
//! A [`Reader`] lazily parses a byte stream into [`Record`]s, each with a
//! parsed [`Leader`] and a directory mapping field tags to their raw byte
//! ranges. This module knows nothing about S-57 semantics; the
//! [`crate::catalog`] and [`crate::metadata`] modules interpret field tags
//! and subfield layouts on top of it.

mod leader;
mod record;
mod subfield;

pub use leader::Leader;
pub use record::{DirectoryEntry, Reader, Record};
pub use subfield::{decode_coordinate, decode_depth, decode_record_id, split_subfields, SubfieldValue};
