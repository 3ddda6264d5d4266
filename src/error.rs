//! Crate-wide error type.
//!
//! Mirrors the teacher's pattern of small per-module error enums that widen,
//! via `#[from]`, into one top-level [`Error`]. The two variants that carry
//! parse-session state ([`Error::Strict`] and [`Error::Input`]) are the
//! Rust expression of what a host language would throw as distinct
//! exception types; there is no separate exception hierarchy here because
//! Rust has one error channel.

use crate::warning::Warning;
use thiserror::Error as ThisError;

/// Errors produced while reading ISO 8211 record framing.
#[derive(Debug, ThisError)]
pub enum Iso8211Error {
    /// The leader claims a record length that does not match the bytes
    /// actually available.
    #[error("leader declares record length {declared}, only {available} bytes remain")]
    LeaderLenMismatch {
        /// Length declared in the leader.
        declared: usize,
        /// Bytes actually remaining in the input.
        available: usize,
    },
    /// The base address of field area falls outside the record.
    #[error("base address of field area {base} is out of bounds for record length {record_len}")]
    BadBaseAddress {
        /// Parsed base address.
        base: usize,
        /// Declared record length.
        record_len: usize,
    },
    /// The directory was truncated before a field terminator was found.
    #[error("directory truncated before a field terminator (0x1E) was found")]
    DirectoryTruncated,
    /// A directory entry's length/position run past the field area.
    #[error("field `{tag}` at position {position} length {length} exceeds the field area")]
    FieldOutOfBounds {
        /// Field tag.
        tag: String,
        /// Declared field position (relative to base address).
        position: usize,
        /// Declared field length.
        length: usize,
    },
}

/// Errors raised while sequencing update datasets.
#[derive(Debug, ThisError)]
pub enum UpdateError {
    /// Update sequence numbers were not strictly increasing, or skipped one.
    #[error("update sequence gap: expected {expected:03}, found {found:03}")]
    SequenceGap {
        /// The sequence number that should have come next.
        expected: u32,
        /// The sequence number actually encountered.
        found: u32,
    },
    /// The record version carried by an update file did not follow the
    /// previous applied version.
    #[error("update record version mismatch: expected > {previous}, found {found}")]
    RverMismatch {
        /// Previously applied record version.
        previous: u16,
        /// Record version found in the offending update.
        found: u16,
    },
}

/// The crate-wide error and result types.
#[derive(Debug, ThisError)]
pub enum Error {
    /// The input was structurally unusable before any record could be read:
    /// empty input, or fewer than 24 bytes (too short for an ISO 8211
    /// leader).
    #[error("invalid input: {0}")]
    Input(String),

    /// A structural or sequencing error escalated to fatal because the
    /// session was configured with `strict_mode = true`.
    ///
    /// Carries the warning that triggered the escalation along with the
    /// complete warning log accumulated up to that point, so a caller never
    /// loses diagnostic context by catching this variant.
    #[error("strict mode: {} ({} warnings total)", .triggered_by.message, .all_warnings.len())]
    Strict {
        /// The warning whose severity or threshold crossing caused the
        /// escalation.
        triggered_by: Warning,
        /// Every warning emitted during the session, in emission order.
        all_warnings: Vec<Warning>,
    },

    /// Error parsing ISO 8211 record framing.
    #[error(transparent)]
    Iso8211(#[from] Iso8211Error),

    /// Error applying an update sequence.
    #[error(transparent)]
    Update(#[from] UpdateError),
}

/// A `Result` alias using the crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
