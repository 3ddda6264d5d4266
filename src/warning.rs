//! Structured parse diagnostics.
//!
//! Every recoverable oddity encountered while decoding a cell — a
//! truncated directory entry, an unknown object code, a polygon that
//! needed auto-closing — becomes a [`Warning`] instead of an aborted
//! parse. A [`Collector`] accumulates them for the duration of one
//! session and enforces the strict-mode escalation policy.

use std::collections::HashSet;
use std::fmt;

use chrono::{DateTime, Utc};

use crate::error::Error;

/// How serious a [`Warning`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Purely informational; no data was lost or guessed at.
    Info,
    /// Recoverable oddity; the parse continued with best-effort data.
    Warning,
    /// A structural or sequencing problem; fatal under strict mode.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        f.write_str(s)
    }
}

/// A single diagnostic emitted during parsing.
#[derive(Debug, Clone, PartialEq)]
pub struct Warning {
    /// Stable identifier, e.g. `"UNKNOWN_OBJ_CODE"`.
    pub code: String,
    /// Severity of this diagnostic.
    pub severity: Severity,
    /// Human-readable detail.
    pub message: String,
    /// The ISO 8211 record this warning concerns, if any.
    pub record_id: Option<u32>,
    /// The feature this warning concerns, if any.
    pub feature_id: Option<u32>,
    /// When this warning was emitted.
    pub timestamp: DateTime<Utc>,
}

impl Warning {
    /// Creates a new warning with no record/feature context, timestamped
    /// at the moment of construction.
    pub fn new(code: impl Into<String>, severity: Severity, message: impl Into<String>) -> Self {
        Warning {
            code: code.into(),
            severity,
            message: message.into(),
            record_id: None,
            feature_id: None,
            timestamp: Utc::now(),
        }
    }

    /// Attaches a record id to this warning.
    pub fn with_record(mut self, record_id: u32) -> Self {
        self.record_id = Some(record_id);
        self
    }

    /// Attaches a feature id to this warning.
    pub fn with_feature(mut self, feature_id: u32) -> Self {
        self.feature_id = Some(feature_id);
        self
    }
}

/// A summary of everything a [`Collector`] has accumulated.
#[derive(Debug, Clone, Default)]
pub struct WarningSummary {
    /// Total number of warnings of any severity.
    pub total: usize,
    /// Count of info-severity warnings.
    pub info: usize,
    /// Count of warning-severity warnings.
    pub warning: usize,
    /// Count of error-severity warnings.
    pub error: usize,
    /// Whether `max_warnings` was exceeded.
    pub threshold_exceeded: bool,
}

/// Accumulates [`Warning`]s for one parse session and enforces the
/// strict-mode escalation and max-warnings threshold policies described by
/// [`crate::options::ParseOptions`].
#[derive(Debug, Clone)]
pub struct Collector {
    warnings: Vec<Warning>,
    strict_mode: bool,
    max_warnings: Option<u32>,
    threshold_exceeded: bool,
    seen_unknown_object_codes: HashSet<u16>,
    seen_unknown_acronyms: HashSet<String>,
}

impl Collector {
    /// Creates a collector configured from [`crate::options::ParseOptions`].
    pub fn new(strict_mode: bool, max_warnings: Option<u32>) -> Self {
        Collector {
            warnings: Vec::new(),
            strict_mode,
            max_warnings,
            threshold_exceeded: false,
            seen_unknown_object_codes: HashSet::new(),
            seen_unknown_acronyms: HashSet::new(),
        }
    }

    /// Returns true if an unknown object code has not yet been reported in
    /// this session, marking it as seen as a side effect.
    pub fn should_report_unknown_code(&mut self, code: u16) -> bool {
        self.seen_unknown_object_codes.insert(code)
    }

    /// Returns true if an unknown object acronym has not yet been reported
    /// in this session, marking it as seen as a side effect.
    pub fn should_report_unknown_acronym(&mut self, acronym: &str) -> bool {
        self.seen_unknown_acronyms.insert(acronym.to_ascii_uppercase())
    }

    /// Records a warning, enforcing threshold and strict-mode policy.
    ///
    /// Returns `Err(Error::Strict { .. })` when this warning (or the
    /// synthetic `MAX_WARNINGS_EXCEEDED` warning it triggers) must abort the
    /// parse; the warning is still appended to the log either way so a
    /// caller who catches the error sees it in `all_warnings`.
    pub fn warn(&mut self, warning: Warning) -> Result<(), Error> {
        let is_error = warning.severity == Severity::Error;
        self.warnings.push(warning.clone());
        log::debug!("s57: {} [{}] {}", warning.severity, warning.code, warning.message);

        if is_error && self.strict_mode {
            return Err(self.escalate(warning));
        }

        if let Some(max) = self.max_warnings {
            if !self.threshold_exceeded && self.warnings.len() as u32 >= max {
                self.threshold_exceeded = true;
                let synthetic = Warning::new(
                    "MAX_WARNINGS_EXCEEDED",
                    Severity::Error,
                    format!("warning count reached the configured maximum of {max}"),
                );
                self.warnings.push(synthetic.clone());
                if self.strict_mode {
                    return Err(self.escalate(synthetic));
                }
            }
        }

        Ok(())
    }

    /// Convenience wrapper around [`Collector::warn`] building a [`Warning`]
    /// inline.
    pub fn push(
        &mut self,
        code: impl Into<String>,
        severity: Severity,
        message: impl Into<String>,
    ) -> Result<(), Error> {
        self.warn(Warning::new(code, severity, message))
    }

    fn escalate(&self, triggered_by: Warning) -> Error {
        Error::Strict {
            triggered_by,
            all_warnings: self.warnings.clone(),
        }
    }

    /// All warnings emitted so far, in emission order.
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Whether the max-warnings threshold has been crossed.
    pub fn is_threshold_exceeded(&self) -> bool {
        self.threshold_exceeded
    }

    /// Produces a [`WarningSummary`] of the current state.
    pub fn summary(&self) -> WarningSummary {
        let mut summary = WarningSummary {
            total: self.warnings.len(),
            threshold_exceeded: self.threshold_exceeded,
            ..Default::default()
        };
        for warning in &self.warnings {
            match warning.severity {
                Severity::Info => summary.info += 1,
                Severity::Warning => summary.warning += 1,
                Severity::Error => summary.error += 1,
            }
        }
        summary
    }

    /// Clears all accumulated state, as if the collector were freshly
    /// constructed with the same configuration.
    pub fn clear(&mut self) {
        self.warnings.clear();
        self.threshold_exceeded = false;
        self.seen_unknown_object_codes.clear();
        self.seen_unknown_acronyms.clear();
    }

    /// Logs the start of parsing a named input, at debug level.
    pub fn start_file(&self, name: &str) {
        log::debug!("s57: begin parsing {name}");
    }

    /// Logs the completion of parsing a named input, at debug level.
    pub fn finish_file(&self, name: &str) {
        log::debug!(
            "s57: finished parsing {name}, {} warning(s) emitted",
            self.warnings.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dedups_unknown_codes_once() {
        let mut collector = Collector::new(false, None);
        assert!(collector.should_report_unknown_code(99));
        assert!(!collector.should_report_unknown_code(99));
        assert!(collector.should_report_unknown_code(100));
    }

    #[test]
    fn strict_mode_escalates_on_error_severity() {
        let mut collector = Collector::new(true, None);
        let result = collector.push("UPDATE_GAP", Severity::Error, "gap");
        assert!(matches!(result, Err(Error::Strict { .. })));
    }

    #[test]
    fn non_strict_never_escalates_below_threshold() {
        let mut collector = Collector::new(false, None);
        assert!(collector.push("DEGENERATE_EDGE", Severity::Warning, "x").is_ok());
        assert_eq!(collector.summary().total, 1);
    }

    #[test]
    fn max_warnings_zero_throws_on_first_warning_in_strict_mode() {
        let mut collector = Collector::new(true, Some(0));
        let result = collector.push("POLYGON_CLOSED_AUTO", Severity::Info, "closed");
        assert!(matches!(result, Err(Error::Strict { .. })));
    }

    #[test]
    fn threshold_exceeded_is_sticky_and_reported_in_summary() {
        let mut collector = Collector::new(false, Some(2));
        collector.push("A", Severity::Info, "a").unwrap();
        collector.push("B", Severity::Info, "b").unwrap();
        assert!(collector.is_threshold_exceeded());
        assert_eq!(collector.summary().total, 3); // 2 + synthetic
    }
}
