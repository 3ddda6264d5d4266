//! Parse-time configuration.
//!
//! [`ParseOptions`] is the entire configuration surface of the decoder —
//! there is no network, credential, or persistence configuration, in
//! keeping with the decoder's narrow scope. [`RTreeConfig`] is the sibling
//! knob for the spatial index's adaptive backend selection.

/// Options controlling how a cell is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// When true, any error-severity [`crate::warning::Warning`] (or a
    /// crossed `max_warnings` threshold) aborts the parse with
    /// [`crate::error::Error::Strict`] instead of continuing.
    pub strict_mode: bool,
    /// Maximum number of warnings to accumulate before a synthetic
    /// `MAX_WARNINGS_EXCEEDED` warning is raised. `None` means unbounded.
    pub max_warnings: Option<u32>,
}

impl ParseOptions {
    /// Lenient, unbounded — suited to local iteration against messy data.
    pub fn development() -> Self {
        ParseOptions {
            strict_mode: false,
            max_warnings: None,
        }
    }

    /// Lenient but bounded, so a pathological cell can't grow the warning
    /// log without limit in a long-running service.
    pub fn production() -> Self {
        ParseOptions {
            strict_mode: false,
            max_warnings: Some(100),
        }
    }

    /// Strict and tightly bounded — fails fast, suited to conformance
    /// tests against known-good fixtures.
    pub fn testing() -> Self {
        ParseOptions {
            strict_mode: true,
            max_warnings: Some(10),
        }
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions::development()
    }
}

/// Tuning for the R-tree spatial index backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RTreeConfig {
    /// Maximum number of children per node. Minimum enforced value is 4.
    pub node_fanout: usize,
    /// When true, the adaptive factory always returns the linear backend
    /// regardless of feature count; useful for tests that need bit-for-bit
    /// parity checks without paying for tree construction.
    pub force_linear: bool,
}

impl RTreeConfig {
    /// The feature-count threshold at or above which the adaptive factory
    /// selects the R-tree backend.
    pub const ADAPTIVE_THRESHOLD: usize = 200;
}

impl Default for RTreeConfig {
    fn default() -> Self {
        RTreeConfig {
            node_fanout: 16,
            force_linear: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profiles_match_documented_values() {
        assert_eq!(ParseOptions::development(), ParseOptions { strict_mode: false, max_warnings: None });
        assert_eq!(ParseOptions::production(), ParseOptions { strict_mode: false, max_warnings: Some(100) });
        assert_eq!(ParseOptions::testing(), ParseOptions { strict_mode: true, max_warnings: Some(10) });
    }
}
