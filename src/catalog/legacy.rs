//! Legacy-to-official feature type adapter.
//!
//! Older internal tooling names feature types with loose, non-acronym
//! labels (`"lighthouse"`, `"shoreline"`). This module maps those to the
//! official S-57 acronyms and back, so a caller with either vocabulary can
//! interoperate with the catalog in [`crate::catalog::object_class`].

const UNKNOWN: &str = "UNKNOWN";

/// (legacy name, official acronym) pairs. Several legacy names may map to
/// the same acronym; the reverse lookup returns the first (canonical)
/// match.
static LEGACY_TO_ACRONYM: &[(&str, &str)] = &[
    ("lighthouse", "LIGHTS"),
    ("light", "LIGHTS"),
    ("shoreline", "COALNE"),
    ("coastline", "COALNE"),
    ("buoy_lateral", "BOYLAT"),
    ("buoy_cardinal", "BOYCAR"),
    ("buoy_isolated_danger", "BOYISD"),
    ("buoy_safe_water", "BOYSAW"),
    ("buoy_special_purpose", "BOYSPP"),
    ("beacon", "BCNLAT"),
    ("depth_area", "DEPARE"),
    ("depth_contour", "DEPCNT"),
    ("sounding", "SOUNDG"),
    ("wreck", "WRECKS"),
    ("obstruction", "OBSTRN"),
    ("land_area", "LNDARE"),
    ("built_up_area", "BUAARE"),
    ("anchorage", "ACHARE"),
    ("restricted_area", "RESARE"),
];

/// Maps a legacy feature type name to its official acronym, case
/// insensitively. Returns `"UNKNOWN"` when no mapping exists.
pub fn legacy_to_acronym(legacy: &str) -> &'static str {
    LEGACY_TO_ACRONYM
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(legacy))
        .map(|(_, acronym)| *acronym)
        .unwrap_or(UNKNOWN)
}

/// Maps an official acronym back to its canonical legacy name. Returns
/// `"unknown"` when no mapping exists.
pub fn acronym_to_legacy(acronym: &str) -> &'static str {
    LEGACY_TO_ACRONYM
        .iter()
        .find(|(_, official)| official.eq_ignore_ascii_case(acronym))
        .map(|(name, _)| *name)
        .unwrap_or("unknown")
}
