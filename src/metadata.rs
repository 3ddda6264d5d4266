//! Dataset-level metadata extracted from the DSPM (Dataset Parameters)
//! field: scale factors and datums that govern how every coordinate and
//! depth value in the cell is decoded.

use crate::bounds::Bounds;
use crate::iso8211::{split_subfields, SubfieldValue};
use crate::warning::{Collector, Severity};

/// Default coordinate multiplication factor, used when a cell carries no
/// DSPM field or the field omits COMF.
pub const DEFAULT_COMF: f64 = 10_000_000.0;

/// Default sounding multiplication factor.
pub const DEFAULT_SOMF: f64 = 10.0;

static KNOWN_HORIZONTAL_DATUMS: &[&str] = &["WGS84", "WGS72", "NAD83", "NAD27", "ETRS"];
static KNOWN_VERTICAL_DATUMS: &[&str] = &["MLLW", "MLW", "MSL", "MLHW", "MHW", "LAT", "HAT", "CD"];

/// Dataset-wide metadata describing scaling, datums, and edition info for a
/// parsed cell.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartMetadata {
    /// Producing agency or organization, from DSID, when present.
    pub producer: Option<String>,
    /// S-57 edition of the encoding (not the cell edition number).
    pub version: Option<String>,
    /// Cell edition number.
    pub edition_number: Option<u32>,
    /// Cumulative number of updates applied to reach this edition.
    pub update_number: Option<u32>,
    /// Coordinate multiplication factor.
    pub comf: f64,
    /// Sounding multiplication factor.
    pub somf: f64,
    /// Horizontal datum code, e.g. `"WGS84"`.
    pub horizontal_datum: String,
    /// Vertical datum code.
    pub vertical_datum: String,
    /// Sounding datum code.
    pub sounding_datum: String,
    /// Geographic bounds of the dataset, once known.
    pub bounds: Option<Bounds>,
    /// ISO creation date string, when present (`CDAT` field), left
    /// undecoded as the decoder does not need it for navigation.
    pub creation_date: Option<String>,
}

impl Default for ChartMetadata {
    fn default() -> Self {
        ChartMetadata {
            producer: None,
            version: None,
            edition_number: None,
            update_number: None,
            comf: DEFAULT_COMF,
            somf: DEFAULT_SOMF,
            horizontal_datum: "WGS84".to_string(),
            vertical_datum: "MLLW".to_string(),
            sounding_datum: "MLLW".to_string(),
            bounds: None,
            creation_date: None,
        }
    }
}

/// Extracts [`ChartMetadata`] from a raw DSPM field's subfields, emitting
/// warnings for unrecognized datum codes.
///
/// `raw` is the field data as returned by
/// [`crate::iso8211::Record::get_field_data`] for the `"DSPM"` tag, with
/// subfields in the conventional DSPM order: RCNM, RCID, HDAT, VDAT, SDAT,
/// CSCL, DUNI, HUNI, PUNI, COUN, COMF, SOMF, COMT.
pub fn extract_dspm(raw: &[u8], collector: &mut Collector) -> Result<ChartMetadata, crate::error::Error> {
    let subfields: Vec<SubfieldValue> = split_subfields(raw)
        .into_iter()
        .map(SubfieldValue::coerce)
        .collect();

    let mut metadata = ChartMetadata::default();

    if let Some(hdat) = subfields.get(2) {
        let code = hdat.as_text();
        if !code.is_empty() {
            if !KNOWN_HORIZONTAL_DATUMS.contains(&code.as_str()) {
                collector.push(
                    "UNKNOWN_HORIZONTAL_DATUM",
                    Severity::Warning,
                    format!("unrecognized horizontal datum code `{code}`"),
                )?;
            }
            metadata.horizontal_datum = code;
        }
    }
    if let Some(vdat) = subfields.get(3) {
        let code = vdat.as_text();
        if !code.is_empty() {
            if !KNOWN_VERTICAL_DATUMS.contains(&code.as_str()) {
                collector.push(
                    "UNKNOWN_VERTICAL_DATUM",
                    Severity::Warning,
                    format!("unrecognized vertical datum code `{code}`"),
                )?;
            }
            metadata.vertical_datum = code;
        }
    }
    if let Some(sdat) = subfields.get(4) {
        let code = sdat.as_text();
        if !code.is_empty() {
            if !KNOWN_VERTICAL_DATUMS.contains(&code.as_str()) {
                collector.push(
                    "UNKNOWN_SOUNDING_DATUM",
                    Severity::Warning,
                    format!("unrecognized sounding datum code `{code}`"),
                )?;
            }
            metadata.sounding_datum = code;
        }
    }

    if let Some(comf) = subfields.get(10).and_then(SubfieldValue::as_float) {
        if comf > 0.0 {
            metadata.comf = comf;
        }
    }
    if let Some(somf) = subfields.get(11).and_then(SubfieldValue::as_float) {
        if somf > 0.0 {
            metadata.somf = somf;
        }
    }

    Ok(metadata)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::warning::Collector;

    fn dspm_bytes(hdat: &str, vdat: &str, sdat: &str, comf: &str, somf: &str) -> Vec<u8> {
        let fields = vec!["100", "1", hdat, vdat, sdat, "", "", "", "", "", comf, somf, ""];
        fields.join("\x1F").into_bytes()
    }

    #[test]
    fn defaults_when_comf_somf_absent() {
        let bytes = dspm_bytes("WGS84", "MLLW", "MLLW", "", "");
        let mut collector = Collector::new(false, None);
        let metadata = extract_dspm(&bytes, &mut collector).unwrap();
        assert_eq!(metadata.comf, DEFAULT_COMF);
        assert_eq!(metadata.somf, DEFAULT_SOMF);
        assert_eq!(collector.warnings().len(), 0);
    }

    #[test]
    fn overrides_comf_and_somf() {
        let bytes = dspm_bytes("WGS84", "MLLW", "MLLW", "5000000", "20");
        let mut collector = Collector::new(false, None);
        let metadata = extract_dspm(&bytes, &mut collector).unwrap();
        assert_eq!(metadata.comf, 5_000_000.0);
        assert_eq!(metadata.somf, 20.0);
    }

    #[test]
    fn warns_on_unknown_horizontal_datum_only() {
        let bytes = dspm_bytes("BADH", "MLLW", "MLLW", "", "");
        let mut collector = Collector::new(false, None);
        let metadata = extract_dspm(&bytes, &mut collector).unwrap();
        assert_eq!(metadata.horizontal_datum, "BADH");
        assert_eq!(collector.warnings().len(), 1);
        assert_eq!(collector.warnings()[0].code, "UNKNOWN_HORIZONTAL_DATUM");
    }
}
