//! End-to-end: an unrecognized horizontal datum code produces exactly
//! one warning, and a recognized vertical/sounding datum produces none.

mod common;

use common::dspm_bytes;
use s57::warning::{Collector, Severity};
use s57::metadata::extract_dspm;

#[test]
fn unknown_horizontal_datum_warns_once() {
    let bytes = dspm_bytes("BADH", "MLLW", "MLLW", "10000000", "10");
    let mut collector = Collector::new(false, None);
    let metadata = extract_dspm(&bytes, &mut collector).unwrap();

    assert_eq!(metadata.horizontal_datum, "BADH");
    assert_eq!(metadata.vertical_datum, "MLLW");
    assert_eq!(metadata.sounding_datum, "MLLW");

    assert_eq!(collector.warnings().len(), 1);
    let warning = &collector.warnings()[0];
    assert_eq!(warning.code, "UNKNOWN_HORIZONTAL_DATUM");
    assert_eq!(warning.severity, Severity::Warning);
    assert!(warning.message.contains("BADH"));
}
