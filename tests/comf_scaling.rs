//! End-to-end: the same raw coordinate bytes decode to coordinates whose
//! magnitude halves when COMF doubles — the coordinate multiplication
//! factor is a pure divisor, nothing else in the assembly path depends
//! on it.

mod common;

use common::*;
use s57::{parse, ParseOptions};

fn cell_with_comf(comf: &str, raw_x: i32, raw_y: i32) -> Vec<u8> {
    let mut bytes = ddr();
    bytes.extend(build_record(&[field("DSPM", dspm_bytes("WGS84", "MLLW", "MLLW", comf, "10"))]));
    bytes.extend(build_record(&[
        field("VRID", vrid_bytes(110, 1)),
        field("SG2D", {
            let mut out = Vec::new();
            out.extend_from_slice(&raw_y.to_le_bytes());
            out.extend_from_slice(&raw_x.to_le_bytes());
            out
        }),
    ]));
    bytes.extend(build_record(&[
        field("FRID", frid_bytes(1, 1, 75, 0, 1)),
        field("FOID", foid_bytes(550, 1, 0)),
        field("ATTF", attf_bytes(&[(75, "3")])),
        field("FSPT", fspt_bytes(&[(110, 1, 255)])),
    ]));
    bytes
}

#[test]
fn halving_comf_doubles_decoded_coordinates() {
    let raw_x = -612_500_000i32;
    let raw_y = 237_500_000i32;

    let high_comf = parse(&cell_with_comf("10000000", raw_x, raw_y), ParseOptions::development()).unwrap();
    let low_comf = parse(&cell_with_comf("5000000", raw_x, raw_y), ParseOptions::development()).unwrap();

    let high = match high_comf.features[0].geometry {
        s57::Geometry::Point { x, y } => (x, y),
        ref other => panic!("expected Point, got {other:?}"),
    };
    let low = match low_comf.features[0].geometry {
        s57::Geometry::Point { x, y } => (x, y),
        ref other => panic!("expected Point, got {other:?}"),
    };

    assert_eq!(high_comf.metadata.comf, 10_000_000.0);
    assert_eq!(low_comf.metadata.comf, 5_000_000.0);

    let ratio_x = low.0 / high.0;
    let ratio_y = low.1 / high.1;
    assert!((ratio_x - 2.0).abs() < 0.01, "x ratio was {ratio_x}");
    assert!((ratio_y - 2.0).abs() < 0.01, "y ratio was {ratio_y}");
}
