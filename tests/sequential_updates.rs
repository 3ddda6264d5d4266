//! End-to-end: a base cell carrying three features, walked through three
//! sequential update files that delete, modify, and insert.

mod common;

use common::*;
use s57::{parse, FeatureStore, Foid, ParseOptions, UpdateProcessor};

fn base_cell() -> Vec<u8> {
    let mut bytes = ddr();
    bytes.extend(point_feature_bytes(1, 1, -122.34, 47.60, 42, 550, 1, &[(88, "5.0")], s57::ChartMetadata::default().comf));
    bytes.extend(point_feature_bytes(2, 2, -122.33, 47.61, 42, 550, 2, &[(88, "3.0")], s57::ChartMetadata::default().comf));
    bytes.extend(point_feature_bytes(3, 3, -122.32, 47.62, 42, 550, 3, &[(88, "4.0")], s57::ChartMetadata::default().comf));
    bytes
}

fn delete_f2_update() -> Vec<u8> {
    let mut bytes = ddr();
    bytes.extend(build_record(&[
        field("FRID", frid_bytes(2, 1, 42, 1, 2)), // RUIN=2 delete
        field("FOID", foid_bytes(550, 2, 0)),
    ]));
    bytes
}

fn modify_f1_update() -> Vec<u8> {
    let comf = s57::ChartMetadata::default().comf;
    let mut bytes = ddr();
    bytes.extend(build_record(&[
        field("VRID", vrid_bytes(110, 101)),
        field("SG2D", sg2d_bytes(&[(-122.34, 47.60)], comf)),
    ]));
    bytes.extend(build_record(&[
        field("FRID", frid_bytes(1, 1, 42, 2, 3)), // RUIN=3 modify
        field("FOID", foid_bytes(550, 1, 0)),
        field("ATTF", attf_bytes(&[(88, "10.0")])),
        field("FSPT", fspt_bytes(&[(110, 101, 255)])),
    ]));
    bytes
}

fn insert_f4_update() -> Vec<u8> {
    let comf = s57::ChartMetadata::default().comf;
    point_feature_with_ddr(4, 4, -122.31, 47.63, 42, 550, 4, &[(88, "6.0")], comf, 1)
}

fn point_feature_with_ddr(
    node_id: u32,
    record_id: u32,
    x: f64,
    y: f64,
    objl: u16,
    agency: u16,
    feature_id: u32,
    attrs: &[(u16, &str)],
    comf: f64,
    ruin: u8,
) -> Vec<u8> {
    let mut bytes = ddr();
    bytes.extend(build_record(&[
        field("VRID", vrid_bytes(110, node_id)),
        field("SG2D", sg2d_bytes(&[(x, y)], comf)),
    ]));
    bytes.extend(build_record(&[
        field("FRID", frid_bytes(record_id, 1, objl, 3, ruin)),
        field("FOID", foid_bytes(agency, feature_id, 0)),
        field("ATTF", attf_bytes(attrs)),
        field("FSPT", fspt_bytes(&[(110, node_id, 255)])),
    ]));
    bytes
}

#[test]
fn applies_delete_modify_insert_in_sequence() {
    let dataset = parse(&base_cell(), ParseOptions::development()).unwrap();
    assert_eq!(dataset.features.len(), 3);
    let mut store = FeatureStore::from_base_features(dataset.features);

    let update_one = delete_f2_update();
    let update_two = modify_f1_update();
    let update_three = insert_f4_update();

    let summary = UpdateProcessor::apply_sequential_updates(
        "SAMPLE",
        &[&update_one, &update_two, &update_three],
        &mut store,
        ParseOptions::development(),
    )
    .unwrap();

    assert_eq!(summary.inserted, 1);
    assert_eq!(summary.modified, 1);
    assert_eq!(summary.deleted, 1);
    assert_eq!(summary.final_record_version, 3);
    assert_eq!(summary.applied, vec!["SAMPLE.001", "SAMPLE.002", "SAMPLE.003"]);

    assert!(store.get(&Foid { agency: 550, feature_id: 2, subdivision: 0 }).is_none());

    let f1 = store.get(&Foid { agency: 550, feature_id: 1, subdivision: 0 }).unwrap();
    assert_eq!(f1.version, 2);
    assert_eq!(
        f1.feature.attributes.get("DRVAL1"),
        Some(&s57::catalog::AttributeValue::Number(10.0))
    );

    let f3 = store.get(&Foid { agency: 550, feature_id: 3, subdivision: 0 }).unwrap();
    assert_eq!(f3.version, 0);

    let f4 = store.get(&Foid { agency: 550, feature_id: 4, subdivision: 0 }).unwrap();
    assert_eq!(f4.version, 3);

    assert_eq!(store.len(), 3);
}
