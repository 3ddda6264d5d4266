//! Top-level cell assembly: turning a stream of classified ISO 8211
//! records into a queryable [`ParsedDataset`], and applying update
//! sequences carried as raw ISO 8211 byte blobs.
//!
//! This module owns the wire-format knowledge the rest of the crate
//! doesn't need: the fixed-width binary layouts of `FRID`, `FOID`, `VRID`,
//! `FSPT`, and `SG2D`/`SG3D`, and the repeating `(ATTL, ATVL)` pairs of
//! `ATTF`/`NATF`. Everything downstream of [`parse`] works in terms of
//! [`crate::feature::Feature`] and [`crate::geometry::Geometry`], not raw
//! bytes.

use std::collections::BTreeMap;

use byteorder::{ByteOrder, LittleEndian};

use crate::bounds::Bounds;
use crate::catalog::{self, AttributeValue};
use crate::error::Error;
use crate::feature::{self, Feature, FeatureInput, Foid};
use crate::geometry::Geometry;
use crate::iso8211::{Reader, Record, SubfieldValue};
use crate::json::Json;
use crate::metadata::{self, ChartMetadata};
use crate::options::{ParseOptions, RTreeConfig};
use crate::primitive::{Edge, Node, PrimitiveStore, RecordName, SpatialPointer};
use crate::spatial_index::{build_adaptive_index, SpatialIndex};
use crate::update::{
    self, FeatureStore, UpdateDataset, UpdateInstruction, UpdateRecord, UpdateSummary,
};
use crate::warning::{Collector, Severity, Warning};

const SUBFIELD_DELIMITER: u8 = 0x1F;

/// Attribute keys stripped from GeoJSON `properties.attrs`: internal
/// rendering hints rather than decoded S-57 attributes.
const INTERNAL_ATTRIBUTE_KEYS: &[&str] = &["type", "color", "name", "height"];

/// A fully parsed and indexed S-57 cell.
pub struct ParsedDataset {
    /// DSPM-derived scaling and datum metadata.
    pub metadata: ChartMetadata,
    /// Every successfully built feature, in record order.
    pub features: Vec<Feature>,
    /// Minimum bounding box over every feature's geometry, or `None` if no
    /// feature carried any coordinates.
    pub bounds: Option<Bounds>,
    /// Queryable spatial index over `features` (linear or R-tree, chosen
    /// adaptively by feature count).
    pub spatial_index: Box<dyn SpatialIndex>,
    /// Every warning emitted while parsing this cell.
    pub warnings: Vec<Warning>,
}

impl ParsedDataset {
    /// Finds features matching every supplied filter. `None` for a filter
    /// means "don't filter on this dimension."
    pub fn find_features(
        &self,
        types: Option<&[&str]>,
        bounds: Option<&Bounds>,
        text_query: Option<&str>,
        limit: Option<usize>,
    ) -> Vec<&Feature> {
        let mut results: Vec<&Feature> = self
            .features
            .iter()
            .filter(|feature| matches_type(feature, types))
            .filter(|feature| matches_bounds(feature, bounds))
            .filter(|feature| matches_text(feature, text_query))
            .collect();
        if let Some(limit) = limit {
            results.truncate(limit);
        }
        results
    }

    /// Counts features by object class acronym.
    pub fn summary(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for feature in &self.features {
            *counts.entry(feature.object_class_acronym.clone()).or_insert(0) += 1;
        }
        counts
    }

    /// Builds a GeoJSON `FeatureCollection` as a [`Json`] tree, optionally
    /// restricted to the given object class acronyms. Features with
    /// [`Geometry::Empty`] are omitted, since GeoJSON has no representation
    /// for a featureless geometry.
    pub fn to_geojson(&self, types: Option<&[&str]>) -> Json {
        let features: Vec<Json> = self
            .features
            .iter()
            .filter(|feature| matches_type(feature, types))
            .filter_map(feature_to_geojson)
            .collect();
        Json::Object(vec![
            ("type".to_string(), Json::String("FeatureCollection".to_string())),
            ("features".to_string(), Json::Array(features)),
        ])
    }
}

fn matches_type(feature: &Feature, types: Option<&[&str]>) -> bool {
    match types {
        None => true,
        Some(types) => types
            .iter()
            .any(|t| feature.object_class_acronym.eq_ignore_ascii_case(t)),
    }
}

fn matches_bounds(feature: &Feature, bounds: Option<&Bounds>) -> bool {
    match bounds {
        None => true,
        Some(bounds) => match Bounds::of_geometry(&feature.geometry) {
            Some(feature_bounds) => feature_bounds.intersects(bounds),
            None => false,
        },
    }
}

fn matches_text(feature: &Feature, text_query: Option<&str>) -> bool {
    let Some(query) = text_query else { return true };
    let query = query.to_ascii_lowercase();
    match feature.attributes.get("OBJNAM") {
        Some(AttributeValue::Text(name)) => name.to_ascii_lowercase().contains(&query),
        _ => false,
    }
}

fn feature_to_geojson(feature: &Feature) -> Option<Json> {
    let geometry = match &feature.geometry {
        Geometry::Point { x, y } => Json::Object(vec![
            ("type".to_string(), Json::String("Point".to_string())),
            ("coordinates".to_string(), Json::Array(vec![Json::Number(*x), Json::Number(*y)])),
        ]),
        Geometry::Line { coordinates } => Json::Object(vec![
            ("type".to_string(), Json::String("LineString".to_string())),
            ("coordinates".to_string(), Json::Array(coords_to_json(coordinates))),
        ]),
        Geometry::Area { rings } => Json::Object(vec![
            ("type".to_string(), Json::String("Polygon".to_string())),
            (
                "coordinates".to_string(),
                Json::Array(rings.iter().map(|ring| Json::Array(coords_to_json(ring))).collect()),
            ),
        ]),
        Geometry::Empty => return None,
    };

    let attrs: Vec<(String, Json)> = feature
        .attributes
        .iter()
        .filter(|(key, _)| !INTERNAL_ATTRIBUTE_KEYS.iter().any(|internal| key.eq_ignore_ascii_case(internal)))
        .map(|(key, value)| (key.clone(), attribute_value_to_json(value)))
        .collect();

    let properties = Json::Object(vec![
        ("typeAcronym".to_string(), Json::String(feature.object_class_acronym.clone())),
        ("attrs".to_string(), Json::Object(attrs)),
    ]);

    Some(Json::Object(vec![
        ("type".to_string(), Json::String("Feature".to_string())),
        ("id".to_string(), Json::Number(feature.record_id as f64)),
        ("geometry".to_string(), geometry),
        ("properties".to_string(), properties),
    ]))
}

fn coords_to_json(coordinates: &[(f64, f64)]) -> Vec<Json> {
    coordinates
        .iter()
        .map(|&(x, y)| Json::Array(vec![Json::Number(x), Json::Number(y)]))
        .collect()
}

fn attribute_value_to_json(value: &AttributeValue) -> Json {
    match value {
        AttributeValue::Number(n) => Json::Number(*n),
        AttributeValue::Text(s) => Json::String(s.clone()),
        AttributeValue::Enum { code, label } => Json::Object(vec![
            ("code".to_string(), Json::String(code.clone())),
            ("label".to_string(), label.clone().map(Json::String).unwrap_or(Json::Null)),
        ]),
        AttributeValue::List(items) => Json::Array(items.iter().map(attribute_value_to_json).collect()),
    }
}

/// Parses a base cell's raw bytes into a [`ParsedDataset`].
///
/// Rejects empty input and input shorter than a 24-byte ISO 8211 leader
/// before attempting to read any record, per the "unusable before any
/// record could be read" rule.
pub fn parse(bytes: &[u8], options: ParseOptions) -> Result<ParsedDataset, Error> {
    if bytes.is_empty() {
        return Err(Error::Input("input is empty".to_string()));
    }
    if bytes.len() < 24 {
        return Err(Error::Input(format!(
            "input is {} bytes, shorter than the 24-byte ISO 8211 leader",
            bytes.len()
        )));
    }

    let mut collector = Collector::new(options.strict_mode, options.max_warnings);
    collector.start_file("<cell>");

    let mut reader = Reader::new(bytes);
    let mut metadata = ChartMetadata::default();
    let mut store = PrimitiveStore::new();
    let mut raw_features = Vec::new();
    let mut first = true;

    while let Some(record) = reader.next_record(&mut collector)? {
        if first {
            // The dataset descriptive record (DDR) carries field tag
            // definitions, not data; the first record off the wire is
            // always the DDR.
            first = false;
            continue;
        }

        if let Some(dspm) = record.get_field_data("DSPM") {
            metadata = metadata::extract_dspm(dspm, &mut collector)?;
        }

        if let Some(vrid) = record.get_field_data("VRID") {
            ingest_primitive_record(&record, vrid, metadata.comf, &mut store);
        }

        if let Some(frid) = record.get_field_data("FRID") {
            match extract_feature(&record, frid) {
                Some(raw) => raw_features.push(raw),
                None => {
                    collector.push(
                        "SUBFIELD_PARSE",
                        Severity::Warning,
                        "feature record is missing required FRID/FOID subfields",
                    )?;
                }
            }
        }
    }

    let mut features = Vec::with_capacity(raw_features.len());
    for raw in raw_features {
        let input = raw.as_feature_input();
        if let Some(feature) = feature::build(input, &store, &mut collector)? {
            features.push(feature);
        }
    }

    collector.finish_file("<cell>");

    let bounds = features
        .iter()
        .filter_map(|feature| Bounds::of_geometry(&feature.geometry))
        .reduce(|mut acc, b| {
            acc.grow(b.min.0, b.min.1);
            acc.grow(b.max.0, b.max.1);
            acc
        });

    let spatial_index = build_adaptive_index(features.clone(), RTreeConfig::default());
    let warnings = collector.warnings().to_vec();

    Ok(ParsedDataset {
        metadata,
        features,
        bounds,
        spatial_index,
        warnings,
    })
}

/// A feature record's decoded wire fields, owned so it can outlive the
/// [`Record`] it was read from.
struct RawFeature {
    record_id: u32,
    foid: Foid,
    object_code: u16,
    attributes: Vec<(String, SubfieldValue)>,
    pointers: Vec<SpatialPointer>,
}

impl RawFeature {
    fn as_feature_input(&self) -> FeatureInput<'_> {
        FeatureInput {
            record_id: self.record_id,
            foid: self.foid,
            object_code: self.object_code,
            raw_attributes: &self.attributes,
            pointers: &self.pointers,
        }
    }
}

struct FridFields {
    rcid: u32,
    objl: u16,
    rver: u16,
    ruin: u8,
}

struct VridFields {
    rcnm: u8,
    rcid: u32,
}

/// Decodes the fixed-width `FRID` field: `RCNM(1) RCID(4) PRIM(1) GRUP(1)
/// OBJL(2) RVER(2) RUIN(1)`, 12 bytes total.
fn parse_frid(raw: &[u8]) -> Option<FridFields> {
    if raw.len() < 12 {
        return None;
    }
    Some(FridFields {
        rcid: LittleEndian::read_u32(&raw[1..5]),
        objl: LittleEndian::read_u16(&raw[7..9]),
        rver: LittleEndian::read_u16(&raw[9..11]),
        ruin: raw[11],
    })
}

/// Decodes the fixed-width `VRID` field: `RCNM(1) RCID(4) RVER(2) RUIN(1)`,
/// 8 bytes total.
fn parse_vrid(raw: &[u8]) -> Option<VridFields> {
    if raw.len() < 8 {
        return None;
    }
    Some(VridFields {
        rcnm: raw[0],
        rcid: LittleEndian::read_u32(&raw[1..5]),
    })
}

/// Decodes the fixed-width `FOID` field: `AGEN(2) FIDN(4) FIDS(2)`, 8 bytes
/// total.
fn parse_foid(raw: &[u8]) -> Option<Foid> {
    if raw.len() < 8 {
        return None;
    }
    Some(Foid {
        agency: LittleEndian::read_u16(&raw[0..2]),
        feature_id: LittleEndian::read_u32(&raw[2..6]),
        subdivision: LittleEndian::read_u16(&raw[6..8]),
    })
}

/// Decodes repeating 8-byte `FSPT` groups: `RCNM(1) RCID(4) ORNT(1)
/// USAG(1) MASK(1)`. Unlike `VRPT`, `FSPT` carries no `TOPI` field.
fn parse_fspt(raw: &[u8]) -> Vec<SpatialPointer> {
    raw.chunks_exact(8)
        .map(|chunk| {
            let rcnm = chunk[0];
            let rcid = LittleEndian::read_u32(&chunk[1..5]);
            let ornt = chunk[5];
            SpatialPointer {
                ref_id: rcid,
                is_edge: RecordName::from_code(rcnm).is_edge(),
                reverse: ornt == 2,
            }
        })
        .collect()
}

/// Decodes repeating 8-byte `SG2D` groups: `YCOO(4) XCOO(4)`, each a
/// little-endian signed integer scaled by `comf`. Returned as `(x, y)` —
/// `(longitude, latitude)` — to match [`crate::primitive::Node`]'s
/// convention.
fn parse_sg2d(raw: &[u8], comf: f64) -> Vec<(f64, f64)> {
    raw.chunks_exact(8)
        .map(|chunk| {
            let y = LittleEndian::read_i32(&chunk[0..4]) as f64 / comf;
            let x = LittleEndian::read_i32(&chunk[4..8]) as f64 / comf;
            (x, y)
        })
        .collect()
}

/// Decodes repeating `(ATTL: u16, ATVL: delimited string)` pairs carried by
/// `ATTF`/`NATF` fields, resolving each numeric code to its catalog
/// acronym when recognized and falling back to the decimal code string
/// otherwise, per "preserve unknown attribute acronyms."
fn parse_attribute_field(raw: &[u8]) -> Vec<(String, SubfieldValue)> {
    let mut pairs = Vec::new();
    let mut cursor = 0usize;
    while cursor + 2 <= raw.len() {
        let code = LittleEndian::read_u16(&raw[cursor..cursor + 2]);
        cursor += 2;
        let end = raw[cursor..]
            .iter()
            .position(|&b| b == SUBFIELD_DELIMITER)
            .map(|pos| cursor + pos)
            .unwrap_or(raw.len());
        let value = SubfieldValue::coerce(&raw[cursor..end]);

        let acronym = catalog::definition_by_code(code)
            .map(|def| def.acronym.to_string())
            .unwrap_or_else(|| code.to_string());
        pairs.push((acronym, value));

        cursor = end + 1;
    }
    pairs
}

/// Extracts a node or edge from a `VRID` record and inserts it into
/// `store`. Silently skips records missing an `SG2D`/`SG3D` coordinate
/// field or an unrecognized `RCNM`: a primitive with no coordinates
/// contributes nothing to geometry assembly either way.
fn ingest_primitive_record(record: &Record, vrid_raw: &[u8], comf: f64, store: &mut PrimitiveStore) {
    let Some(fields) = parse_vrid(vrid_raw) else { return };
    let record_name = RecordName::from_code(fields.rcnm);

    let coordinate_field = record.get_field_data("SG2D").or_else(|| record.get_field_data("SG3D"));
    let Some(raw) = coordinate_field else { return };
    let coordinates = parse_sg2d(raw, comf);

    if record_name.is_node() {
        if let Some(&(x, y)) = coordinates.first() {
            store.insert_node(Node { id: fields.rcid, x, y });
        }
    } else if record_name.is_edge() {
        store.insert_edge(Edge { id: fields.rcid, coordinates });
    }
}

/// Extracts a feature's wire fields from one `FRID`-bearing record.
/// Returns `None` if the record is missing its `FRID` or `FOID` fields, or
/// either is too short to decode.
fn extract_feature(record: &Record, frid_raw: &[u8]) -> Option<RawFeature> {
    let fields = parse_frid(frid_raw)?;
    let foid_raw = record.get_field_data("FOID")?;
    let foid = parse_foid(foid_raw)?;

    let mut attributes = Vec::new();
    if let Some(attf) = record.get_field_data("ATTF") {
        attributes.extend(parse_attribute_field(attf));
    }
    if let Some(natf) = record.get_field_data("NATF") {
        attributes.extend(parse_attribute_field(natf));
    }

    let pointers = record
        .get_field_data("FSPT")
        .map(parse_fspt)
        .unwrap_or_default();

    Some(RawFeature {
        record_id: fields.rcid,
        foid,
        object_code: fields.objl,
        attributes,
        pointers,
    })
}

/// Extracts a feature's `RUIN` (update instruction) directly, for the
/// update-blob path where [`RawFeature`] only carries the payload.
fn extract_ruin(frid_raw: &[u8]) -> Option<(u16, u8)> {
    let fields = parse_frid(frid_raw)?;
    Some((fields.rver, fields.ruin))
}

/// Applies one or more update datasets, each carried as a raw ISO 8211
/// byte blob, against `store` in strictly increasing sequence order.
///
/// Each blob is treated as a one-shot ISO 8211 stream: its own DDR, its
/// own `VRID` primitive records (scoped to that update only, since S-57
/// updates are self-contained), and its `FRID` records carrying RUIN
/// instructions.
pub struct UpdateProcessor;

impl UpdateProcessor {
    /// Parses `byte_blobs_in_order` as a sequence of update datasets named
    /// `"{cell_name}.{NNN}"` by position, then applies them to `store` via
    /// [`crate::update::apply_sequential_updates`].
    pub fn apply_sequential_updates(
        cell_name: &str,
        byte_blobs_in_order: &[&[u8]],
        store: &mut FeatureStore,
        options: ParseOptions,
    ) -> Result<UpdateSummary, Error> {
        let mut collector = Collector::new(options.strict_mode, options.max_warnings);
        let mut datasets = Vec::with_capacity(byte_blobs_in_order.len());

        for (index, blob) in byte_blobs_in_order.iter().enumerate() {
            let sequence_number = index as u32 + 1;
            let name = format!("{cell_name}.{sequence_number:03}");
            datasets.push(parse_update_dataset(&name, sequence_number, blob, &mut collector)?);
        }

        update::apply_sequential_updates(store, &datasets, &mut collector)
    }
}

fn parse_update_dataset(
    name: &str,
    sequence_number: u32,
    bytes: &[u8],
    collector: &mut Collector,
) -> Result<UpdateDataset, Error> {
    let mut reader = Reader::new(bytes);
    let mut store = PrimitiveStore::new();
    let mut records = Vec::new();
    let mut record_version = 0u16;
    let mut first = true;

    while let Some(record) = reader.next_record(collector)? {
        if first {
            first = false;
            continue;
        }

        if let Some(vrid) = record.get_field_data("VRID") {
            ingest_primitive_record(&record, vrid, metadata::DEFAULT_COMF, &mut store);
            continue;
        }

        let Some(frid) = record.get_field_data("FRID") else { continue };
        let Some((rver, ruin)) = extract_ruin(frid) else { continue };
        record_version = rver;
        let instruction = UpdateInstruction::from_code(ruin);

        let Some(foid_raw) = record.get_field_data("FOID") else { continue };
        let Some(foid) = parse_foid(foid_raw) else { continue };

        let feature = match instruction {
            UpdateInstruction::Delete => None,
            _ => extract_feature(&record, frid).and_then(|raw| {
                let input = raw.as_feature_input();
                feature::build(input, &store, collector).ok().flatten()
            }),
        };

        records.push(UpdateRecord { foid, instruction, feature });
    }

    Ok(UpdateDataset {
        name: name.to_string(),
        sequence_number,
        record_version,
        records,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(tag: &str, data: Vec<u8>) -> (String, Vec<u8>) {
        (tag.to_string(), data)
    }

    fn build_record(fields: &[(String, Vec<u8>)]) -> Vec<u8> {
        const FIELD_TERMINATOR: u8 = 0x1E;
        let entry_size = 12usize;
        let directory_len = fields.len() * entry_size + 1;
        let base_address = 24 + directory_len;

        let mut field_area = Vec::new();
        let mut directory = Vec::new();
        for (tag, data) in fields {
            let position = field_area.len();
            field_area.extend_from_slice(data);
            field_area.push(FIELD_TERMINATOR);
            directory.push((tag.clone(), data.len() + 1, position));
        }

        let record_length = base_address + field_area.len();
        let mut out = Vec::new();
        out.extend_from_slice(format!("{:05}", record_length).as_bytes());
        out.push(b'3');
        out.push(b'D');
        out.push(b' ');
        out.push(b'1');
        out.push(b' ');
        out.extend_from_slice(b"09");
        out.extend_from_slice(format!("{:05}", base_address).as_bytes());
        out.extend_from_slice(b"   ");
        out.extend_from_slice(b"4404");

        for (tag, length, position) in &directory {
            out.extend_from_slice(tag.as_bytes());
            out.extend_from_slice(format!("{:04}", length).as_bytes());
            out.extend_from_slice(format!("{:04}", position).as_bytes());
        }
        out.push(FIELD_TERMINATOR);
        out.extend_from_slice(&field_area);
        out
    }

    fn ddr() -> Vec<u8> {
        build_record(&[field("0000", b"ddr".to_vec())])
    }

    fn frid_bytes(rcid: u32, prim: u8, objl: u16, rver: u16, ruin: u8) -> Vec<u8> {
        let mut out = Vec::new();
        out.push(100); // RCNM = Feature
        out.extend_from_slice(&rcid.to_le_bytes());
        out.push(prim);
        out.push(2); // GRUP
        out.extend_from_slice(&objl.to_le_bytes());
        out.extend_from_slice(&rver.to_le_bytes());
        out.push(ruin);
        out
    }

    fn foid_bytes(agency: u16, feature_id: u32, subdivision: u16) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(&agency.to_le_bytes());
        out.extend_from_slice(&feature_id.to_le_bytes());
        out.extend_from_slice(&subdivision.to_le_bytes());
        out
    }

    fn vrid_bytes(rcnm: u8, rcid: u32) -> Vec<u8> {
        let mut out = Vec::new();
        out.push(rcnm);
        out.extend_from_slice(&rcid.to_le_bytes());
        out.extend_from_slice(&1u16.to_le_bytes()); // RVER
        out.push(1); // RUIN insert
        out
    }

    fn sg2d_bytes(points: &[(f64, f64)], comf: f64) -> Vec<u8> {
        let mut out = Vec::new();
        for &(x, y) in points {
            out.extend_from_slice(&((y * comf) as i32).to_le_bytes());
            out.extend_from_slice(&((x * comf) as i32).to_le_bytes());
        }
        out
    }

    fn fspt_bytes(refs: &[(u8, u32, u8)]) -> Vec<u8> {
        let mut out = Vec::new();
        for &(rcnm, rcid, ornt) in refs {
            out.push(rcnm);
            out.extend_from_slice(&rcid.to_le_bytes());
            out.push(ornt);
            out.push(1); // USAG
            out.push(255); // MASK
        }
        out
    }

    fn attf_bytes(pairs: &[(u16, &str)]) -> Vec<u8> {
        let mut out = Vec::new();
        for (code, value) in pairs {
            out.extend_from_slice(&code.to_le_bytes());
            out.extend_from_slice(value.as_bytes());
            out.push(SUBFIELD_DELIMITER);
        }
        out
    }

    #[test]
    fn parses_a_single_point_feature_with_attributes() {
        let mut bytes = ddr();
        bytes.extend(build_record(&[
            field("VRID", vrid_bytes(110, 1)),
            field("SG2D", sg2d_bytes(&[(-122.5, 47.5)], metadata::DEFAULT_COMF)),
        ]));
        bytes.extend(build_record(&[
            field("FRID", frid_bytes(1, 1, 75, 0, 1)), // LIGHTS
            field("FOID", foid_bytes(550, 1, 0)),
            field("ATTF", attf_bytes(&[(75, "3"), (116, "Elliott Bay Light")])),
            field("FSPT", fspt_bytes(&[(110, 1, 255)])),
        ]));

        let dataset = parse(&bytes, ParseOptions::development()).unwrap();
        assert_eq!(dataset.features.len(), 1);
        let feature = &dataset.features[0];
        assert_eq!(feature.object_class_acronym, "LIGHTS");
        assert_eq!(feature.geometry, Geometry::Point { x: -122.5, y: 47.5 });
        assert_eq!(feature.label.as_deref(), Some("Elliott Bay Light"));
        assert!(dataset.bounds.is_some());
    }

    #[test]
    fn rejects_input_shorter_than_a_leader() {
        let result = parse(b"short", ParseOptions::development());
        assert!(matches!(result, Err(Error::Input(_))));
    }

    #[test]
    fn assembles_area_feature_from_edges() {
        let mut bytes = ddr();
        let comf = metadata::DEFAULT_COMF;
        bytes.extend(build_record(&[
            field("VRID", vrid_bytes(130, 10)),
            field(
                "SG2D",
                sg2d_bytes(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.0, 0.0)], comf),
            ),
        ]));
        bytes.extend(build_record(&[
            field("FRID", frid_bytes(2, 3, 42, 0, 1)), // DEPARE
            field("FOID", foid_bytes(550, 2, 0)),
            field("ATTF", attf_bytes(&[(88, "5.0")])),
            field("FSPT", fspt_bytes(&[(130, 10, 255)])),
        ]));

        let dataset = parse(&bytes, ParseOptions::development()).unwrap();
        let feature = &dataset.features[0];
        assert_eq!(feature.object_class_acronym, "DEPARE");
        assert!(matches!(feature.geometry, Geometry::Area { .. }));
    }

    #[test]
    fn to_geojson_omits_internal_keys_and_empty_geometry() {
        let mut bytes = ddr();
        bytes.extend(build_record(&[
            field("VRID", vrid_bytes(110, 1)),
            field("SG2D", sg2d_bytes(&[(1.0, 2.0)], metadata::DEFAULT_COMF)),
        ]));
        bytes.extend(build_record(&[
            field("FRID", frid_bytes(1, 1, 75, 0, 1)),
            field("FOID", foid_bytes(550, 1, 0)),
            field("ATTF", attf_bytes(&[(75, "3")])),
            field("FSPT", fspt_bytes(&[(110, 1, 255)])),
        ]));
        let dataset = parse(&bytes, ParseOptions::development()).unwrap();
        let geojson = dataset.to_geojson(None);
        let features = geojson.get("features").and_then(Json::as_array).unwrap();
        assert_eq!(features.len(), 1);
        let properties = features[0].get("properties").unwrap();
        assert_eq!(properties.get("typeAcronym").and_then(Json::as_str), Some("LIGHTS"));
    }

    #[test]
    fn update_processor_applies_insert_from_raw_bytes() {
        let base = {
            let mut bytes = ddr();
            bytes.extend(build_record(&[
                field("VRID", vrid_bytes(110, 1)),
                field("SG2D", sg2d_bytes(&[(0.0, 0.0)], metadata::DEFAULT_COMF)),
            ]));
            bytes.extend(build_record(&[
                field("FRID", frid_bytes(1, 1, 75, 0, 1)),
                field("FOID", foid_bytes(550, 1, 0)),
                field("ATTF", attf_bytes(&[(75, "3")])),
                field("FSPT", fspt_bytes(&[(110, 1, 255)])),
            ]));
            bytes
        };
        let dataset = parse(&base, ParseOptions::development()).unwrap();
        let mut store = FeatureStore::from_base_features(dataset.features);

        let mut update_bytes = ddr();
        update_bytes.extend(build_record(&[
            field("VRID", vrid_bytes(110, 2)),
            field("SG2D", sg2d_bytes(&[(5.0, 6.0)], metadata::DEFAULT_COMF)),
        ]));
        update_bytes.extend(build_record(&[
            field("FRID", frid_bytes(2, 1, 75, 1, 1)),
            field("FOID", foid_bytes(550, 2, 0)),
            field("ATTF", attf_bytes(&[(75, "1")])),
            field("FSPT", fspt_bytes(&[(110, 2, 255)])),
        ]));

        let summary = UpdateProcessor::apply_sequential_updates(
            "SAMPLE",
            &[&update_bytes],
            &mut store,
            ParseOptions::development(),
        )
        .unwrap();

        assert_eq!(summary.inserted, 1);
        assert_eq!(store.len(), 2);
        assert!(store.get(&Foid { agency: 550, feature_id: 2, subdivision: 0 }).is_some());
    }
}
