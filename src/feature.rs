//! Feature records: the object class, attributes, and geometry that
//! together describe one charted entity.

use std::collections::BTreeMap;
use std::fmt;

use crate::catalog::{self, AttributeValue};
use crate::geometry::Geometry;
use crate::iso8211::SubfieldValue;
use crate::primitive::{PrimitiveStore, SpatialPointer};
use crate::warning::{Collector, Severity, Warning};

/// A Feature Object Identifier: the stable identity of a feature across
/// cell editions and update sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Foid {
    /// Producing agency code.
    pub agency: u16,
    /// Feature identification number.
    pub feature_id: u32,
    /// Feature identification subdivision.
    pub subdivision: u16,
}

impl fmt::Display for Foid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}_{}", self.agency, self.feature_id, self.subdivision)
    }
}

impl Foid {
    /// Parses the canonical `"{agency}_{feature_id}_{subdivision}"` string
    /// form. Malformed input maps to agency 0, a feature id derived from a
    /// simple hash of the string, and subdivision 0, so that repeated
    /// identical malformed input is at least stable and distinguishable
    /// from a real id collision.
    pub fn parse(s: &str) -> Foid {
        let parts: Vec<&str> = s.split('_').collect();
        if parts.len() == 3 {
            if let (Ok(agency), Ok(feature_id), Ok(subdivision)) =
                (parts[0].parse(), parts[1].parse(), parts[2].parse())
            {
                return Foid { agency, feature_id, subdivision };
            }
        }
        Foid {
            agency: 0,
            feature_id: fnv1a(s),
            subdivision: 0,
        }
    }
}

fn fnv1a(s: &str) -> u32 {
    let mut hash: u32 = 0x811c9dc5;
    for byte in s.bytes() {
        hash ^= byte as u32;
        hash = hash.wrapping_mul(0x01000193);
    }
    hash
}

/// A fully assembled feature record.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    /// ISO 8211 record id of the occurrence this came from.
    pub record_id: u32,
    /// Stable identity across updates.
    pub foid: Foid,
    /// Official S-57 object class acronym, e.g. `"DEPARE"`.
    pub object_class_acronym: String,
    /// Assembled geometry.
    pub geometry: Geometry,
    /// Decoded attributes, keyed by acronym. A [`BTreeMap`] keeps
    /// iteration order deterministic for GeoJSON export and tests.
    pub attributes: BTreeMap<String, AttributeValue>,
    /// Display label: the decoded `OBJNAM` attribute, or the object class
    /// name as a fallback.
    pub label: Option<String>,
}

/// Input needed to build one [`Feature`] from a parsed feature record.
pub struct FeatureInput<'a> {
    /// ISO 8211 record id.
    pub record_id: u32,
    /// The feature's FOID.
    pub foid: Foid,
    /// Numeric object label code (`OBJL`).
    pub object_code: u16,
    /// Raw attribute acronym -> subfield value pairs, as decoded from the
    /// record's `ATTF`/`NATF` fields.
    pub raw_attributes: &'a [(String, SubfieldValue)],
    /// Spatial pointers from the record's `FSPT` field.
    pub pointers: &'a [SpatialPointer],
}

/// Builds a [`Feature`] from `input`, resolving geometry against `store`
/// and looking up the object class and attribute catalogs. Returns `None`
/// if the object code is unrecognized, per "every feature has a resolved
/// object class or is discarded."
pub fn build(
    input: FeatureInput<'_>,
    store: &PrimitiveStore,
    collector: &mut Collector,
) -> Result<Option<Feature>, crate::error::Error> {
    let Some(object_class) = catalog::by_code(input.object_code) else {
        if collector.should_report_unknown_code(input.object_code) {
            collector.warn(
                Warning::new(
                    "UNKNOWN_OBJ_CODE",
                    Severity::Warning,
                    format!("object class code {} is not recognized", input.object_code),
                )
                .with_record(input.record_id),
            )?;
        }
        return Ok(None);
    };

    let mut attributes = BTreeMap::new();
    for (acronym, raw) in input.raw_attributes {
        let definition = catalog::definition_by_acronym(acronym);
        attributes.insert(acronym.clone(), catalog::decode(definition, raw));
    }

    let geometry = crate::geometry::assemble(
        input.pointers,
        store,
        input.foid.feature_id,
        input.record_id,
        collector,
    )?;

    for required in catalog::required_attributes(object_class.acronym) {
        let missing = match attributes.get(*required) {
            None => true,
            Some(AttributeValue::Text(s)) => s.is_empty(),
            _ => false,
        };
        if missing {
            collector.warn(
                Warning::new(
                    "MISSING_REQUIRED_ATTR",
                    Severity::Warning,
                    format!("{} is missing required attribute {required}", object_class.acronym),
                )
                .with_record(input.record_id)
                .with_feature(input.foid.feature_id),
            )?;
        }
    }

    let label = match attributes.get("OBJNAM") {
        Some(AttributeValue::Text(name)) if !name.is_empty() => Some(name.clone()),
        _ => Some(object_class.name.to_string()),
    };

    Ok(Some(Feature {
        record_id: input.record_id,
        foid: input.foid,
        object_class_acronym: object_class.acronym.to_string(),
        geometry,
        attributes,
        label,
    }))
}
