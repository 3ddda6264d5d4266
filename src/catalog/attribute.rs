//! Attribute definitions and value decoding.

use std::collections::HashMap;

use crate::iso8211::SubfieldValue;

/// The declared type of an attribute's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeType {
    /// A signed integer.
    Integer,
    /// A floating point number.
    Float,
    /// Free text.
    String,
    /// A coded value with an optional human-readable label.
    Enumeration,
    /// An ordered sequence of values of the same underlying type.
    List,
}

/// A static attribute definition: acronym, declared type, and (for
/// enumerations) the code -> label domain.
#[derive(Debug, Clone)]
pub struct AttributeDefinition {
    /// The numeric attribute label code (`ATTL`) carried by `ATTF`/`NATF`
    /// fields on the wire.
    pub code: u16,
    /// Six-character attribute acronym, e.g. `"DRVAL1"`.
    pub acronym: &'static str,
    /// Declared value type.
    pub attribute_type: AttributeType,
    /// Human-readable name.
    pub name: &'static str,
    /// Code -> label domain, used only for `Enumeration` attributes.
    pub domain: &'static [(i64, &'static str)],
}

/// A decoded attribute value.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    /// A decoded number.
    Number(f64),
    /// A decoded string.
    Text(String),
    /// A decoded enumeration code, with a label when the code is present
    /// in the attribute's domain.
    Enum {
        /// The raw coded value.
        code: String,
        /// The domain label, if the code was recognized.
        label: Option<String>,
    },
    /// An ordered list of decoded elements.
    List(Vec<AttributeValue>),
}

/// A minimal catalog of well-known S-57 attributes. Not exhaustive of the
/// official attribute catalogue; it covers the attributes this decoder
/// treats specially (required-attribute checks, enum label lookups).
pub static ATTRIBUTE_DEFINITIONS: &[AttributeDefinition] = &[
    AttributeDefinition {
        code: 88,
        acronym: "DRVAL1",
        attribute_type: AttributeType::Float,
        name: "Depth range value 1",
        domain: &[],
    },
    AttributeDefinition {
        code: 89,
        acronym: "DRVAL2",
        attribute_type: AttributeType::Float,
        name: "Depth range value 2",
        domain: &[],
    },
    AttributeDefinition {
        code: 90,
        acronym: "VALSOU",
        attribute_type: AttributeType::Float,
        name: "Value of sounding",
        domain: &[],
    },
    AttributeDefinition {
        code: 116,
        acronym: "OBJNAM",
        attribute_type: AttributeType::String,
        name: "Object name",
        domain: &[],
    },
    AttributeDefinition {
        code: 17,
        acronym: "CATBOY",
        attribute_type: AttributeType::Enumeration,
        name: "Category of buoy",
        domain: &[
            (1, "conical (nun, ogival)"),
            (2, "can (cylindrical)"),
            (3, "spherical"),
            (4, "pillar"),
            (5, "spar (spindle)"),
            (6, "barrel (tun)"),
            (8, "super-buoy"),
            (25, "ice buoy"),
        ],
    },
    AttributeDefinition {
        code: 75,
        acronym: "COLOUR",
        attribute_type: AttributeType::List,
        name: "Colour",
        domain: &[
            (1, "white"),
            (2, "black"),
            (3, "red"),
            (4, "green"),
            (5, "blue"),
            (6, "yellow"),
            (7, "grey"),
            (8, "brown"),
            (9, "amber"),
            (10, "violet"),
            (11, "orange"),
            (12, "magenta"),
            (13, "pink"),
        ],
    },
    AttributeDefinition {
        code: 121,
        acronym: "NATSUR",
        attribute_type: AttributeType::List,
        name: "Nature of surface",
        domain: &[],
    },
];

/// Looks up a static attribute definition by acronym.
pub fn definition_by_acronym(acronym: &str) -> Option<&'static AttributeDefinition> {
    ATTRIBUTE_DEFINITIONS
        .iter()
        .find(|def| def.acronym.eq_ignore_ascii_case(acronym))
}

/// Looks up a static attribute definition by its numeric `ATTL` code, as
/// carried on the wire by `ATTF`/`NATF` fields.
pub fn definition_by_code(code: u16) -> Option<&'static AttributeDefinition> {
    ATTRIBUTE_DEFINITIONS.iter().find(|def| def.code == code)
}

/// Decodes a raw subfield value according to `definition`'s declared type.
/// Attributes with no static definition are decoded as best-effort text,
/// per the "preserve unknown attribute acronyms as raw strings" rule.
pub fn decode(definition: Option<&AttributeDefinition>, raw: &SubfieldValue) -> AttributeValue {
    match definition {
        None => AttributeValue::Text(raw.as_text()),
        Some(def) => decode_typed(def, raw),
    }
}

fn decode_typed(def: &AttributeDefinition, raw: &SubfieldValue) -> AttributeValue {
    match def.attribute_type {
        AttributeType::Integer | AttributeType::Float => raw
            .as_float()
            .map(AttributeValue::Number)
            .unwrap_or_else(|| AttributeValue::Text(raw.as_text())),
        AttributeType::String => AttributeValue::Text(raw.as_text()),
        AttributeType::Enumeration => decode_enum(def.domain, &raw.as_text()),
        AttributeType::List => {
            let domain: HashMap<i64, &str> = def.domain.iter().copied().collect();
            let elements = raw
                .as_text()
                .split(',')
                .filter(|part| !part.is_empty())
                .map(|part| decode_enum_with_domain(&domain, part))
                .collect();
            AttributeValue::List(elements)
        }
    }
}

fn decode_enum(domain: &[(i64, &str)], code: &str) -> AttributeValue {
    let map: HashMap<i64, &str> = domain.iter().copied().collect();
    decode_enum_with_domain(&map, code)
}

fn decode_enum_with_domain(domain: &HashMap<i64, &str>, code: &str) -> AttributeValue {
    let label = code
        .trim()
        .parse::<i64>()
        .ok()
        .and_then(|parsed| domain.get(&parsed))
        .map(|s| s.to_string());
    AttributeValue::Enum {
        code: code.trim().to_string(),
        label,
    }
}
