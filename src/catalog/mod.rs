//! Static S-57 object class and attribute catalogs, plus a legacy-naming
//! adapter.
//!
//! These tables never fail to answer a lookup — an absent code returns
//! `None`, matching the "catalogs never fail" rule. Callers decide whether
//! an unknown code should become a warning (the [`crate::feature`] module
//! does, deduplicated through [`crate::warning::Collector`]).

mod attribute;
mod legacy;
mod object_class;

pub use attribute::{
    decode, definition_by_acronym, definition_by_code, AttributeDefinition, AttributeType,
    AttributeValue, ATTRIBUTE_DEFINITIONS,
};
pub use legacy::{acronym_to_legacy, legacy_to_acronym};
pub use object_class::{by_acronym, by_code, required_attributes, ObjectClass, OBJECT_CLASSES};
