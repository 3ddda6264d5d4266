//! Decodes [IHO S-57](https://iho.int/en/standards-and-specifications)
//! Electronic Navigational Chart (ENC) cells — ISO 8211 base cell files
//! plus their update sequences — into an in-memory, queryable chart
//! model.
//!
//! # Parsing a cell
//!
//! ```no_run
//! use s57::{parse, ParseOptions};
//!
//! let bytes = std::fs::read("US5WA50M.000").unwrap();
//! let dataset = parse(&bytes, ParseOptions::production()).unwrap();
//!
//! println!("{} features", dataset.features.len());
//! for (acronym, count) in dataset.summary() {
//!     println!("{acronym}: {count}");
//! }
//! ```
//!
//! # Applying updates
//!
//! Update files (`<CELL>.001`, `<CELL>.002`, ...) are applied in strictly
//! increasing sequence order against a [`FeatureStore`] seeded from the
//! base cell:
//!
//! ```no_run
//! use s57::{parse, FeatureStore, ParseOptions, UpdateProcessor};
//!
//! let base = std::fs::read("US5WA50M.000").unwrap();
//! let dataset = parse(&base, ParseOptions::production()).unwrap();
//! let mut store = FeatureStore::from_base_features(dataset.features);
//!
//! let update_one = std::fs::read("US5WA50M.001").unwrap();
//! let summary = UpdateProcessor::apply_sequential_updates(
//!     "US5WA50M",
//!     &[&update_one],
//!     &mut store,
//!     ParseOptions::production(),
//! )
//! .unwrap();
//! println!("applied {:?}", summary.applied);
//! ```
//!
//! # Querying
//!
//! A [`ParsedDataset`] carries a [`spatial_index::SpatialIndex`] chosen
//! adaptively by feature count (linear below 200 features, a bulk-loaded
//! R-tree at or above it), and a `find_features` convenience method that
//! intersects type, bounds, and text filters:
//!
//! ```no_run
//! # use s57::{parse, ParseOptions};
//! # let bytes = std::fs::read("US5WA50M.000").unwrap();
//! let dataset = parse(&bytes, ParseOptions::default()).unwrap();
//! let lights = dataset.find_features(Some(&["LIGHTS"]), None, None, None);
//! let geojson = dataset.to_geojson(Some(&["LIGHTS", "BOYLAT"]));
//! ```

#![deny(missing_docs, unsafe_code)]

pub mod bounds;
pub mod catalog;
pub mod dataset;
pub mod error;
pub mod feature;
pub mod geometry;
pub mod iso8211;
pub mod json;
pub mod metadata;
pub mod options;
pub mod primitive;
pub mod spatial_index;
pub mod update;
pub mod warning;

pub use bounds::Bounds;
pub use dataset::{parse, ParsedDataset, UpdateProcessor};
pub use error::{Error, Iso8211Error, Result, UpdateError};
pub use feature::{Feature, FeatureInput, Foid};
pub use geometry::Geometry;
pub use json::Json;
pub use metadata::ChartMetadata;
pub use options::{ParseOptions, RTreeConfig};
pub use primitive::{Edge, Node, PrimitiveStore, PrimitiveType, RecordName, SpatialPointer};
pub use spatial_index::{build_adaptive_index, LinearIndex, RTreeIndex, SpatialIndex};
pub use update::{
    apply_sequential_updates, FeatureStore, UpdateDataset, UpdateInstruction, UpdateRecord,
    UpdateSummary, VersionedFeature,
};
pub use warning::{Collector, Severity, Warning, WarningSummary};
