//! Spatial indexing over a parsed feature set, with size-adaptive backend
//! selection: a linear scan for small feature sets, a bulk-loaded R-tree
//! for large ones, behind one [`SpatialIndex`] contract so callers never
//! need to know which backend answered a query.

mod linear;
mod rtree;

pub use linear::LinearIndex;
pub use rtree::RTreeIndex;

use crate::bounds::Bounds;
use crate::feature::Feature;
use crate::options::RTreeConfig;

/// Object classes grouped as navigation aids, used by
/// [`SpatialIndex::query_navigation_aids`].
const NAVIGATION_AID_ACRONYMS: &[&str] = &[
    "BOYCAR", "BOYINB", "BOYISD", "BOYLAT", "BOYSAW", "BOYSPP", "BCNCAR", "BCNISD", "BCNLAT",
    "BCNSAW", "BCNSPP", "LIGHTS", "LITFLT", "LITVES", "DAYMAR",
];

/// Object classes grouped as depth-related features, used by
/// [`SpatialIndex::query_depth_features`].
const DEPTH_FEATURE_ACRONYMS: &[&str] = &["DEPARE", "DEPCNT", "SOUNDG"];

/// A queryable index over a fixed set of features.
///
/// Both implementations in this module guarantee identical results for
/// the same query against the same feature set — this is the parity
/// contract enforced by the `tests/` suite.
pub trait SpatialIndex {
    /// Every feature whose geometry bounding box intersects `bounds`,
    /// sorted by `record_id` for deterministic comparison.
    fn query_bounds(&self, bounds: &Bounds) -> Vec<&Feature>;

    /// Every feature whose geometry bounding box intersects the axis
    /// aligned square of side `2 * radius_degrees` centered on
    /// `(lat, lon)`.
    fn query_point(&self, lat: f64, lon: f64, radius_degrees: f64) -> Vec<&Feature> {
        self.query_bounds(&Bounds::around_point(lat, lon, radius_degrees))
    }

    /// Every feature of the given object class acronym.
    fn query_by_type(&self, feature_type: &str) -> Vec<&Feature>;

    /// Every feature belonging to a navigation-aid object class (buoys,
    /// beacons, lighthouses, daymarks).
    fn query_navigation_aids(&self) -> Vec<&Feature> {
        NAVIGATION_AID_ACRONYMS
            .iter()
            .flat_map(|acronym| self.query_by_type(acronym))
            .collect()
    }

    /// Every feature belonging to a depth-related object class (depth
    /// areas, depth contours, soundings).
    fn query_depth_features(&self) -> Vec<&Feature> {
        DEPTH_FEATURE_ACRONYMS
            .iter()
            .flat_map(|acronym| self.query_by_type(acronym))
            .collect()
    }

    /// The minimum bounding box over every feature in the index, or `None`
    /// if the index is empty.
    fn calculate_bounds(&self) -> Option<Bounds>;

    /// Total number of features in the index.
    fn feature_count(&self) -> usize;

    /// Every distinct object class acronym present in the index.
    fn present_feature_types(&self) -> Vec<String>;

    /// Every feature in the index, in insertion order.
    fn get_all_features(&self) -> Vec<&Feature>;
}

/// Builds the appropriate [`SpatialIndex`] backend for `features`: linear
/// below [`RTreeConfig::ADAPTIVE_THRESHOLD`] features (or when
/// `config.force_linear` is set), R-tree at or above it.
pub fn build_adaptive_index(
    features: Vec<Feature>,
    config: RTreeConfig,
) -> Box<dyn SpatialIndex> {
    if config.force_linear || features.len() < RTreeConfig::ADAPTIVE_THRESHOLD {
        Box::new(LinearIndex::new(features))
    } else {
        Box::new(RTreeIndex::build(features, config))
    }
}
