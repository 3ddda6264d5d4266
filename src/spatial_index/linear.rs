//! The linear-scan spatial index backend, used for small feature sets
//! where the fixed cost of building an R-tree outweighs its query
//! speedup.

use crate::bounds::Bounds;
use crate::feature::Feature;
use crate::spatial_index::SpatialIndex;

/// A flat-list index that answers every query with a full scan.
#[derive(Debug, Clone)]
pub struct LinearIndex {
    features: Vec<Feature>,
}

impl LinearIndex {
    /// Builds an index over `features`, in the order given.
    pub fn new(features: Vec<Feature>) -> LinearIndex {
        LinearIndex { features }
    }
}

impl SpatialIndex for LinearIndex {
    fn query_bounds(&self, bounds: &Bounds) -> Vec<&Feature> {
        let mut matches: Vec<&Feature> = self
            .features
            .iter()
            .filter(|feature| {
                Bounds::of_geometry(&feature.geometry)
                    .map(|feature_bounds| feature_bounds.intersects(bounds))
                    .unwrap_or(false)
            })
            .collect();
        matches.sort_by_key(|feature| feature.record_id);
        matches
    }

    fn query_by_type(&self, feature_type: &str) -> Vec<&Feature> {
        let mut matches: Vec<&Feature> = self
            .features
            .iter()
            .filter(|feature| feature.object_class_acronym.eq_ignore_ascii_case(feature_type))
            .collect();
        matches.sort_by_key(|feature| feature.record_id);
        matches
    }

    fn calculate_bounds(&self) -> Option<Bounds> {
        self.features
            .iter()
            .filter_map(|feature| Bounds::of_geometry(&feature.geometry))
            .reduce(|mut acc, bounds| {
                acc.grow(bounds.min.0, bounds.min.1);
                acc.grow(bounds.max.0, bounds.max.1);
                acc
            })
    }

    fn feature_count(&self) -> usize {
        self.features.len()
    }

    fn present_feature_types(&self) -> Vec<String> {
        let mut types: Vec<String> = self
            .features
            .iter()
            .map(|feature| feature.object_class_acronym.clone())
            .collect();
        types.sort();
        types.dedup();
        types
    }

    fn get_all_features(&self) -> Vec<&Feature> {
        self.features.iter().collect()
    }
}
