//! The R-tree spatial index backend, bulk-loaded with the Sort-Tile-
//! Recursive (STR) algorithm for feature sets large enough that a linear
//! scan would dominate query cost.

use crate::bounds::Bounds;
use crate::feature::Feature;
use crate::options::RTreeConfig;
use crate::spatial_index::SpatialIndex;

#[derive(Debug, Clone)]
enum Node {
    Leaf { bounds: Bounds, feature_index: usize },
    Inner { bounds: Bounds, children: Vec<Node> },
}

impl Node {
    fn bounds(&self) -> &Bounds {
        match self {
            Node::Leaf { bounds, .. } => bounds,
            Node::Inner { bounds, .. } => bounds,
        }
    }

    fn query(&self, query_bounds: &Bounds, out: &mut Vec<usize>) {
        if !self.bounds().intersects(query_bounds) {
            return;
        }
        match self {
            Node::Leaf { feature_index, .. } => out.push(*feature_index),
            Node::Inner { children, .. } => {
                for child in children {
                    child.query(query_bounds, out);
                }
            }
        }
    }
}

/// A bulk-loaded R-tree index over a fixed feature set.
#[derive(Debug, Clone)]
pub struct RTreeIndex {
    features: Vec<Feature>,
    root: Option<Node>,
}

impl RTreeIndex {
    /// Builds an R-tree over `features` using Sort-Tile-Recursive bulk
    /// loading with the node fan-out from `config` (minimum 4).
    pub fn build(features: Vec<Feature>, config: RTreeConfig) -> RTreeIndex {
        let fanout = config.node_fanout.max(4);
        let leaves: Vec<Node> = features
            .iter()
            .enumerate()
            .filter_map(|(index, feature)| {
                Bounds::of_geometry(&feature.geometry).map(|bounds| Node::Leaf {
                    bounds,
                    feature_index: index,
                })
            })
            .collect();

        let root = str_pack(leaves, fanout);
        RTreeIndex { features, root }
    }
}

/// Sort-Tile-Recursive packing: repeatedly groups nodes into fanout-sized
/// runs (sorted by x, then each run sorted by y) until a single root
/// remains.
fn str_pack(mut nodes: Vec<Node>, fanout: usize) -> Option<Node> {
    if nodes.is_empty() {
        return None;
    }
    while nodes.len() > 1 {
        nodes.sort_by(|a, b| {
            centroid_x(a.bounds())
                .partial_cmp(&centroid_x(b.bounds()))
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let slice_count = (nodes.len() as f64 / fanout as f64).sqrt().ceil().max(1.0) as usize;
        let slice_size = (nodes.len() + slice_count - 1) / slice_count;

        let mut next_level = Vec::new();
        for slice in nodes.chunks_mut(slice_size.max(1)) {
            slice.sort_by(|a, b| {
                centroid_y(a.bounds())
                    .partial_cmp(&centroid_y(b.bounds()))
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
            for group in slice.chunks(fanout) {
                next_level.push(pack_group(group.to_vec()));
            }
        }
        nodes = next_level;
    }
    nodes.into_iter().next()
}

fn pack_group(group: Vec<Node>) -> Node {
    if group.len() == 1 {
        return group.into_iter().next().unwrap();
    }
    let mut bounds = *group[0].bounds();
    for node in &group[1..] {
        let child_bounds = node.bounds();
        bounds.grow(child_bounds.min.0, child_bounds.min.1);
        bounds.grow(child_bounds.max.0, child_bounds.max.1);
    }
    Node::Inner { bounds, children: group }
}

fn centroid_x(bounds: &Bounds) -> f64 {
    (bounds.min.0 + bounds.max.0) / 2.0
}

fn centroid_y(bounds: &Bounds) -> f64 {
    (bounds.min.1 + bounds.max.1) / 2.0
}

impl SpatialIndex for RTreeIndex {
    fn query_bounds(&self, bounds: &Bounds) -> Vec<&Feature> {
        let mut indices = Vec::new();
        if let Some(root) = &self.root {
            root.query(bounds, &mut indices);
        }
        indices.sort_unstable();
        let mut matches: Vec<&Feature> = indices.into_iter().map(|i| &self.features[i]).collect();
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
        self.root.as_ref().map(|root| *root.bounds())
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
