//! Geometry assembly: turning a feature's [`SpatialPointer`] list into a
//! concrete [`Geometry`] by resolving, stitching, and closing primitive
//! coordinate sequences.

use crate::primitive::{PrimitiveStore, SpatialPointer};
use crate::warning::{Collector, Severity, Warning};

/// Coordinates are considered coincident for seam-stitching and ring
/// auto-closure purposes within this tolerance (decoded-unit, i.e.
/// degrees).
pub const CLOSURE_TOLERANCE: f64 = 1e-6;

/// A feature's assembled geometry.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    /// A single point.
    Point {
        /// Longitude.
        x: f64,
        /// Latitude.
        y: f64,
    },
    /// An open polyline.
    Line {
        /// Ordered (x, y) coordinates.
        coordinates: Vec<(f64, f64)>,
    },
    /// One or more closed rings bounding an area.
    Area {
        /// Each ring is closed: its first and last coordinates are equal.
        rings: Vec<Vec<(f64, f64)>>,
    },
    /// No geometry could be assembled (e.g. every pointer referenced a
    /// missing primitive).
    Empty,
}

impl Geometry {
    /// Flattens every coordinate touched by this geometry, for bounds
    /// computation.
    pub fn coordinates(&self) -> Vec<(f64, f64)> {
        match self {
            Geometry::Point { x, y } => vec![(*x, *y)],
            Geometry::Line { coordinates } => coordinates.clone(),
            Geometry::Area { rings } => rings.iter().flatten().copied().collect(),
            Geometry::Empty => Vec::new(),
        }
    }
}

fn approx_eq(a: (f64, f64), b: (f64, f64)) -> bool {
    (a.0 - b.0).abs() < CLOSURE_TOLERANCE && (a.1 - b.1).abs() < CLOSURE_TOLERANCE
}

/// Resolves `pointers` against `store` and assembles the resulting
/// [`Geometry`], per the assembly algorithm: resolve each pointer
/// (reversing edges as directed), stitch consecutive sequences on exact
/// coordinate match, then classify by point count and closure.
///
/// `feature_id` and `record_id` are attached to any warnings emitted for
/// missing primitives.
pub fn assemble(
    pointers: &[SpatialPointer],
    store: &PrimitiveStore,
    feature_id: u32,
    record_id: u32,
    collector: &mut Collector,
) -> Result<Geometry, crate::error::Error> {
    let mut sequences: Vec<Vec<(f64, f64)>> = Vec::new();

    for pointer in pointers {
        if pointer.is_edge {
            match store.edge(pointer.ref_id) {
                Some(edge) if !edge.is_degenerate() => {
                    let mut coords = edge.coordinates.clone();
                    if pointer.reverse {
                        coords.reverse();
                    }
                    sequences.push(coords);
                }
                Some(_) => {
                    collector.warn(
                        Warning::new(
                            "DEGENERATE_EDGE",
                            Severity::Warning,
                            format!("edge {} has fewer than two coordinates", pointer.ref_id),
                        )
                        .with_record(record_id)
                        .with_feature(feature_id),
                    )?;
                }
                None => {
                    collector.warn(
                        Warning::new(
                            "DEGENERATE_EDGE",
                            Severity::Warning,
                            format!("referenced edge {} is missing from the primitive store", pointer.ref_id),
                        )
                        .with_record(record_id)
                        .with_feature(feature_id),
                    )?;
                }
            }
        } else {
            match store.node(pointer.ref_id) {
                Some(node) => sequences.push(vec![(node.x, node.y)]),
                None => {
                    collector.warn(
                        Warning::new(
                            "DEGENERATE_EDGE",
                            Severity::Warning,
                            format!("referenced node {} is missing from the primitive store", pointer.ref_id),
                        )
                        .with_record(record_id)
                        .with_feature(feature_id),
                    )?;
                }
            }
        }
    }

    let mut coordinates: Vec<(f64, f64)> = Vec::new();
    for sequence in sequences {
        if let (Some(&last), Some(&first)) = (coordinates.last(), sequence.first()) {
            if approx_eq(last, first) {
                coordinates.extend_from_slice(&sequence[1..]);
                continue;
            }
        }
        coordinates.extend(sequence);
    }

    if coordinates.is_empty() {
        return Ok(Geometry::Empty);
    }
    if coordinates.len() == 1 {
        let (x, y) = coordinates[0];
        return Ok(Geometry::Point { x, y });
    }

    let first = coordinates[0];
    let last = *coordinates.last().unwrap();

    if coordinates.len() >= 3 {
        if first == last {
            return Ok(Geometry::Area { rings: vec![coordinates] });
        }
        if approx_eq(first, last) {
            collector.warn(
                Warning::new(
                    "POLYGON_CLOSED_AUTO",
                    Severity::Info,
                    "ring endpoints were nearly but not exactly coincident; closed automatically",
                )
                .with_record(record_id)
                .with_feature(feature_id),
            )?;
            coordinates.push(first);
            return Ok(Geometry::Area { rings: vec![coordinates] });
        }
    }

    Ok(Geometry::Line { coordinates })
}
