//! Spatial primitives (nodes and edges) and the arena that owns them for
//! the lifetime of a parse session.
//!
//! Features never hold direct references to primitives; they hold a
//! [`SpatialPointer`] (an id plus traversal flags) and resolve it against
//! the session's [`PrimitiveStore`], avoiding the reference cycles a
//! pointer-based graph would otherwise require.

use std::collections::HashMap;

/// A single vector node: an id and a decoded (x, y) position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node {
    /// Record id, unique within the cell.
    pub id: u32,
    /// Decoded longitude.
    pub x: f64,
    /// Decoded latitude.
    pub y: f64,
}

/// A single vector edge: an id and its ordered chain of node coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    /// Record id, unique within the cell.
    pub id: u32,
    /// Ordered (x, y) coordinates along the edge, in its stored (forward)
    /// direction. Always has at least two coordinates for a non-degenerate
    /// edge.
    pub coordinates: Vec<(f64, f64)>,
}

impl Edge {
    /// True if the edge has fewer than two coordinates and therefore
    /// cannot contribute a meaningful line segment.
    pub fn is_degenerate(&self) -> bool {
        self.coordinates.len() < 2
    }
}

/// A feature's reference to a spatial primitive: which one, and how to
/// traverse it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpatialPointer {
    /// The referenced primitive's record id.
    pub ref_id: u32,
    /// True if `ref_id` names an edge; false if it names a node.
    pub is_edge: bool,
    /// True if the edge should be traversed tail-to-head instead of its
    /// stored order. Meaningless for node pointers.
    pub reverse: bool,
}

/// The S-57 primitive record type code (`RCNM`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordName {
    /// Dataset-general-information record.
    DataSet,
    /// Catalogue directory record.
    CatalogueDirectory,
    /// Catalogue cross-reference record.
    CatalogueCrossReference,
    /// Data dictionary definition record.
    DataDictionaryDefinition,
    /// Data dictionary domain record.
    DataDictionaryDomain,
    /// Data dictionary schema record.
    DataDictionarySchema,
    /// Feature record.
    Feature,
    /// Isolated node.
    IsolatedNode,
    /// Connected node.
    ConnectedNode,
    /// Edge.
    Edge,
    /// Face.
    Face,
    /// A code not in the S-57 record name table.
    Unknown(u8),
}

impl RecordName {
    /// Interprets the `RCNM` subfield value.
    pub fn from_code(rcnm: u8) -> RecordName {
        match rcnm {
            10 => RecordName::DataSet,
            20 => RecordName::CatalogueDirectory,
            30 => RecordName::CatalogueCrossReference,
            40 => RecordName::DataDictionaryDefinition,
            50 => RecordName::DataDictionaryDomain,
            60 => RecordName::DataDictionarySchema,
            100 => RecordName::Feature,
            110 => RecordName::IsolatedNode,
            120 => RecordName::ConnectedNode,
            130 => RecordName::Edge,
            140 => RecordName::Face,
            other => RecordName::Unknown(other),
        }
    }

    /// True for either node record-name variant.
    pub fn is_node(&self) -> bool {
        matches!(self, RecordName::IsolatedNode | RecordName::ConnectedNode)
    }

    /// True for the edge record-name variant.
    pub fn is_edge(&self) -> bool {
        matches!(self, RecordName::Edge)
    }
}

/// The geometric primitive type (`PRIM`) of a feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveType {
    /// Point geometry.
    Point,
    /// Line geometry.
    Line,
    /// Area geometry.
    Area,
    /// No geometry (metadata-only feature).
    None,
}

impl PrimitiveType {
    /// Interprets the `PRIM` subfield value.
    pub fn from_code(prim: u8) -> PrimitiveType {
        match prim {
            1 => PrimitiveType::Point,
            2 => PrimitiveType::Line,
            3 => PrimitiveType::Area,
            _ => PrimitiveType::None,
        }
    }
}

/// Per-cell arena owning every node and edge, keyed by record id.
#[derive(Debug, Clone, Default)]
pub struct PrimitiveStore {
    nodes: HashMap<u32, Node>,
    edges: HashMap<u32, Edge>,
}

impl PrimitiveStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        PrimitiveStore::default()
    }

    /// Inserts or replaces a node.
    pub fn insert_node(&mut self, node: Node) {
        self.nodes.insert(node.id, node);
    }

    /// Inserts or replaces an edge.
    pub fn insert_edge(&mut self, edge: Edge) {
        self.edges.insert(edge.id, edge);
    }

    /// Looks up a node by id.
    pub fn node(&self, id: u32) -> Option<&Node> {
        self.nodes.get(&id)
    }

    /// Looks up an edge by id.
    pub fn edge(&self, id: u32) -> Option<&Edge> {
        self.edges.get(&id)
    }

    /// Number of nodes in the store.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges in the store.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}
