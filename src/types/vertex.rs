//! Vertex kinds and the core vertex struct.

use std::hash::{Hash, Hasher};

use serde::Serialize;

use super::edge::Edge;
use super::{Population, Probability, VertexId, Weight};

/// What a location in the road network is used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum VertexKind {
    /// Evacuation destination; holds nobody to evacuate.
    Shelter,
    /// A location with people who need to be evacuated.
    #[default]
    PopulationLocation,
}

impl VertexKind {
    /// Single-letter tag used in the textual rendering.
    pub fn tag(&self) -> char {
        match self {
            Self::Shelter => 'S',
            Self::PopulationLocation => 'P',
        }
    }

    /// Parse a kind from a name or its tag.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "s" | "shelter" => Some(Self::Shelter),
            "p" | "population" | "population_location" => Some(Self::PopulationLocation),
            _ => None,
        }
    }
}

/// A location in the road network.
///
/// Equality and hashing look at `index` only, so a vertex compares equal to
/// its counterpart in a copied graph even after attributes diverge.
#[derive(Debug, Clone, Serialize)]
pub struct Vertex {
    /// 1-based identity, equal to the vertex's position in the graph plus one.
    pub index: VertexId,
    /// Probability that this location floods.
    pub flood_probability: Probability,
    /// Set by simulation code.
    pub is_flooded: bool,
    pub kind: VertexKind,
    /// People to evacuate; only meaningful for population locations.
    pub population_count: Population,
    /// Positions in the owning graph's edge list, in insertion order.
    pub(crate) incident_edges: Vec<usize>,
}

impl Vertex {
    /// Create a population location with nobody in it.
    pub fn new(index: VertexId, flood_probability: Probability) -> Self {
        Self {
            index,
            flood_probability,
            is_flooded: false,
            kind: VertexKind::PopulationLocation,
            population_count: 0,
            incident_edges: Vec::new(),
        }
    }

    /// Create a shelter.
    pub fn shelter(index: VertexId, flood_probability: Probability) -> Self {
        Self {
            kind: VertexKind::Shelter,
            ..Self::new(index, flood_probability)
        }
    }

    /// Register an incident edge by its position in the graph's edge list.
    /// Only this vertex is touched; the other endpoint must be registered
    /// separately.
    pub fn add_edge(&mut self, edge_position: usize) {
        self.incident_edges.push(edge_position);
    }

    /// Positions of incident edges in the owning graph's edge list.
    pub fn incident_edges(&self) -> &[usize] {
        &self.incident_edges
    }

    pub fn is_shelter(&self) -> bool {
        self.kind == VertexKind::Shelter
    }

    pub fn is_population_location(&self) -> bool {
        self.kind == VertexKind::PopulationLocation
    }

    /// The other endpoint of every incident edge, in incident order.
    ///
    /// `edges` is the owning graph's edge list. A self-loop yields this
    /// vertex again.
    pub fn connected_vertices(&self, edges: &[Edge]) -> Vec<VertexId> {
        self.incident_edges
            .iter()
            .filter_map(|&pos| edges.get(pos))
            .map(|e| self.far_end(e))
            .collect()
    }

    /// Same as [`connected_vertices`](Self::connected_vertices), paired with
    /// the weight of the edge used.
    pub fn connected_vertices_with_weights(&self, edges: &[Edge]) -> Vec<(VertexId, Weight)> {
        self.incident_edges
            .iter()
            .filter_map(|&pos| edges.get(pos))
            .map(|e| (self.far_end(e), e.weight))
            .collect()
    }

    fn far_end(&self, edge: &Edge) -> VertexId {
        if edge.endpoint_a == self.index {
            edge.endpoint_b
        } else {
            edge.endpoint_a
        }
    }
}

impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl Eq for Vertex {}

impl Hash for Vertex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.index.hash(state);
    }
}

impl std::fmt::Display for Vertex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "V{}", self.index)
    }
}
