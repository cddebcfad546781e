//! Core graph structure — vertices + roads with incident-edge lists.

use std::fmt;

use serde::Serialize;

use crate::types::{
    parse_label, Edge, GraphError, GraphResult, Population, Probability, Vertex, VertexId, Weight,
    P_LEAKAGE,
};

/// The road network: an arena of vertices and edges linked by position.
///
/// Vertices are dense and 1-based (`vertices[i].index == i + 1`). Edges keep
/// insertion order, and every vertex lists the positions of the edges it
/// touches.
#[derive(Debug, Clone, Serialize)]
pub struct RoadGraph {
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
    /// Graph-level persistence probability from the network description.
    pub persistence_probability: Probability,
    /// Always [`P_LEAKAGE`].
    pub leakage_probability: Probability,
}

impl Default for RoadGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl RoadGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
            persistence_probability: 0.0,
            leakage_probability: P_LEAKAGE,
        }
    }

    /// Append a vertex with the next dense index, returns that index.
    pub fn push_vertex(&mut self, mut vertex: Vertex) -> VertexId {
        let index = self.vertices.len() + 1;
        vertex.index = index;
        vertex.incident_edges.clear();
        self.vertices.push(vertex);
        index
    }

    /// Append an edge and register it on both endpoints.
    ///
    /// A self-loop is registered once. Returns the edge's position in the
    /// edge list.
    pub fn push_edge(&mut self, edge: Edge) -> GraphResult<usize> {
        self.check_vertex(edge.endpoint_a)?;
        self.check_vertex(edge.endpoint_b)?;

        let position = self.edges.len();
        let (a, b) = (edge.endpoint_a, edge.endpoint_b);
        self.edges.push(edge);
        self.vertices[a - 1].add_edge(position);
        if b != a {
            self.vertices[b - 1].add_edge(position);
        }
        Ok(position)
    }

    /// Number of roads.
    pub fn number_of_edges(&self) -> usize {
        self.edges.len()
    }

    /// Number of vertices.
    pub fn number_of_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// All vertices, ordered by index.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// All edges, in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// 1-based vertex lookup.
    pub fn get_vertex(&self, index: VertexId) -> GraphResult<&Vertex> {
        self.check_vertex(index)?;
        Ok(&self.vertices[index - 1])
    }

    /// 1-based vertex lookup (mutable), for simulation and augmentation code.
    pub fn vertex_mut(&mut self, index: VertexId) -> GraphResult<&mut Vertex> {
        self.check_vertex(index)?;
        Ok(&mut self.vertices[index - 1])
    }

    /// Vertex from a `V<i>` label.
    pub fn vertex_from_label(&self, label: &str) -> GraphResult<&Vertex> {
        self.get_vertex(parse_label(label, 'V')?)
    }

    /// Edge from an `E<i>` label; `E<i>` is the i-th stored edge.
    pub fn edge_from_label(&self, label: &str) -> GraphResult<&Edge> {
        let position = self.edge_position(label)?;
        Ok(&self.edges[position])
    }

    /// Edge by position in the edge list (mutable).
    pub fn edge_mut(&mut self, position: usize) -> GraphResult<&mut Edge> {
        let len = self.edges.len();
        self.edges
            .get_mut(position)
            .ok_or(GraphError::IndexOutOfBounds {
                kind: "Edge",
                index: position + 1,
                len,
            })
    }

    /// Block the edge named by an `E<i>` label.
    pub fn block_edge(&mut self, label: &str) -> GraphResult<()> {
        let position = self.edge_position(label)?;
        self.edges[position].block();
        Ok(())
    }

    /// The edge joining `v1` and `v2` in either direction; the first match in
    /// edge order wins.
    pub fn get_edge(&self, v1: VertexId, v2: VertexId) -> GraphResult<&Edge> {
        self.edges
            .iter()
            .find(|e| e.connects(v1, v2))
            .ok_or(GraphError::NoEdge { v1, v2 })
    }

    /// Neighbours of `v`, computed by scanning every edge in storage order.
    pub fn connected_vertices(&self, v: VertexId) -> Vec<VertexId> {
        self.edges
            .iter()
            .filter_map(|e| e.other_endpoint(v))
            .collect()
    }

    /// Neighbours of `v` with road weights, from the vertex's incident list.
    pub fn neighbours_with_weights(&self, v: VertexId) -> GraphResult<Vec<(VertexId, Weight)>> {
        Ok(self.get_vertex(v)?.connected_vertices_with_weights(&self.edges))
    }

    /// Total people at non-shelter vertices.
    pub fn total_population_to_evacuate(&self) -> Population {
        self.vertices
            .iter()
            .filter(|v| !v.is_shelter())
            .map(|v| v.population_count)
            .sum()
    }

    /// Shelter vertices, ordered by index.
    pub fn shelters(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.iter().filter(|v| v.is_shelter())
    }

    /// Population-location vertices, ordered by index.
    pub fn population_locations(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.iter().filter(|v| v.is_population_location())
    }

    /// Number of edges currently marked blocked.
    pub fn blocked_count(&self) -> usize {
        self.edges.iter().filter(|e| e.is_blocked).count()
    }

    /// An independent copy of this graph with every blocked edge removed
    /// from the edge list and from its endpoints' incident lists.
    ///
    /// `self` is left untouched.
    pub fn without_blocked_edges(&self) -> RoadGraph {
        let mut result = self.clone();

        // Old position -> new position, None for dropped edges.
        let mut remap: Vec<Option<usize>> = Vec::with_capacity(self.edges.len());
        let mut next = 0;
        for edge in &self.edges {
            if edge.is_blocked {
                remap.push(None);
            } else {
                remap.push(Some(next));
                next += 1;
            }
        }

        result.edges.retain(|e| !e.is_blocked);
        for vertex in &mut result.vertices {
            vertex.incident_edges = vertex
                .incident_edges
                .iter()
                .filter_map(|&pos| remap.get(pos).copied().flatten())
                .collect();
        }

        log::debug!(
            "Removed {} blocked edges, {} remain",
            self.edges.len() - result.edges.len(),
            result.edges.len()
        );
        result
    }

    fn edge_position(&self, label: &str) -> GraphResult<usize> {
        let index = parse_label(label, 'E')?;
        if index == 0 || index > self.edges.len() {
            return Err(GraphError::IndexOutOfBounds {
                kind: "Edge",
                index,
                len: self.edges.len(),
            });
        }
        Ok(index - 1)
    }

    pub(crate) fn check_vertex(&self, index: VertexId) -> GraphResult<()> {
        if index == 0 || index > self.vertices.len() {
            return Err(GraphError::IndexOutOfBounds {
                kind: "Vertex",
                index,
                len: self.vertices.len(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for RoadGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.vertices.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}(P {:?}, ", v, v.flood_probability)?;
            if v.is_shelter() {
                write!(f, "{})", v.kind.tag())?;
            } else {
                write!(f, "P{})", v.population_count)?;
            }
        }
        writeln!(f)?;
        for (i, e) in self.edges.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: V{} -{}- V{}", e, e.endpoint_a, e.weight, e.endpoint_b)?;
        }
        Ok(())
    }
}
