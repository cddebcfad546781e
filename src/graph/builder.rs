//! Fluent API for building RoadGraph instances.

use crate::types::{Edge, GraphResult, Population, Probability, Vertex, VertexId, Weight};

use super::RoadGraph;

/// Fluent builder for constructing a RoadGraph in code.
///
/// Vertices get dense 1-based ids in the order they are added. Edge ids
/// follow the order edges are linked, starting at 1.
pub struct GraphBuilder {
    vertices: Vec<Vertex>,
    edges: Vec<(VertexId, VertexId, Weight)>,
    persistence: Probability,
}

impl GraphBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
            persistence: 0.0,
        }
    }

    fn add_vertex(&mut self, mut vertex: Vertex) -> VertexId {
        let id = self.vertices.len() + 1;
        vertex.index = id;
        self.vertices.push(vertex);
        id
    }

    /// Add a population location.
    pub fn add_population_location(
        &mut self,
        flood_probability: Probability,
        population: Population,
    ) -> VertexId {
        let mut vertex = Vertex::new(0, flood_probability);
        vertex.population_count = population;
        self.add_vertex(vertex)
    }

    /// Add a shelter.
    pub fn add_shelter(&mut self, flood_probability: Probability) -> VertexId {
        self.add_vertex(Vertex::shelter(0, flood_probability))
    }

    /// Add a road between two vertices.
    pub fn link(&mut self, a: VertexId, b: VertexId, weight: Weight) -> &mut Self {
        self.edges.push((a, b, weight));
        self
    }

    /// Set the graph's persistence probability.
    pub fn persistence(&mut self, p: Probability) -> &mut Self {
        self.persistence = p;
        self
    }

    /// Build the final RoadGraph. Fails if a road names a missing vertex.
    pub fn build(self) -> GraphResult<RoadGraph> {
        let mut graph = RoadGraph::new();
        graph.persistence_probability = self.persistence;
        for vertex in self.vertices {
            graph.push_vertex(vertex);
        }
        for (i, (a, b, weight)) in self.edges.into_iter().enumerate() {
            graph.push_edge(Edge::new(i + 1, a, b, weight))?;
        }
        Ok(graph)
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
