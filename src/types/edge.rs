//! The road (edge) struct.

use std::hash::{Hash, Hasher};

use serde::Serialize;

use super::{EdgeId, VertexId, Weight};

/// An undirected road between two vertices.
///
/// Equality and hashing look at `index` only.
#[derive(Debug, Clone, Serialize)]
pub struct Edge {
    /// Identity from the network description (`E<index>`).
    pub index: EdgeId,
    pub endpoint_a: VertexId,
    pub endpoint_b: VertexId,
    /// Travel cost.
    pub weight: Weight,
    /// A blocked road is dropped by [`RoadGraph::without_blocked_edges`].
    ///
    /// [`RoadGraph::without_blocked_edges`]: crate::graph::RoadGraph::without_blocked_edges
    pub is_blocked: bool,
}

impl Edge {
    /// Create an open road.
    pub fn new(index: EdgeId, endpoint_a: VertexId, endpoint_b: VertexId, weight: Weight) -> Self {
        Self {
            index,
            endpoint_a,
            endpoint_b,
            weight,
            is_blocked: false,
        }
    }

    /// Mark the road impassable. There is no way back.
    pub fn block(&mut self) {
        self.is_blocked = true;
    }

    /// True if this edge joins `v1` and `v2`, in either order.
    pub fn connects(&self, v1: VertexId, v2: VertexId) -> bool {
        (self.endpoint_a == v1 && self.endpoint_b == v2)
            || (self.endpoint_b == v1 && self.endpoint_a == v2)
    }

    /// True if `v` is one of the endpoints.
    pub fn touches(&self, v: VertexId) -> bool {
        self.endpoint_a == v || self.endpoint_b == v
    }

    /// The endpoint opposite `v`, or `None` if `v` is not an endpoint.
    pub fn other_endpoint(&self, v: VertexId) -> Option<VertexId> {
        if self.endpoint_a == v {
            Some(self.endpoint_b)
        } else if self.endpoint_b == v {
            Some(self.endpoint_a)
        } else {
            None
        }
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.index.hash(state);
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "E{}", self.index)
    }
}
