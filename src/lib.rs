//! evacuation-graph — road-network graphs for flood evacuation simulations.
//!
//! Vertices are population locations or shelters carrying a flood
//! probability; edges are weighted roads that can be blocked. Graphs are read
//! from a line-oriented network description and queried for simple paths,
//! neighbours and evacuation totals.

pub mod cli;
pub mod format;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use format::{GraphReader, GraphWriter};
pub use graph::{GraphBuilder, RoadGraph};
pub use types::{
    Edge, EdgeId, GraphError, GraphResult, Path, Population, Probability, Vertex, VertexId,
    VertexKind, Weight, P_LEAKAGE,
};
