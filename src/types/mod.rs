//! All data types for the evacuation graph library.

pub mod edge;
pub mod error;
pub mod vertex;

pub use edge::Edge;
pub use error::{GraphError, GraphResult};
pub use vertex::{Vertex, VertexKind};

/// 1-based vertex identity.
pub type VertexId = usize;
/// Edge identity as written in the network description.
pub type EdgeId = usize;
/// Road travel cost.
pub type Weight = u32;
/// Data type for probabilities.
pub type Probability = f64;
/// Number of people at a location.
pub type Population = u64;

/// A simple path as an ordered list of vertex ids.
pub type Path = Vec<VertexId>;

/// Leakage probability attached to every graph.
pub const P_LEAKAGE: Probability = 0.001;

/// Parse the numeric part of a `V<i>` / `E<i>` label.
///
/// Bare numbers are accepted too.
pub fn parse_label(label: &str, prefix: char) -> GraphResult<usize> {
    let trimmed = label.trim();
    let digits = trimmed
        .strip_prefix(prefix)
        .or_else(|| trimmed.strip_prefix(prefix.to_ascii_lowercase()))
        .unwrap_or(trimmed);
    digits
        .parse::<usize>()
        .map_err(|_| GraphError::InvalidLabel(label.to_string()))
}
