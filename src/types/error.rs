//! Error types for the evacuation graph library.

use thiserror::Error;

/// All errors that can occur while building or querying a road graph.
#[derive(Error, Debug)]
pub enum GraphError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A field that must be numeric could not be parsed.
    #[error("Line {line}: invalid {field} '{value}'")]
    InvalidNumber {
        line: usize,
        field: &'static str,
        value: String,
    },

    /// A directive ended before a required field.
    #[error("Line {line}: missing {field}")]
    MissingField { line: usize, field: &'static str },

    /// A directive appeared twice or out of order.
    #[error("Line {line}: {message}")]
    Directive { line: usize, message: String },

    /// Vertex declarations must be dense and 1-based.
    #[error("Line {line}: expected vertex V{expected}, found V{found}")]
    NonDenseVertex {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// An edge references a vertex that has not been declared.
    #[error("Line {line}: vertex {index} out of range (graph has {count} vertices)")]
    VertexOutOfRange {
        line: usize,
        index: usize,
        count: usize,
    },

    /// No edge joins the two vertices.
    #[error("No edge between V{v1} and V{v2}.")]
    NoEdge { v1: usize, v2: usize },

    /// A lookup by index or label fell outside storage.
    #[error("{kind} index {index} out of bounds (len {len})")]
    IndexOutOfBounds {
        kind: &'static str,
        index: usize,
        len: usize,
    },

    /// A label did not look like `V<i>` / `E<i>`.
    #[error("Invalid label: {0}")]
    InvalidLabel(String),
}

impl GraphError {
    /// True for errors caused by a malformed network description.
    pub fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            Self::InvalidNumber { .. }
                | Self::MissingField { .. }
                | Self::Directive { .. }
                | Self::NonDenseVertex { .. }
                | Self::VertexOutOfRange { .. }
        )
    }
}

/// Convenience result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
