//! In-memory road graph — the core data structure.

pub mod builder;
pub mod paths;
pub mod road_graph;

pub use builder::GraphBuilder;
pub use road_graph::RoadGraph;
