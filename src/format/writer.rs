//! Writes road graphs back to the network description format.

use std::io::Write;
use std::path::Path;

use crate::graph::RoadGraph;
use crate::types::error::GraphResult;

/// Writer for network description files.
///
/// Vertex kind, population and blocked flags have no directive of their own;
/// they are written as trailing comments so the output re-reads into the same
/// topology and probabilities.
pub struct GraphWriter;

impl GraphWriter {
    /// Write a graph to a description file.
    pub fn write_to_file(graph: &RoadGraph, path: &Path) -> GraphResult<()> {
        let file = std::fs::File::create(path)?;
        let mut writer = std::io::BufWriter::new(file);
        Self::write_to(graph, &mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Write a graph to any writer.
    pub fn write_to(graph: &RoadGraph, writer: &mut impl Write) -> GraphResult<()> {
        writeln!(writer, "#N {}", graph.number_of_vertices())?;
        for v in graph.vertices() {
            write!(writer, "#V{} F {:?}", v.index, v.flood_probability)?;
            if v.is_shelter() {
                writeln!(writer, "  shelter")?;
            } else {
                writeln!(writer, "  population {}", v.population_count)?;
            }
        }
        writeln!(writer, "#Ppersistence {:?}", graph.persistence_probability)?;
        for e in graph.edges() {
            write!(
                writer,
                "#E{} {} {} W{}",
                e.index, e.endpoint_a, e.endpoint_b, e.weight
            )?;
            if e.is_blocked {
                write!(writer, "  blocked")?;
            }
            writeln!(writer)?;
        }
        Ok(())
    }

    /// Render a graph to a string.
    pub fn render(graph: &RoadGraph) -> GraphResult<String> {
        let mut buf = Vec::new();
        Self::write_to(graph, &mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}
