//! CLI command implementations.

use std::path::Path;

use crate::format::{GraphReader, GraphWriter};
use crate::graph::RoadGraph;
use crate::types::{GraphResult, VertexId};

/// Display summary information about a network file.
pub fn cmd_info(path: &Path, json: bool) -> GraphResult<()> {
    let graph = GraphReader::read_from_file(path)?;
    let shelters = graph.shelters().count();

    if json {
        let info = serde_json::json!({
            "file": path.display().to_string(),
            "vertices": graph.number_of_vertices(),
            "edges": graph.number_of_edges(),
            "blocked_edges": graph.blocked_count(),
            "shelters": shelters,
            "population_locations": graph.number_of_vertices() - shelters,
            "population_to_evacuate": graph.total_population_to_evacuate(),
            "persistence_probability": graph.persistence_probability,
            "leakage_probability": graph.leakage_probability,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("File: {}", path.display());
        println!("Vertices: {}", graph.number_of_vertices());
        println!("  Shelters: {}", shelters);
        println!(
            "  Population locations: {}",
            graph.number_of_vertices() - shelters
        );
        println!("Edges: {}", graph.number_of_edges());
        println!("Population to evacuate: {}", graph.total_population_to_evacuate());
        println!("P(persistence): {}", graph.persistence_probability);
        println!("P(leakage): {}", graph.leakage_probability);
    }
    Ok(())
}

/// Print the textual rendering of a network.
pub fn cmd_show(path: &Path) -> GraphResult<()> {
    let graph = GraphReader::read_from_file(path)?;
    println!("{}", graph);
    Ok(())
}

/// Enumerate simple paths between two vertices.
pub fn cmd_paths(
    path: &Path,
    from: &str,
    to: &str,
    every_ordering: bool,
    json: bool,
) -> GraphResult<()> {
    let graph = GraphReader::read_from_file(path)?;
    let source = graph.vertex_from_label(from)?.index;
    let dest = graph.vertex_from_label(to)?.index;

    let paths = if every_ordering {
        graph.all_paths(source, dest)?
    } else {
        graph.paths_between(source, dest)?
    };

    if json {
        let entries: Vec<serde_json::Value> = paths
            .iter()
            .map(|p| {
                let edges = graph.to_edges(p);
                serde_json::json!({
                    "vertices": p,
                    "edges": edges.iter().map(|e| e.index).collect::<Vec<_>>(),
                    "walkable": edges.len() + 1 == p.len(),
                    "weight": RoadGraph::path_weight(&edges),
                })
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&entries).unwrap_or_default()
        );
    } else {
        println!("{} path(s) from V{} to V{}", paths.len(), source, dest);
        for p in &paths {
            let edges = graph.to_edges(p);
            let route: Vec<String> = edges.iter().map(|e| e.to_string()).collect();
            println!(
                "  {}  [{}] weight {}",
                format_path(p),
                route.join(" "),
                RoadGraph::path_weight(&edges)
            );
        }
    }
    Ok(())
}

/// List the neighbours of a vertex with road weights.
pub fn cmd_neighbours(path: &Path, vertex: &str, json: bool) -> GraphResult<()> {
    let graph = GraphReader::read_from_file(path)?;
    let v = graph.vertex_from_label(vertex)?.index;
    let neighbours = graph.neighbours_with_weights(v)?;

    if json {
        let entries: Vec<serde_json::Value> = neighbours
            .iter()
            .map(|(n, w)| serde_json::json!({ "vertex": n, "weight": w }))
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&entries).unwrap_or_default()
        );
    } else {
        println!("V{}: {} neighbour(s)", v, neighbours.len());
        for (n, w) in neighbours {
            println!("  V{} (weight {})", n, w);
        }
    }
    Ok(())
}

/// Block the named roads and print what is left of the network.
pub fn cmd_prune(path: &Path, block: &[String], json: bool) -> GraphResult<()> {
    let mut graph = GraphReader::read_from_file(path)?;
    for label in block {
        graph.block_edge(label)?;
    }
    let pruned = graph.without_blocked_edges();

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&pruned).unwrap_or_default()
        );
    } else {
        println!(
            "Blocked {} of {} edges",
            graph.blocked_count(),
            graph.number_of_edges()
        );
        println!("{}", pruned);
    }
    Ok(())
}

/// Export the whole network as JSON.
pub fn cmd_export(path: &Path, pretty: bool) -> GraphResult<()> {
    let graph = GraphReader::read_from_file(path)?;
    let output = if pretty {
        serde_json::to_string_pretty(&graph).unwrap_or_default()
    } else {
        serde_json::to_string(&graph).unwrap_or_default()
    };
    println!("{}", output);
    Ok(())
}

/// Re-emit a network file in canonical directive form.
pub fn cmd_normalize(path: &Path, output: Option<&Path>) -> GraphResult<()> {
    let graph = GraphReader::read_from_file(path)?;
    match output {
        Some(out) => {
            GraphWriter::write_to_file(&graph, out)?;
            println!("Wrote {}", out.display());
        }
        None => print!("{}", GraphWriter::render(&graph)?),
    }
    Ok(())
}

fn format_path(path: &[VertexId]) -> String {
    path.iter()
        .map(|v| format!("V{}", v))
        .collect::<Vec<_>>()
        .join(" -> ")
}
