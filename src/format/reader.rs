//! Reads network descriptions into an in-memory road graph.
//!
//! Only lines starting with `#` carry directives:
//!
//! ```text
//! #N 3
//! #V1 F 0.2
//! #V2 F 0.1  the hospital
//! #Ppersistence 0.9
//! #E1 1 2 W4
//! ```
//!
//! A double space ends the directive; whatever follows is a comment.

use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use crate::graph::RoadGraph;
use crate::types::error::{GraphError, GraphResult};
use crate::types::{Edge, Probability, Vertex};

/// Reader for network description files.
pub struct GraphReader;

impl GraphReader {
    /// Read a description file into a RoadGraph.
    pub fn read_from_file(path: &Path) -> GraphResult<RoadGraph> {
        let text = std::fs::read_to_string(path)?;
        Self::parse_str(&text)
    }

    /// Read from any reader into a RoadGraph.
    pub fn read_from(reader: &mut impl Read) -> GraphResult<RoadGraph> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Self::parse_str(&text)
    }

    /// Parse a complete description held in memory.
    pub fn parse_str(text: &str) -> GraphResult<RoadGraph> {
        log::debug!("---------------------Building Graph---------------------");
        let mut state = ParseState::default();
        for (i, raw) in text.lines().enumerate() {
            let Some(rest) = raw.strip_prefix('#') else {
                continue;
            };
            let directive = rest.find("  ").map_or(rest, |end| &rest[..end]);
            let fields: Vec<&str> = directive.split_whitespace().collect();
            if fields.is_empty() {
                continue;
            }
            state.apply(i + 1, &fields)?;
        }
        log::debug!("---------------------Done---------------------");
        Ok(state.graph)
    }
}

impl FromStr for RoadGraph {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GraphReader::parse_str(s)
    }
}

#[derive(Default)]
struct ParseState {
    graph: RoadGraph,
    declared_vertices: Option<usize>,
    persistence_seen: bool,
}

impl ParseState {
    fn apply(&mut self, line: usize, fields: &[&str]) -> GraphResult<()> {
        let head = fields[0];
        if head == "Ppersistence" {
            self.persistence(line, fields)
        } else if head == "N" {
            self.vertex_count(line, fields)
        } else if let Some(index) = head.strip_prefix('V') {
            if fields.get(1) == Some(&"F") {
                self.vertex(line, index, fields)
            } else {
                log::debug!("Line {}: skipping vertex attribute directive {}", line, head);
                Ok(())
            }
        } else if let Some(index) = head.strip_prefix('E') {
            self.edge(line, index, fields)
        } else {
            log::debug!("Line {}: skipping unknown directive {}", line, head);
            Ok(())
        }
    }

    // #N x
    fn vertex_count(&mut self, line: usize, fields: &[&str]) -> GraphResult<()> {
        if self.declared_vertices.is_some() {
            return Err(GraphError::Directive {
                line,
                message: "N declared more than once".to_string(),
            });
        }
        let n: usize = number(field(fields, 1, line, "vertex count")?, line, "vertex count")?;
        self.declared_vertices = Some(n);
        log::debug!("Got N={}", n);
        Ok(())
    }

    // #Vx F pv
    fn vertex(&mut self, line: usize, index: &str, fields: &[&str]) -> GraphResult<()> {
        if self.persistence_seen {
            return Err(GraphError::Directive {
                line,
                message: format!("V{} declared after Ppersistence", index),
            });
        }
        let found: usize = number(index, line, "vertex index")?;
        let expected = self.graph.number_of_vertices() + 1;
        if found != expected {
            return Err(GraphError::NonDenseVertex {
                line,
                expected,
                found,
            });
        }
        let p: Probability = number(
            field(fields, 2, line, "flood probability")?,
            line,
            "flood probability",
        )?;
        warn_if_not_probability(line, "flood probability", p);
        self.graph.push_vertex(Vertex::new(found, p));
        log::debug!("Got V{}: flood_probability={}", found, p);
        Ok(())
    }

    // #Ppersistence p
    fn persistence(&mut self, line: usize, fields: &[&str]) -> GraphResult<()> {
        if self.persistence_seen {
            return Err(GraphError::Directive {
                line,
                message: "Ppersistence declared more than once".to_string(),
            });
        }
        let Some(n) = self.declared_vertices else {
            return Err(GraphError::Directive {
                line,
                message: "Ppersistence before N".to_string(),
            });
        };
        let p: Probability = number(
            field(fields, 1, line, "persistence probability")?,
            line,
            "persistence probability",
        )?;
        warn_if_not_probability(line, "persistence probability", p);

        // Vertices are complete at this point.
        let declared = self.graph.number_of_vertices();
        if n != declared {
            log::info!(
                "N={} differs from the {} declared vertices; missing ones get flood probability 0",
                n,
                declared
            );
            for index in declared + 1..=n {
                self.graph.push_vertex(Vertex::new(index, 0.0));
            }
        }

        self.graph.persistence_probability = p;
        self.persistence_seen = true;
        log::debug!("Got Ppersistence={}", p);
        Ok(())
    }

    // #Ex v1 v2 Wx
    fn edge(&mut self, line: usize, index: &str, fields: &[&str]) -> GraphResult<()> {
        let edge_index: usize = number(index, line, "edge index")?;
        let a: usize = number(field(fields, 1, line, "edge endpoint")?, line, "edge endpoint")?;
        let b: usize = number(field(fields, 2, line, "edge endpoint")?, line, "edge endpoint")?;
        let weight_field = field(fields, 3, line, "edge weight")?;
        let weight = match weight_field.strip_prefix('W') {
            Some(w) => number(w, line, "edge weight")?,
            None => {
                return Err(GraphError::InvalidNumber {
                    line,
                    field: "edge weight",
                    value: weight_field.to_string(),
                })
            }
        };

        let count = self.graph.number_of_vertices();
        for v in [a, b] {
            if v == 0 || v > count {
                return Err(GraphError::VertexOutOfRange {
                    line,
                    index: v,
                    count,
                });
            }
        }

        self.graph.push_edge(Edge::new(edge_index, a, b, weight))?;
        log::debug!("Got E{}", edge_index);
        Ok(())
    }
}

fn field<'a>(
    fields: &[&'a str],
    at: usize,
    line: usize,
    name: &'static str,
) -> GraphResult<&'a str> {
    fields
        .get(at)
        .copied()
        .ok_or(GraphError::MissingField { line, field: name })
}

fn number<T: FromStr>(value: &str, line: usize, name: &'static str) -> GraphResult<T> {
    value.parse().map_err(|_| GraphError::InvalidNumber {
        line,
        field: name,
        value: value.to_string(),
    })
}

fn warn_if_not_probability(line: usize, name: &str, p: Probability) {
    if !(0.0..=1.0).contains(&p) {
        log::warn!("Line {}: {} {} is outside [0, 1]", line, name, p);
    }
}
