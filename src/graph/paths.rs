//! Simple-path enumeration and path-to-edges projection.
//!
//! Both enumerators are exhaustive depth-first searches and grow
//! exponentially with graph size; they are meant for small networks.

use crate::types::{Edge, GraphResult, Path, VertexId};

use super::RoadGraph;

impl RoadGraph {
    /// Every ordering of distinct vertices that starts at `source` and ends
    /// at `dest`.
    ///
    /// Each step tries every vertex of the graph not already on the path,
    /// without looking at roads. The result therefore contains orderings that
    /// are not walkable; callers filter them (e.g. with [`to_edges`]) if they
    /// need real routes. Use [`paths_between`] for adjacency-respecting
    /// enumeration.
    ///
    /// [`to_edges`]: Self::to_edges
    /// [`paths_between`]: Self::paths_between
    pub fn all_paths(&self, source: VertexId, dest: VertexId) -> GraphResult<Vec<Path>> {
        self.check_vertex(source)?;
        self.check_vertex(dest)?;

        let mut paths = Vec::new();
        self.extend_by_every_vertex(source, dest, &[], &mut paths);
        Ok(paths)
    }

    fn extend_by_every_vertex(
        &self,
        source: VertexId,
        dest: VertexId,
        prefix: &[VertexId],
        paths: &mut Vec<Path>,
    ) {
        let mut path = prefix.to_vec();
        path.push(source);
        if source == dest {
            paths.push(path);
            return;
        }
        for v in 1..=self.number_of_vertices() {
            if !path.contains(&v) {
                self.extend_by_every_vertex(v, dest, &path, paths);
            }
        }
    }

    /// Adjacency-respecting simple paths from `source` to `dest`.
    ///
    /// `current_path` is the path walked so far and is expected to end at
    /// `source`; completed paths are appended to `paths`. When `source ==
    /// dest` the current path itself is recorded.
    pub fn find_paths(
        &self,
        source: VertexId,
        dest: VertexId,
        current_path: &[VertexId],
        paths: &mut Vec<Path>,
    ) -> GraphResult<()> {
        self.check_vertex(source)?;
        self.check_vertex(dest)?;
        self.walk_roads(source, dest, current_path, paths);
        Ok(())
    }

    fn walk_roads(
        &self,
        source: VertexId,
        dest: VertexId,
        current_path: &[VertexId],
        paths: &mut Vec<Path>,
    ) {
        if source == dest {
            paths.push(current_path.to_vec());
            return;
        }
        for v in self.connected_vertices(source) {
            if !current_path.contains(&v) {
                let mut next = current_path.to_vec();
                next.push(v);
                self.walk_roads(v, dest, &next, paths);
            }
        }
    }

    /// All simple road paths from `source` to `dest`, each starting with
    /// `source`.
    pub fn paths_between(&self, source: VertexId, dest: VertexId) -> GraphResult<Vec<Path>> {
        let mut paths = Vec::new();
        self.find_paths(source, dest, &[source], &mut paths)?;
        Ok(paths)
    }

    /// The roads joining consecutive vertices of `path`.
    ///
    /// Stops at the first pair with no road between them and returns the
    /// roads found up to that point.
    pub fn to_edges(&self, path: &[VertexId]) -> Vec<&Edge> {
        let mut edges = Vec::with_capacity(path.len().saturating_sub(1));
        for pair in path.windows(2) {
            match self.get_edge(pair[0], pair[1]) {
                Ok(edge) => edges.push(edge),
                Err(e) => {
                    log::debug!("Path projection stopped: {}", e);
                    break;
                }
            }
        }
        edges
    }

    /// Total weight of a projected path.
    pub fn path_weight(edges: &[&Edge]) -> u64 {
        edges.iter().map(|e| u64::from(e.weight)).sum()
    }
}
