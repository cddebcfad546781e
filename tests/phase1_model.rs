//! Phase 1 tests: Vertex, Edge and RoadGraph queries.

use std::collections::HashSet;

use evacuation_graph::graph::{GraphBuilder, RoadGraph};
use evacuation_graph::types::edge::Edge;
use evacuation_graph::types::error::GraphError;
use evacuation_graph::types::vertex::{Vertex, VertexKind};
use evacuation_graph::types::P_LEAKAGE;

// ==================== Helper ====================

/// V1 (pop 10) -5- V2 (shelter) -3- V3 (pop 7), V1 -8- V3, V4 isolated shelter.
fn small_town() -> RoadGraph {
    let mut b = GraphBuilder::new();
    let v1 = b.add_population_location(0.1, 10);
    let v2 = b.add_shelter(0.2);
    let v3 = b.add_population_location(0.3, 7);
    b.add_shelter(0.0);
    b.link(v1, v2, 5).link(v2, v3, 3).link(v1, v3, 8).persistence(0.5);
    b.build().unwrap()
}

// ==================== Vertex / Edge Tests ====================

#[test]
fn test_vertex_defaults() {
    let v = Vertex::new(3, 0.25);
    assert_eq!(v.index, 3);
    assert!(!v.is_flooded);
    assert_eq!(v.kind, VertexKind::PopulationLocation);
    assert_eq!(v.population_count, 0);
    assert!(v.is_population_location());
    assert!(!v.is_shelter());
    assert!(v.incident_edges().is_empty());
}

#[test]
fn test_vertex_kind_predicates_exclusive() {
    let s = Vertex::shelter(1, 0.0);
    assert!(s.is_shelter());
    assert!(!s.is_population_location());
    assert_eq!(VertexKind::from_name("S"), Some(VertexKind::Shelter));
    assert_eq!(VertexKind::from_name("shelter"), Some(VertexKind::Shelter));
    assert_eq!(VertexKind::from_name("x"), None);
}

#[test]
fn test_vertex_equality_by_index() {
    let a = Vertex::new(2, 0.1);
    let mut b = Vertex::shelter(2, 0.9);
    b.population_count = 40;
    assert_eq!(a, b);
    assert_ne!(a, Vertex::new(3, 0.1));

    let set: HashSet<Vertex> = [a, b].into_iter().collect();
    assert_eq!(set.len(), 1);
}

#[test]
fn test_vertex_add_edge_no_duplicate_check() {
    let mut v = Vertex::new(1, 0.0);
    v.add_edge(0);
    v.add_edge(0);
    assert_eq!(v.incident_edges(), &[0, 0]);
}

#[test]
fn test_vertex_connected_vertices_picks_far_end() {
    let edges = vec![Edge::new(1, 1, 2, 4), Edge::new(2, 3, 1, 6), Edge::new(3, 1, 1, 2)];
    let mut v = Vertex::new(1, 0.0);
    v.add_edge(0);
    v.add_edge(1);
    v.add_edge(2);
    assert_eq!(v.connected_vertices(&edges), vec![2, 3, 1]);
    assert_eq!(
        v.connected_vertices_with_weights(&edges),
        vec![(2, 4), (3, 6), (1, 2)]
    );
}

#[test]
fn test_edge_block_idempotent() {
    let mut e = Edge::new(1, 1, 2, 3);
    assert!(!e.is_blocked);
    e.block();
    e.block();
    assert!(e.is_blocked);
}

#[test]
fn test_edge_identity_and_display() {
    let a = Edge::new(4, 1, 2, 3);
    let b = Edge::new(4, 5, 6, 99);
    assert_eq!(a, b);
    assert_eq!(a.to_string(), "E4");
    assert_eq!(Vertex::new(7, 0.0).to_string(), "V7");
    assert!(a.connects(2, 1));
    assert_eq!(a.other_endpoint(2), Some(1));
    assert_eq!(a.other_endpoint(9), None);
}

// ==================== Graph Query Tests ====================

#[test]
fn test_counts_and_constants() {
    let g = small_town();
    assert_eq!(g.number_of_vertices(), 4);
    assert_eq!(g.number_of_edges(), 3);
    assert!((g.persistence_probability - 0.5).abs() < f64::EPSILON);
    assert!((g.leakage_probability - P_LEAKAGE).abs() < f64::EPSILON);
    assert!((P_LEAKAGE - 0.001).abs() < f64::EPSILON);
}

#[test]
fn test_dense_vertex_indices() {
    let g = small_town();
    for (i, v) in g.vertices().iter().enumerate() {
        assert_eq!(v.index, i + 1);
        assert_eq!(g.get_vertex(i + 1).unwrap(), v);
    }
}

#[test]
fn test_get_edge_is_symmetric() {
    let g = small_town();
    for e in g.edges() {
        let forward = g.get_edge(e.endpoint_a, e.endpoint_b).unwrap();
        let backward = g.get_edge(e.endpoint_b, e.endpoint_a).unwrap();
        assert_eq!(forward, backward);
        assert_eq!(forward, e);
    }
    assert_eq!(g.get_edge(3, 2).unwrap().weight, 3);
}

#[test]
fn test_get_edge_missing_names_both_endpoints() {
    let g = small_town();
    match g.get_edge(1, 4) {
        Err(GraphError::NoEdge { v1, v2 }) => {
            assert_eq!((v1, v2), (1, 4));
        }
        other => panic!("Expected NoEdge, got {:?}", other),
    }
    let msg = g.get_edge(1, 4).unwrap_err().to_string();
    assert_eq!(msg, "No edge between V1 and V4.");
}

#[test]
fn test_edges_registered_on_both_endpoints_once() {
    let g = small_town();
    for (pos, e) in g.edges().iter().enumerate() {
        for v in [e.endpoint_a, e.endpoint_b] {
            let incident = g.get_vertex(v).unwrap().incident_edges();
            assert_eq!(incident.iter().filter(|&&p| p == pos).count(), 1);
        }
    }
    assert!(g.get_vertex(4).unwrap().incident_edges().is_empty());
}

#[test]
fn test_self_loop_registered_once() {
    let mut b = GraphBuilder::new();
    let v = b.add_population_location(0.0, 1);
    b.link(v, v, 2);
    let g = b.build().unwrap();
    assert_eq!(g.get_vertex(1).unwrap().incident_edges(), &[0]);
    assert_eq!(g.connected_vertices(1), vec![1]);
}

#[test]
fn test_label_lookups() {
    let g = small_town();
    assert_eq!(g.vertex_from_label("V3").unwrap().index, 3);
    assert_eq!(g.edge_from_label("E2").unwrap().weight, 3);
    assert_eq!(g.vertex_from_label("2").unwrap().index, 2);

    assert!(matches!(
        g.vertex_from_label("V9"),
        Err(GraphError::IndexOutOfBounds { index: 9, len: 4, .. })
    ));
    assert!(matches!(
        g.edge_from_label("E0"),
        Err(GraphError::IndexOutOfBounds { .. })
    ));
    assert!(matches!(
        g.edge_from_label("Ex"),
        Err(GraphError::InvalidLabel(_))
    ));
    assert!(matches!(
        g.edge_from_label("V1"),
        Err(GraphError::InvalidLabel(_))
    ));
}

#[test]
fn test_get_vertex_out_of_bounds() {
    let g = small_town();
    assert!(matches!(
        g.get_vertex(0),
        Err(GraphError::IndexOutOfBounds { .. })
    ));
    assert!(matches!(
        g.get_vertex(5),
        Err(GraphError::IndexOutOfBounds { .. })
    ));
}

#[test]
fn test_total_population_ignores_shelters() {
    let mut g = small_town();
    assert_eq!(g.total_population_to_evacuate(), 17);

    // A shelter's stored count never contributes.
    g.vertex_mut(2).unwrap().population_count = 1000;
    assert_eq!(g.total_population_to_evacuate(), 17);

    g.vertex_mut(3).unwrap().kind = VertexKind::Shelter;
    assert_eq!(g.total_population_to_evacuate(), 10);
    assert_eq!(g.shelters().count(), 3);
    assert_eq!(g.population_locations().count(), 1);
}

#[test]
fn test_connected_vertices_agree() {
    let g = small_town();
    for v in g.vertices() {
        let by_scan = g.connected_vertices(v.index);
        let by_incident = v.connected_vertices(g.edges());
        assert_eq!(by_scan, by_incident);
    }
    assert_eq!(g.connected_vertices(1), vec![2, 3]);
    assert_eq!(g.connected_vertices(2), vec![1, 3]);
    assert!(g.connected_vertices(4).is_empty());
}

#[test]
fn test_neighbours_with_weights() {
    let g = small_town();
    assert_eq!(g.neighbours_with_weights(3).unwrap(), vec![(2, 3), (1, 8)]);
    assert!(g.neighbours_with_weights(10).is_err());
}

#[test]
fn test_block_edge_by_label() {
    let mut g = small_town();
    g.block_edge("E3").unwrap();
    assert!(g.edge_from_label("E3").unwrap().is_blocked);
    assert_eq!(g.blocked_count(), 1);
    assert!(g.block_edge("E7").is_err());

    g.edge_mut(0).unwrap().block();
    assert_eq!(g.blocked_count(), 2);
}

#[test]
fn test_builder_rejects_unknown_vertex() {
    let mut b = GraphBuilder::new();
    b.add_shelter(0.0);
    b.link(1, 2, 1);
    assert!(matches!(
        b.build(),
        Err(GraphError::IndexOutOfBounds { index: 2, .. })
    ));
}

// ==================== Display Tests ====================

#[test]
fn test_display_rendering() {
    let mut b = GraphBuilder::new();
    let v1 = b.add_population_location(0.1, 5);
    let v2 = b.add_shelter(0.0);
    let v3 = b.add_population_location(0.25, 0);
    b.link(v1, v2, 10).link(v2, v3, 2);
    let g = b.build().unwrap();

    assert_eq!(
        g.to_string(),
        "V1(P 0.1, P5), V2(P 0.0, S), V3(P 0.25, P0)\nE1: V1 -10- V2\nE2: V2 -2- V3"
    );
}

#[test]
fn test_display_empty_graph() {
    assert_eq!(RoadGraph::new().to_string(), "\n");
}
