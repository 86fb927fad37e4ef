//! Unit and property tests for the adjacency-set graph.

use std::collections::{BTreeSet, HashSet};

use algs_test_support::fixtures::{TINY_G_EDGES, TINY_G_VERTICES};
use proptest::prelude::*;
use rstest::{fixture, rstest};

use super::Graph;
use crate::error::{GraphError, GraphErrorCode};

#[fixture]
fn tiny_g() -> Graph {
    Graph::from_edges(TINY_G_VERTICES, TINY_G_EDGES.iter().copied())
        .expect("tinyG edges are in range")
}

#[rstest]
fn new_graph_has_isolated_vertices() {
    let graph = Graph::new(4);
    assert_eq!(graph.vertex_count(), 4);
    assert_eq!(graph.edge_count(), 0);
    for v in 0..4 {
        assert_eq!(graph.degree(v).expect("vertex in range"), 0);
    }
}

#[rstest]
fn try_new_matches_new() {
    assert_eq!(Graph::try_new(5), Ok(Graph::new(5)));
}

#[rstest]
#[case::overflowing_header(usize::MAX)]
#[case::beyond_address_space(usize::MAX / 2)]
fn try_new_reports_unallocatable_sizes(#[case] vertex_count: usize) {
    let err = Graph::try_new(vertex_count).expect_err("allocation must fail");
    assert!(matches!(
        err,
        GraphError::AllocationFailed { vertex_count: requested, .. } if requested == vertex_count
    ));
    assert_eq!(err.code(), GraphErrorCode::AllocationFailed);
    assert_eq!(err.code().as_str(), "GRAPH_ALLOCATION_FAILED");
}

#[rstest]
fn from_edges_reports_unallocatable_sizes() {
    let err = Graph::from_edges(usize::MAX, [(0, 1)]).expect_err("allocation must fail");
    assert_eq!(err.code(), GraphErrorCode::AllocationFailed);
}

#[rstest]
fn empty_graph_rejects_every_vertex() {
    let graph = Graph::new(0);
    assert!(graph.is_empty());
    assert_eq!(graph.max_degree(), 0);
    let err = graph.degree(0).expect_err("no vertices exist");
    assert_eq!(
        err,
        GraphError::VertexOutOfRange {
            vertex: 0,
            vertex_count: 0
        }
    );
}

#[rstest]
fn add_edge_is_symmetric(mut tiny_g: Graph) {
    assert!(tiny_g.add_edge(1, 7).expect("vertices in range"));
    assert!(tiny_g.has_edge(1, 7).expect("vertices in range"));
    assert!(tiny_g.has_edge(7, 1).expect("vertices in range"));
    assert!(tiny_g.adjacent(1).expect("vertex 1").contains(&7));
    assert!(tiny_g.adjacent(7).expect("vertex 7").contains(&1));
}

#[rstest]
fn duplicate_edges_are_counted_once() {
    let mut graph = Graph::new(3);
    assert!(graph.add_edge(0, 1).expect("in range"));
    assert!(!graph.add_edge(0, 1).expect("in range"));
    assert!(!graph.add_edge(1, 0).expect("in range"));
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.degree(0).expect("in range"), 1);
}

#[rstest]
fn self_loop_is_stored_once() {
    let mut graph = Graph::new(2);
    assert!(graph.add_edge(1, 1).expect("in range"));
    assert!(!graph.add_edge(1, 1).expect("in range"));
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.degree(1).expect("in range"), 1);
    assert_eq!(graph.self_loop_count(), 1);
    assert!(graph.has_edge(1, 1).expect("in range"));
}

#[rstest]
fn delete_edge_removes_both_directions(mut tiny_g: Graph) {
    let before = tiny_g.edge_count();
    assert!(tiny_g.delete_edge(5, 0).expect("in range"));
    assert!(!tiny_g.has_edge(0, 5).expect("in range"));
    assert!(!tiny_g.has_edge(5, 0).expect("in range"));
    assert_eq!(tiny_g.edge_count(), before - 1);
}

#[rstest]
fn delete_missing_edge_is_noop(mut tiny_g: Graph) {
    let before = tiny_g.clone();
    assert!(!tiny_g.delete_edge(1, 12).expect("in range"));
    assert_eq!(tiny_g, before);
}

#[rstest]
#[case::add_first(0, 13)]
#[case::add_second(13, 0)]
#[case::far_out(usize::MAX, 2)]
fn out_of_range_endpoints_are_rejected(mut tiny_g: Graph, #[case] v: usize, #[case] w: usize) {
    let expected = GraphError::VertexOutOfRange {
        vertex: v.max(w),
        vertex_count: TINY_G_VERTICES,
    };
    assert_eq!(tiny_g.add_edge(v, w), Err(expected.clone()));
    assert_eq!(tiny_g.delete_edge(v, w), Err(expected.clone()));
    assert_eq!(tiny_g.has_edge(v, w), Err(expected));
    assert_eq!(tiny_g.edge_count(), TINY_G_EDGES.len());
}

#[rstest]
fn out_of_range_error_exposes_code(tiny_g: Graph) {
    let err = tiny_g.adjacent(42).expect_err("vertex 42 is out of range");
    assert_eq!(err.code(), GraphErrorCode::VertexOutOfRange);
    assert_eq!(err.code().as_str(), "GRAPH_VERTEX_OUT_OF_RANGE");
    assert_eq!(err.to_string(), "vertex 42 is not between 0 and 13");
}

#[rstest]
#[case(0, &[1, 2, 5, 6])]
#[case(4, &[3, 5, 6])]
#[case(7, &[8])]
#[case(12, &[9, 11])]
fn tiny_g_adjacency(tiny_g: Graph, #[case] vertex: usize, #[case] expected: &[usize]) {
    let adjacent = tiny_g.adjacent(vertex).expect("vertex in range");
    let expected: HashSet<usize> = expected.iter().copied().collect();
    assert_eq!(adjacent, &expected);
    assert_eq!(tiny_g.degree(vertex).expect("vertex in range"), expected.len());
}

#[rstest]
fn tiny_g_summary(tiny_g: Graph) {
    assert_eq!(tiny_g.vertex_count(), 13);
    assert_eq!(tiny_g.edge_count(), 13);
    assert_eq!(tiny_g.max_degree(), 4);
    assert_eq!(tiny_g.self_loop_count(), 0);
}

#[rstest]
fn display_lists_sorted_neighbours() {
    let graph = Graph::from_edges(3, [(0, 2), (0, 1), (2, 2)]).expect("in range");
    let rendered = graph.to_string();
    assert_eq!(
        rendered,
        "Undirected graph with 3 vertices and 3 edges as below:\n\
         0 : 1 2 \n\
         1 : 0 \n\
         2 : 0 2 \n"
    );
}

fn edge_list_strategy() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (1usize..24).prop_flat_map(|vertex_count| {
        let edge = (0..vertex_count, 0..vertex_count);
        (
            Just(vertex_count),
            proptest::collection::vec(edge, 0..64),
        )
    })
}

fn canonical(edges: &[(usize, usize)]) -> BTreeSet<(usize, usize)> {
    edges.iter().map(|&(v, w)| (v.min(w), v.max(w))).collect()
}

proptest! {
    #[test]
    fn adjacency_stays_symmetric((vertex_count, edges) in edge_list_strategy()) {
        let graph = Graph::from_edges(vertex_count, edges.iter().copied())
            .expect("strategy only yields in-range edges");
        for v in 0..vertex_count {
            let neighbours = graph.adjacent(v).expect("vertex in range");
            prop_assert_eq!(graph.degree(v).expect("vertex in range"), neighbours.len());
            for &w in neighbours {
                prop_assert!(graph.adjacent(w).expect("neighbour in range").contains(&v));
            }
        }
    }

    #[test]
    fn edges_round_trip((vertex_count, edges) in edge_list_strategy()) {
        let graph = Graph::from_edges(vertex_count, edges.iter().copied())
            .expect("strategy only yields in-range edges");
        let expected = canonical(&edges);
        let derived: BTreeSet<(usize, usize)> = graph.edges().collect();
        prop_assert_eq!(graph.edge_count(), expected.len());
        prop_assert_eq!(derived, expected);
    }

    #[test]
    fn delete_always_clears_edge(
        (vertex_count, edges) in edge_list_strategy(),
        seed in any::<(usize, usize)>(),
    ) {
        let mut graph = Graph::from_edges(vertex_count, edges.iter().copied())
            .expect("strategy only yields in-range edges");
        let (v, w) = (seed.0 % vertex_count, seed.1 % vertex_count);
        let present = graph.has_edge(v, w).expect("in range");
        let before = graph.edge_count();
        prop_assert_eq!(graph.delete_edge(v, w).expect("in range"), present);
        prop_assert!(!graph.has_edge(v, w).expect("in range"));
        prop_assert!(!graph.has_edge(w, v).expect("in range"));
        prop_assert_eq!(graph.edge_count(), before - usize::from(present));
    }
}
