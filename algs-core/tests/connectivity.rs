//! End-to-end connectivity scenarios across the graph, search, and
//! union-find types.

use std::collections::BTreeSet;

use algs_core::{DepthFirstSearch, DisjointSet, Graph, GraphError, TraversalStrategy};
use algs_test_support::fixtures::{
    TINY_G_EDGES, TINY_G_VERTICES, TINY_UF_ELEMENTS, TINY_UF_PAIRS,
};
use rstest::{fixture, rstest};

type TestResult = Result<(), Box<dyn std::error::Error>>;

#[fixture]
fn tiny_g() -> Graph {
    match Graph::from_edges(TINY_G_VERTICES, TINY_G_EDGES.iter().copied()) {
        Ok(graph) => graph,
        Err(err) => panic!("tinyG must load: {err}"),
    }
}

#[rstest]
fn search_and_union_find_agree_on_tiny_g(tiny_g: Graph) -> TestResult {
    let mut sets = DisjointSet::new(tiny_g.vertex_count());
    for (v, w) in tiny_g.edges() {
        sets.union(v, w)?;
    }
    assert_eq!(sets.count(), 3);

    for source in 0..tiny_g.vertex_count() {
        let search = DepthFirstSearch::new(&tiny_g, source)?;
        for v in 0..tiny_g.vertex_count() {
            assert_eq!(search.is_marked(v)?, sets.connected(source, v)?);
        }
        assert_eq!(search.count(), sets.component_size(source)?);
    }
    Ok(())
}

#[rstest]
fn bridging_edge_joins_components(mut tiny_g: Graph) -> TestResult {
    let before = DepthFirstSearch::new(&tiny_g, 8)?;
    assert_eq!(before.reachable_set(), BTreeSet::from([7, 8]));

    assert!(tiny_g.add_edge(8, 9)?);
    let after = DepthFirstSearch::with_strategy(&tiny_g, 8, TraversalStrategy::Iterative)?;
    assert_eq!(after.reachable_set(), BTreeSet::from([7, 8, 9, 10, 11, 12]));
    assert!(!before.is_marked(9)?);

    assert!(tiny_g.delete_edge(9, 8)?);
    assert_eq!(tiny_g.edge_count(), 13);
    let restored = DepthFirstSearch::new(&tiny_g, 8)?;
    assert_eq!(restored, before);
    Ok(())
}

#[rstest]
fn tiny_uf_stream_merges_eight_pairs() -> TestResult {
    let mut sets = DisjointSet::new(TINY_UF_ELEMENTS);
    let mut merged = Vec::new();
    for &(p, q) in TINY_UF_PAIRS {
        if sets.union(p, q)? {
            merged.push((p, q));
        }
    }
    assert_eq!(
        merged,
        [
            (4, 3),
            (3, 8),
            (6, 5),
            (9, 4),
            (2, 1),
            (5, 0),
            (7, 2),
            (6, 1)
        ]
    );
    assert_eq!(sets.count(), 2);
    assert!(sets.connected(3, 9)?);
    assert!(!sets.connected(0, 9)?);
    Ok(())
}

#[rstest]
fn out_of_range_source_reports_vertex(tiny_g: Graph) {
    let err = DepthFirstSearch::new(&tiny_g, 42).expect_err("vertex 42 does not exist");
    assert_eq!(
        err,
        GraphError::VertexOutOfRange {
            vertex: 42,
            vertex_count: 13
        }
    );
}
