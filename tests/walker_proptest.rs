use std::convert::Infallible;

use frontier::Walker;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::Bfs;
use proptest::prelude::*;

/// A random directed graph: node count and an edge list that may contain
/// self loops, parallel edges and cycles.
fn graph_strategy() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (1usize..40).prop_flat_map(|n| (Just(n), proptest::collection::vec((0..n, 0..n), 0..n * 3)))
}

fn build(n: usize, edges: &[(usize, usize)]) -> DiGraph<(), ()> {
    let mut graph = DiGraph::with_capacity(n, edges.len());
    for _ in 0..n {
        graph.add_node(());
    }
    for &(from, to) in edges {
        graph.add_edge(NodeIndex::new(from), NodeIndex::new(to), ());
    }
    graph
}

fn walk(graph: &DiGraph<(), ()>, root: usize) -> (Vec<usize>, Walker<usize>) {
    let mut order = Vec::new();
    let mut walker = Walker::with_seeds([root]);
    walker
        .visit_with(|node, enqueue| -> Result<(), Infallible> {
            order.push(node);
            enqueue.extend(graph.neighbors(NodeIndex::new(node)).map(NodeIndex::index));
            Ok(())
        })
        .unwrap();
    (order, walker)
}

proptest! {
    #[test]
    fn walker_visits_each_node_at_most_once((n, edges) in graph_strategy()) {
        let graph = build(n, &edges);
        let (order, walker) = walk(&graph, 0);

        let mut counts = vec![0usize; n];
        for &node in &order {
            counts[node] += 1;
        }
        prop_assert!(counts.iter().all(|&c| c <= 1));
        prop_assert_eq!(order.len(), walker.visited().len());
        prop_assert_eq!(walker.pending(), 0);
    }

    #[test]
    fn walker_matches_petgraph_bfs((n, edges) in graph_strategy()) {
        let graph = build(n, &edges);
        let (order, _) = walk(&graph, 0);

        let mut expected = Vec::new();
        let mut bfs = Bfs::new(&graph, NodeIndex::new(0));
        while let Some(nx) = bfs.next(&graph) {
            expected.push(nx.index());
        }
        prop_assert_eq!(order, expected);
    }

    #[test]
    fn walker_abort_stops_at_failing_node((n, edges) in graph_strategy(), pick in any::<prop::sample::Index>()) {
        let graph = build(n, &edges);
        let (full, _) = walk(&graph, 0);
        let stop = full[pick.index(full.len())];

        let mut order = Vec::new();
        let mut walker = Walker::with_seeds([0usize]);
        let result = walker.visit_with(|node, enqueue| {
            order.push(node);
            if node == stop {
                return Err(node);
            }
            enqueue.extend(graph.neighbors(NodeIndex::new(node)).map(NodeIndex::index));
            Ok(())
        });

        prop_assert_eq!(result.unwrap_err().into_visitor_error(), Some(stop));
        let prefix = full.iter().position(|&x| x == stop).unwrap() + 1;
        prop_assert_eq!(&order[..], &full[..prefix]);
    }
}
