use ordered_float::OrderedFloat;
use shortest_paths::{
    AdjacencyGraph, Dijkstra, Error, Graph, MutableGraph, ShortestPathAlgorithm,
    ShortestPathTree,
};
use std::collections::HashMap;

fn example_graph() -> AdjacencyGraph<&'static str, OrderedFloat<f64>> {
    let mut graph = AdjacencyGraph::new();

    graph.add_edge("s", "a", OrderedFloat(15.0));
    graph.add_edge("s", "b", OrderedFloat(6.0));
    graph.add_edge("s", "c", OrderedFloat(2.0));
    graph.add_edge("b", "a", OrderedFloat(1.0));
    graph.add_edge("b", "e", OrderedFloat(2.0));
    graph.add_edge("c", "d", OrderedFloat(8.0));
    graph.add_edge("c", "e", OrderedFloat(8.0));
    graph.add_edge("d", "a", OrderedFloat(3.0));
    graph.add_edge("e", "d", OrderedFloat(1.0));

    graph
}

#[test]
fn test_example_path_to_d() {
    let graph = example_graph();
    let tree = Dijkstra::new().compute_shortest_paths(&graph, "s").unwrap();

    let path = tree.path_to(&"d").unwrap().expect("d is reachable");

    assert_eq!(path.nodes, vec!["s", "b", "e", "d"]);
    assert_eq!(path.total, OrderedFloat(9.0));
}

#[test]
fn test_every_reconstructed_path_is_valid() {
    let graph = example_graph();
    let tree = Dijkstra::new().compute_shortest_paths(&graph, "s").unwrap();

    for target in tree.distances.keys() {
        let path = tree.path_to(target).unwrap().expect("settled nodes are reachable");

        assert_eq!(path.nodes.first(), Some(&"s"), "path must start at the source");
        assert_eq!(path.nodes.last(), Some(target), "path must end at the target");

        // Consecutive pairs must be graph edges and their weights must sum
        // to the reported distance
        let mut total = OrderedFloat(0.0);
        for pair in path.nodes.windows(2) {
            let weight = graph
                .edge_weight(&pair[0], &pair[1])
                .unwrap_or_else(|| panic!("{} -> {} is not a graph edge", pair[0], pair[1]));
            total += weight;
        }

        assert_eq!(total, path.total);
        assert_eq!(Some(path.total), tree.distance(target));
    }
}

#[test]
fn test_path_to_source_is_singleton() {
    let graph = example_graph();
    let tree = Dijkstra::new().compute_shortest_paths(&graph, "s").unwrap();

    let path = tree.path_to(&"s").unwrap().expect("source is reachable");

    assert_eq!(path.nodes, vec!["s"]);
    assert_eq!(path.total, OrderedFloat(0.0));
}

#[test]
fn test_unreachable_target_is_no_path_not_an_error() {
    let mut graph = example_graph();
    graph.add_node("z");

    let tree = Dijkstra::new().compute_shortest_paths(&graph, "s").unwrap();

    assert_eq!(tree.path_to(&"z").unwrap(), None);
}

#[test]
fn test_cyclic_predecessor_map_is_detected() {
    // A predecessor map no correct run can produce: a and b parent each other
    let tree: ShortestPathTree<&str, OrderedFloat<f64>> = ShortestPathTree {
        distances: HashMap::from([("a", OrderedFloat(1.0)), ("b", OrderedFloat(2.0))]),
        predecessors: HashMap::from([("a", Some("b")), ("b", Some("a"))]),
        source: "s",
    };

    assert!(matches!(tree.path_to(&"a"), Err(Error::CorruptTree(_))));
}

#[test]
fn test_settled_node_missing_from_predecessors_is_detected() {
    let tree: ShortestPathTree<&str, OrderedFloat<f64>> = ShortestPathTree {
        distances: HashMap::from([("s", OrderedFloat(0.0)), ("x", OrderedFloat(3.0))]),
        predecessors: HashMap::from([("s", None)]),
        source: "s",
    };

    assert!(matches!(tree.path_to(&"x"), Err(Error::CorruptTree(_))));
}
