use ordered_float::OrderedFloat;
use shortest_paths::{AdjacencyGraph, Dijkstra, Graph, MutableGraph, ShortestPathAlgorithm};

fn build_graph() -> AdjacencyGraph<&'static str, OrderedFloat<f64>> {
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

fn run() -> shortest_paths::Result<()> {
    let graph = build_graph();
    let source = "s";
    let target = "d";

    println!(
        "Graph has {} nodes and {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    let tree = Dijkstra::new().compute_shortest_paths(&graph, source)?;

    let mut settled: Vec<&'static str> = tree.distances.keys().copied().collect();
    settled.sort_unstable();

    println!("\nShortest distances from {source}:");
    for node in &settled {
        if let Some(distance) = tree.distance(node) {
            println!("  {node}: {:.1}", distance.into_inner());
        }
    }

    println!("\nShortest-path tree (node <- parent):");
    for node in &settled {
        match tree.predecessor(node) {
            Some(parent) => println!("  {node} <- {parent}"),
            None => println!("  {node} <- (source)"),
        }
    }

    match tree.path_to(&target)? {
        Some(path) => {
            println!("\nPath {source} -> {target}: {:?}", path.nodes);
            println!("Distance: {:.1}", path.total.into_inner());
        }
        None => println!("\nNo path from {source} to {target}"),
    }

    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
