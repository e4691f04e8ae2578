use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use shortest_paths::graph::generators::random_digraph;
use shortest_paths::{Dijkstra, ShortestPathAlgorithm};

fn bench_dijkstra(c: &mut Criterion) {
    let mut group = c.benchmark_group("dijkstra");

    for &size in &[1_000usize, 10_000, 50_000] {
        let graph = random_digraph(size, 2.0);

        group.bench_with_input(BenchmarkId::from_parameter(size), &graph, |b, graph| {
            b.iter(|| {
                Dijkstra::new()
                    .compute_shortest_paths(graph, 0)
                    .expect("source 0 exists in generated graph")
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_dijkstra);
criterion_main!(benches);
