use algos_approx::cs::approx::{greedy_degree_vertex_cover, two_approx_vertex_cover};
use algos_approx::cs::graph::generate_random_graph;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_vertex_cover(c: &mut Criterion) {
    let mut group = c.benchmark_group("vertex_cover");

    for &n in &[50usize, 100, 200] {
        let graph = generate_random_graph(n, 0.1, 42).expect("valid density");

        group.bench_with_input(BenchmarkId::new("two_approx", n), &graph, |b, g| {
            b.iter(|| two_approx_vertex_cover(black_box(g)))
        });
        group.bench_with_input(BenchmarkId::new("greedy_degree", n), &graph, |b, g| {
            b.iter(|| greedy_degree_vertex_cover(black_box(g)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_vertex_cover);
criterion_main!(benches);
