use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lazy_sssp::data_structures::PriorityQueue;
use lazy_sssp::graph::generators;
use lazy_sssp::{Dijkstra, ShortestPathAlgorithm};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn bench_priority_queue(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(1);
    let priorities: Vec<i64> = (0..10_000).map(|_| rng.gen_range(0..1_000_000)).collect();

    c.bench_function("priority_queue_fill_and_drain_10k", |b| {
        b.iter(|| {
            let mut queue = PriorityQueue::with_capacity(priorities.len());
            for (payload, &priority) in priorities.iter().enumerate() {
                queue.insert(payload, priority).unwrap();
            }
            let mut last = i64::MIN;
            while let Some((_, priority)) = queue.pop() {
                last = black_box(priority.max(last));
            }
            last
        })
    });
}

fn bench_dijkstra(c: &mut Criterion) {
    let mut group = c.benchmark_group("dijkstra_random");
    for &n in &[1_000usize, 10_000, 50_000] {
        let graph = generators::generate_random(n, 4.0, 100, n as u64).unwrap();
        let dijkstra = Dijkstra::new();
        group.bench_with_input(BenchmarkId::from_parameter(n), &graph, |b, graph| {
            b.iter(|| dijkstra.compute_shortest_paths(black_box(graph), 0).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_priority_queue, bench_dijkstra);
criterion_main!(benches);
