// Copyright 2025 the Declutter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use declutter_arrange::{
    ArrangeFlags, Dimensions, MemoryGraph, Orb2D, Orb3D, Parameters, Position, declutter, run,
};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

fn gen_clustered_circles(n_clusters: usize, per_cluster: usize, spread: f64) -> Vec<Orb2D> {
    let mut out = Vec::with_capacity(n_clusters * per_cluster);
    let mut rng = Rng::new(0xC1A5_7E55_9999_ABCD);
    let mut centers = Vec::with_capacity(n_clusters);
    for _ in 0..n_clusters {
        centers.push((rng.next_f64() * 2000.0, rng.next_f64() * 2000.0));
    }
    for (cx, cy) in centers {
        for _ in 0..per_cluster {
            let dx = (rng.next_f64() - 0.5) * spread;
            let dy = (rng.next_f64() - 0.5) * spread;
            out.push(Orb2D::new(cx + dx, cy + dy, 2.0 + rng.next_f64() * 4.0));
        }
    }
    out
}

fn gen_random_spheres(count: usize, extent: f64) -> Vec<Orb3D> {
    let mut rng = Rng::new(0xFACE_FEED_CAFE_BABE);
    (0..count)
        .map(|_| {
            Orb3D::new(
                rng.next_f64() * extent,
                rng.next_f64() * extent,
                rng.next_f64() * extent,
                1.0,
            )
        })
        .collect()
}

fn gen_graph(count: usize, extent: f32) -> MemoryGraph {
    let mut rng = Rng::new(0xFEED_BEEF_0BAD_CAFE);
    let mut g = MemoryGraph::new();
    for _ in 0..count {
        let x = rng.next_f64() as f32 * extent;
        let y = rng.next_f64() as f32 * extent;
        let _ = g.add_node(Position::new(x, y, 0.0), Some(1.0));
    }
    g
}

fn bench_declutter_2d(c: &mut Criterion) {
    let mut group = c.benchmark_group("declutter_2d");
    let params = Parameters::default();
    for &per_cluster in &[64usize, 256] {
        let orbs = gen_clustered_circles(16, per_cluster, 40.0);
        group.throughput(Throughput::Elements(orbs.len() as u64));
        group.bench_function(format!("clustered_16x{}", per_cluster), |b| {
            b.iter_batched(
                || orbs.clone(),
                |mut orbs| {
                    let summary = declutter(&mut orbs, &params, (), ()).unwrap();
                    black_box(summary);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_declutter_3d(c: &mut Criterion) {
    let mut group = c.benchmark_group("declutter_3d");
    let params = Parameters::default()
        .with_dimension(Dimensions::Three)
        .with_min_padding(0.5);
    let orbs = gen_random_spheres(2048, 30.0);
    group.throughput(Throughput::Elements(orbs.len() as u64));
    group.bench_function("random_2048", |b| {
        b.iter_batched(
            || orbs.clone(),
            |mut orbs| {
                let summary = declutter(&mut orbs, &params, (), ()).unwrap();
                black_box(summary);
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_graph_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("graph_run");
    let graph = gen_graph(4096, 150.0);
    let params = Parameters::default()
        .with_flags(ArrangeFlags::MAINTAIN_MEAN | ArrangeFlags::RECORD_PREVIOUS);
    group.bench_function("memory_graph_4096", |b| {
        b.iter_batched(
            || graph.clone(),
            |mut graph| {
                let summary = run(&mut graph, &params, (), ()).unwrap();
                black_box(summary);
            },
            BatchSize::LargeInput,
        )
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_declutter_2d,
    bench_declutter_3d,
    bench_graph_run
);
criterion_main!(benches);
