// Copyright 2025 the Declutter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use declutter_tree::{BoundingVolume, Octree, Orb2D, Orb3D, Quadtree, TreeConfig};
use kurbo::Point;

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

fn gen_grid_circles(n: usize, spacing: f64, radius: f64) -> Vec<Orb2D> {
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            out.push(Orb2D::new(x as f64 * spacing, y as f64 * spacing, radius));
        }
    }
    out
}

fn gen_random_spheres(count: usize, extent: f64) -> Vec<Orb3D> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    (0..count)
        .map(|_| {
            Orb3D::new(
                rng.next_f64() * extent,
                rng.next_f64() * extent,
                rng.next_f64() * extent,
                0.5 + rng.next_f64(),
            )
        })
        .collect()
}

fn bench_quadtree_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("quadtree");
    for &n in &[32usize, 64, 128] {
        let orbs = gen_grid_circles(n, 3.0, 1.0);
        group.throughput(Throughput::Elements((n * n) as u64));
        group.bench_function(format!("rebuild_grid_n{}", n), |b| {
            let mut tree = Quadtree::new(BoundingVolume::enclosing(&orbs).unwrap());
            b.iter(|| {
                let bounds = tree.rebuild(&orbs);
                black_box((bounds, tree.cell_count()));
            })
        });
    }
    let orbs = gen_grid_circles(64, 3.0, 1.0);
    group.bench_function("first_build_grid_n64", |b| {
        b.iter_batched(
            || Quadtree::new(BoundingVolume::enclosing(&orbs).unwrap()),
            |mut tree| {
                let _ = tree.rebuild(&orbs);
                black_box(tree.len());
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_octree_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("octree");
    for &count in &[1024usize, 8192] {
        let orbs = gen_random_spheres(count, 200.0);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_function(format!("rebuild_random_{}", count), |b| {
            let mut tree = Octree::new(BoundingVolume::enclosing(&orbs).unwrap());
            b.iter(|| {
                let _ = tree.rebuild(&orbs);
                black_box(tree.depth());
            })
        });
    }
    group.finish();
}

fn bench_leaf_capacity(c: &mut Criterion) {
    let mut group = c.benchmark_group("quadtree_leaf_capacity");
    let orbs = gen_grid_circles(64, 1.5, 1.0);
    for &leaf_capacity in &[4usize, 8, 32] {
        let config = TreeConfig {
            leaf_capacity,
            ..TreeConfig::default()
        };
        group.bench_function(format!("one_pass_cap{}", leaf_capacity), |b| {
            b.iter_batched(
                || orbs.clone(),
                |mut orbs| {
                    let mut tree =
                        Quadtree::with_config(BoundingVolume::enclosing(&orbs).unwrap(), config);
                    let _ = tree.rebuild(&orbs);
                    let mut total = 0;
                    for slot in 0..orbs.len() {
                        total += tree.uncollide(&mut orbs, slot, 0.5);
                    }
                    black_box(total);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_query_heavy(c: &mut Criterion) {
    let mut group = c.benchmark_group("quadtree_query_heavy");
    let orbs = gen_grid_circles(96, 3.0, 1.0);
    let mut tree = Quadtree::new(BoundingVolume::enclosing(&orbs).unwrap());
    let _ = tree.rebuild(&orbs);
    group.bench_function("many_small_queries", |b| {
        let mut rng = Rng::new(0xBADC_F00D_1234_5678);
        let mut hits = Vec::new();
        b.iter(|| {
            let mut total = 0;
            for _ in 0..256 {
                let p = Point::new(rng.next_f64() * 288.0, rng.next_f64() * 288.0);
                hits.clear();
                tree.query(&BoundingVolume::around(p, 4.0), &mut hits);
                total += hits.len();
            }
            black_box(total);
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_quadtree_build,
    bench_octree_build,
    bench_leaf_capacity,
    bench_query_heavy
);
criterion_main!(benches);
