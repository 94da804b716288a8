//! Benchmarks for the per-frame soft body buffer rebuild

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use phys_bridge::bodies::SoftBody;
use phys_bridge::math::Vector3;
use phys_bridge::{BridgeConfig, CollisionObject, NormalMerge};

/// Square cloth of `n` by `n` nodes, two faces per cell
fn cloth(n: usize) -> SoftBody {
    let mut nodes = Vec::with_capacity(n * n);
    for row in 0..n {
        for column in 0..n {
            nodes.push(Vector3::new(column as f32, 0.0, row as f32));
        }
    }

    let mut indices = Vec::new();
    for row in 0..n - 1 {
        for column in 0..n - 1 {
            let i = (row * n + column) as u32;
            let n = n as u32;
            indices.extend_from_slice(&[i, i + n, i + 1, i + 1, i + n, i + n + 1]);
        }
    }

    SoftBody::from_tri_mesh(&nodes, &indices).expect("cloth indices are in range")
}

fn bench_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("soft_body_update");

    for (name, merge) in [("position", NormalMerge::Position), ("shared_node", NormalMerge::SharedNode)] {
        for size in [8usize, 16, 32].iter() {
            let config = BridgeConfig {
                normal_merge: merge,
                ..BridgeConfig::default()
            };
            let mut object = CollisionObject::with_config(config);
            object.set_soft_body(cloth(*size));

            group.bench_with_input(BenchmarkId::new(name, size), size, |b, _| {
                b.iter(|| {
                    object.update();
                    black_box(object.get_normals().len())
                });
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_update);
criterion_main!(benches);
