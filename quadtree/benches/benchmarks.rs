use criterion::{black_box, criterion_group, criterion_main, Criterion};
use quadtree::quadtree::{Leaf, QuadTree};
use quadtree::shapes::Rectangle;
use rand::prelude::*;

const WORLD: f32 = 1000.0;
const POPULATION: u32 = 2000;

fn world() -> Rectangle {
    Rectangle::from_extent(0.0, 0.0, WORLD, WORLD)
}

fn random_leaves(rng: &mut StdRng) -> Vec<Leaf> {
    (0..POPULATION)
        .map(|owner| {
            Leaf::new(
                owner,
                rng.gen_range(0.0..WORLD),
                rng.gen_range(0.0..WORLD),
                rng.gen_range(1.0..8.0),
            )
        })
        .collect()
}

fn populated(leaves: &[Leaf]) -> QuadTree {
    let mut quadtree = QuadTree::new(world()).unwrap();
    for leaf in leaves {
        quadtree.insert(leaf).unwrap();
    }
    quadtree
}

fn insert_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(1);
    let leaves = random_leaves(&mut rng);

    c.bench_function("quadtree_insert", |b| {
        b.iter(|| black_box(populated(&leaves)))
    });
}

fn remove_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(2);
    let leaves = random_leaves(&mut rng);

    c.bench_function("quadtree_remove", |b| {
        b.iter_batched(
            || populated(&leaves),
            |mut quadtree| {
                for leaf in &leaves {
                    quadtree.remove(black_box(leaf.owner()));
                }
                quadtree
            },
            criterion::BatchSize::LargeInput,
        )
    });
}

fn update_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(3);
    let mut leaves = random_leaves(&mut rng);
    let mut quadtree = populated(&leaves);

    // Small per-frame jitter: the common case the cheap update path serves.
    c.bench_function("quadtree_update", |b| {
        b.iter(|| {
            for leaf in leaves.iter_mut() {
                let x = (leaf.x() + rng.gen_range(-1.0..1.0)).clamp(0.0, WORLD);
                let y = (leaf.y() + rng.gen_range(-1.0..1.0)).clamp(0.0, WORLD);
                leaf.set_position(x, y);
                quadtree.update(black_box(leaf)).unwrap();
            }
        })
    });
}

fn query_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(4);
    let leaves = random_leaves(&mut rng);
    let quadtree = populated(&leaves);
    let mut collisions = Vec::new();

    c.bench_function("quadtree_query", |b| {
        b.iter(|| {
            for leaf in &leaves {
                collisions.clear();
                quadtree.query_into(black_box(leaf), &mut collisions).unwrap();
            }
        })
    });
}

fn brute_force_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(4);
    let leaves = random_leaves(&mut rng);
    let mut collisions = Vec::new();

    c.bench_function("brute_force_query", |b| {
        b.iter(|| {
            for leaf in &leaves {
                collisions.clear();
                let probe = leaf.circle();
                collisions.extend(
                    leaves
                        .iter()
                        .filter(|other| other.owner() != leaf.owner())
                        .filter(|other| {
                            quadtree::collision_detection::circle_circle(&probe, &other.circle())
                        })
                        .map(|other| other.owner()),
                );
                black_box(&collisions);
            }
        })
    });
}

criterion_group!(
    quadtree_benchmarks,
    insert_benchmark,
    remove_benchmark,
    update_benchmark,
    query_benchmark,
    brute_force_benchmark
);
criterion_main!(quadtree_benchmarks);
