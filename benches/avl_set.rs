use balanced_collections::avl_tree::AvlSet;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeSet;

const NUM_OF_OPERATIONS: usize = 1000;

fn random_keys() -> Vec<u32> {
    let mut rng = StdRng::seed_from_u64(1);
    (0..NUM_OF_OPERATIONS).map(|_| rng.gen()).collect()
}

fn bench_avl_set_insert(c: &mut Criterion) {
    let keys = random_keys();
    c.bench_function("bench avl set insert", |b| {
        b.iter(|| {
            let mut set = AvlSet::new();
            for key in &keys {
                set.insert(*key);
            }
            set
        })
    });
}

fn bench_avl_set_contains(c: &mut Criterion) {
    let keys = random_keys();
    let set: AvlSet<u32> = keys.iter().copied().collect();
    c.bench_function("bench avl set contains", |b| {
        b.iter(|| {
            for key in &keys {
                black_box(set.contains(key));
            }
        })
    });
}

fn bench_avl_set_remove(c: &mut Criterion) {
    let keys = random_keys();
    let set: AvlSet<u32> = keys.iter().copied().collect();
    c.bench_function("bench avl set remove", |b| {
        b.iter(|| {
            let mut set = set.clone();
            for key in &keys {
                set.remove(key);
            }
            set
        })
    });
}

fn bench_btree_set_insert(c: &mut Criterion) {
    let keys = random_keys();
    c.bench_function("bench btree set insert", |b| {
        b.iter(|| {
            let mut set = BTreeSet::new();
            for key in &keys {
                set.insert(*key);
            }
            set
        })
    });
}

fn bench_btree_set_contains(c: &mut Criterion) {
    let keys = random_keys();
    let set: BTreeSet<u32> = keys.iter().copied().collect();
    c.bench_function("bench btree set contains", |b| {
        b.iter(|| {
            for key in &keys {
                black_box(set.contains(key));
            }
        })
    });
}

criterion_group!(
    benches,
    bench_avl_set_insert,
    bench_avl_set_contains,
    bench_avl_set_remove,
    bench_btree_set_insert,
    bench_btree_set_contains,
);
criterion_main!(benches);
