use criterion::{Criterion, criterion_group, criterion_main};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;

use rucksack::entities::{Instance, Item};
use rucksack::probs::kp01;
use rucksack::probs::ukp;

const N_ITEMS: usize = 250;

/// Instance with high density variance: favourable for branch & bound.
fn spread_instance(seed: u64) -> Instance {
    let mut rng = SmallRng::seed_from_u64(seed);
    let items: Vec<Item> = (0..N_ITEMS)
        .map(|_| {
            Item::new(
                rng.random_range(1..=1_000),
                rng.random_range(1..=1_000_000),
            )
        })
        .collect();
    let capacity = items.iter().map(|item| item.weight).sum::<u64>() / 2;
    Instance::new(items, capacity).unwrap()
}

fn kp01_bench(c: &mut Criterion) {
    let instance = spread_instance(0);

    c.bench_function("kp01_dp", |b| {
        b.iter(|| kp01::solvers::solve_dp(black_box(&instance)))
    });
    c.bench_function("kp01_bnb", |b| {
        b.iter(|| kp01::solvers::solve_bnb(black_box(&instance)))
    });
}

fn ukp_bench(c: &mut Criterion) {
    let instance = spread_instance(1);

    c.bench_function("ukp_dp", |b| {
        b.iter(|| ukp::solvers::solve_dp(black_box(&instance)).unwrap())
    });
    c.bench_function("ukp_bnb", |b| {
        b.iter(|| ukp::solvers::solve_bnb(black_box(&instance)).unwrap())
    });
}

criterion_group!(benches, kp01_bench, ukp_bench);
criterion_main!(benches);
