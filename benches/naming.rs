use criterion::{black_box, criterion_group, criterion_main, Criterion};

use nomencrab::naming::multiplier;
use nomencrab::{Benzene, Chain, Substituent};

const H: Substituent = Substituent::HYDROGEN;

fn ethanol() -> Chain {
    Chain::build(&[&[H, H, H], &[H, H, Substituent::ALCOHOL]]).unwrap()
}

/// A long chain carrying two branches that get absorbed into the backbone.
fn branched() -> Chain {
    let pentyl = Substituent::radical(5, false).unwrap();
    let isobutyl = Substituent::radical(4, true).unwrap();
    let end = [H, H, H];
    let middle = [H, H];
    let with_pentyl = [H, pentyl];
    let with_isobutyl = [H, isobutyl];

    let mut spec: Vec<&[Substituent]> = Vec::new();
    spec.push(&end);
    for _ in 0..18 {
        spec.push(&middle);
    }
    spec.insert(3, &with_pentyl);
    spec.insert(15, &with_isobutyl);
    spec.push(&end);
    Chain::build(&spec).unwrap()
}

fn functional() -> Chain {
    Chain::build(&[
        &[Substituent::ACID],
        &[H, Substituent::AMINE],
        &[H, H],
        &[Substituent::KETONE],
        &[H, Substituent::CHLORINE],
        &[H],
        &[H],
        &[H, H],
        &[Substituent::AMIDE],
    ])
    .unwrap()
}

fn ring() -> Benzene {
    let mut ring = Benzene::new();
    let subs = [
        Substituent::CHLORINE,
        H,
        Substituent::NITRO,
        H,
        Substituent::METHYL,
        Substituent::BROMINE,
    ];
    for (i, s) in subs.into_iter().enumerate() {
        ring.add_substituent(i, s).unwrap();
    }
    ring
}

fn bench_name(c: &mut Criterion) {
    let ethanol = ethanol();
    let branched = branched();
    let functional = functional();
    let ring = ring();

    let mut group = c.benchmark_group("name");

    group.bench_function("ethanol", |b| {
        b.iter(|| black_box(black_box(ethanol.clone()).name().unwrap()))
    });
    group.bench_function("branched", |b| {
        b.iter(|| black_box(black_box(branched.clone()).name().unwrap()))
    });
    group.bench_function("functional", |b| {
        b.iter(|| black_box(black_box(functional.clone()).name().unwrap()))
    });
    group.bench_function("benzene", |b| {
        b.iter(|| black_box(black_box(ring.clone()).name().unwrap()))
    });

    group.finish();
}

fn bench_formula(c: &mut Criterion) {
    let branched = branched();
    let functional = functional();

    let mut group = c.benchmark_group("formula");

    group.bench_function("condensed", |b| {
        b.iter(|| black_box(black_box(&functional).formula().unwrap()))
    });
    group.bench_function("molecular", |b| {
        b.iter(|| black_box(black_box(&branched).molecular_formula().unwrap()))
    });

    group.finish();
}

fn bench_multiplier(c: &mut Criterion) {
    c.bench_function("multiplier/1..1000", |b| {
        b.iter(|| {
            for n in 1..1000 {
                black_box(multiplier(black_box(n)).unwrap());
            }
        })
    });
}

criterion_group!(benches, bench_name, bench_formula, bench_multiplier);
criterion_main!(benches);
