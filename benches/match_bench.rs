// match_bench.rs - Matching throughput for representative patterns.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use synpat::ast::{capture, choice, group, lit, opt, regex};
use synpat::prelude::*;

fn fuel_slot_pattern() -> SyntaxPattern {
    SyntaxPattern::compile(vec![
        opt(vec![lit("the ")]),
        lit("fuel slot"),
        opt(vec![lit("s")]),
        opt(vec![lit(" of "), capture("blocks")]),
    ])
    .unwrap()
}

fn branchy_pattern() -> SyntaxPattern {
    SyntaxPattern::compile(vec![
        group(vec![choice(vec![
            vec![lit("give")],
            vec![lit("hand")],
            vec![lit("offer")],
        ])]),
        lit(" "),
        capture("items"),
        opt(vec![lit(" to "), capture("players")]),
        opt(vec![lit(" within "), regex(r"\d+"), lit(" blocks")]),
    ])
    .unwrap()
}

fn bench_matching(c: &mut Criterion) {
    let fuel = fuel_slot_pattern();
    c.bench_function("fuel_slot_hit", |b| {
        b.iter(|| fuel.matches(black_box("the fuel slots of the blast furnace")))
    });
    c.bench_function("fuel_slot_miss", |b| {
        b.iter(|| fuel.matches(black_box("the water slot of the furnace")))
    });

    let branchy = branchy_pattern();
    c.bench_function("branchy_backtracking", |b| {
        b.iter(|| branchy.matches(black_box("offer iron ingots to the nearest player within 10 blocks")))
    });
}

fn bench_enumeration(c: &mut Criterion) {
    let fuel = fuel_slot_pattern();
    c.bench_function("fuel_slot_combinations", |b| {
        b.iter(|| fuel.all_combinations(black_box(true)))
    });
}

criterion_group!(benches, bench_matching, bench_enumeration);
criterion_main!(benches);
