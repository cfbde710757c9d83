//! Criterion micro-benchmarks for the solution codec, replay and state
//! hashing.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use wrapbot_bench::reference_profile;
use wrapbot_core::Solution;
use wrapbot_engine::{SimConfig, State};
use wrapbot_replay::{parse, render, replay_solution, state_hash};
use wrapbot_strategy::{Follow, Greedy, Routing, Strategy};

fn solved() -> (State, State, Solution) {
    let map = reference_profile(42).expect("reference profile builds");
    let initial = State::from_map(&map, SimConfig::default()).expect("reference profile is valid");
    let mut state = initial.clone();
    let mut solution = Solution::new();
    Greedy::new(Routing::Plain, Follow::Unordered)
        .run(&mut state, &mut solution)
        .expect("greedy completes");
    (initial, state, solution)
}

fn bench_render(c: &mut Criterion) {
    let (_, _, solution) = solved();
    c.bench_function("render_reference_solution", |b| {
        b.iter(|| black_box(render(&solution)));
    });
}

fn bench_parse(c: &mut Criterion) {
    let (_, _, solution) = solved();
    let text = render(&solution);
    c.bench_function("parse_reference_solution", |b| {
        b.iter(|| black_box(parse(&text).expect("rendered text parses")));
    });
}

fn bench_replay(c: &mut Criterion) {
    let (initial, _, solution) = solved();
    c.bench_function("replay_reference_solution", |b| {
        b.iter(|| black_box(replay_solution(&initial, &solution).expect("replays")));
    });
}

fn bench_state_hash(c: &mut Criterion) {
    let (_, state, _) = solved();
    c.bench_function("state_hash_64x64", |b| {
        b.iter(|| black_box(state_hash(&state)));
    });
}

criterion_group!(
    benches,
    bench_render,
    bench_parse,
    bench_replay,
    bench_state_hash
);
criterion_main!(benches);
