//! Criterion benchmark: whole-arena turns on the default scenario

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use fogline::core::config::ArenaConfig;
use fogline::sim::Arena;

fn bench_arena_turns(c: &mut Criterion) {
    c.bench_function("arena_100_turns_default", |b| {
        b.iter(|| {
            let mut arena = Arena::from_config(&ArenaConfig::default());
            for _ in 0..100 {
                arena.run_turn();
            }
            black_box(arena.summary().turn)
        })
    });

    c.bench_function("arena_single_turn_late_game", |b| {
        let mut arena = Arena::from_config(&ArenaConfig {
            starting_parts: 2000,
            ..Default::default()
        });
        for _ in 0..300 {
            arena.run_turn();
        }
        b.iter(|| {
            arena.run_turn();
            black_box(arena.summary().turn)
        })
    });
}

criterion_group!(benches, bench_arena_turns);
criterion_main!(benches);
