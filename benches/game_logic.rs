use criterion::{black_box, criterion_group, criterion_main, Criterion};
use colorstack::core::{generate_level, Block, GameAction, GameState, SimpleRng};
use colorstack::types::Difficulty;

fn started() -> GameState {
    GameState::new(12345).reduce(GameAction::StartGame {
        difficulty: Difficulty::Easy,
    })
}

fn bench_add_block(c: &mut Criterion) {
    let state = started();
    let tube_id = state.main_tube().unwrap().id();
    let color = state.level().available_colors()[0];

    c.bench_function("reduce_add_block", |b| {
        b.iter(|| {
            state.reduce(black_box(GameAction::AddBlockToTube {
                tube_id,
                block: Block::new(color),
            }))
        })
    });
}

fn bench_check_matches(c: &mut Criterion) {
    let mut state = started();
    let tube_id = state.main_tube().unwrap().id();
    let target = state.level().patterns()[0].colors().to_vec();
    for color in target {
        state = state.reduce(GameAction::AddBlockToTube {
            tube_id,
            block: Block::new(color),
        });
    }

    c.bench_function("check_pattern_matches", |b| {
        b.iter(|| black_box(&state).check_pattern_matches())
    });
}

fn bench_generate_level(c: &mut Criterion) {
    let mut rng = SimpleRng::new(12345);

    c.bench_function("generate_level_12", |b| {
        b.iter(|| generate_level(black_box(12), Difficulty::Hard, &mut rng))
    });
}

fn bench_tick(c: &mut Criterion) {
    let state = started();

    c.bench_function("reduce_tick", |b| {
        b.iter(|| black_box(&state).reduce(GameAction::TickTimer))
    });
}

criterion_group!(
    benches,
    bench_add_block,
    bench_check_matches,
    bench_generate_level,
    bench_tick
);
criterion_main!(benches);
