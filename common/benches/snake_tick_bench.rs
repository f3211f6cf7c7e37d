use criterion::{Criterion, criterion_group, criterion_main};

use common::games::SessionRng;
use common::games::snake::{Direction, FieldSize, SnakeGameState};

fn bench_tick_across_field() {
    let mut rng = SessionRng::new(42);
    let mut state =
        SnakeGameState::new(FieldSize::new(100, 100), &mut rng).expect("Field is never full");
    state.request_direction(Direction::Right);
    for _ in 0..49 {
        state.tick(&mut rng).expect("Field is never full");
    }
}

fn bench_session_with_growth() {
    // Steer a lap around the field edge; any food on the path grows the
    // snake and exercises the occupancy index.
    let mut rng = SessionRng::new(42);
    let mut state =
        SnakeGameState::new(FieldSize::new(50, 50), &mut rng).expect("Field is never full");
    state.request_direction(Direction::Right);
    for _ in 0..24 {
        state.tick(&mut rng).expect("Field is never full");
    }
    state.request_direction(Direction::Up);
    for _ in 0..24 {
        state.tick(&mut rng).expect("Field is never full");
    }
    state.request_direction(Direction::Left);
    for _ in 0..48 {
        state.tick(&mut rng).expect("Field is never full");
    }
}

fn snake_tick_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("snake_tick");

    group.bench_function("tick_across_field", |b| b.iter(bench_tick_across_field));

    group.bench_function("lap_with_growth", |b| b.iter(bench_session_with_growth));

    group.finish();
}

criterion_group!(benches, snake_tick_bench);
criterion_main!(benches);
