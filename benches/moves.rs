use criterion::{black_box, criterion_group, criterion_main, Criterion};

use slide_merge::{is_over, is_over_by_simulation, resolve_move, Direction, EngineConfig, Game, Grid, MAX_EXPONENT};

/// Boards of varying density from a seeded playthrough.
fn corpus(side: usize) -> Vec<Grid> {
    let mut game = Game::with_config(EngineConfig::new(side).with_seed(42)).unwrap();
    game.start();
    let mut boards = vec![game.grid().clone()];
    for i in 0..64 {
        if game.is_game_over() {
            break;
        }
        game.move_cells(Direction::ALL[i % 4], true);
        boards.push(game.grid().clone());
    }
    boards
}

fn bench_resolve(c: &mut Criterion) {
    for side in [4, 8] {
        let boards = corpus(side);
        for dir in [Direction::Left, Direction::Down] {
            c.bench_function(&format!("resolve/{side}x{side}/{dir}"), |b| {
                b.iter(|| {
                    let mut changed = 0u32;
                    for board in &boards {
                        let mut grid = board.clone();
                        changed += resolve_move(&mut grid, black_box(dir), MAX_EXPONENT).changed as u32;
                    }
                    black_box(changed)
                })
            });
        }
    }
}

fn bench_game_over(c: &mut Criterion) {
    let boards = corpus(4);
    c.bench_function("is_over/adjacency", |b| {
        b.iter(|| boards.iter().filter(|g| is_over(black_box(g), MAX_EXPONENT)).count())
    });
    c.bench_function("is_over/simulation", |b| {
        b.iter(|| {
            boards
                .iter()
                .filter(|g| is_over_by_simulation(black_box(g), MAX_EXPONENT))
                .count()
        })
    });
}

fn bench_full_game(c: &mut Criterion) {
    c.bench_function("game/4x4_cycle_to_end", |b| {
        b.iter(|| {
            let mut game = Game::with_config(EngineConfig::new(4).with_seed(7)).unwrap();
            game.start();
            let mut i = 0;
            while !game.is_game_over() && i < 5000 {
                game.move_cells(Direction::ALL[i % 4], true);
                i += 1;
            }
            black_box(game.score())
        })
    });
}

criterion_group!(benches, bench_resolve, bench_game_over, bench_full_game);
criterion_main!(benches);
