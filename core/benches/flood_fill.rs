use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use sapper_core::*;
use std::hint::black_box;

fn laid_out_board(rows: Coord, cols: Coord, mines: &[(Coord, Coord)]) -> Board {
    let mut board = Board::create(rows, cols, mines.len() as CellCount).unwrap();
    board.init_layout();
    board.init_content(Position::new(0, 0), &mut PresetMineGenerator::new(mines.iter().copied()));
    board
}

fn bench_flood_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("flood_fill");

    for side in [16, 64, 256] {
        let template = laid_out_board(side, side, &[(side - 1, side - 1)]);
        group.bench_function(format!("open_{side}x{side}"), |b| {
            b.iter_batched(
                || template.clone(),
                |mut board| {
                    board.reveal_block(black_box(Position::new(0, 0)));
                    board
                },
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn bench_expert_round(c: &mut Criterion) {
    c.bench_function("expert_first_click", |b| {
        let mut seed = 0;
        b.iter(|| {
            seed += 1;
            let mut session = Session::with_seed(seed);
            session.new_preset_game(Difficulty::Expert).unwrap();
            session.reveal_block(black_box(Position::new(8, 15)));
            session.unrevealed_count()
        })
    });
}

criterion_group!(benches, bench_flood_fill, bench_expert_round);
criterion_main!(benches);
