use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mnk::eval::evaluate;
use mnk::{Board, Player, Pos, Searcher};

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.sample_size(10);

    group.bench_function("3x3_full_depth", |ben| {
        ben.iter(|| {
            let mut board = Board::default();
            let result = Searcher::new(false).search(&mut board, Player::X, black_box(9));
            black_box(result.best_move)
        })
    });

    group.bench_function("3x3_misere_full_depth", |ben| {
        ben.iter(|| {
            let mut board = Board::default();
            let result = Searcher::new(true).search(&mut board, Player::X, black_box(9));
            black_box(result.best_move)
        })
    });

    group.bench_function("4x4_k3_depth4", |ben| {
        let mut board = Board::new(4, 4, 3).unwrap();
        board.place(Pos::new(1, 1), Player::X).unwrap();
        ben.iter(|| {
            let result = Searcher::new(false).search(&mut board, Player::O, black_box(4));
            black_box(result.best_move)
        })
    });

    group.finish();
}

fn bench_eval(c: &mut Criterion) {
    let mut board = Board::new(7, 7, 4).unwrap();
    for (i, (x, y)) in [(3, 3), (2, 2), (4, 3), (3, 4), (1, 5)].into_iter().enumerate() {
        let player = if i % 2 == 0 { Player::X } else { Player::O };
        board.place(Pos::new(x, y), player).unwrap();
    }
    c.bench_function("eval_7x7_k4", |ben| {
        ben.iter(|| black_box(evaluate(black_box(&board), Player::X)))
    });
}

criterion_group!(benches, bench_search, bench_eval);
criterion_main!(benches);
