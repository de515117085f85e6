use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use tictactoe_common::games::SessionRng;
use tictactoe_common::games::tictactoe::{
    Board, BotInput, Difficulty, Mark, Outcome, SearchUtility, calculate_move, evaluate,
};

fn mid_game_board() -> Board {
    use tictactoe_common::games::tictactoe::Mark::{Empty as E, O, X};
    Board::from_cells([X, E, E, E, O, E, E, E, X])
}

fn bench_single_move_empty_board(utility: SearchUtility) {
    let input = BotInput {
        board: Board::new(),
        current_mark: Mark::O,
        utility,
    };
    let mut session_rng = SessionRng::new(0);
    let _ = black_box(calculate_move(Difficulty::Optimal, input, &mut session_rng));
}

fn bench_single_move_mid_game() {
    let input = BotInput::new(mid_game_board(), Mark::O);
    let mut session_rng = SessionRng::new(0);
    let _ = black_box(calculate_move(Difficulty::Optimal, input, &mut session_rng));
}

fn bench_self_play() {
    let mut board = Board::new();
    let mut session_rng = SessionRng::new(0);
    while evaluate(&board) == Outcome::InProgress {
        let mark = board.next_mark();
        let input = BotInput::new(board, mark);
        match calculate_move(Difficulty::Optimal, input, &mut session_rng) {
            Ok(index) => {
                if board.place(index, mark).is_err() {
                    break;
                }
            }
            Err(_) => break,
        }
    }
    let _ = black_box(board);
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");

    group.sample_size(20);

    group.bench_function("single_move_empty", |b| {
        b.iter(|| bench_single_move_empty_board(SearchUtility::Flat))
    });

    group.bench_function("single_move_empty_depth_discounted", |b| {
        b.iter(|| bench_single_move_empty_board(SearchUtility::DepthDiscounted))
    });

    group.bench_function("single_move_mid_game", |b| {
        b.iter(bench_single_move_mid_game)
    });

    group.bench_function("self_play", |b| b.iter(bench_self_play));

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);
