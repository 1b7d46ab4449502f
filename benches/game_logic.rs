use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{Board, Config, GameSession};
use blockfall::types::{Cell, Command, SessionState};

fn bench_tick(c: &mut Criterion) {
    let mut session = GameSession::new(Config::default()).unwrap();

    c.bench_function("session_tick", |b| {
        b.iter(|| {
            let _ = black_box(session.tick());
            if session.state() == SessionState::Lost {
                let _ = session.restart();
            }
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    let bottom: Vec<Cell> = (15..19)
        .flat_map(|row| (0..9).map(move |col| Cell::new(col, row)))
        .collect();

    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new(9, 19);
            let _ = board.lock(&bottom);
            black_box(board.clear_full_rows());
        })
    });
}

fn bench_try_move(c: &mut Criterion) {
    let mut session = GameSession::new(Config::default()).unwrap();

    c.bench_function("move_right", |b| {
        b.iter(|| {
            let _ = black_box(session.handle_command(Command::MoveRight));
        })
    });
}

fn bench_try_rotate(c: &mut Criterion) {
    let mut session = GameSession::new(Config::default()).unwrap();

    c.bench_function("rotate", |b| {
        b.iter(|| {
            let _ = black_box(session.handle_command(Command::Rotate));
        })
    });
}

fn bench_view(c: &mut Criterion) {
    let session = GameSession::new(Config::default()).unwrap();
    let mut view = session.view();

    c.bench_function("view_into", |b| {
        b.iter(|| {
            session.view_into(black_box(&mut view));
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_try_move,
    bench_try_rotate,
    bench_view
);
criterion_main!(benches);
