#![forbid(unsafe_code)]

//! Property/invariant tests for the engine.
//!
//! Invariants covered:
//! - Legality is a pure function of (board, cells).
//! - Rotating four times is the identity whenever all four rotations fit.
//! - Row clearing removes exactly the full rows and keeps every other row,
//!   in order, shifted down past the removed ones.
//! - Random command/tick sequences never error, never decrease the score,
//!   and never leave the active piece overlapping the board while running.

use proptest::prelude::*;

use blockfall::core::{Board, Config, GameSession, Tetromino};
use blockfall::types::{Cell, Command, Rotation, SessionState, ShapeKind};

const W: u8 = 9;
const H: u8 = 19;

fn kind_strategy() -> impl Strategy<Value = ShapeKind> {
    (0..7usize).prop_map(|i| ShapeKind::ALL[i])
}

fn board_from(rows: &[Vec<bool>]) -> Board {
    let mut board = Board::new(W, rows.len() as u8);
    let cells: Vec<Cell> = rows
        .iter()
        .enumerate()
        .flat_map(|(row, cols)| {
            cols.iter()
                .enumerate()
                .filter(|(_, occupied)| **occupied)
                .map(move |(col, _)| Cell::new(col as i16, row as i16))
        })
        .collect();
    board.lock(&cells).unwrap();
    board
}

fn rows_strategy() -> impl Strategy<Value = Vec<Vec<bool>>> {
    // Bias towards full rows so clears actually happen.
    let row = prop_oneof![
        1 => Just(vec![true; W as usize]),
        3 => prop::collection::vec(any::<bool>(), W as usize),
    ];
    prop::collection::vec(row, H as usize)
}

fn step_strategy() -> impl Strategy<Value = Option<Command>> {
    prop_oneof![
        4 => Just(None),
        2 => Just(Some(Command::MoveLeft)),
        2 => Just(Some(Command::MoveRight)),
        2 => Just(Some(Command::Rotate)),
        1 => Just(Some(Command::SoftDrop)),
        1 => Just(Some(Command::Pause)),
        1 => Just(Some(Command::Resume)),
    ]
}

proptest! {
    #[test]
    fn legality_is_deterministic(
        rows in rows_strategy(),
        kind in kind_strategy(),
        col in -3i16..12,
        row in -3i16..22,
        rot in 0u8..4,
    ) {
        let board = board_from(&rows);
        let piece = Tetromino {
            kind,
            rotation: Rotation::from_index(rot).unwrap(),
            anchor: Cell::new(col, row),
        };
        let first = piece.fits(&board).unwrap();
        let second = piece.fits(&board.clone()).unwrap();
        prop_assert_eq!(first, second);

        let expected = piece.cells().iter().all(|&c| {
            board.is_inside(c) && !board.is_occupied(c).unwrap()
        });
        prop_assert_eq!(first, expected);
    }

    #[test]
    fn rotation_closure(kind in kind_strategy(), col in 0i16..6, row in 0i16..15) {
        let board = Board::new(W, H);
        let mut piece = Tetromino::new(kind, Cell::new(col, row));
        let start = piece;
        for _ in 0..4 {
            prop_assert!(piece.try_rotate(&board).unwrap());
        }
        prop_assert_eq!(piece, start);
        prop_assert_eq!(piece.cells(), start.cells());
    }

    #[test]
    fn clear_full_rows_compacts(rows in rows_strategy()) {
        let mut board = board_from(&rows);
        let full: Vec<usize> = rows
            .iter()
            .enumerate()
            .filter(|(_, r)| r.iter().all(|&b| b))
            .map(|(i, _)| i)
            .collect();
        let survivors: Vec<&Vec<bool>> = rows
            .iter()
            .filter(|r| !r.iter().all(|&b| b))
            .collect();

        let cleared = board.clear_full_rows();
        prop_assert_eq!(&cleared, &full);
        prop_assert_eq!(board.height(), H);

        let offset = full.len();
        for row in 0..H as usize {
            let got = board.row(row).unwrap();
            if row < offset {
                prop_assert!(got.iter().all(|&b| !b));
            } else {
                prop_assert_eq!(got, survivors[row - offset].as_slice());
            }
        }
    }

    #[test]
    fn random_play_keeps_invariants(
        seed in 1u32..10_000,
        steps in prop::collection::vec(step_strategy(), 1..400),
    ) {
        let config = Config { seed, ..Config::default() };
        let mut session = GameSession::new(config).unwrap();
        let mut last_score = 0;

        for step in steps {
            match step {
                Some(command) => {
                    session.handle_command(command).unwrap();
                }
                None => {
                    session.tick().unwrap();
                }
            }

            prop_assert!(session.score() >= last_score);
            last_score = session.score();

            if session.state() != SessionState::Lost {
                prop_assert!(session.active().fits(session.board()).unwrap());
            }
            for row in 0..H as usize {
                prop_assert!(!session.board().is_row_full(row));
            }
        }
    }
}
