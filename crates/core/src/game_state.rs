//! Game session - owns the board, the active and next pieces, score and
//! lifecycle state, and drives the command/tick protocol.
//!
//! The shell serialises input into [`GameSession::handle_command`] and
//! gravity into [`GameSession::tick`]; both take `&mut self`, so a session
//! can never be re-entered mid-operation. Renderers read a detached copy via
//! [`GameSession::view`].

use crate::board::Board;
use crate::config::Config;
use crate::error::{ConfigError, Result};
use crate::piece::Tetromino;
use crate::pieces::validate_catalog;
use crate::rng::{PieceGenerator, PieceSource};
use crate::scoring::{gravity_score, line_clear_score, soft_drop_score};
use crate::snapshot::{ActiveSnapshot, View};
use crate::types::{Command, SessionState, ShapeKind};

/// What a locked piece did to the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockEvent {
    /// Rows removed by the lock, ascending
    pub cleared_rows: Vec<usize>,
    /// Score awarded for the cleared rows
    pub line_score: u32,
    /// The session ended with this lock
    pub lost: bool,
}

/// Result of a gravity tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing moved: not running, or waiting out `ticks_per_fall`
    Idle,
    /// The active piece moved down one row
    Fell,
    /// The active piece could not fall and was locked
    Locked(LockEvent),
}

/// A single play session
#[derive(Debug, Clone)]
pub struct GameSession<S = PieceGenerator> {
    config: Config,
    board: Board,
    active: Tetromino,
    next: ShapeKind,
    source: S,
    state: SessionState,
    score: u32,
    lines: u32,
    /// Count of pieces spawned this episode (the active piece's number)
    piece_id: u32,
    /// Increments on restart.
    episode_id: u32,
    /// Ticks since the last gravity step
    gravity_ticks: u32,
}

impl GameSession<PieceGenerator> {
    /// Create a session with the uniform no-repeat generator seeded from
    /// `config.seed`
    pub fn new(config: Config) -> Result<Self> {
        Self::with_source(config, PieceGenerator::new(config.seed))
    }
}

impl<S: PieceSource> GameSession<S> {
    /// Create a session drawing pieces from `source`
    pub fn with_source(config: Config, source: S) -> Result<Self> {
        config.validate()?;
        let board = Board::new(config.width as u8, config.height as u8);
        Self::with_board(config, board, source)
    }

    /// Create a session on a pre-filled board
    ///
    /// The first piece spawns immediately; if it does not fit the session
    /// starts out `Lost`.
    pub fn with_board(config: Config, board: Board, mut source: S) -> Result<Self> {
        config.validate()?;
        validate_catalog()?;
        if board.width() as u16 != config.width || board.height() as u16 != config.height {
            return Err(ConfigError::BoardMismatch {
                width: board.width(),
                height: board.height(),
            }
            .into());
        }

        let first = source.next_kind();
        let next = source.next_kind();

        let mut session = Self {
            active: Tetromino::new(first, config.spawn_anchor(first)),
            config,
            board,
            next,
            source,
            state: SessionState::Running,
            score: 0,
            lines: 0,
            piece_id: 1,
            episode_id: 0,
            gravity_ticks: 0,
        };
        session.check_top_out()?;
        Ok(session)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Tetromino {
        self.active
    }

    pub fn next(&self) -> ShapeKind {
        self.next
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn piece_id(&self) -> u32 {
        self.piece_id
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    /// Whether the active piece can no longer fall
    pub fn is_resting(&self) -> Result<bool> {
        self.active.is_resting(&self.board)
    }

    /// Apply an input command
    ///
    /// Returns `Ok(true)` when the command changed the session. Commands that
    /// are illegal for the current state, and moves that would not fit, are
    /// ignored with `Ok(false)`. A soft-drop on a resting piece locks it and
    /// returns `Ok(true)`; use [`GameSession::soft_drop`] to see the lock.
    pub fn handle_command(&mut self, command: Command) -> Result<bool> {
        match (self.state, command) {
            (SessionState::Running, Command::Pause) => {
                self.state = SessionState::Paused;
                Ok(true)
            }
            (SessionState::Paused, Command::Resume) => {
                self.state = SessionState::Running;
                Ok(true)
            }
            (SessionState::Running, Command::MoveLeft) => {
                self.active.try_shift(&self.board, -1, 0)
            }
            (SessionState::Running, Command::MoveRight) => {
                self.active.try_shift(&self.board, 1, 0)
            }
            (SessionState::Running, Command::Rotate) => self.active.try_rotate(&self.board),
            (SessionState::Running, Command::SoftDrop) => {
                Ok(self.soft_drop()? != TickOutcome::Idle)
            }
            _ => Ok(false),
        }
    }

    /// Move the active piece down one row, locking it if it is resting
    ///
    /// Scores per `reward_soft_drop_attempts` before any lock. `Idle` unless
    /// the session is running.
    pub fn soft_drop(&mut self) -> Result<TickOutcome> {
        if self.state != SessionState::Running {
            return Ok(TickOutcome::Idle);
        }

        let moved = self.active.try_shift(&self.board, 0, 1)?;
        let reward = soft_drop_score(moved, self.config.reward_soft_drop_attempts);
        self.score = self.score.saturating_add(reward);
        if moved {
            return Ok(TickOutcome::Fell);
        }

        self.lock_active().map(TickOutcome::Locked)
    }

    /// Gravity tick
    ///
    /// Every `ticks_per_fall`-th tick the active piece falls one row, or, if
    /// it is resting, runs the lock sequence: lock, clear rows, score, spawn
    /// the queued piece and check for a loss.
    pub fn tick(&mut self) -> Result<TickOutcome> {
        if self.state != SessionState::Running {
            return Ok(TickOutcome::Idle);
        }

        self.gravity_ticks += 1;
        if self.gravity_ticks < self.config.ticks_per_fall {
            return Ok(TickOutcome::Idle);
        }
        self.gravity_ticks = 0;

        if self.active.try_shift(&self.board, 0, 1)? {
            self.score = self.score.saturating_add(gravity_score());
            return Ok(TickOutcome::Fell);
        }

        self.lock_active().map(TickOutcome::Locked)
    }

    /// Lock the active piece onto the board and handle line clears
    fn lock_active(&mut self) -> Result<LockEvent> {
        self.board.lock(&self.active.cells())?;

        let cleared_rows = self.board.clear_full_rows();
        let line_score = line_clear_score(cleared_rows.len(), self.config.line_bonus);
        self.score = self.score.saturating_add(line_score);
        self.lines = self.lines.saturating_add(cleared_rows.len() as u32);

        self.spawn_next();
        self.check_top_out()?;

        Ok(LockEvent {
            cleared_rows,
            line_score,
            lost: self.state == SessionState::Lost,
        })
    }

    /// Promote the queued kind to the active piece and queue a new one
    fn spawn_next(&mut self) {
        let kind = self.next;
        self.active = Tetromino::new(kind, self.config.spawn_anchor(kind));
        self.next = self.source.next_kind();
        self.piece_id = self.piece_id.wrapping_add(1);
        self.gravity_ticks = 0;
    }

    /// Enter `Lost` if the freshly spawned piece does not fit, or blocks sit
    /// in the configured top-out rows
    fn check_top_out(&mut self) -> Result<()> {
        let blocked = !self.active.fits(&self.board)?;
        let overflow = self.config.top_out_rows > 0
            && self.board.has_blocks_above(self.config.top_out_rows as usize);
        if blocked || overflow {
            self.state = SessionState::Lost;
        }
        Ok(())
    }

    /// Start a new session in place
    ///
    /// Keeps the configuration and the piece source, which continues its
    /// sequence rather than replaying it.
    pub fn restart(&mut self) -> Result<()> {
        self.board.clear();
        self.score = 0;
        self.lines = 0;
        self.state = SessionState::Running;
        self.gravity_ticks = 0;
        self.episode_id = self.episode_id.wrapping_add(1);

        let first = self.source.next_kind();
        self.active = Tetromino::new(first, self.config.spawn_anchor(first));
        self.next = self.source.next_kind();
        self.piece_id = 1;

        self.check_top_out()
    }

    /// Refresh `out` in place, reusing its board buffer
    pub fn view_into(&self, out: &mut View) {
        out.width = self.board.width();
        out.height = self.board.height();
        self.board.write_into(&mut out.board);
        out.active = ActiveSnapshot::from(self.active);
        out.next = self.next;
        out.score = self.score;
        out.lines = self.lines;
        out.piece_id = self.piece_id;
        out.episode_id = self.episode_id;
        out.state = self.state;
    }

    /// Detached read-only copy for rendering
    pub fn view(&self) -> View {
        View {
            width: self.board.width(),
            height: self.board.height(),
            board: self.board.cells().to_vec(),
            active: ActiveSnapshot::from(self.active),
            next: self.next,
            score: self.score,
            lines: self.lines,
            piece_id: self.piece_id,
            episode_id: self.episode_id,
            state: self.state,
        }
    }
}
