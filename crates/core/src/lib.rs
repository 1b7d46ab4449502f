//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the falling-block rules: the playfield, piece
//! geometry, legality checks, locking, line clears, and the session
//! lifecycle. It has **no dependencies** on rendering, timing, or I/O:
//!
//! - **Deterministic**: the same seed (or scripted piece order) replays the
//!   same session
//! - **Discrete**: collision is exact cell occupancy over an abstract grid
//! - **Shell-driven**: the caller decides when gravity ticks happen and which
//!   commands arrive; the engine only validates and commits
//!
//! # Module Structure
//!
//! - [`board`]: configurable grid with occupancy, locking and row clearing
//! - [`pieces`]: the shape catalog, four offsets per kind and rotation
//! - [`piece`]: the active piece and its compute-then-validate transitions
//! - [`rng`]: uniform no-repeat piece generator over a seeded LCG
//! - [`scoring`]: drop and line-clear score policy
//! - [`config`]: constructor-time session parameters
//! - [`game_state`]: the session orchestrator
//! - [`snapshot`]: detached views for renderers
//!
//! # Example
//!
//! ```
//! use blockfall_core::{Config, GameSession, TickOutcome};
//! use blockfall_types::{Command, SessionState};
//!
//! let mut session = GameSession::new(Config::default()).unwrap();
//!
//! session.handle_command(Command::MoveLeft).unwrap();
//! session.handle_command(Command::Rotate).unwrap();
//! assert_eq!(session.tick().unwrap(), TickOutcome::Fell);
//!
//! let view = session.view();
//! assert_eq!(view.state, SessionState::Running);
//! assert_eq!(view.score, 1);
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod game_state;
pub mod piece;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::Config;
pub use error::{ConfigError, EngineError};
pub use game_state::{GameSession, LockEvent, TickOutcome};
pub use piece::Tetromino;
pub use pieces::{bounding_size, get_shape, shape_at};
pub use rng::{PieceGenerator, PieceSource, ScriptedSource, SimpleRng};
pub use snapshot::{ActiveSnapshot, View};
