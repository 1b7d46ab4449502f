//! Blockfall (workspace facade crate).
//!
//! Re-exports the engine as `blockfall::{core,types}` and hosts the headless
//! driver used by the `blockfall-sim` binary.

pub use blockfall_core as core;
pub use blockfall_types as types;

pub mod sim;
