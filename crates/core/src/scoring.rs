//! Scoring module - score policy
//!
//! Three sources of score:
//! - a gravity tick that moves the piece down scores [`DROP_SCORE`]
//! - a soft-drop scores [`DROP_SCORE`], on every attempt by default or only
//!   when the piece actually moved (see [`soft_drop_score`])
//! - each cleared row scores a flat per-line bonus, with no combo multiplier

use crate::types::DROP_SCORE;

/// Score for a soft-drop command
///
/// With `reward_attempts` set, a rejected soft-drop still scores.
pub fn soft_drop_score(moved: bool, reward_attempts: bool) -> u32 {
    if moved || reward_attempts {
        DROP_SCORE
    } else {
        0
    }
}

/// Score for a gravity tick that moved the piece down
pub fn gravity_score() -> u32 {
    DROP_SCORE
}

/// Score for clearing `lines` rows at once
pub fn line_clear_score(lines: usize, line_bonus: u32) -> u32 {
    (lines as u32).saturating_mul(line_bonus)
}
