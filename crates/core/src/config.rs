//! Session configuration, fixed at construction.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::pieces::bounding_size;
use crate::types::{Cell, ShapeKind, DEFAULT_HEIGHT, DEFAULT_LINE_BONUS, DEFAULT_WIDTH, MIN_DIMENSION};

/// Constructor-time session parameters
///
/// Every field has a default, so a partial JSON object is accepted:
///
/// ```
/// use blockfall_core::Config;
///
/// let config: Config = serde_json::from_str(r#"{ "width": 10, "line_bonus": 40 }"#).unwrap();
/// assert_eq!(config.width, 10);
/// assert_eq!(config.height, 19);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Board width in cells
    pub width: u16,
    /// Board height in cells
    pub height: u16,
    /// Score per cleared row
    pub line_bonus: u32,
    /// Score a soft-drop even when the piece could not move
    pub reward_soft_drop_attempts: bool,
    /// Gravity ticks per attempted fall
    pub ticks_per_fall: u32,
    /// Rows at the top that end the session once a block rests in them.
    /// `0` leaves spawn overlap as the only loss condition.
    pub top_out_rows: u16,
    /// Spawn anchor column; defaults to the middle of the board
    pub spawn_column: Option<u16>,
    /// Piece generator seed
    pub seed: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH as u16,
            height: DEFAULT_HEIGHT as u16,
            line_bonus: DEFAULT_LINE_BONUS,
            reward_soft_drop_attempts: true,
            ticks_per_fall: 1,
            top_out_rows: 0,
            spawn_column: None,
            seed: 1,
        }
    }
}

impl Config {
    /// Check every field is usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        let dims = MIN_DIMENSION as u16..=u8::MAX as u16;
        if !dims.contains(&self.width) {
            return Err(ConfigError::Width(self.width));
        }
        if !dims.contains(&self.height) {
            return Err(ConfigError::Height(self.height));
        }
        if self.ticks_per_fall == 0 {
            return Err(ConfigError::TicksPerFall);
        }
        if self.top_out_rows >= self.height {
            return Err(ConfigError::TopOutRows {
                rows: self.top_out_rows,
                height: self.height,
            });
        }
        if let Some(col) = self.spawn_column {
            if col >= self.width {
                return Err(ConfigError::SpawnColumn(col));
            }
        }
        Ok(())
    }

    /// Spawn anchor for `kind`
    ///
    /// The preferred column is shifted left just enough for the kind's spawn
    /// layout to fit inside the right wall.
    pub fn spawn_anchor(&self, kind: ShapeKind) -> Cell {
        let (w, _) = bounding_size(kind);
        let preferred = self.spawn_column.unwrap_or(self.width / 2);
        let col = preferred.min(self.width.saturating_sub(w as u16));
        Cell::new(col as i16, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_reference_configuration() {
        let config = Config::default();
        assert_eq!((config.width, config.height), (9, 19));
        assert_eq!(config.line_bonus, 100);
        assert!(config.reward_soft_drop_attempts);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_bad_fields() {
        let bad = |f: fn(&mut Config)| {
            let mut c = Config::default();
            f(&mut c);
            c.validate()
        };
        assert_eq!(bad(|c| c.width = 3), Err(ConfigError::Width(3)));
        assert_eq!(bad(|c| c.height = 300), Err(ConfigError::Height(300)));
        assert_eq!(bad(|c| c.ticks_per_fall = 0), Err(ConfigError::TicksPerFall));
        assert_eq!(
            bad(|c| c.top_out_rows = 19),
            Err(ConfigError::TopOutRows {
                rows: 19,
                height: 19
            })
        );
        assert_eq!(
            bad(|c| c.spawn_column = Some(9)),
            Err(ConfigError::SpawnColumn(9))
        );
    }

    #[test]
    fn test_spawn_anchor_stays_inside() {
        let config = Config::default();
        assert_eq!(config.spawn_anchor(ShapeKind::I), Cell::new(4, 0));
        assert_eq!(config.spawn_anchor(ShapeKind::T), Cell::new(4, 0));

        let narrow = Config {
            width: 5,
            ..Config::default()
        };
        assert_eq!(narrow.spawn_anchor(ShapeKind::I), Cell::new(1, 0));
        assert_eq!(narrow.spawn_anchor(ShapeKind::O), Cell::new(2, 0));
    }
}
