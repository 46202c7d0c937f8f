//! Grid-reveal puzzle engine.
//!
//! The crate owns the board and the reveal state machine: scarcity-based
//! hazard placement, neighbor-hazard labels, flood-fill cascades over blank
//! regions, and win/loss detection. It is a pure state machine with no
//! rendering surface; the embedding UI calls [`Game::reveal`] with a
//! coordinate and applies the returned [`CellChange`]s to the screen.
#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use session::*;
pub use types::*;

mod board;
mod cell;
mod engine;
mod error;
mod generator;
mod session;
mod types;

/// Validated generation parameters: board dimensions plus the per-cell
/// hazard probability.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    size: Coord2,
    scarcity: f64,
}

impl BoardConfig {
    pub const DEFAULT_SIZE: Coord2 = (10, 10);
    pub const DEFAULT_SCARCITY: f64 = 0.10;

    /// Rejects zero dimensions and any scarcity outside `[0, 1)` (NaN
    /// included) before a board is touched.
    pub fn new(size: Coord2, scarcity: f64) -> Result<Self> {
        if size.0 == 0 || size.1 == 0 {
            return Err(GameError::InvalidSize);
        }
        if !(0.0..1.0).contains(&scarcity) {
            return Err(GameError::InvalidScarcity);
        }
        Ok(Self { size, scarcity })
    }

    pub const fn size(&self) -> Coord2 {
        self.size
    }

    pub const fn scarcity(&self) -> f64 {
        self.scarcity
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            size: Self::DEFAULT_SIZE,
            scarcity: Self::DEFAULT_SCARCITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_rejects_zero_dimensions() {
        assert_eq!(BoardConfig::new((0, 5), 0.1), Err(GameError::InvalidSize));
        assert_eq!(BoardConfig::new((5, 0), 0.1), Err(GameError::InvalidSize));
    }

    #[test]
    fn config_rejects_out_of_range_scarcity() {
        assert_eq!(
            BoardConfig::new((5, 5), 1.0),
            Err(GameError::InvalidScarcity)
        );
        assert_eq!(
            BoardConfig::new((5, 5), -0.01),
            Err(GameError::InvalidScarcity)
        );
        assert_eq!(
            BoardConfig::new((5, 5), f64::NAN),
            Err(GameError::InvalidScarcity)
        );
    }

    #[test]
    fn config_accepts_boundary_values() {
        assert!(BoardConfig::new((1, 1), 0.0).is_ok());
        assert!(BoardConfig::new((1, 1), 0.999).is_ok());
    }

    #[test]
    fn default_config_is_ten_by_ten() {
        let config = BoardConfig::default();
        assert_eq!(config.size(), (10, 10));
        assert_eq!(config.total_cells(), 100);
    }
}
