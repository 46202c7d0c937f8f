use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Maps the level counter to the scarcity used by the next setup. Plain
/// function pointer so embedders can swap the progression without touching
/// the engine.
pub type ScarcityPolicy = fn(u32) -> f64;

/// Default progression: 2% more hazards per level, capped at 10%.
pub fn scarcity_for_level(level: u32) -> f64 {
    ((level as f64 + 1.0) * 0.02).min(BoardConfig::DEFAULT_SCARCITY)
}

/// Legacy progression, kept for embedders that want it: the cap already
/// engages at level 0, so every level plays at 10% regardless of the counter.
pub fn legacy_scarcity_for_level(level: u32) -> f64 {
    ((level as f64 + 1.0) * 0.1).min(0.10)
}

/// Initial render data for a freshly set-up level: one [`CellView`] per cell
/// plus the total hazard count for a "hazards remaining" display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelSnapshot {
    pub size: Coord2,
    pub hazard_count: CellCount,
    pub cells: Vec<CellView>,
}

/// Session facade for the embedding UI: owns the level counter, derives
/// scarcity through the policy, and holds the current board session. Each
/// setup discards the previous session wholesale.
#[derive(Clone, Debug)]
pub struct Game {
    size: Coord2,
    level: u32,
    policy: ScarcityPolicy,
    session: RevealEngine,
}

impl Game {
    pub fn new(size: Coord2, seed: u64) -> Result<Self> {
        Self::with_policy(size, seed, scarcity_for_level)
    }

    pub fn with_policy(size: Coord2, seed: u64, policy: ScarcityPolicy) -> Result<Self> {
        let config = BoardConfig::new(size, checked_scarcity(policy, 0))?;
        let session = RevealEngine::new(ScarcityGenerator::new(seed).generate(config));
        Ok(Self {
            size,
            level: 0,
            policy,
            session,
        })
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn state(&self) -> SessionState {
        self.session.state()
    }

    pub fn session(&self) -> &RevealEngine {
        &self.session
    }

    pub fn hazard_count(&self) -> CellCount {
        self.session.board().hazard_count()
    }

    /// Rebuilds board and session with the policy's scarcity for the current
    /// level. The previous session stays untouched if setup fails.
    pub fn setup_level(&mut self, seed: u64) -> Result<LevelSnapshot> {
        self.setup_level_with_scarcity(seed, checked_scarcity(self.policy, self.level))
    }

    /// Rebuilds board and session with an explicit scarcity override.
    pub fn setup_level_with_scarcity(&mut self, seed: u64, scarcity: f64) -> Result<LevelSnapshot> {
        let config = BoardConfig::new(self.size, scarcity)?;
        self.session = RevealEngine::new(ScarcityGenerator::new(seed).generate(config));
        Ok(self.snapshot())
    }

    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        self.session.reveal(coords)
    }

    /// Advances the level counter for the next setup. The caller invokes
    /// this when it observes a `Won` outcome.
    pub fn level_up(&mut self) {
        self.level += 1;
    }

    /// Full per-cell render data for the current session.
    pub fn snapshot(&self) -> LevelSnapshot {
        let board = self.session.board();
        let (size_x, size_y) = board.size();

        let mut cells = Vec::with_capacity(board.total_cells() as usize);
        for x in 0..size_x {
            for y in 0..size_y {
                let coords = (x, y);
                cells.push(CellView {
                    coords,
                    label: board.label_at(coords),
                    revealed: self.session.is_revealed(coords),
                });
            }
        }

        LevelSnapshot {
            size: (size_x, size_y),
            hazard_count: board.hazard_count(),
            cells,
        }
    }
}

/// Policies are embedder code; a value outside `[0, 1)` is downgraded to the
/// default cap with a warning instead of failing the setup.
fn checked_scarcity(policy: ScarcityPolicy, level: u32) -> f64 {
    let scarcity = policy(level);
    if (0.0..1.0).contains(&scarcity) {
        scarcity
    } else {
        log::warn!(
            "scarcity policy returned {} for level {}, using {}",
            scarcity,
            level,
            BoardConfig::DEFAULT_SCARCITY
        );
        BoardConfig::DEFAULT_SCARCITY
    }
}
