use alloc::vec;
use alloc::vec::Vec;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Session lifecycle. `Won` and `Lost` are terminal; only a fresh setup
/// leaves them.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    #[default]
    Active,
    Won,
    Lost,
}

impl SessionState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealKind {
    Revealed,
    Lost,
    Won,
    Blocked,
}

impl RevealKind {
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// What one reveal call changed. `cells` holds every cell flipped to
/// revealed during the call, so the renderer only repaints those.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealOutcome {
    pub kind: RevealKind,
    pub cells: Vec<CellChange>,
}

impl RevealOutcome {
    pub(crate) const fn blocked() -> Self {
        Self {
            kind: RevealKind::Blocked,
            cells: Vec::new(),
        }
    }

    pub(crate) const fn unchanged() -> Self {
        Self {
            kind: RevealKind::Revealed,
            cells: Vec::new(),
        }
    }

    pub fn has_update(&self) -> bool {
        !self.cells.is_empty()
    }
}

/// Reveal state machine for one board session. Reveals are monotonic: a cell
/// only ever goes hidden to revealed, and a finished session accepts no
/// further moves.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RevealEngine {
    board: Board,
    revealed: Array2<bool>,
    revealed_count: CellCount,
    state: SessionState,
    triggered_hazard: Option<Coord2>,
}

impl RevealEngine {
    pub fn new(board: Board) -> Self {
        let size = board.size();
        Self {
            board,
            revealed: Array2::default(size.to_nd_index()),
            revealed_count: 0,
            state: SessionState::default(),
            triggered_hazard: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn is_revealed(&self, coords: Coord2) -> bool {
        self.revealed[coords.to_nd_index()]
    }

    /// Count of revealed safe cells; the triggered hazard does not count.
    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    /// The hazard that ended the session, if it ended in a loss.
    pub fn triggered_hazard(&self) -> Option<Coord2> {
        self.triggered_hazard
    }

    /// True once every safe cell is revealed.
    pub fn is_complete(&self) -> bool {
        self.revealed_count == self.board.safe_cell_count()
    }

    /// Reveals the cell at `coords` and cascades through blank regions.
    ///
    /// Out-of-bounds coordinates fail with [`GameError::OutOfBounds`] before
    /// any mutation. A finished session yields `Blocked` rather than an
    /// error: late clicks racing the game-over state are expected input.
    /// Re-revealing an already open cell is a no-op with an empty
    /// changed-set.
    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.board.validate_coords(coords)?;

        if self.state.is_finished() {
            return Ok(RevealOutcome::blocked());
        }
        if self.is_revealed(coords) {
            return Ok(RevealOutcome::unchanged());
        }

        self.revealed[coords.to_nd_index()] = true;

        if self.board.contains_hazard(coords) {
            self.state = SessionState::Lost;
            self.triggered_hazard = Some(coords);
            return Ok(RevealOutcome {
                kind: RevealKind::Lost,
                cells: vec![CellChange {
                    coords,
                    label: CellLabel::Hazard,
                }],
            });
        }

        let label = self.board.label_at(coords);
        self.revealed_count += 1;
        let mut cells = vec![CellChange { coords, label }];

        if label.is_blank() {
            self.cascade(coords, &mut cells);
        }

        let kind = if self.is_complete() {
            self.state = SessionState::Won;
            RevealKind::Won
        } else {
            RevealKind::Revealed
        };

        Ok(RevealOutcome { kind, cells })
    }

    /// Opens the maximal connected blank region around `start` plus its
    /// numbered boundary ring. Iterative work stack; the `revealed` mask
    /// doubles as the visited set, so every cell is flipped at most once.
    /// Blank cells have no hazardous neighbors, so the fill never touches a
    /// hazard.
    fn cascade(&mut self, start: Coord2, cells: &mut Vec<CellChange>) {
        let mut stack = vec![start];

        while let Some(current) = stack.pop() {
            for pos in self.board.neighbors(current) {
                if self.is_revealed(pos) {
                    continue;
                }
                self.revealed[pos.to_nd_index()] = true;
                self.revealed_count += 1;

                let label = self.board.label_at(pos);
                cells.push(CellChange { coords: pos, label });
                if label.is_blank() {
                    stack.push(pos);
                }
            }
        }
    }
}
