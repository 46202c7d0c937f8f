use serde::{Deserialize, Serialize};

use crate::Coord2;

/// What a cell shows once uncovered: a hazard marker, the neighbor-hazard
/// count, or nothing at all. `Blank` cells are the ones the cascade expands
/// through.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellLabel {
    Hazard,
    Count(u8),
    Blank,
}

impl CellLabel {
    /// Label for a safe cell with `count` hazardous neighbors.
    pub(crate) const fn for_count(count: u8) -> Self {
        if count == 0 {
            Self::Blank
        } else {
            Self::Count(count)
        }
    }

    pub const fn is_blank(self) -> bool {
        matches!(self, Self::Blank)
    }

    pub const fn is_hazard(self) -> bool {
        matches!(self, Self::Hazard)
    }
}

/// One cell flipped to revealed during a single reveal call.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellChange {
    pub coords: Coord2,
    pub label: CellLabel,
}

/// Per-cell render data in a [`LevelSnapshot`](crate::LevelSnapshot).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    pub coords: Coord2,
    pub label: CellLabel,
    pub revealed: bool,
}
