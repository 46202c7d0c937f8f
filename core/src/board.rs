use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Hazard placement plus the counts derived from it. The mask never changes
/// after construction; per-session reveal state lives in
/// [`RevealEngine`](crate::RevealEngine).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    hazard_mask: Array2<bool>,
    hazard_count: CellCount,
}

impl Board {
    /// Takes ownership of a prebuilt mask, deriving `hazard_count` from it.
    pub fn from_hazard_mask(hazard_mask: Array2<bool>) -> Result<Self> {
        let (size_x, size_y) = hazard_mask.dim();
        if size_x == 0 || size_y == 0 {
            return Err(GameError::InvalidSize);
        }
        if size_x > Coord::MAX as usize || size_y > Coord::MAX as usize {
            return Err(GameError::InvalidSize);
        }

        let hazard_count = hazard_mask.iter().filter(|&&hazard| hazard).count() as CellCount;
        Ok(Self {
            hazard_mask,
            hazard_count,
        })
    }

    /// Builds a board with hazards at exactly the given positions.
    pub fn from_hazard_coords(size: Coord2, hazards: &[Coord2]) -> Result<Self> {
        let mut mask: Array2<bool> = Array2::default(size.to_nd_index());

        for &coords in hazards {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(GameError::ShapeMismatch);
            }
            mask[coords.to_nd_index()] = true;
        }

        Self::from_hazard_mask(mask)
    }

    /// Constructor for the generator, which already swept the mask once.
    pub(crate) fn from_parts(hazard_mask: Array2<bool>, hazard_count: CellCount) -> Self {
        debug_assert_eq!(
            hazard_count,
            hazard_mask.iter().filter(|&&hazard| hazard).count() as CellCount,
        );
        Self {
            hazard_mask,
            hazard_count,
        }
    }

    pub fn size(&self) -> Coord2 {
        let (size_x, size_y) = self.hazard_mask.dim();
        (size_x as Coord, size_y as Coord)
    }

    pub fn width(&self) -> Coord {
        self.size().0
    }

    pub fn height(&self) -> Coord {
        self.size().1
    }

    pub fn total_cells(&self) -> CellCount {
        self.hazard_mask.len() as CellCount
    }

    pub fn hazard_count(&self) -> CellCount {
        self.hazard_count
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.hazard_count
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let (size_x, size_y) = self.size();
        if coords.0 < size_x && coords.1 < size_y {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds)
        }
    }

    pub fn contains_hazard(&self, coords: Coord2) -> bool {
        self[coords]
    }

    /// The up-to-eight in-bounds cells of the 3x3 neighborhood around
    /// `coords`, center excluded. Deterministic order for a fixed board.
    pub fn neighbors(&self, coords: Coord2) -> impl Iterator<Item = Coord2> + use<> {
        crate::types::neighbors(coords, self.size())
    }

    pub fn hazard_neighbor_count(&self, coords: Coord2) -> u8 {
        self.neighbors(coords).filter(|&pos| self[pos]).count() as u8
    }

    /// Ground-truth label, independent of whether the cell is revealed.
    pub fn label_at(&self, coords: Coord2) -> CellLabel {
        if self[coords] {
            CellLabel::Hazard
        } else {
            CellLabel::for_count(self.hazard_neighbor_count(coords))
        }
    }
}

impl Index<Coord2> for Board {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.hazard_mask[coords.to_nd_index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn board(size: Coord2, hazards: &[Coord2]) -> Board {
        Board::from_hazard_coords(size, hazards).unwrap()
    }

    #[test]
    fn counts_add_up_to_total() {
        let board = board((4, 3), &[(0, 0), (3, 2), (1, 1)]);
        assert_eq!(board.total_cells(), 12);
        assert_eq!(board.hazard_count(), 3);
        assert_eq!(board.hazard_count() + board.safe_cell_count(), 12);
    }

    #[test]
    fn duplicate_hazard_coords_count_once() {
        let board = board((3, 3), &[(1, 1), (1, 1)]);
        assert_eq!(board.hazard_count(), 1);
    }

    #[test]
    fn hazard_coords_outside_size_are_rejected() {
        assert_eq!(
            Board::from_hazard_coords((3, 3), &[(3, 0)]),
            Err(GameError::ShapeMismatch)
        );
    }

    #[test]
    fn empty_mask_is_rejected() {
        let mask: Array2<bool> = Array2::default([0, 4]);
        assert_eq!(Board::from_hazard_mask(mask), Err(GameError::InvalidSize));
    }

    #[test]
    fn neighbor_sets_are_symmetric() {
        let board = board((4, 3), &[]);
        for x in 0..4 {
            for y in 0..3 {
                for pos in board.neighbors((x, y)) {
                    let back: Vec<_> = board.neighbors(pos).collect();
                    assert!(back.contains(&(x, y)), "{pos:?} missing {:?}", (x, y));
                }
            }
        }
    }

    #[test]
    fn neighbor_count_ranges_from_three_to_eight() {
        let board = board((3, 3), &[]);
        for x in 0..3 {
            for y in 0..3 {
                let count = board.neighbors((x, y)).count();
                assert!((3..=8).contains(&count));
                assert!(board.neighbors((x, y)).all(|pos| pos != (x, y)));
            }
        }
        assert_eq!(board.neighbors((0, 0)).count(), 3);
        assert_eq!(board.neighbors((1, 1)).count(), 8);
    }

    #[test]
    fn labels_reflect_adjacent_hazards() {
        let board = board((3, 3), &[(1, 1)]);
        assert_eq!(board.label_at((1, 1)), CellLabel::Hazard);
        assert_eq!(board.label_at((0, 0)), CellLabel::Count(1));
        assert_eq!(board.hazard_neighbor_count((0, 0)), 1);
    }

    #[test]
    fn cell_away_from_hazards_is_blank() {
        let board = board((5, 5), &[(4, 4)]);
        assert_eq!(board.label_at((0, 0)), CellLabel::Blank);
        assert_eq!(board.label_at((3, 3)), CellLabel::Count(1));
    }

    #[test]
    fn out_of_bounds_coords_are_rejected() {
        let board = board((3, 3), &[]);
        assert_eq!(board.validate_coords((2, 2)), Ok((2, 2)));
        assert_eq!(board.validate_coords((3, 1)), Err(GameError::OutOfBounds));
        assert_eq!(board.validate_coords((1, 3)), Err(GameError::OutOfBounds));
    }
}
