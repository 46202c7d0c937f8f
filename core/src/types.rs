/// Single coordinate axis; `x` is the column index, `y` the row index.
pub type Coord = u16;

/// Count type for cell, hazard, and reveal totals.
pub type CellCount = u32;

/// Zero-based `(x, y)` board position.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    a as CellCount * b as CellCount
}

/// In-bounds positions at Chebyshev distance 1 from `center`, excluding
/// `center` itself. Order is fixed for a given board: ascending `x`, then
/// ascending `y`. `center` must lie inside `bounds`.
pub(crate) fn neighbors(center: Coord2, bounds: Coord2) -> impl Iterator<Item = Coord2> {
    let (cx, cy) = center;
    let (size_x, size_y) = bounds;

    let x_range = cx.saturating_sub(1)..=(cx + 1).min(size_x - 1);
    let y_start = cy.saturating_sub(1);
    let y_end = (cy + 1).min(size_y - 1);

    x_range
        .flat_map(move |x| (y_start..=y_end).map(move |y| (x, y)))
        .filter(move |&pos| pos != center)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn collect(center: Coord2, bounds: Coord2) -> Vec<Coord2> {
        neighbors(center, bounds).collect()
    }

    #[test]
    fn interior_cell_has_eight_neighbors() {
        let found = collect((1, 1), (3, 3));
        assert_eq!(found.len(), 8);
        assert!(!found.contains(&(1, 1)));
    }

    #[test]
    fn corner_cell_has_three_neighbors() {
        assert_eq!(collect((0, 0), (3, 3)), [(0, 1), (1, 0), (1, 1)]);
        assert_eq!(collect((2, 2), (3, 3)), [(1, 1), (1, 2), (2, 1)]);
    }

    #[test]
    fn edge_cell_has_five_neighbors() {
        assert_eq!(collect((1, 0), (3, 3)).len(), 5);
    }

    #[test]
    fn single_cell_board_has_no_neighbors() {
        assert!(collect((0, 0), (1, 1)).is_empty());
    }

    #[test]
    fn neighbors_stay_in_bounds() {
        for x in 0..4 {
            for y in 0..3 {
                for (nx, ny) in neighbors((x, y), (4, 3)) {
                    assert!(nx < 4 && ny < 3);
                }
            }
        }
    }
}
