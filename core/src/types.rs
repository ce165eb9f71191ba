use core::ops::Add;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Single coordinate axis used for board rows, columns, and positions.
///
/// Signed so that neighbor offsets can step off the board before being bounds checked.
pub type Coord = i32;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u32;

/// Up to eight positions, enough for every neighbor of a cell.
pub type Neighbors = SmallVec<[Position; 8]>;

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

/// Saturating area of a `rows x cols` board, negative sides count as zero.
///
/// [`GameConfig::new`] rejects boards whose area would saturate.
pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = if a < 0 { 0 } else { a as CellCount };
    let b = if b < 0 { 0 } else { b as CellCount };
    a.saturating_mul(b)
}

/// Grid coordinate, `x` selects the row and `y` the column.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub x: Coord,
    pub y: Coord,
}

// N, S, W, E, NW, SE, NE, SW
const DISPLACEMENTS: [Position; 8] = [
    Position::new(-1, 0),
    Position::new(1, 0),
    Position::new(0, -1),
    Position::new(0, 1),
    Position::new(-1, -1),
    Position::new(1, 1),
    Position::new(-1, 1),
    Position::new(1, -1),
];

impl Position {
    pub const fn new(x: Coord, y: Coord) -> Self {
        Self { x, y }
    }

    /// The eight surrounding positions in fixed compass order. Some may be out of bounds.
    pub fn neighbors(self) -> Neighbors {
        DISPLACEMENTS.iter().map(|&delta| self + delta).collect()
    }

    pub const fn in_bounds(self, rows: Coord, cols: Coord) -> bool {
        self.x >= 0 && self.x < rows && self.y >= 0 && self.y < cols
    }

    /// Row-major index of this position on a board with `cols` columns.
    pub(crate) const fn to_index(self, cols: Coord) -> CellCount {
        (self.x as CellCount) * (cols as CellCount) + self.y as CellCount
    }

    /// Inverse of [`Position::to_index`].
    pub(crate) const fn from_index(index: CellCount, cols: Coord) -> Self {
        let cols = cols as CellCount;
        Self::new((index / cols) as Coord, (index % cols) as Coord)
    }
}

impl Add for Position {
    type Output = Position;

    fn add(self, rhs: Self) -> Self::Output {
        Position::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl From<(Coord, Coord)> for Position {
    fn from((x, y): (Coord, Coord)) -> Self {
        Self::new(x, y)
    }
}

/// Only meaningful for positions already checked with [`Position::in_bounds`].
impl ToNdIndex for Position {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.x as usize, self.y as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbors_follow_compass_order() {
        let center = Position::new(3, 3);
        let expected = [(2, 3), (4, 3), (3, 2), (3, 4), (2, 2), (4, 4), (2, 4), (4, 2)];

        let neighbors = center.neighbors();

        assert_eq!(neighbors.len(), 8);
        for (neighbor, (x, y)) in neighbors.iter().zip(expected) {
            assert_eq!(*neighbor, Position::new(x, y));
        }
    }

    #[test]
    fn corner_neighbors_step_out_of_bounds() {
        let in_bounds = Position::new(0, 0)
            .neighbors()
            .into_iter()
            .filter(|pos| pos.in_bounds(6, 6))
            .count();

        assert_eq!(in_bounds, 3);
    }

    #[test]
    fn bounds_are_half_open() {
        assert!(Position::new(0, 0).in_bounds(6, 7));
        assert!(Position::new(5, 6).in_bounds(6, 7));
        assert!(!Position::new(6, 0).in_bounds(6, 7));
        assert!(!Position::new(0, 7).in_bounds(6, 7));
        assert!(!Position::new(-1, 0).in_bounds(6, 7));
    }

    #[test]
    fn index_reshapes_row_major() {
        let pos = Position::new(2, 5);

        assert_eq!(pos.to_index(7), 19);
        assert_eq!(Position::from_index(19, 7), pos);
    }

    #[test]
    fn mult_saturates_and_clamps_negative_sides() {
        assert_eq!(mult(6, 7), 42);
        assert_eq!(mult(-3, 7), 0);
        assert_eq!(mult(Coord::MAX, Coord::MAX), CellCount::MAX);
    }
}
