/// Coordinate of a cell in the maze as (row, column).
///
/// Rows grow northwards. Columns are absolute grid-array columns; on hexagonal
/// mazes the valid column window shifts right as the row index grows, so a
/// column index can exceed the nominal maze width.
pub type Coord = (u16, u16);

/// The six directions a cell can have a neighbor in.
///
/// Rectangular topologies use only `East`, `North`, `West` and `South`.
/// Hexagonal topologies use all six; there the `North`/`South` slots point to
/// the upper-left and lower-right neighbors of the skewed axial grid, and
/// `NorthEast`/`SouthWest` to the upper-right and lower-left ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    East,
    NorthEast,
    North,
    West,
    SouthWest,
    South,
}

impl Direction {
    /// Number of direction slots; every per-cell wall array has this length.
    pub const COUNT: usize = 6;

    /// All directions, in wall-array order.
    pub const ALL: [Direction; Direction::COUNT] = [
        Direction::East,
        Direction::NorthEast,
        Direction::North,
        Direction::West,
        Direction::SouthWest,
        Direction::South,
    ];

    /// (row, column) offset of the neighbor in this direction.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::East => (0, 1),
            Direction::NorthEast => (1, 1),
            Direction::North => (1, 0),
            Direction::West => (0, -1),
            Direction::SouthWest => (-1, -1),
            Direction::South => (-1, 0),
        }
    }

    /// The direction pointing back at this one.
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::East => Direction::West,
            Direction::NorthEast => Direction::SouthWest,
            Direction::North => Direction::South,
            Direction::West => Direction::East,
            Direction::SouthWest => Direction::NorthEast,
            Direction::South => Direction::North,
        }
    }

    /// Index of this direction into a per-cell wall array.
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// A single maze cell: one wall slot per direction plus an optional tunnel.
///
/// Walls are shared state between neighbor pairs; `Maze::remove_wall` clears
/// both sides of an edge at once, so a wall is never toggled twice.
#[derive(Debug, Clone)]
pub struct Cell {
    /// Wall presence, indexed by `Direction::index`. `true` means the wall
    /// still stands. Slots pointing outside the topology stay `true` forever.
    pub(super) walls: [bool; Direction::COUNT],
    /// The far end of this cell's tunnel, if it has one. Symmetric: the far
    /// end points back here.
    pub(super) tunnel_to: Option<Coord>,
}

impl Cell {
    pub(super) fn walled() -> Self {
        Cell {
            walls: [true; Direction::COUNT],
            tunnel_to: None,
        }
    }

    /// Whether the wall in the given direction is still present.
    pub fn wall(&self, dir: Direction) -> bool {
        self.walls[dir.index()]
    }

    /// The coordinate of this cell's tunnel partner, if any.
    pub fn tunnel_to(&self) -> Option<Coord> {
        self.tunnel_to
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_is_involution() {
        for dir in Direction::ALL {
            assert_eq!(dir.opposite().opposite(), dir);
            assert_ne!(dir.opposite(), dir);
        }
    }

    #[test]
    fn test_opposite_deltas_cancel() {
        for dir in Direction::ALL {
            let (dr, dc) = dir.delta();
            let (or, oc) = dir.opposite().delta();
            assert_eq!((dr + or, dc + oc), (0, 0));
        }
    }

    #[test]
    fn test_new_cell_is_fully_walled() {
        let cell = Cell::walled();
        for dir in Direction::ALL {
            assert!(cell.wall(dir));
        }
        assert!(cell.tunnel_to().is_none());
    }
}
