pub mod cell;
mod render;

pub use cell::{Cell, Coord, Direction};

/// The adjacency rule set of a maze.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topology {
    /// Rectangular grid, four neighbors per cell.
    Normal,
    /// Hexagonal grid with a skewed column window, six neighbors per cell.
    Hex,
    /// Rectangular grid plus symmetric tunnel shortcuts between cell pairs.
    Tunnel,
}

impl Topology {
    /// The directions a cell of this topology can have grid neighbors in.
    pub fn directions(self) -> &'static [Direction] {
        match self {
            Topology::Normal | Topology::Tunnel => &[
                Direction::East,
                Direction::North,
                Direction::West,
                Direction::South,
            ],
            Topology::Hex => &Direction::ALL,
        }
    }
}

impl std::fmt::Display for Topology {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Topology::Normal => write!(f, "Rectangular"),
            Topology::Hex => write!(f, "Hexagonal"),
            Topology::Tunnel => write!(f, "Rectangular with tunnels"),
        }
    }
}

/// A maze over a 2D cell array.
///
/// Construction leaves every wall standing; generators knock walls down until
/// the open-wall graph (plus tunnels) is a spanning tree. Solvers only read
/// wall state.
///
/// For hexagonal topology the cell array is over-allocated: cell `(r, c)` is
/// real only when `(r + 1) / 2 <= c < size_c + (r + 1) / 2`, so the number of
/// column slots exceeds `size_c` while each row still holds exactly `size_c`
/// real cells.
pub struct Maze {
    cells: Box<[Cell]>,
    size_r: u16,
    size_c: u16,
    /// Allocated columns per row; `size_c + size_r / 2` for hex.
    col_slots: u16,
    topology: Topology,
    entrance: Coord,
    exit: Coord,
}

impl Maze {
    /// Creates a fully-walled maze of `size_r` rows by `size_c` columns.
    ///
    /// Entrance defaults to the first valid cell and exit to the last; use
    /// `set_entrance`/`set_exit` to override.
    pub fn new(size_r: u16, size_c: u16, topology: Topology) -> Self {
        let col_slots = match topology {
            Topology::Hex => size_c + size_r / 2,
            _ => size_c,
        };
        let cells =
            vec![Cell::walled(); size_r as usize * col_slots as usize].into_boxed_slice();
        let mut maze = Maze {
            cells,
            size_r,
            size_c,
            col_slots,
            topology,
            entrance: (0, 0),
            exit: (0, 0),
        };
        maze.exit = maze.last_valid_cell();
        maze
    }

    pub fn size_r(&self) -> u16 {
        self.size_r
    }

    pub fn size_c(&self) -> u16 {
        self.size_c
    }

    pub fn topology(&self) -> Topology {
        self.topology
    }

    pub fn entrance(&self) -> Coord {
        self.entrance
    }

    pub fn exit(&self) -> Coord {
        self.exit
    }

    /// Checks if the maze has no cells at all.
    pub fn is_empty(&self) -> bool {
        self.size_r == 0 || self.size_c == 0
    }

    /// # Panics
    /// If `coord` is not a valid cell of the topology.
    pub fn set_entrance(&mut self, coord: Coord) {
        if !self.is_valid(coord) {
            panic!("entrance {:?} is not a valid cell", coord);
        }
        self.entrance = coord;
    }

    /// # Panics
    /// If `coord` is not a valid cell of the topology.
    pub fn set_exit(&mut self, coord: Coord) {
        if !self.is_valid(coord) {
            panic!("exit {:?} is not a valid cell", coord);
        }
        self.exit = coord;
    }

    /// Whether `(row, column)` denotes a real cell of this topology.
    ///
    /// Hexagonal mazes only hold cells inside the skewed window
    /// `(r + 1) / 2 <= c < size_c + (r + 1) / 2`; the other topologies use
    /// plain rectangular bounds.
    pub fn is_valid(&self, coord: Coord) -> bool {
        let (r, c) = coord;
        match self.topology {
            Topology::Hex => {
                r < self.size_r && c >= (r + 1) / 2 && c < self.size_c + (r + 1) / 2
            }
            _ => r < self.size_r && c < self.size_c,
        }
    }

    /// The valid cell adjacent to `coord` in direction `dir`, if any.
    pub fn neighbor(&self, coord: Coord, dir: Direction) -> Option<Coord> {
        let (dr, dc) = dir.delta();
        let r = coord.0 as i32 + dr;
        let c = coord.1 as i32 + dc;
        if r < 0 || c < 0 {
            return None;
        }
        let coord = (r as u16, c as u16);
        self.is_valid(coord).then_some(coord)
    }

    /// Grid neighbors of `coord`, paired with the direction they lie in.
    /// Tunnel partners are not included; use `tunnel_to` for those.
    pub fn neighbors(&self, coord: Coord) -> impl Iterator<Item = (Direction, Coord)> + '_ {
        self.topology
            .directions()
            .iter()
            .filter_map(move |&dir| self.neighbor(coord, dir).map(|n| (dir, n)))
    }

    /// Whether the wall of `coord` in direction `dir` still stands.
    pub fn wall(&self, coord: Coord, dir: Direction) -> bool {
        self[coord].wall(dir)
    }

    /// Knocks down the shared wall between `coord` and its neighbor in
    /// direction `dir`, clearing both sides of the edge.
    ///
    /// # Panics
    /// If there is no valid neighbor in that direction.
    pub fn remove_wall(&mut self, coord: Coord, dir: Direction) {
        let Some(neighbor) = self.neighbor(coord, dir) else {
            panic!("no {:?} neighbor of {:?} to share a wall with", dir, coord);
        };
        self[coord].walls[dir.index()] = false;
        self[neighbor].walls[dir.opposite().index()] = false;
    }

    /// Knocks down the wall between two adjacent cells, locating the shared
    /// direction first.
    ///
    /// # Panics
    /// If the cells are not grid-adjacent.
    pub fn remove_wall_between(&mut self, a: Coord, b: Coord) {
        let Some((dir, _)) = self.neighbors(a).find(|&(_, n)| n == b) else {
            panic!("cells {:?} and {:?} are not adjacent", a, b);
        };
        self.remove_wall(a, dir);
    }

    /// The tunnel partner of `coord`, if it has one.
    pub fn tunnel_to(&self, coord: Coord) -> Option<Coord> {
        self[coord].tunnel_to
    }

    /// Links a symmetric tunnel between two distinct valid cells.
    ///
    /// # Panics
    /// If either coordinate is invalid, the cells coincide, or either end
    /// already has a tunnel.
    pub fn add_tunnel(&mut self, a: Coord, b: Coord) {
        if !self.is_valid(a) || !self.is_valid(b) {
            panic!("tunnel endpoints {:?} and {:?} must be valid cells", a, b);
        }
        if a == b {
            panic!("a tunnel cannot loop a cell onto itself");
        }
        if self[a].tunnel_to.is_some() || self[b].tunnel_to.is_some() {
            panic!("cells {:?} and {:?} may carry at most one tunnel each", a, b);
        }
        self[a].tunnel_to = Some(b);
        self[b].tunnel_to = Some(a);
    }

    /// All valid cells, row by row.
    pub fn valid_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.size_r)
            .flat_map(move |r| (0..self.col_slots).map(move |c| (r, c)))
            .filter(move |&coord| self.is_valid(coord))
    }

    /// Number of real cells. Each row holds exactly `size_c` of them, on the
    /// hexagonal topology included.
    pub fn valid_cell_count(&self) -> usize {
        self.size_r as usize * self.size_c as usize
    }

    /// Tunnel pairs, each reported once with the lexicographically smaller
    /// endpoint first.
    pub fn tunnel_pairs(&self) -> Vec<(Coord, Coord)> {
        self.valid_cells()
            .filter_map(|coord| {
                self.tunnel_to(coord)
                    .filter(|&partner| coord < partner)
                    .map(|partner| (coord, partner))
            })
            .collect()
    }

    /// Number of knocked-down walls, counting each shared wall once.
    pub fn open_wall_count(&self) -> usize {
        let directional: usize = self
            .valid_cells()
            .map(|coord| {
                self.neighbors(coord)
                    .filter(|&(dir, _)| !self.wall(coord, dir))
                    .count()
            })
            .sum();
        // Every open wall was cleared on both sides.
        directional / 2
    }

    fn last_valid_cell(&self) -> Coord {
        let r = self.size_r.saturating_sub(1);
        let c = match self.topology {
            Topology::Hex => (self.size_c + (r + 1) / 2).saturating_sub(1),
            _ => self.size_c.saturating_sub(1),
        };
        (r, c)
    }

    fn ravel_index(&self, r: u16, c: u16) -> usize {
        r as usize * self.col_slots as usize + c as usize
    }
}

impl std::ops::Index<Coord> for Maze {
    type Output = Cell;

    fn index(&self, index: Coord) -> &Self::Output {
        &self.cells[self.ravel_index(index.0, index.1)]
    }
}

impl std::ops::IndexMut<Coord> for Maze {
    fn index_mut(&mut self, index: Coord) -> &mut Self::Output {
        let idx = self.ravel_index(index.0, index.1);
        &mut self.cells[idx]
    }
}
