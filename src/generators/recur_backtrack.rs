use std::collections::HashSet;

use rand::Rng;

use crate::generators::get_rng;
use crate::maze::{Coord, Direction, Maze};

/// A carving move out of the current cell.
#[derive(Clone, Copy)]
enum Carve {
    /// Knock down the wall in this direction and step through it.
    Wall(Direction, Coord),
    /// Step through the cell's tunnel; there is no wall to knock down.
    Tunnel(Coord),
}

/// Depth-first carving with an explicit stack: descend through random
/// unvisited neighbors, knocking the shared wall down on each step, and pop
/// back when a cell runs out of them.
///
/// The tunnel partner of the current cell counts as an extra pseudo-direction.
/// Once a tunnel's near end is visited, the far end is locked against
/// wall-carving from other cells, so the only way into it is the tunnel
/// itself; that forces every tunnel to become a tree edge.
pub fn recursive_backtrack(maze: &mut Maze, seed: Option<u64>) {
    if maze.is_empty() {
        return;
    }

    let mut rng = get_rng(seed);

    let cells: Vec<Coord> = maze.valid_cells().collect();
    let start = cells[rng.random_range(0..cells.len())];

    let mut visited: HashSet<Coord> = HashSet::with_capacity(cells.len());
    let mut locked: HashSet<Coord> = HashSet::new();
    visit(maze, start, &mut visited, &mut locked);

    let mut stack = vec![start];
    while let Some(cell) = stack.pop() {
        let moves = carving_moves(maze, cell, &visited, &locked);
        if !moves.is_empty() {
            let next = match moves[rng.random_range(0..moves.len())] {
                Carve::Wall(dir, next) => {
                    maze.remove_wall(cell, dir);
                    next
                }
                Carve::Tunnel(next) => next,
            };
            visit(maze, next, &mut visited, &mut locked);
            // Put the cell back first so we can look at another neighbor of
            // this cell when we backtrack to it.
            stack.push(cell);
            stack.push(next);
        }
    }
}

/// Marks `cell` visited and locks its unvisited tunnel partner, if any.
fn visit(maze: &Maze, cell: Coord, visited: &mut HashSet<Coord>, locked: &mut HashSet<Coord>) {
    visited.insert(cell);
    locked.remove(&cell);
    if let Some(partner) = maze.tunnel_to(cell) {
        if !visited.contains(&partner) {
            locked.insert(partner);
        }
    }
}

/// All moves still open out of `cell`: walls into unvisited, unlocked
/// neighbors, plus the tunnel when its far end is unvisited. The tunnel
/// ignores the lock; it is the one permitted entry into a locked cell.
fn carving_moves(
    maze: &Maze,
    cell: Coord,
    visited: &HashSet<Coord>,
    locked: &HashSet<Coord>,
) -> Vec<Carve> {
    let mut moves: Vec<Carve> = maze
        .neighbors(cell)
        .filter(|(_, n)| !visited.contains(n) && !locked.contains(n))
        .map(|(dir, n)| Carve::Wall(dir, n))
        .collect();
    if let Some(partner) = maze.tunnel_to(cell) {
        if !visited.contains(&partner) {
            moves.push(Carve::Tunnel(partner));
        }
    }
    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::assert_spanning_tree;
    use crate::maze::Topology;

    #[test]
    fn test_backtracker_normal_is_perfect() {
        let mut maze = Maze::new(6, 4, Topology::Normal);
        recursive_backtrack(&mut maze, Some(21));
        assert_spanning_tree(&maze);
        assert_eq!(maze.open_wall_count(), 23);
    }

    #[test]
    fn test_backtracker_hex_is_perfect() {
        let mut maze = Maze::new(5, 5, Topology::Hex);
        recursive_backtrack(&mut maze, Some(21));
        assert_spanning_tree(&maze);
    }

    #[test]
    fn test_backtracker_tunnels_become_tree_edges() {
        let mut maze = Maze::new(5, 5, Topology::Tunnel);
        maze.add_tunnel((0, 0), (4, 4));
        recursive_backtrack(&mut maze, Some(21));
        // The locked far end can only be entered through the tunnel, so
        // exactly one wall fewer comes down.
        assert_eq!(maze.open_wall_count(), 23);
        assert_spanning_tree(&maze);
    }

    #[test]
    fn test_backtracker_many_tunnels_many_seeds() {
        for seed in 0..8 {
            let mut maze = Maze::new(6, 6, Topology::Tunnel);
            maze.add_tunnel((0, 1), (5, 4));
            maze.add_tunnel((3, 0), (2, 5));
            recursive_backtrack(&mut maze, Some(seed));
            assert_spanning_tree(&maze);
        }
    }
}
