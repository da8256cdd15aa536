use std::collections::HashSet;

use rand::Rng;
use rand_set::RandSetDefault;

use crate::generators::get_rng;
use crate::maze::{Coord, Maze};

/// Grows the maze from one random cell: each round pulls a uniformly random
/// frontier cell into the tree and carves through the wall to one of its
/// already-grown neighbors. A cell's first wall comes down exactly when it
/// joins the tree, so no cycle can form.
///
/// Tunnel partners ride along for free: when a cell joins the tree and its
/// partner is still outside, the partner joins through the tunnel with no
/// wall carved, making the tunnel itself a tree edge.
pub fn randomized_prim(maze: &mut Maze, seed: Option<u64>) {
    if maze.is_empty() {
        return;
    }

    let mut rng = get_rng(seed);
    let total = maze.valid_cell_count();

    // Pick a random starting cell among the valid ones.
    let cells: Vec<Coord> = maze.valid_cells().collect();
    let start = cells[rng.random_range(0..cells.len())];

    let mut grown: HashSet<Coord> = HashSet::with_capacity(total);
    let mut frontier: RandSetDefault<Coord> = std::iter::empty().collect();
    grow(maze, start, &mut grown, &mut frontier);

    while grown.len() < total {
        // Uniformly random frontier cell; an empty frontier here means the
        // input topology was disconnected, which callers must not supply.
        let &cell = frontier
            .get_rand()
            .expect("frontier drained before the maze was spanned; topology must be connected");
        frontier.remove(&cell);

        // Carve from a uniformly random already-grown neighbor.
        let linked: Vec<Coord> = maze
            .neighbors(cell)
            .map(|(_, n)| n)
            .filter(|n| grown.contains(n))
            .collect();
        let from = linked[rng.random_range(0..linked.len())];
        maze.remove_wall_between(from, cell);

        grow(maze, cell, &mut grown, &mut frontier);
    }
}

/// Adds `cell` to the grown set, pulls its tunnel partner in behind it, and
/// queues the unvisited neighbors of every newly grown cell on the frontier.
fn grow(
    maze: &Maze,
    cell: Coord,
    grown: &mut HashSet<Coord>,
    frontier: &mut RandSetDefault<Coord>,
) {
    grown.insert(cell);
    frontier.remove(&cell);
    for (_, neighbor) in maze.neighbors(cell) {
        if !grown.contains(&neighbor) {
            frontier.insert(neighbor);
        }
    }
    if let Some(partner) = maze.tunnel_to(cell) {
        if !grown.contains(&partner) {
            grow(maze, partner, grown, frontier);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::assert_spanning_tree;
    use crate::maze::Topology;

    #[test]
    fn test_prim_normal_is_perfect() {
        let mut maze = Maze::new(7, 7, Topology::Normal);
        randomized_prim(&mut maze, Some(3));
        assert_spanning_tree(&maze);
        assert_eq!(maze.open_wall_count(), 48);
    }

    #[test]
    fn test_prim_hex_is_perfect() {
        let mut maze = Maze::new(5, 6, Topology::Hex);
        randomized_prim(&mut maze, Some(3));
        assert_spanning_tree(&maze);
    }

    #[test]
    fn test_prim_tunnel_partners_join_for_free() {
        let mut maze = Maze::new(5, 5, Topology::Tunnel);
        maze.add_tunnel((0, 0), (4, 4));
        randomized_prim(&mut maze, Some(3));
        assert_eq!(maze.open_wall_count(), 23);
        assert_spanning_tree(&maze);
    }

    #[test]
    fn test_prim_single_cell() {
        let mut maze = Maze::new(1, 1, Topology::Normal);
        randomized_prim(&mut maze, None);
        assert_eq!(maze.open_wall_count(), 0);
    }
}
