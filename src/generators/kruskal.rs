use rand::seq::SliceRandom;

use crate::generators::{disjoint_set::DisjointSet, get_rng};
use crate::maze::{Coord, Direction, Maze, Topology};

/// Wall edge between two adjacent cells.
#[derive(Clone, Copy)]
struct Edge {
    cell1: Coord,
    cell2: Coord,
}

/// Kruskal over a randomly ordered edge list: every edge that joins two
/// different sets becomes a knocked-down wall; edges inside one set would
/// close a cycle and are discarded. Works unchanged on any connected
/// topology, which is the whole appeal of the algorithm here.
pub fn randomized_kruskal(maze: &mut Maze, seed: Option<u64>) {
    if maze.is_empty() {
        return;
    }

    // One edge per unordered adjacent pair: walking only the positive
    // directions of each cell visits every shared wall exactly once.
    let positive: &[Direction] = match maze.topology() {
        Topology::Hex => &[Direction::East, Direction::NorthEast, Direction::North],
        _ => &[Direction::East, Direction::North],
    };
    let mut edges: Vec<Edge> = {
        let maze = &*maze;
        maze.valid_cells()
            .flat_map(|coord| {
                positive.iter().filter_map(move |&dir| {
                    maze.neighbor(coord, dir).map(|neighbor| Edge {
                        cell1: coord,
                        cell2: neighbor,
                    })
                })
            })
            .collect()
    };

    let mut sets = DisjointSet::new();
    for coord in maze.valid_cells() {
        sets.make_set(coord);
    }

    // Tunnels are free connections, not walls to knock down: union each pair
    // up front and keep them out of the breakable edge list.
    for (a, b) in maze.tunnel_pairs() {
        sets.union(a, b);
    }

    let mut rng = get_rng(seed);
    edges.shuffle(&mut rng);

    for edge in edges {
        if sets.find(edge.cell1) != sets.find(edge.cell2) {
            maze.remove_wall_between(edge.cell1, edge.cell2);
            sets.union(edge.cell1, edge.cell2);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::assert_spanning_tree;

    #[test]
    fn test_kruskal_normal_is_perfect() {
        let mut maze = Maze::new(5, 5, Topology::Normal);
        randomized_kruskal(&mut maze, Some(7));
        assert_spanning_tree(&maze);
        assert_eq!(maze.open_wall_count(), 24);
    }

    #[test]
    fn test_kruskal_hex_is_perfect() {
        let mut maze = Maze::new(6, 5, Topology::Hex);
        randomized_kruskal(&mut maze, Some(7));
        assert_spanning_tree(&maze);
    }

    #[test]
    fn test_kruskal_unions_tunnel_pairs_before_the_edge_loop() {
        let mut maze = Maze::new(5, 5, Topology::Tunnel);
        maze.add_tunnel((0, 0), (4, 4));
        randomized_kruskal(&mut maze, Some(7));
        // The tunnel counts as one tree edge, so one fewer wall comes down.
        assert_eq!(maze.open_wall_count(), 23);
        assert_spanning_tree(&maze);
    }

    #[test]
    fn test_kruskal_with_several_tunnels() {
        let mut maze = Maze::new(6, 6, Topology::Tunnel);
        maze.add_tunnel((0, 0), (5, 5));
        maze.add_tunnel((0, 5), (5, 0));
        maze.add_tunnel((2, 2), (3, 3));
        randomized_kruskal(&mut maze, Some(11));
        assert_eq!(maze.open_wall_count(), 36 - 1 - 3);
        assert_spanning_tree(&maze);
    }

    #[test]
    fn test_kruskal_single_cell() {
        let mut maze = Maze::new(1, 1, Topology::Normal);
        randomized_kruskal(&mut maze, None);
        assert_eq!(maze.open_wall_count(), 0);
    }
}
