use rand::{SeedableRng, rngs::StdRng};

pub mod disjoint_set;
mod kruskal;
mod prim;
mod recur_backtrack;

use crate::maze::Maze;
use kruskal::randomized_kruskal;
use prim::randomized_prim;
use recur_backtrack::recursive_backtrack;

/// Get a random number generator, optionally seeded for reproducibility.
pub(crate) fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

pub enum Generator {
    Kruskal,
    Prim,
    RecurBacktrack,
}

impl std::fmt::Display for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Generator::Kruskal => write!(f, "Randomized Kruskal's Algorithm"),
            Generator::Prim => write!(f, "Randomized Prim's Algorithm"),
            Generator::RecurBacktrack => write!(f, "Recursive Backtracker"),
        }
    }
}

/// Carves the maze in place until its open-wall graph (plus tunnels) is a
/// spanning tree of the topology. Expects a fully-walled maze; running a
/// generator twice on the same maze is wasteful, not an error.
pub fn generate_maze(maze: &mut Maze, generator: Generator, seed: Option<u64>) {
    tracing::info!(
        algorithm = %generator,
        topology = %maze.topology(),
        rows = maze.size_r(),
        cols = maze.size_c(),
        "generating maze"
    );
    match generator {
        Generator::Kruskal => randomized_kruskal(maze, seed),
        Generator::Prim => randomized_prim(maze, seed),
        Generator::RecurBacktrack => recursive_backtrack(maze, seed),
    }
}

#[cfg(test)]
pub(crate) fn assert_spanning_tree(maze: &Maze) {
    use std::collections::{HashSet, VecDeque};

    let total = maze.valid_cell_count();
    let tunnel_pairs = maze.tunnel_pairs().len();
    // A tree over `total` cells has `total - 1` edges; each tunnel pair is a
    // free edge, so exactly that many fewer walls get knocked down.
    assert_eq!(maze.open_wall_count(), total - 1 - tunnel_pairs);

    // Flood fill over open walls and tunnels: edge count plus full
    // connectivity makes the maze a spanning tree.
    let start = maze.valid_cells().next().expect("maze has no cells");
    let mut visited: HashSet<_> = HashSet::from([start]);
    let mut queue = VecDeque::from([start]);
    while let Some(cell) = queue.pop_front() {
        let open: Vec<_> = maze
            .neighbors(cell)
            .filter(|&(dir, _)| !maze.wall(cell, dir))
            .map(|(_, n)| n)
            .chain(maze.tunnel_to(cell))
            .collect();
        for next in open {
            if visited.insert(next) {
                queue.push_back(next);
            }
        }
    }
    assert_eq!(visited.len(), total, "maze is not fully connected");
}
