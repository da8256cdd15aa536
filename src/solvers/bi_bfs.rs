use std::collections::{HashSet, VecDeque};

use super::SolveReport;
use crate::maze::{Coord, Maze};

/// One half of the bidirectional search.
struct Frontier {
    queue: VecDeque<Coord>,
    visited: HashSet<Coord>,
}

impl Frontier {
    fn seeded(cell: Coord) -> Self {
        Frontier {
            queue: VecDeque::from([cell]),
            visited: HashSet::new(),
        }
    }

    fn holds(&self, cell: Coord) -> bool {
        self.queue.contains(&cell) || self.visited.contains(&cell)
    }
}

/// Two FIFO searches, one from the entrance and one from the exit, expanding
/// one cell per side per round until the frontiers meet. On a spanning tree
/// the frontiers must eventually intersect; if both queues drain without a
/// meeting the input was disconnected and the maze is reported unsolved.
pub(super) fn solve_bidirectional_bfs(
    maze: &Maze,
    on_explored: &mut dyn FnMut(Coord),
) -> SolveReport {
    if maze.is_empty() {
        return SolveReport {
            solved: false,
            cells_explored: 0,
        };
    }

    let mut entry = Frontier::seeded(maze.entrance());
    let mut exit = Frontier::seeded(maze.exit());

    // Entrance and exit coincide: solved with zero expansion.
    if maze.entrance() == maze.exit() {
        entry.visited.insert(maze.entrance());
        on_explored(maze.entrance());
        return SolveReport {
            solved: true,
            cells_explored: 1,
        };
    }

    let mut meet = false;
    while !meet {
        if entry.queue.is_empty() && exit.queue.is_empty() {
            tracing::debug!("both frontiers drained without meeting; maze is disconnected");
            break;
        }
        meet = step(maze, &mut entry, &exit, on_explored);
        if meet {
            break;
        }
        meet = step(maze, &mut exit, &entry, on_explored);
    }

    SolveReport {
        solved: meet,
        cells_explored: entry.visited.len() + exit.visited.len(),
    }
}

/// Expands one cell of `side`, reporting it explored, and returns whether the
/// expansion met `other`.
///
/// Meeting precedence is fixed across all topologies: the tunnel partner is
/// tested against the other side first, then each wall-open neighbor in
/// direction-enum order, queue membership before visited membership. When the
/// meeting cell was only queued (not yet visited) on the other side, it is
/// credited to the stepping side's visited set and reported explored.
fn step(
    maze: &Maze,
    side: &mut Frontier,
    other: &Frontier,
    on_explored: &mut dyn FnMut(Coord),
) -> bool {
    let Some(current) = side.queue.pop_front() else {
        return false;
    };
    side.visited.insert(current);
    on_explored(current);

    if let Some(partner) = maze.tunnel_to(current) {
        if other.holds(partner) {
            if !other.visited.contains(&partner) {
                side.visited.insert(partner);
                on_explored(partner);
            }
            return true;
        }
        if !side.holds(partner) {
            side.queue.push_back(partner);
        }
    }

    for &dir in maze.topology().directions() {
        if maze.wall(current, dir) {
            continue;
        }
        let Some(neighbor) = maze.neighbor(current, dir) else {
            continue;
        };
        if other.queue.contains(&neighbor) {
            if !other.visited.contains(&neighbor) {
                side.visited.insert(neighbor);
                on_explored(neighbor);
            }
            return true;
        }
        if other.visited.contains(&neighbor) {
            return true;
        }
        if !side.holds(neighbor) {
            side.queue.push_back(neighbor);
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::{Generator, generate_maze};
    use crate::maze::{Direction, Topology};
    use crate::solvers::{Solver, solve_maze};

    /// 1x5 corridor with every interior wall knocked down.
    fn corridor() -> Maze {
        let mut maze = Maze::new(1, 5, Topology::Normal);
        for c in 0..4 {
            maze.remove_wall((0, c), Direction::East);
        }
        maze.set_entrance((0, 0));
        maze.set_exit((0, 4));
        maze
    }

    #[test]
    fn test_corridor_meets_in_the_middle() {
        let maze = corridor();
        let mut order = Vec::new();
        let report = solve_maze(&maze, Solver::BiBfs, None, |c| order.push(c));
        assert!(report.solved);
        assert_eq!(report.cells_explored, 5);
        // Sides alternate outside-in; the middle cell is the meeting point.
        assert_eq!(order, vec![(0, 0), (0, 4), (0, 1), (0, 3), (0, 2)]);
    }

    #[test]
    fn test_entrance_equal_to_exit_is_trivially_solved() {
        let mut maze = Maze::new(3, 3, Topology::Normal);
        maze.set_entrance((1, 1));
        maze.set_exit((1, 1));
        let report = solve_maze(&maze, Solver::BiBfs, None, |_| {});
        assert!(report.solved);
        assert_eq!(report.cells_explored, 1);
    }

    #[test]
    fn test_disconnected_maze_terminates_unsolved() {
        // All walls stand; both frontiers drain after one expansion each.
        let mut maze = Maze::new(3, 3, Topology::Normal);
        maze.set_entrance((0, 0));
        maze.set_exit((2, 2));
        let report = solve_maze(&maze, Solver::BiBfs, None, |_| {});
        assert!(!report.solved);
        assert_eq!(report.cells_explored, 2);
    }

    #[test]
    fn test_solves_generated_mazes_on_every_topology() {
        for (topology, generator) in [
            (Topology::Normal, Generator::Kruskal),
            (Topology::Hex, Generator::Prim),
            (Topology::Normal, Generator::RecurBacktrack),
        ] {
            let mut maze = Maze::new(6, 6, topology);
            generate_maze(&mut maze, generator, Some(13));
            let report = solve_maze(&maze, Solver::BiBfs, None, |_| {});
            assert!(report.solved);
            assert!(report.cells_explored <= maze.valid_cell_count() + 2);
        }
    }

    #[test]
    fn test_meets_through_a_tunnel() {
        // Two cells joined only by a tunnel: the entry side traverses it and
        // meets the exit seed sitting in the other queue.
        let mut maze = Maze::new(5, 5, Topology::Tunnel);
        maze.add_tunnel((0, 0), (4, 4));
        generate_maze(&mut maze, Generator::Kruskal, Some(17));
        maze.set_entrance((0, 0));
        maze.set_exit((4, 4));
        let report = solve_maze(&maze, Solver::BiBfs, None, |_| {});
        assert!(report.solved);
    }

    #[test]
    fn test_solve_is_idempotent() {
        let mut maze = Maze::new(7, 7, Topology::Normal);
        generate_maze(&mut maze, Generator::Prim, Some(23));
        let first = solve_maze(&maze, Solver::BiBfs, None, |_| {});
        let second = solve_maze(&maze, Solver::BiBfs, None, |_| {});
        assert_eq!(first, second);
    }
}
