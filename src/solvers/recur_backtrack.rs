use std::collections::HashSet;

use rand::{Rng, rngs::StdRng};

use super::SolveReport;
use crate::maze::{Coord, Maze};

/// Depth-first descent from the entrance over already-open walls, with the
/// tunnel partner as an extra move. Backtracks on dead ends and returns the
/// moment the exit is reached; on a perfect maze every cell is reachable, so
/// an unsolved outcome only happens on malformed input.
pub(super) fn solve_recursive_backtrack(
    maze: &Maze,
    rng: &mut StdRng,
    on_explored: &mut dyn FnMut(Coord),
) -> SolveReport {
    if maze.is_empty() {
        return SolveReport {
            solved: false,
            cells_explored: 0,
        };
    }

    let entrance = maze.entrance();
    let exit = maze.exit();

    let mut visited: HashSet<Coord> = HashSet::from([entrance]);
    on_explored(entrance);
    if entrance == exit {
        return SolveReport {
            solved: true,
            cells_explored: 1,
        };
    }

    let mut stack = vec![entrance];
    while let Some(cell) = stack.pop() {
        let moves = open_moves(maze, cell, &visited);
        if !moves.is_empty() {
            let next = moves[rng.random_range(0..moves.len())];
            visited.insert(next);
            on_explored(next);
            if next == exit {
                return SolveReport {
                    solved: true,
                    cells_explored: visited.len(),
                };
            }
            // Revisit this cell on backtrack before descending further.
            stack.push(cell);
            stack.push(next);
        }
    }

    // Everything reachable was visited and the exit never showed up.
    SolveReport {
        solved: false,
        cells_explored: visited.len(),
    }
}

/// Unvisited cells reachable from `cell` in one step: wall-open neighbors
/// plus the tunnel partner, which is always traversable.
fn open_moves(maze: &Maze, cell: Coord, visited: &HashSet<Coord>) -> Vec<Coord> {
    let mut moves: Vec<Coord> = maze
        .neighbors(cell)
        .filter(|&(dir, n)| !maze.wall(cell, dir) && !visited.contains(&n))
        .map(|(_, n)| n)
        .collect();
    if let Some(partner) = maze.tunnel_to(cell) {
        if !visited.contains(&partner) {
            moves.push(partner);
        }
    }
    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::{Generator, generate_maze};
    use crate::maze::Topology;
    use crate::solvers::{Solver, solve_maze};

    #[test]
    fn test_solves_kruskal_maze() {
        let mut maze = Maze::new(5, 5, Topology::Normal);
        generate_maze(&mut maze, Generator::Kruskal, Some(42));
        maze.set_entrance((0, 0));
        maze.set_exit((4, 4));

        let mut order = Vec::new();
        let report = solve_maze(&maze, Solver::RecurBacktrack, Some(1), |c| order.push(c));
        assert!(report.solved);
        assert!(report.cells_explored <= 25);
        assert_eq!(order.len(), report.cells_explored);
        assert_eq!(order.first(), Some(&(0, 0)));
        assert_eq!(order.last(), Some(&(4, 4)));
    }

    #[test]
    fn test_single_cell_maze_solves_immediately() {
        let maze = Maze::new(1, 1, Topology::Normal);
        let report = solve_maze(&maze, Solver::RecurBacktrack, None, |_| {});
        assert!(report.solved);
        assert_eq!(report.cells_explored, 1);
    }

    #[test]
    fn test_traverses_tunnels() {
        let mut maze = Maze::new(5, 5, Topology::Tunnel);
        maze.add_tunnel((0, 4), (4, 0));
        generate_maze(&mut maze, Generator::RecurBacktrack, Some(5));
        maze.set_entrance((0, 0));
        maze.set_exit((4, 4));

        let report = solve_maze(&maze, Solver::RecurBacktrack, Some(2), |_| {});
        assert!(report.solved);
    }

    #[test]
    fn test_same_seed_is_idempotent() {
        let mut maze = Maze::new(6, 6, Topology::Hex);
        generate_maze(&mut maze, Generator::Prim, Some(9));

        let first = solve_maze(&maze, Solver::RecurBacktrack, Some(3), |_| {});
        let second = solve_maze(&maze, Solver::RecurBacktrack, Some(3), |_| {});
        assert_eq!(first, second);
        assert!(first.solved);
    }

    #[test]
    fn test_unsolvable_maze_terminates() {
        // No generator ran: all walls stand and the exit is unreachable.
        let mut maze = Maze::new(3, 3, Topology::Normal);
        maze.set_entrance((0, 0));
        maze.set_exit((2, 2));
        let report = solve_maze(&maze, Solver::RecurBacktrack, None, |_| {});
        assert!(!report.solved);
        assert_eq!(report.cells_explored, 1);
    }
}
