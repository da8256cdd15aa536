mod bi_bfs;
mod recur_backtrack;

use crate::generators::get_rng;
use crate::maze::{Coord, Maze};
use bi_bfs::solve_bidirectional_bfs;
use recur_backtrack::solve_recursive_backtrack;

/// Outcome of a solver run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolveReport {
    /// Whether a path between entrance and exit was found.
    pub solved: bool,
    /// Cells marked explored at the moment the solver stopped. The
    /// bidirectional solver counts each side's visited set separately, so a
    /// cell touched by both sides counts once per side.
    pub cells_explored: usize,
}

pub enum Solver {
    RecurBacktrack,
    BiBfs,
}

impl std::fmt::Display for Solver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Solver::RecurBacktrack => write!(f, "Recursive Backtracker"),
            Solver::BiBfs => write!(f, "Bidirectional Breadth-First Search"),
        }
    }
}

/// Walks the maze from entrance to exit without touching wall state.
///
/// `on_explored` is invoked once per cell, in the solver's exact traversal
/// order; renderers rely on that ordering to animate the search. The seed
/// only matters to the backtracker, which breaks ties between open neighbors
/// randomly.
pub fn solve_maze<F>(maze: &Maze, solver: Solver, seed: Option<u64>, mut on_explored: F) -> SolveReport
where
    F: FnMut(Coord),
{
    tracing::info!(
        algorithm = %solver,
        entrance = ?maze.entrance(),
        exit = ?maze.exit(),
        "solving maze"
    );
    let report = match solver {
        Solver::RecurBacktrack => {
            solve_recursive_backtrack(maze, &mut get_rng(seed), &mut on_explored)
        }
        Solver::BiBfs => solve_bidirectional_bfs(maze, &mut on_explored),
    };
    tracing::info!(
        solved = report.solved,
        cells_explored = report.cells_explored,
        "solver finished"
    );
    report
}
