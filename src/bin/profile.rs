use mazecraft::generators::{Generator, generate_maze};
use mazecraft::maze::{Maze, Topology};
use mazecraft::solvers::{Solver, solve_maze};

fn main() {
    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args
        .next()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(10);

    for _ in 0..num_iters {
        let mut maze = Maze::new(200, 200, Topology::Normal);
        generate_maze(&mut maze, Generator::Kruskal, None);
        let report = solve_maze(&maze, Solver::BiBfs, None, |_| {});
        assert!(report.solved);
    }
}
