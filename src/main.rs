use rand::seq::SliceRandom;
use rand::{SeedableRng, rngs::StdRng};

use mazecraft::generators::{Generator, generate_maze};
use mazecraft::maze::{Coord, Maze, Topology};
use mazecraft::solvers::{Solver, solve_maze};

/// Log to a file so the maze output stays clean on stdout.
fn init_tracing() -> tracing_appender::non_blocking::WorkerGuard {
    let file_appender = tracing_appender::rolling::never(".", "mazecraft.log");
    let (writer, guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .init();
    guard
}

fn read_line(prompt: &str) -> std::io::Result<String> {
    println!("{prompt}");
    let mut input = String::new();
    std::io::stdin().read_line(&mut input)?;
    Ok(input)
}

/// Pairs up random distinct cells as tunnels. Returns how many were linked.
fn link_random_tunnels(maze: &mut Maze, pairs: u16, rng: &mut StdRng) -> u16 {
    let mut free: Vec<Coord> = maze.valid_cells().collect();
    free.shuffle(rng);
    let mut linked = 0;
    for _ in 0..pairs {
        let (Some(a), Some(b)) = (free.pop(), free.pop()) else {
            break;
        };
        maze.add_tunnel(a, b);
        linked += 1;
    }
    linked
}

fn main() -> std::io::Result<()> {
    let _guard = init_tracing();

    let input = read_line("Enter maze dimensions (rows columns):")?;
    let dims = input
        .split_whitespace()
        .take(2)
        .filter_map(|s| s.parse::<u16>().ok())
        .collect::<Vec<_>>();
    if dims.len() != 2 {
        eprintln!("Please enter two valid numbers for rows and columns.");
        return Ok(());
    }
    let (rows, cols) = (dims[0], dims[1]);
    if rows < 1 || cols < 1 {
        eprintln!("Rows and columns must be at least 1.");
        return Ok(());
    }

    let input = read_line(&format!(
        "Select topology:\n1. {}\n2. {}\n3. {}",
        Topology::Normal,
        Topology::Hex,
        Topology::Tunnel,
    ))?;
    let topology = match input.trim() {
        "1" => Topology::Normal,
        "2" => Topology::Hex,
        "3" => Topology::Tunnel,
        _ => {
            eprintln!("Invalid selection.");
            return Ok(());
        }
    };

    let mut maze = Maze::new(rows, cols, topology);

    if topology == Topology::Tunnel {
        let input = read_line("Enter number of tunnel pairs:")?;
        let Ok(pairs) = input.trim().parse::<u16>() else {
            eprintln!("Please enter a valid number of tunnel pairs.");
            return Ok(());
        };
        let mut rng = StdRng::from_os_rng();
        let linked = link_random_tunnels(&mut maze, pairs, &mut rng);
        tracing::info!(requested = pairs, linked, "linked tunnel pairs");
    }

    let input = read_line(&format!(
        "Select maze generation algorithm:\n1. {}\n2. {}\n3. {}",
        Generator::Kruskal,
        Generator::Prim,
        Generator::RecurBacktrack,
    ))?;
    let generator = match input.trim() {
        "1" => Generator::Kruskal,
        "2" => Generator::Prim,
        "3" => Generator::RecurBacktrack,
        _ => {
            eprintln!("Invalid selection.");
            return Ok(());
        }
    };
    generate_maze(&mut maze, generator, None);
    maze.render()?;

    let input = read_line(&format!(
        "Select maze solving algorithm:\n1. {}\n2. {}",
        Solver::RecurBacktrack,
        Solver::BiBfs,
    ))?;
    let solver = match input.trim() {
        "1" => Solver::RecurBacktrack,
        "2" => Solver::BiBfs,
        _ => {
            eprintln!("Invalid selection.");
            return Ok(());
        }
    };
    let report = solve_maze(&maze, solver, None, |coord| {
        tracing::trace!(?coord, "explored");
    });

    if report.solved {
        println!(
            "Maze solved! Explored {} of {} cells.",
            report.cells_explored,
            maze.valid_cell_count()
        );
    } else {
        println!("No path found between entrance and exit.");
    }
    Ok(())
}
