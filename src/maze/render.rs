use crossterm::style::{Color, StyledContent, Stylize};

use super::{Coord, Direction, Maze, Topology};

/// The width of each cell when rendered, in character widths.
const CELL_WIDTH: usize = 2;

fn cell_glyph(maze: &Maze, coord: Coord) -> StyledContent<&'static str> {
    let glyph = if coord == maze.entrance() {
        "S ".with(Color::Green)
    } else if coord == maze.exit() {
        "G ".with(Color::Red)
    } else if maze.tunnel_to(coord).is_some() {
        "T ".with(Color::Yellow)
    } else {
        "  ".with(Color::Reset)
    };

    #[cfg(debug_assertions)]
    {
        use unicode_width::UnicodeWidthStr;
        assert_eq!(
            glyph.content().width(),
            CELL_WIDTH,
            "Each cell must occupy exactly two character widths."
        );
    }

    glyph
}

impl Maze {
    /// Prints the maze to stdout.
    ///
    /// Rectangular topologies are drawn with box walls; the entrance, exit and
    /// tunnel endpoints are colored. The hexagonal topology is drawn as a
    /// schematic: `|` between row neighbors, `\` and `/` for open links into
    /// the row below.
    pub fn render(&self) -> std::io::Result<()> {
        match self.topology() {
            Topology::Normal | Topology::Tunnel => self.render_rectangular(),
            Topology::Hex => self.render_hex(),
        }
        Ok(())
    }

    fn render_rectangular(&self) {
        // North is row + 1, so the highest row prints first.
        for r in (0..self.size_r()).rev() {
            for c in 0..self.size_c() {
                let north = self.wall((r, c), Direction::North);
                print!("+{}", if north { "--" } else { "  " });
            }
            println!("+");
            for c in 0..self.size_c() {
                let west = self.wall((r, c), Direction::West);
                print!("{}{}", if west { "|" } else { " " }, cell_glyph(self, (r, c)));
            }
            println!("|");
        }
        for _ in 0..self.size_c() {
            print!("+--");
        }
        println!("+");
    }

    fn render_hex(&self) {
        for r in (0..self.size_r()).rev() {
            let offset = ((r + 1) / 2) as usize;
            print!("{}", " ".repeat(offset * (CELL_WIDTH + 1)));
            for c in (r + 1) / 2..self.size_c() + (r + 1) / 2 {
                let west = self.wall((r, c), Direction::West);
                print!("{}{}", if west { "|" } else { " " }, cell_glyph(self, (r, c)));
            }
            println!("|");
            if r == 0 {
                break;
            }
            // Diagonal links down to row r - 1: South is straight down in
            // array columns, SouthWest one column left.
            print!("{}", " ".repeat(offset * (CELL_WIDTH + 1)));
            for c in (r + 1) / 2..self.size_c() + (r + 1) / 2 {
                let sw = self
                    .neighbor((r, c), Direction::SouthWest)
                    .is_some_and(|_| !self.wall((r, c), Direction::SouthWest));
                let s = self
                    .neighbor((r, c), Direction::South)
                    .is_some_and(|_| !self.wall((r, c), Direction::South));
                print!("{} {}", if sw { "/" } else { " " }, if s { "\\" } else { " " });
            }
            println!();
        }
    }
}
