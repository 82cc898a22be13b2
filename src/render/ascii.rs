use std::io::Write;

use crossterm::style::{Color, Stylize};

use crate::maze::{Direction, Grid};

/// Text columns per cell, including the shared left corner.
const CELL_WIDTH: usize = 4;
/// Text rows per cell, including the shared top edge.
const CELL_HEIGHT: usize = 2;

/// Character canvas of a maze. Each cell spans 4x2 characters plus the shared edges
/// to its right and bottom: `+` for corners, `---` and `|` for walls,
/// `S` for the top left cell and `F` for the bottom right one.
fn canvas(grid: &Grid) -> Vec<Vec<char>> {
    let height = grid.rows() * CELL_HEIGHT + 1;
    let width = grid.cols() * CELL_WIDTH + 1;
    let mut text = vec![vec![' '; width]; height];
    let finish = (grid.rows() - 1, grid.cols() - 1);

    for cell in grid.cells() {
        let y = cell.row * CELL_HEIGHT;
        let x = cell.col * CELL_WIDTH;

        for cy in [y, y + CELL_HEIGHT] {
            for cx in [x, x + CELL_WIDTH] {
                text[cy][cx] = '+';
            }
        }
        if cell.has_wall(Direction::North) {
            text[y][x + 1..x + CELL_WIDTH].fill('-');
        }
        if cell.has_wall(Direction::South) {
            text[y + CELL_HEIGHT][x + 1..x + CELL_WIDTH].fill('-');
        }
        if cell.has_wall(Direction::West) {
            text[y + 1][x] = '|';
        }
        if cell.has_wall(Direction::East) {
            text[y + 1][x + CELL_WIDTH] = '|';
        }

        if cell.coord() == (0, 0) {
            text[y + 1][x + 2] = 'S';
        } else if cell.coord() == finish {
            text[y + 1][x + 2] = 'F';
        }
    }
    text
}

/// Plain ASCII rendering, lines joined by `\n` without a trailing newline.
pub fn to_ascii(grid: &Grid) -> String {
    canvas(grid)
        .into_iter()
        .map(|line| line.into_iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Same layout as [`to_ascii`], colored for a terminal.
pub fn print_styled<W: Write>(grid: &Grid, out: &mut W) -> std::io::Result<()> {
    for line in canvas(grid) {
        for ch in line {
            match ch {
                'S' => write!(out, "{}", ch.with(Color::Green).bold())?,
                'F' => write!(out, "{}", ch.with(Color::Red).bold())?,
                ' ' => write!(out, " ")?,
                _ => write!(out, "{}", ch.with(Color::DarkGrey))?,
            }
        }
        writeln!(out)?;
    }
    out.flush()
}
