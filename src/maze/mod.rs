pub mod cell;
mod grid;

pub use cell::{Cell, Direction, Walls};
pub use grid::Grid;

/// A `(row, col)` position in the grid.
pub type Coord = (usize, usize);

/// Every edge of the grid graph, each listed once: the east edge then the south edge
/// of each cell, visiting cells in row-major order.
/// A `rows` x `cols` grid has `rows * (cols - 1) + cols * (rows - 1)` edges.
pub fn all_edges(grid: &Grid) -> Vec<(Coord, Coord)> {
    let (rows, cols) = (grid.rows(), grid.cols());
    (0..rows)
        .flat_map(|row| (0..cols).map(move |col| (row, col)))
        .flat_map(|(row, col)| {
            [
                (col + 1 < cols).then_some(((row, col), (row, col + 1))),
                (row + 1 < rows).then_some(((row, col), (row + 1, col))),
            ]
        })
        .flatten()
        .collect()
}
