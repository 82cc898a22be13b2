//! Perfect maze generation over rectangular grids.
//!
//! A maze is a [`Grid`] whose carved passages form a spanning tree: every cell is
//! reachable from every other by exactly one path. Three generators are available
//! ([`Generator`]), each fully determined by its random source.
//!
//! ```
//! use mazewright::{Generator, generate_maze};
//!
//! let grid = generate_maze(10, 10, Generator::Prim, Some(42)).unwrap();
//! assert_eq!(grid.carved_edges(), 99);
//! assert!(grid.is_perfect());
//! ```

mod error;
pub mod generators;
pub mod maze;
pub mod render;

pub use error::MazeError;
pub use generators::{Generator, generate, generate_maze, generate_maze_with};
pub use maze::{Cell, Coord, Direction, Grid, Walls};
