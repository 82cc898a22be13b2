use std::str::FromStr;

use rand::{Rng, SeedableRng, rngs::StdRng};

mod kruskal;
mod prim;
mod recur_backtrack;
pub mod union_find;

pub use kruskal::randomized_kruskal;
pub use prim::randomized_prim;
pub use recur_backtrack::recursive_backtrack;

use crate::{
    MazeError,
    maze::{Coord, Grid},
};

/// Get a random number generator, optionally seeded for reproducibility.
pub fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Maze generation algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Generator {
    RecurBacktrack,
    Prim,
    Kruskal,
}

impl Generator {
    pub const ALL: [Generator; 3] = [
        Generator::RecurBacktrack,
        Generator::Prim,
        Generator::Kruskal,
    ];

    /// The short name accepted by [`Generator::from_str`].
    pub fn name(&self) -> &'static str {
        match self {
            Generator::RecurBacktrack => "backtracker",
            Generator::Prim => "prim",
            Generator::Kruskal => "kruskal",
        }
    }
}

impl std::fmt::Display for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Generator::RecurBacktrack => write!(f, "Recursive Backtracker (iterative DFS)"),
            Generator::Prim => write!(f, "Prim's Algorithm"),
            Generator::Kruskal => write!(f, "Kruskal's Algorithm"),
        }
    }
}

impl FromStr for Generator {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Generator::ALL
            .into_iter()
            .find(|g| g.name() == s)
            .ok_or_else(|| MazeError::UnknownAlgorithm(s.to_string()))
    }
}

/// Carve a fully walled `grid` in place with the given generator and random source.
/// Kruskal's algorithm has no start cell and ignores `start`.
pub fn carve_maze<R: Rng + ?Sized>(
    grid: &mut Grid,
    generator: Generator,
    start: Coord,
    rng: &mut R,
) -> Result<(), MazeError> {
    match generator {
        Generator::RecurBacktrack => recursive_backtrack(grid, start, rng),
        Generator::Prim => randomized_prim(grid, start, rng),
        Generator::Kruskal => randomized_kruskal(grid, rng),
    }
}

/// Build a `rows` x `cols` maze, starting from `start`, drawing every random choice from `rng`.
pub fn generate_maze_with<R: Rng + ?Sized>(
    rows: usize,
    cols: usize,
    generator: Generator,
    start: Coord,
    rng: &mut R,
) -> Result<Grid, MazeError> {
    let mut grid = Grid::new(rows, cols)?;
    tracing::debug!(
        "[generate] {}x{} maze with {} from {:?}",
        rows,
        cols,
        generator,
        start
    );
    carve_maze(&mut grid, generator, start, rng)?;
    Ok(grid)
}

/// Build a `rows` x `cols` maze starting from the top left cell.
/// The same seed always yields the same maze; `None` seeds from the OS.
pub fn generate_maze(
    rows: usize,
    cols: usize,
    generator: Generator,
    seed: Option<u64>,
) -> Result<Grid, MazeError> {
    let mut rng = get_rng(seed);
    generate_maze_with(rows, cols, generator, (0, 0), &mut rng)
}

/// Like [`generate_maze`], selecting the algorithm by name
/// (`"backtracker"`, `"prim"` or `"kruskal"`).
pub fn generate(
    rows: usize,
    cols: usize,
    algorithm: &str,
    seed: Option<u64>,
) -> Result<Grid, MazeError> {
    let generator = algorithm.parse::<Generator>()?;
    generate_maze(rows, cols, generator, seed)
}
