use thiserror::Error;

/// Validation failures surfaced by grid construction, carving and dispatch.
/// Generation itself cannot fail once its inputs have been validated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    #[error("maze dimensions must be at least 1x1 (got {rows}x{cols})")]
    InvalidDimension { rows: usize, cols: usize },
    #[error("out of bounds: {0}")]
    OutOfBounds(String),
    #[error("cells {a:?} and {b:?} are not adjacent")]
    NotAdjacent { a: (usize, usize), b: (usize, usize) },
    #[error("unknown algorithm '{0}', choose from: backtracker, prim, kruskal")]
    UnknownAlgorithm(String),
}
