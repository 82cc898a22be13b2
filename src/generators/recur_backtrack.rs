use rand::Rng;

use crate::{
    MazeError,
    maze::{Coord, Grid},
};

/// Randomized depth-first carving with an explicit stack.
///
/// Each step looks at the cell on top of the stack: if it still has unvisited neighbors,
/// one is picked uniformly at random, carved into and pushed; otherwise the cell is popped.
/// Every carve reaches a new cell, so the passages always form a tree.
pub fn recursive_backtrack<R: Rng + ?Sized>(
    grid: &mut Grid,
    start: Coord,
    rng: &mut R,
) -> Result<(), MazeError> {
    grid.cell_at(start.0, start.1)?;

    let mut visited = vec![false; grid.len()];
    visited[grid.ravel_index(start)] = true;

    // Initialize the stack with the starting point
    let mut stack = vec![start];
    let mut carved = 0usize;

    while let Some(&cell) = stack.last() {
        let neighbors = grid
            .neighbors(cell)
            .filter(|&c| !visited[grid.ravel_index(c)])
            .collect::<Vec<_>>();

        if neighbors.is_empty() {
            // Dead end, backtrack
            stack.pop();
            continue;
        }

        let neighbor = neighbors[rng.random_range(0..neighbors.len())];
        grid.carve(cell, neighbor)?;
        visited[grid.ravel_index(neighbor)] = true;
        carved += 1;
        // Carry on from the neighbor; `cell` stays below it for later backtracking
        stack.push(neighbor);
    }

    tracing::debug!("[backtracker] carved {} passages from {:?}", carved, start);
    Ok(())
}
