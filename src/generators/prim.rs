use std::collections::HashSet;

use rand::Rng;

use crate::{
    MazeError,
    maze::{Coord, Grid},
};

/// Frontier cells: a vector for uniform random draws, plus a set so membership is O(1).
/// A cell enters the frontier at most once.
#[derive(Default)]
struct Frontier {
    cells: Vec<Coord>,
    members: HashSet<Coord>,
}

impl Frontier {
    fn insert(&mut self, coord: Coord) -> bool {
        if self.members.insert(coord) {
            self.cells.push(coord);
            true
        } else {
            false
        }
    }

    fn take_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Coord> {
        if self.cells.is_empty() {
            return None;
        }
        let coord = self.cells.swap_remove(rng.random_range(0..self.cells.len()));
        self.members.remove(&coord);
        Some(coord)
    }
}

/// Randomized Prim's algorithm.
/// Requires `start` to lie inside the grid.
pub fn randomized_prim<R: Rng + ?Sized>(
    grid: &mut Grid,
    start: Coord,
    rng: &mut R,
) -> Result<(), MazeError> {
    grid.cell_at(start.0, start.1)?;

    let mut visited = vec![false; grid.len()];
    visited[grid.ravel_index(start)] = true;

    // Get the neighbors of the starting point and add them to the frontier set
    let mut frontier = Frontier::default();
    grid.neighbors(start).for_each(|coord| {
        frontier.insert(coord);
    });

    let mut carved = 0usize;
    // Pick a random frontier cell
    while let Some(cell) = frontier.take_random(rng) {
        // Cells of the maze next to this frontier cell. Only neighbors of visited
        // cells enter the frontier, so there is always at least one.
        let in_maze = grid
            .neighbors(cell)
            .filter(|&c| visited[grid.ravel_index(c)])
            .collect::<Vec<_>>();
        debug_assert!(!in_maze.is_empty(), "frontier cell {cell:?} touches no maze cell");

        let neighbor = in_maze[rng.random_range(0..in_maze.len())];
        grid.carve(cell, neighbor)?;
        visited[grid.ravel_index(cell)] = true;
        carved += 1;

        let fresh = grid
            .neighbors(cell)
            .filter(|&c| !visited[grid.ravel_index(c)])
            .collect::<Vec<_>>();
        for coord in fresh {
            frontier.insert(coord);
        }
    }

    tracing::debug!("[prim] carved {} passages from {:?}", carved, start);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_frontier_deduplicates() {
        let mut frontier = Frontier::default();
        assert!(frontier.insert((0, 1)));
        assert!(!frontier.insert((0, 1)));
        assert!(frontier.insert((1, 0)));
        assert_eq!(frontier.cells.len(), 2);

        let mut rng = StdRng::seed_from_u64(1);
        let first = frontier.take_random(&mut rng).unwrap();
        let second = frontier.take_random(&mut rng).unwrap();
        assert_ne!(first, second);
        assert!(frontier.take_random(&mut rng).is_none());
        assert!(frontier.members.is_empty());
    }

    #[test]
    fn test_randomized_prim() {
        let mut grid = Grid::new(7, 11).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        randomized_prim(&mut grid, (0, 0), &mut rng).unwrap();
        assert_eq!(grid.carved_edges(), 7 * 11 - 1);
        assert!(grid.is_perfect());
    }

    #[test]
    fn test_prim_from_center() {
        let mut grid = Grid::new(9, 9).unwrap();
        let mut rng = StdRng::seed_from_u64(99);
        randomized_prim(&mut grid, (4, 4), &mut rng).unwrap();
        assert!(grid.is_perfect());
    }

    #[test]
    fn test_every_seed_reaches_all_cells() {
        // Each drawn frontier cell must be joined to the maze
        for seed in 0..32 {
            let mut grid = Grid::new(4, 6).unwrap();
            let mut rng = StdRng::seed_from_u64(seed);
            randomized_prim(&mut grid, (seed as usize % 4, seed as usize % 6), &mut rng).unwrap();
            assert_eq!(grid.carved_edges(), 4 * 6 - 1);
            assert!(grid.is_perfect());
        }
    }

    #[test]
    fn test_single_cell() {
        let mut grid = Grid::new(1, 1).unwrap();
        let mut rng = StdRng::seed_from_u64(5);
        randomized_prim(&mut grid, (0, 0), &mut rng).unwrap();
        assert_eq!(grid.carved_edges(), 0);
        assert_eq!(grid, Grid::new(1, 1).unwrap());
    }
}
