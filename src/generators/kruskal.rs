use rand::{Rng, seq::SliceRandom};

use crate::{
    MazeError,
    generators::union_find::UnionFind,
    maze::{Grid, all_edges},
};

/// Randomized Kruskal's algorithm: walk every edge of the grid in shuffled order and
/// carve it whenever its two cells are not yet joined.
/// Exactly `rows * cols - 1` edges end up carved.
pub fn randomized_kruskal<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) -> Result<(), MazeError> {
    // Collect all possible edges (walls between adjacent cells)
    let mut edges = all_edges(grid);

    // Shuffle edges randomly
    edges.shuffle(rng);

    // Initialize Union-Find for all cells
    let mut uf = UnionFind::new(grid.len());

    let mut carved = 0usize;
    for (a, b) in edges {
        // Convert cell coordinates to UnionFind indices
        let ia = grid.ravel_index(a);
        let ib = grid.ravel_index(b);

        // If cells are not yet connected, remove the wall between them
        if uf.find(ia)? != uf.find(ib)? {
            grid.carve(a, b)?;
            uf.union(ia, ib)?;
            carved += 1;
        }
    }

    tracing::debug!(
        "[kruskal] carved {} passages in a {}x{} grid",
        carved,
        grid.rows(),
        grid.cols()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_randomized_kruskal() {
        let mut grid = Grid::new(8, 13).unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        randomized_kruskal(&mut grid, &mut rng).unwrap();
        assert_eq!(grid.carved_edges(), 8 * 13 - 1);
        assert!(grid.is_perfect());
    }

    #[test]
    fn test_corridor() {
        let mut grid = Grid::new(1, 6).unwrap();
        let mut rng = StdRng::seed_from_u64(2);
        randomized_kruskal(&mut grid, &mut rng).unwrap();
        // A single row has only one spanning tree: every edge carved
        assert_eq!(grid.carved_edges(), 5);
        assert!(grid.is_connected((0, 0), (0, 5)).unwrap());
    }
}
