use std::collections::VecDeque;

use super::cell::{Cell, Direction};
use crate::MazeError;

/// A rectangular maze: `rows` x `cols` cells stored in row-major order.
///
/// The grid starts fully walled and is only ever mutated through [`Grid::carve`],
/// which always opens both sides of a shared edge, so wall symmetry holds at all times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    data: Box<[Cell]>,
    rows: usize,
    cols: usize,
}

impl Grid {
    /// Creates a fully walled grid.
    /// Fails with [`MazeError::InvalidDimension`] if either dimension is zero.
    pub fn new(rows: usize, cols: usize) -> Result<Self, MazeError> {
        if rows < 1 || cols < 1 {
            return Err(MazeError::InvalidDimension { rows, cols });
        }
        let len = rows
            .checked_mul(cols)
            .ok_or(MazeError::InvalidDimension { rows, cols })?;
        let data = (0..len)
            .map(|i| Cell::new(i / cols, i % cols))
            .collect::<Vec<_>>()
            .into_boxed_slice();
        Ok(Grid { data, rows, cols })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false: a grid has at least one cell.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn in_bounds(&self, coord: (usize, usize)) -> bool {
        coord.0 < self.rows && coord.1 < self.cols
    }

    /// Row-major index of a coordinate. The coordinate must be in bounds.
    pub(crate) fn ravel_index(&self, coord: (usize, usize)) -> usize {
        coord.0 * self.cols + coord.1
    }

    fn check_bounds(&self, coord: (usize, usize)) -> Result<(), MazeError> {
        if self.in_bounds(coord) {
            Ok(())
        } else {
            Err(MazeError::OutOfBounds(format!(
                "cell {:?} in a {}x{} grid",
                coord, self.rows, self.cols
            )))
        }
    }

    /// Returns the cell at `(row, col)`.
    pub fn cell_at(&self, row: usize, col: usize) -> Result<&Cell, MazeError> {
        self.check_bounds((row, col))?;
        Ok(&self.data[self.ravel_index((row, col))])
    }

    /// Whether the wall on the `direction` side of `coord` is still standing.
    pub fn has_wall(&self, coord: (usize, usize), direction: Direction) -> Result<bool, MazeError> {
        Ok(self.cell_at(coord.0, coord.1)?.has_wall(direction))
    }

    /// In-bounds neighbors of `coord`, always in North, East, South, West order.
    /// A coordinate outside the grid has no neighbors.
    pub fn neighbors(&self, coord: (usize, usize)) -> impl Iterator<Item = (usize, usize)> + '_ {
        let inside = self.in_bounds(coord);
        Direction::ALL
            .into_iter()
            .filter(move |_| inside)
            .filter_map(move |dir| dir.step(coord))
            .filter(move |&c| self.in_bounds(c))
    }

    /// Neighbors reachable from `coord` through an open passage.
    pub fn open_neighbors(
        &self,
        coord: (usize, usize),
    ) -> impl Iterator<Item = (usize, usize)> + '_ {
        let inside = self.in_bounds(coord);
        Direction::ALL
            .into_iter()
            .filter(move |&dir| inside && !self.data[self.ravel_index(coord)].has_wall(dir))
            .filter_map(move |dir| dir.step(coord))
            .filter(move |&c| self.in_bounds(c))
    }

    /// Removes the wall between two edge-adjacent cells, on both sides.
    ///
    /// Carving an already open passage leaves the grid unchanged.
    ///
    /// # Errors
    /// * [`MazeError::OutOfBounds`] if either cell lies outside the grid
    /// * [`MazeError::NotAdjacent`] if the cells are equal or not one step apart
    pub fn carve(&mut self, a: (usize, usize), b: (usize, usize)) -> Result<(), MazeError> {
        self.check_bounds(a)?;
        self.check_bounds(b)?;
        let direction = Direction::between(a, b).ok_or(MazeError::NotAdjacent { a, b })?;

        let ia = self.ravel_index(a);
        let ib = self.ravel_index(b);
        self.data[ia].remove_wall(direction);
        self.data[ib].remove_wall(direction.opposite());
        Ok(())
    }

    /// Whether an open passage joins `a` and `b` directly.
    pub fn is_open(&self, a: (usize, usize), b: (usize, usize)) -> Result<bool, MazeError> {
        self.check_bounds(b)?;
        let direction = Direction::between(a, b).ok_or(MazeError::NotAdjacent { a, b })?;
        Ok(!self.has_wall(a, direction)?)
    }

    /// Whether a path of carved passages leads from `a` to `b`.
    pub fn is_connected(&self, a: (usize, usize), b: (usize, usize)) -> Result<bool, MazeError> {
        self.check_bounds(a)?;
        self.check_bounds(b)?;
        Ok(self.reachable_from(a)[self.ravel_index(b)])
    }

    /// Flags, in row-major order, every cell reachable from `start` through open passages.
    pub(crate) fn reachable_from(&self, start: (usize, usize)) -> Vec<bool> {
        let mut seen = vec![false; self.len()];
        let mut queue = VecDeque::from([start]);
        seen[self.ravel_index(start)] = true;

        while let Some(coord) = queue.pop_front() {
            for next in self.open_neighbors(coord) {
                let idx = self.ravel_index(next);
                if !seen[idx] {
                    seen[idx] = true;
                    queue.push_back(next);
                }
            }
        }
        seen
    }

    /// Number of open internal edges. Each passage is counted once.
    pub fn carved_edges(&self) -> usize {
        self.data
            .iter()
            .map(|cell| {
                let east = cell.col + 1 < self.cols && !cell.has_wall(Direction::East);
                let south = cell.row + 1 < self.rows && !cell.has_wall(Direction::South);
                east as usize + south as usize
            })
            .sum()
    }

    /// True when the carved passages form a spanning tree of the grid.
    pub fn is_perfect(&self) -> bool {
        self.carved_edges() == self.len() - 1 && self.reachable_from((0, 0)).iter().all(|&r| r)
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.data.iter()
    }

    /// Restores every wall.
    pub fn reset(&mut self) {
        self.data.iter_mut().for_each(|cell| *cell = Cell::new(cell.row, cell.col));
    }
}

impl std::ops::Index<(usize, usize)> for Grid {
    type Output = Cell;

    /// Panics if the coordinate is out of bounds; use [`Grid::cell_at`] for a checked lookup.
    fn index(&self, index: (usize, usize)) -> &Self::Output {
        assert!(
            self.in_bounds(index),
            "cell {:?} is out of bounds for a {}x{} grid",
            index,
            self.rows,
            self.cols
        );
        &self.data[self.ravel_index(index)]
    }
}
