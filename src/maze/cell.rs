use std::fmt;

/// One of the four cardinal directions a cell can have a wall in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// All directions, in the order neighbors are always reported.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// The wall bit this direction owns inside a [`Walls`] mask.
    pub const fn wall(self) -> Walls {
        match self {
            Direction::North => Walls::NORTH,
            Direction::East => Walls::EAST,
            Direction::South => Walls::SOUTH,
            Direction::West => Walls::WEST,
        }
    }

    pub const fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// Step from `coord` one cell in this direction.
    /// Returns `None` on underflow; the upper bound is left to the caller.
    pub fn step(self, coord: (usize, usize)) -> Option<(usize, usize)> {
        let (row, col) = coord;
        match self {
            Direction::North => row.checked_sub(1).map(|r| (r, col)),
            Direction::East => col.checked_add(1).map(|c| (row, c)),
            Direction::South => row.checked_add(1).map(|r| (r, col)),
            Direction::West => col.checked_sub(1).map(|c| (row, c)),
        }
    }

    /// The direction leading from `from` to `to`, if they are edge-adjacent.
    pub fn between(from: (usize, usize), to: (usize, usize)) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|dir| dir.step(from) == Some(to))
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::North => write!(f, "North"),
            Direction::East => write!(f, "East"),
            Direction::South => write!(f, "South"),
            Direction::West => write!(f, "West"),
        }
    }
}

/// A 4-bit wall mask: N = 1, E = 2, S = 4, W = 8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Walls(u8);

impl Walls {
    pub const NONE: Walls = Walls(0);
    pub const NORTH: Walls = Walls(1);
    pub const EAST: Walls = Walls(2);
    pub const SOUTH: Walls = Walls(4);
    pub const WEST: Walls = Walls(8);
    pub const ALL: Walls = Walls(0b1111);

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn contains(self, direction: Direction) -> bool {
        self.0 & direction.wall().0 != 0
    }

    pub fn remove(&mut self, direction: Direction) {
        self.0 &= !direction.wall().0;
    }

    /// Number of walls still standing.
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }
}

impl Default for Walls {
    fn default() -> Self {
        Walls::ALL
    }
}

/// A single cell of the grid: its position and the walls still standing around it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
    pub walls: Walls,
}

impl Cell {
    /// A fully walled cell at the given position.
    pub fn new(row: usize, col: usize) -> Self {
        Cell {
            row,
            col,
            walls: Walls::ALL,
        }
    }

    pub fn coord(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    pub fn has_wall(&self, direction: Direction) -> bool {
        self.walls.contains(direction)
    }

    pub(crate) fn remove_wall(&mut self, direction: Direction) {
        self.walls.remove(direction);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cell_is_fully_walled() {
        let cell = Cell::new(2, 3);
        assert_eq!(cell.walls, Walls::ALL);
        assert_eq!(cell.walls.bits(), 0b1111);
        assert!(Direction::ALL.iter().all(|&d| cell.has_wall(d)));
    }

    #[test]
    fn test_remove_wall_only_clears_that_bit() {
        let mut cell = Cell::new(0, 0);
        cell.remove_wall(Direction::East);
        assert!(!cell.has_wall(Direction::East));
        assert_eq!(cell.walls.bits(), 0b1101);
        // Removing it again changes nothing
        cell.remove_wall(Direction::East);
        assert_eq!(cell.walls.count(), 3);
    }

    #[test]
    fn test_opposites() {
        for dir in Direction::ALL {
            assert_eq!(dir.opposite().opposite(), dir);
            assert_ne!(dir.opposite(), dir);
        }
    }

    #[test]
    fn test_between() {
        assert_eq!(Direction::between((1, 1), (0, 1)), Some(Direction::North));
        assert_eq!(Direction::between((1, 1), (1, 2)), Some(Direction::East));
        assert_eq!(Direction::between((1, 1), (2, 1)), Some(Direction::South));
        assert_eq!(Direction::between((1, 1), (1, 0)), Some(Direction::West));
        assert_eq!(Direction::between((1, 1), (2, 2)), None);
        assert_eq!(Direction::between((1, 1), (1, 1)), None);
        assert_eq!(Direction::between((0, 0), (0, 2)), None);
    }
}
