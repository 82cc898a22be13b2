use crate::MazeError;

/// Disjoint sets over `0..n`, with path compression and union by rank.
/// Kruskal's generator builds one per run to tell which cells are already joined.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl UnionFind {
    /// `n` singleton sets.
    pub fn new(n: usize) -> Self {
        UnionFind {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    fn check(&self, x: usize) -> Result<(), MazeError> {
        if x < self.parent.len() {
            Ok(())
        } else {
            Err(MazeError::OutOfBounds(format!(
                "index {} in a set of {} elements",
                x,
                self.parent.len()
            )))
        }
    }

    /// Representative of the set containing `x`.
    /// Compresses the path it walks, so repeated lookups stay near constant time.
    pub fn find(&mut self, x: usize) -> Result<usize, MazeError> {
        self.check(x)?;
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        // Point every node on the path straight at the root
        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        Ok(root)
    }

    /// Merges the sets containing `x` and `y`.
    /// Returns `false`, without touching anything, if they already share a set.
    pub fn union(&mut self, x: usize, y: usize) -> Result<bool, MazeError> {
        let root_x = self.find(x)?;
        let root_y = self.find(y)?;

        if root_x == root_y {
            return Ok(false); // Already in same set
        }

        match self.rank[root_x].cmp(&self.rank[root_y]) {
            std::cmp::Ordering::Greater => {
                self.parent[root_y] = root_x;
            }
            std::cmp::Ordering::Less => {
                self.parent[root_x] = root_y;
            }
            std::cmp::Ordering::Equal => {
                self.parent[root_y] = root_x;
                self.rank[root_x] += 1;
            }
        }
        Ok(true)
    }
}
