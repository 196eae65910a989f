use rand::seq::SliceRandom;
use rand::Rng;

/// Largest accepted grid order.
///
/// Keeps every cell value at most three digits wide on the printed page.
pub const MAX_ORDER: usize = 255;

/// A Schulte grid of order `n`.
///
/// A Schulte grid is an `n x n` array holding each value in `{0..n*n-1}`
/// exactly once, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchulteGrid {
    n: usize,
    cells: Vec<u32>,
}

impl SchulteGrid {
    /// Creates the sequential grid of order `n`: `G[r][c] = r * n + c`.
    ///
    /// # Panics
    /// Panics if `n < 1` or `n > 255`.
    pub fn sequential(n: usize) -> Self {
        assert!((1..=MAX_ORDER).contains(&n), "n must be in range 1..=255");
        let cells = (0..(n * n) as u32).collect();
        Self { n, cells }
    }

    /// Creates a uniformly shuffled grid of order `n`.
    ///
    /// Every permutation of the entries is equally likely. The output is
    /// deterministic given a seeded generator.
    ///
    /// # Panics
    /// Panics if `n < 1` or `n > 255`.
    pub fn shuffled<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Self {
        let mut grid = Self::sequential(n);
        grid.cells.shuffle(rng);
        grid
    }

    /// Returns the order of the grid.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Returns the value at position `(r, c)`.
    ///
    /// # Panics
    /// Panics if `r >= n` or `c >= n`.
    pub fn get(&self, r: usize, c: usize) -> u32 {
        assert!(r < self.n && c < self.n, "index out of bounds");
        self.cells[r * self.n + c]
    }

    /// Returns the cells as a flat slice in row-major order.
    ///
    /// The cell at position (r, c) is at index `r * n + c`.
    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    /// Returns true if every value in `{0..n*n-1}` appears exactly once.
    ///
    /// This is a test-only helper for validation. The permutation property
    /// is an invariant enforced by construction.
    #[cfg(test)]
    pub(crate) fn is_permutation(&self) -> bool {
        let mut seen = vec![false; self.cells.len()];
        for &v in &self.cells {
            let v = v as usize;
            if v >= seen.len() || seen[v] {
                return false;
            }
            seen[v] = true;
        }
        true
    }
}
