//! Percolation model on an n-by-n grid of open/blocked sites.
//!
//! The system *percolates* when a chain of open, 4-adjacent sites
//! connects the top row to the bottom row. Connectivity is tracked
//! incrementally with a [`UnionFind`] forest over `n*n + 2` elements:
//! one per grid site plus two virtual sentinel nodes standing in for
//! "the whole top row" and "the whole bottom row". The sentinels reduce
//! the percolation question to a single connectivity query instead of a
//! graph search, and sites opened in the top row are unioned with the
//! top sentinel immediately, so fullness queries are near-constant time
//! as well.
//!
//! Rows and columns are 1-indexed, matching the usual presentation of
//! the model. All state lives in flat arrays indexed by the flattened
//! site position `n*(row-1) + (col-1)`.
//!
//! # Reference
//!
//! Sedgewick & Wayne (2011), *Algorithms*, 4th ed., §1.5 — the
//! percolation case study this model follows.

use crate::collections::UnionFind;

/// Error raised on caller misuse of the percolation API.
///
/// There is exactly one failure mode: an argument outside its documented
/// domain. Inputs are never clamped or substituted; the error propagates
/// to the caller unmodified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PercolationError {
    /// A grid size or site coordinate violates its constraints.
    InvalidArgument(String),
}

impl std::fmt::Display for PercolationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PercolationError::InvalidArgument(msg) => {
                write!(f, "invalid argument: {msg}")
            }
        }
    }
}

impl std::error::Error for PercolationError {}

/// Incremental percolation model over an n-by-n grid.
///
/// Sites start blocked and are opened one at a time with [`open`];
/// [`is_full`] asks whether a site is connected to the top row through
/// open sites, and [`percolates`] whether the top row reaches the
/// bottom row.
///
/// The model owns its state exclusively and is single-threaded; callers
/// sharing one across threads must serialize access themselves.
///
/// [`open`]: Percolation::open
/// [`is_full`]: Percolation::is_full
/// [`percolates`]: Percolation::percolates
///
/// # Examples
/// ```
/// use percolation::Percolation;
///
/// let mut grid = Percolation::new(3).unwrap();
/// grid.open(1, 1).unwrap();
/// grid.open(2, 1).unwrap();
/// assert!(grid.is_full(2, 1).unwrap());
/// assert!(!grid.percolates());
///
/// grid.open(3, 1).unwrap();
/// assert!(grid.percolates());
/// assert_eq!(grid.open_site_count(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct Percolation {
    n: usize,
    /// Open flags for the `n*n` grid sites plus the two virtual slots,
    /// which stay open for the model's whole lifetime.
    sites: Vec<bool>,
    forest: UnionFind,
    open_count: usize,
}

impl Percolation {
    /// Creates an n-by-n grid with every site blocked.
    ///
    /// Allocates `n*n + 2` union-find slots: the grid plus the virtual
    /// top node (index `n*n`) and virtual bottom node (index `n*n + 1`).
    ///
    /// # Errors
    /// Returns [`PercolationError::InvalidArgument`] if `n == 0`.
    pub fn new(n: usize) -> Result<Self, PercolationError> {
        if n == 0 {
            return Err(PercolationError::InvalidArgument(
                "grid size must be at least 1, got 0".into(),
            ));
        }
        let slots = n * n + 2;
        let mut sites = vec![false; slots];
        sites[n * n] = true;
        sites[n * n + 1] = true;
        Ok(Self {
            n,
            sites,
            forest: UnionFind::new(slots),
            open_count: 0,
        })
    }

    /// Opens the site `(row, col)` if it is not open already.
    ///
    /// A newly-opened site is unioned with each of its in-bounds open
    /// 4-neighbors, and with the virtual top node when it lies in row 1.
    /// Re-opening an open site is harmless: the counter does not move
    /// and the neighbor unions degrade to no-ops.
    ///
    /// # Errors
    /// Returns [`PercolationError::InvalidArgument`] if `row` or `col`
    /// is outside `[1, n]`.
    pub fn open(&mut self, row: usize, col: usize) -> Result<(), PercolationError> {
        self.check_bounds(row, col)?;
        let p = self.site(row, col);

        if !self.sites[p] {
            self.sites[p] = true;
            self.open_count += 1;
        }

        if col < self.n {
            self.link(p, p + 1); // right
        }
        if col > 1 {
            self.link(p, p - 1); // left
        }
        if row > 1 {
            self.link(p, p - self.n); // up
        }
        if row < self.n {
            self.link(p, p + self.n); // down
        }
        if row == 1 {
            let top = self.virtual_top();
            self.link(p, top);
        }
        Ok(())
    }

    /// Is the site `(row, col)` open?
    ///
    /// # Errors
    /// Returns [`PercolationError::InvalidArgument`] if `row` or `col`
    /// is outside `[1, n]`.
    pub fn is_open(&self, row: usize, col: usize) -> Result<bool, PercolationError> {
        self.check_bounds(row, col)?;
        Ok(self.sites[self.site(row, col)])
    }

    /// Is the site `(row, col)` full, i.e. open and connected through
    /// the union-find forest to an open site in the top row?
    ///
    /// Top-row sites are joined to the virtual top node as they open, so
    /// this is a single connectivity query, meaningful with or without
    /// any prior [`percolates`](Percolation::percolates) call.
    ///
    /// # Errors
    /// Returns [`PercolationError::InvalidArgument`] if `row` or `col`
    /// is outside `[1, n]`.
    pub fn is_full(&mut self, row: usize, col: usize) -> Result<bool, PercolationError> {
        self.check_bounds(row, col)?;
        let p = self.site(row, col);
        let top = self.virtual_top();
        Ok(self.sites[p] && self.forest.connected(p, top))
    }

    /// Does the system percolate?
    ///
    /// Joins every open bottom-row site with the virtual bottom node
    /// (already-joined pairs are no-ops; top-row joins were applied as
    /// the sites opened), then asks whether the two sentinels share a
    /// component. Safe to call repeatedly and interleaved with further
    /// [`open`](Percolation::open) calls; once true, it stays true.
    pub fn percolates(&mut self) -> bool {
        let bottom = self.virtual_bottom();
        for col in 1..=self.n {
            let p = self.site(self.n, col);
            self.link(p, bottom);
        }
        let top = self.virtual_top();
        self.forest.connected(top, bottom)
    }

    /// Returns the number of open sites.
    ///
    /// # Complexity
    /// O(1)
    pub fn open_site_count(&self) -> usize {
        self.open_count
    }

    /// Flattened index of a 1-indexed `(row, col)` site.
    fn site(&self, row: usize, col: usize) -> usize {
        self.n * (row - 1) + (col - 1)
    }

    fn virtual_top(&self) -> usize {
        self.n * self.n
    }

    fn virtual_bottom(&self) -> usize {
        self.n * self.n + 1
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<(), PercolationError> {
        if row < 1 || row > self.n || col < 1 || col > self.n {
            return Err(PercolationError::InvalidArgument(format!(
                "site ({row}, {col}) is outside the {n}-by-{n} grid",
                n = self.n
            )));
        }
        Ok(())
    }

    /// Unions `p` and `q` only when both are marked open. Linking an
    /// already-connected pair is a no-op.
    fn link(&mut self, p: usize, q: usize) {
        if self.sites[p] && self.sites[q] {
            self.forest.union(p, q);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_all_blocked() {
        let mut grid = Percolation::new(4).unwrap();
        assert_eq!(grid.open_site_count(), 0);
        for row in 1..=4 {
            for col in 1..=4 {
                assert!(!grid.is_open(row, col).unwrap());
                assert!(!grid.is_full(row, col).unwrap());
            }
        }
        assert!(!grid.percolates());
    }

    #[test]
    fn test_new_zero_size() {
        assert!(Percolation::new(0).is_err());
    }

    #[test]
    fn test_out_of_bounds() {
        let mut grid = Percolation::new(3).unwrap();
        for &(row, col) in &[(0, 1), (1, 0), (4, 1), (1, 4), (0, 0), (7, 7)] {
            assert!(grid.open(row, col).is_err(), "open({row}, {col})");
            assert!(grid.is_open(row, col).is_err(), "is_open({row}, {col})");
            assert!(grid.is_full(row, col).is_err(), "is_full({row}, {col})");
        }
        // Misuse must not have mutated anything.
        assert_eq!(grid.open_site_count(), 0);
    }

    #[test]
    fn test_error_display() {
        let err = Percolation::new(3).unwrap().open(9, 1).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("(9, 1)"), "unexpected message: {msg}");
    }

    #[test]
    fn test_open_is_idempotent() {
        let mut grid = Percolation::new(3).unwrap();
        grid.open(2, 2).unwrap();
        assert_eq!(grid.open_site_count(), 1);

        grid.open(2, 2).unwrap();
        assert_eq!(grid.open_site_count(), 1);
        assert!(grid.is_open(2, 2).unwrap());
        assert!(!grid.is_full(2, 2).unwrap());
        assert!(!grid.percolates());
    }

    #[test]
    fn test_column_scenario() {
        // Open a left-edge column top to bottom, checking after each step.
        let mut grid = Percolation::new(3).unwrap();

        grid.open(1, 1).unwrap();
        assert!(grid.is_full(1, 1).unwrap());
        assert!(!grid.percolates());

        grid.open(2, 1).unwrap();
        assert!(grid.is_full(2, 1).unwrap());
        assert!(!grid.percolates());

        grid.open(3, 1).unwrap();
        assert!(grid.percolates());
        assert_eq!(grid.open_site_count(), 3);
    }

    #[test]
    fn test_single_cell_grid() {
        // In a 1x1 grid the lone site is in both border rows at once.
        let mut grid = Percolation::new(1).unwrap();
        assert!(!grid.percolates());
        grid.open(1, 1).unwrap();
        assert!(grid.is_full(1, 1).unwrap());
        assert!(grid.percolates());
        assert_eq!(grid.open_site_count(), 1);
    }

    #[test]
    fn test_open_without_top_connection_is_not_full() {
        let mut grid = Percolation::new(3).unwrap();
        grid.open(3, 3).unwrap();
        grid.open(2, 2).unwrap();
        assert!(grid.is_open(3, 3).unwrap());
        assert!(!grid.is_full(3, 3).unwrap());
        assert!(!grid.is_full(2, 2).unwrap());
    }

    #[test]
    fn test_no_diagonal_adjacency() {
        let mut grid = Percolation::new(2).unwrap();
        grid.open(1, 1).unwrap();
        grid.open(2, 2).unwrap();
        assert!(!grid.is_full(2, 2).unwrap());
        assert!(!grid.percolates());

        // Completing the corner joins the diagonal.
        grid.open(2, 1).unwrap();
        assert!(grid.is_full(2, 2).unwrap());
        assert!(grid.percolates());
    }

    #[test]
    fn test_fullness_spreads_on_late_connection() {
        // A dangling open cluster becomes full the moment a path to the
        // top row appears.
        let mut grid = Percolation::new(3).unwrap();
        grid.open(3, 2).unwrap();
        grid.open(2, 2).unwrap();
        assert!(!grid.is_full(3, 2).unwrap());

        grid.open(1, 2).unwrap();
        assert!(grid.is_full(2, 2).unwrap());
        assert!(grid.is_full(3, 2).unwrap());
    }

    #[test]
    fn test_percolates_idempotent_and_interleaved() {
        let mut grid = Percolation::new(2).unwrap();
        assert!(!grid.percolates());
        assert!(!grid.percolates());

        grid.open(1, 2).unwrap();
        assert!(!grid.percolates());

        grid.open(2, 2).unwrap();
        assert!(grid.percolates());
        assert!(grid.percolates());

        // Opening more sites never revokes percolation.
        grid.open(1, 1).unwrap();
        grid.open(2, 1).unwrap();
        assert!(grid.percolates());
    }
}
