//! # percolation
//!
//! Percolation simulation on an n-by-n grid of open/blocked sites.
//!
//! A system *percolates* when a chain of open, 4-adjacent sites links
//! the top row to the bottom row. The core model answers open/full/
//! percolates queries in near-constant amortized time by tracking
//! connectivity with a weighted quick-union forest augmented with two
//! virtual border sentinels.
//!
//! ## Modules
//!
//! - [`grid`] — the incremental grid connectivity model ([`Percolation`])
//! - [`collections`] — the union-find forest backing it
//! - [`threshold`] — Monte Carlo threshold estimation ([`ThresholdStats`])
//! - [`stats`] — numerically stable mean/variance helpers
//! - [`random`] — seeded RNG construction for reproducible experiments
//!
//! ## Design Philosophy
//!
//! - **Flat indexed state**: parent/size/open arrays over integer site
//!   indices, no pointer-based graph nodes
//! - **No global randomness**: every random source is passed in, so a
//!   fixed seed reproduces an experiment exactly
//! - **Property-based testing**: connectivity invariants verified
//!   against brute-force flood fill via proptest
//!
//! ## Example
//!
//! ```
//! use percolation::Percolation;
//!
//! let mut grid = Percolation::new(2).unwrap();
//! grid.open(1, 2).unwrap();
//! grid.open(2, 2).unwrap();
//! assert!(grid.percolates());
//! ```

pub mod collections;
pub mod grid;
pub mod random;
pub mod stats;
pub mod threshold;

pub use grid::{Percolation, PercolationError};
pub use threshold::ThresholdStats;
