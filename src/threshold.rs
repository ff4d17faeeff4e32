//! Monte Carlo estimation of the percolation threshold.
//!
//! Repeatedly opens uniformly-random sites on a blocked n-by-n grid
//! until the system percolates, records the fraction of open sites per
//! trial, and summarizes the trials with a sample mean, sample standard
//! deviation, and 95% confidence interval.
//!
//! For large `n` the mean converges near the known site-percolation
//! threshold of the square lattice, ≈ 0.5927.
//!
//! The random source is an explicitly passed [`rand::Rng`], so a fixed
//! seed (see [`crate::random::create_rng`]) reproduces an estimate
//! exactly.

use rand::Rng;

use crate::grid::{Percolation, PercolationError};
use crate::stats;

/// Critical value of the standard normal distribution for a two-sided
/// 95% confidence interval.
const Z_95: f64 = 1.96;

/// Summary of a Monte Carlo percolation-threshold experiment.
///
/// # Examples
/// ```
/// use percolation::random::create_rng;
/// use percolation::ThresholdStats;
///
/// let mut rng = create_rng(42);
/// let est = ThresholdStats::run(10, 20, &mut rng).unwrap();
/// assert_eq!(est.trials(), 20);
/// assert!(est.mean() > 0.0 && est.mean() <= 1.0);
/// let (lo, hi) = est.confidence_interval().unwrap();
/// assert!(lo <= est.mean() && est.mean() <= hi);
/// ```
#[derive(Debug, Clone)]
pub struct ThresholdStats {
    grid_size: usize,
    thresholds: Vec<f64>,
    mean: f64,
    std_dev: Option<f64>,
}

impl ThresholdStats {
    /// Runs `trials` independent experiments on an `n`-by-`n` grid.
    ///
    /// Each trial opens sites chosen uniformly at random (repeats are
    /// allowed; re-opening is absorbed by the model) until the system
    /// percolates, then records `open sites / n²`.
    ///
    /// # Errors
    /// Returns [`PercolationError::InvalidArgument`] if `n == 0` or
    /// `trials == 0`.
    pub fn run<R: Rng>(
        n: usize,
        trials: usize,
        rng: &mut R,
    ) -> Result<Self, PercolationError> {
        if trials == 0 {
            return Err(PercolationError::InvalidArgument(
                "trial count must be at least 1, got 0".into(),
            ));
        }

        let mut thresholds = Vec::with_capacity(trials);
        for _ in 0..trials {
            let mut grid = Percolation::new(n)?;
            while !grid.percolates() {
                let row = rng.random_range(1..=n);
                let col = rng.random_range(1..=n);
                grid.open(row, col)?;
            }
            thresholds.push(grid.open_site_count() as f64 / (n * n) as f64);
        }

        // trials >= 1, so the mean is always defined.
        let mean = stats::kahan_sum(&thresholds) / trials as f64;
        let std_dev = stats::std_dev(&thresholds);

        Ok(Self {
            grid_size: n,
            thresholds,
            mean,
            std_dev,
        })
    }

    /// Side length of the grid the experiment ran on.
    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    /// Number of trials performed.
    pub fn trials(&self) -> usize {
        self.thresholds.len()
    }

    /// Per-trial open-site fractions, in trial order.
    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    /// Sample mean of the percolation threshold.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Sample standard deviation of the threshold, or `None` for a
    /// single trial (the statistic is undefined, not zero).
    pub fn std_dev(&self) -> Option<f64> {
        self.std_dev
    }

    /// 95% confidence interval `mean ± 1.96·stddev/√trials`, or `None`
    /// when the standard deviation is undefined.
    pub fn confidence_interval(&self) -> Option<(f64, f64)> {
        let sd = self.std_dev?;
        let half = Z_95 * sd / (self.trials() as f64).sqrt();
        Some((self.mean - half, self.mean + half))
    }
}
