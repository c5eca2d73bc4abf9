//! Randomized threshold relaxation of the symmetric state matrix.
//!
//! # Algorithm
//!
//! 1. Fill the upper triangle with independent fair coin flips, mirrored
//! 2. For each step:
//!    a. Draw `i` and `j` uniformly from `0..n` (a self-pair burns the step)
//!    b. Compute the local field of the `(i, j)` cell
//!    c. Set the cell to 1 if the field is negative, else 0
//!
//! There is no convergence test. The state may still be oscillating when
//! the budget runs out.

use rand::Rng;

use super::config::StepBudget;
use crate::error::{HopfieldError, Result};
use crate::matrix::{DistanceMatrix, StateMatrix};

/// Counters for one call to [`StateRelaxer::relax`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RelaxStats {
    /// Steps consumed, self-pairs included.
    pub steps: usize,
    /// Steps where `i == j` and nothing was updated.
    pub self_pairs_skipped: usize,
    /// Updates that flipped a cell.
    pub cells_changed: usize,
    /// Unordered pairs set to 1 when the relaxation finished.
    pub ones_after: usize,
}

/// Owns the state matrix and drives it toward a local energy minimum.
#[derive(Debug, Clone)]
pub struct StateRelaxer {
    state: StateMatrix,
}

impl StateRelaxer {
    /// Creates a relaxer with an all-zero state for `n` cities.
    pub fn new(n: usize) -> Self {
        Self {
            state: StateMatrix::zeros(n),
        }
    }

    /// Starts from a known state instead of a random one.
    pub fn from_state(state: StateMatrix) -> Self {
        Self { state }
    }

    /// Draws a fresh random state: one fair bit per unordered pair, in
    /// row-major order over the upper triangle.
    pub fn initialize<R: Rng>(&mut self, rng: &mut R) {
        let n = self.state.size();
        for i in 0..n {
            for j in (i + 1)..n {
                let bit: u8 = rng.random_range(0..2);
                self.state.set_symmetric(i, j, bit);
            }
        }
    }

    /// Runs exactly `budget` update steps.
    ///
    /// # Errors
    ///
    /// `InvalidDimension` if the state and `distances` differ in size. The
    /// state is left untouched and no random numbers are drawn.
    pub fn relax<R: Rng>(
        &mut self,
        budget: impl Into<StepBudget>,
        distances: &DistanceMatrix,
        rng: &mut R,
    ) -> Result<RelaxStats> {
        self.state.check_matches(distances)?;
        Ok(self.relax_matched(budget.into(), distances, rng))
    }

    /// Relaxation loop. `distances` must match the state in size.
    pub(crate) fn relax_matched<R: Rng>(
        &mut self,
        budget: StepBudget,
        distances: &DistanceMatrix,
        rng: &mut R,
    ) -> RelaxStats {
        let steps = budget.get();
        let n = self.state.size();
        let mut stats = RelaxStats {
            steps,
            ..RelaxStats::default()
        };

        if n == 0 {
            return stats;
        }

        for _ in 0..steps {
            let i = rng.random_range(0..n);
            let j = rng.random_range(0..n);
            if i == j {
                stats.self_pairs_skipped += 1;
                continue;
            }
            if self.apply_threshold(i, j, distances) {
                stats.cells_changed += 1;
            }
        }

        stats.ones_after = self.state.ones();
        stats
    }

    /// Local field of cell `(i, j)`.
    ///
    /// `Σ_{l ∉ {i, j}} d(i,l)·(s[l][j] − s[l][i]) + d(j,l)·(s[i][l] − s[j][l])`
    ///
    /// # Errors
    ///
    /// `InvalidDimension` on a size mismatch or an out-of-range city.
    pub fn local_field(&self, i: usize, j: usize, distances: &DistanceMatrix) -> Result<f64> {
        self.check_pair(i, j, distances)?;
        Ok(self.field(i, j, distances))
    }

    /// Applies the threshold rule to `(i, j)`. Returns whether the cell changed.
    ///
    /// A self-pair is left alone.
    ///
    /// # Errors
    ///
    /// `InvalidDimension` on a size mismatch or an out-of-range city.
    pub fn update_pair(&mut self, i: usize, j: usize, distances: &DistanceMatrix) -> Result<bool> {
        self.check_pair(i, j, distances)?;
        Ok(self.apply_threshold(i, j, distances))
    }

    fn check_pair(&self, i: usize, j: usize, distances: &DistanceMatrix) -> Result<()> {
        self.state.check_matches(distances)?;
        let n = self.state.size();
        if i >= n || j >= n {
            return Err(HopfieldError::dimension(format!(
                "city pair ({i}, {j}) out of range for {n} cities"
            )));
        }
        Ok(())
    }

    fn field(&self, i: usize, j: usize, distances: &DistanceMatrix) -> f64 {
        let s = &self.state;
        let mut sum = 0.0;
        for l in 0..s.size() {
            if l == i || l == j {
                continue;
            }
            sum += distances.get(i, l) * (f64::from(s.get(l, j)) - f64::from(s.get(l, i)));
            sum += distances.get(j, l) * (f64::from(s.get(i, l)) - f64::from(s.get(j, l)));
        }
        sum
    }

    fn apply_threshold(&mut self, i: usize, j: usize, distances: &DistanceMatrix) -> bool {
        if i == j {
            return false;
        }
        let field = self.field(i, j, distances);
        self.state.set_symmetric(i, j, u8::from(field < 0.0))
    }

    /// Current state.
    pub fn state(&self) -> &StateMatrix {
        &self.state
    }

    /// Consumes the relaxer, returning its state.
    pub fn into_state(self) -> StateMatrix {
        self.state
    }
}
