//! One-shot configured run.

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::config::HopfieldConfig;
use super::extractor::SolveResult;
use super::relaxer::RelaxStats;
use super::solver::HopfieldSolver;
use crate::error::Result;
use crate::matrix::DistanceMatrix;

/// Result of a [`HopfieldRunner`] run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HopfieldResult {
    /// Best tour over all start cities.
    pub solution: SolveResult,

    /// Relaxation counters.
    pub relax: RelaxStats,

    /// Seed actually used. Feed it back through
    /// [`HopfieldConfig::with_seed`] to reproduce the run.
    pub seed: u64,
}

/// Executes initialize, relax and extract in one call.
pub struct HopfieldRunner;

impl HopfieldRunner {
    /// Runs the solver on `distances` with `config`.
    ///
    /// # Errors
    ///
    /// Returns [`HopfieldError::InvalidConfig`](crate::HopfieldError::InvalidConfig)
    /// if the configuration does not validate.
    pub fn run(distances: &DistanceMatrix, config: &HopfieldConfig) -> Result<HopfieldResult> {
        config.validate()?;

        let seed = config.seed.unwrap_or_else(rand::random);
        let mut solver = HopfieldSolver::new(distances.clone(), StdRng::seed_from_u64(seed))
            .with_extraction(config.extraction)?;

        let relax = solver.relax(config.max_steps);
        let solution = solver.solve();

        Ok(HopfieldResult {
            solution,
            relax,
            seed,
        })
    }
}
