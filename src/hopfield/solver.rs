//! Stateful solver: one distance matrix, one relaxed state, one best tour.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::config::{ExtractionMode, StepBudget};
use super::extractor::{SolveResult, TourExtractor};
use super::relaxer::{RelaxStats, StateRelaxer};
use crate::error::Result;
use crate::matrix::{DistanceMatrix, StateMatrix};
use crate::tour::Tour;

/// Hopfield-style TSP solver.
///
/// The state is initialized randomly at construction. `relax` may be called
/// any number of times; budgets accumulate on the same state. `solve` reads
/// out the best nearest-neighbor tour and caches it.
///
/// # Examples
///
/// ```
/// use hopfield_tsp::hopfield::HopfieldSolver;
/// use hopfield_tsp::matrix::DistanceMatrix;
///
/// let dm = DistanceMatrix::from_integer_rows(&[
///     [0i64, 1, 9, 9],
///     [1, 0, 9, 1],
///     [9, 9, 0, 1],
///     [9, 1, 1, 0],
/// ])?;
/// let mut solver = HopfieldSolver::with_seed(dm, 42);
/// solver.relax(1_000usize);
/// let result = solver.solve();
/// assert_eq!(result.cost, 12.0);
/// # Ok::<(), hopfield_tsp::HopfieldError>(())
/// ```
#[derive(Debug, Clone)]
pub struct HopfieldSolver<R: Rng = StdRng> {
    distances: DistanceMatrix,
    relaxer: StateRelaxer,
    rng: R,
    extraction: ExtractionMode,
    best: Option<SolveResult>,
}

impl HopfieldSolver<StdRng> {
    /// Creates a solver with a `StdRng` seeded from `seed`.
    pub fn with_seed(distances: DistanceMatrix, seed: u64) -> Self {
        Self::new(distances, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> HopfieldSolver<R> {
    /// Creates a solver drawing from `rng` and initializes the state.
    pub fn new(distances: DistanceMatrix, mut rng: R) -> Self {
        let mut relaxer = StateRelaxer::new(distances.size());
        relaxer.initialize(&mut rng);
        Self {
            distances,
            relaxer,
            rng,
            extraction: ExtractionMode::default(),
            best: None,
        }
    }

    /// Selects the extraction mode used by [`solve`](Self::solve).
    pub fn with_extraction(mut self, mode: ExtractionMode) -> Result<Self> {
        mode.validate()?;
        self.extraction = mode;
        Ok(self)
    }

    /// Runs `budget` relaxation steps on the state.
    pub fn relax(&mut self, budget: impl Into<StepBudget>) -> RelaxStats {
        // the relaxer was sized from `distances` in `new`
        self.relaxer
            .relax_matched(budget.into(), &self.distances, &mut self.rng)
    }

    /// Extracts the best tour, caches it, and returns it.
    pub fn solve(&mut self) -> SolveResult {
        let extractor = TourExtractor::new(&self.distances);
        let result = match self.extraction {
            ExtractionMode::Distance => extractor.extract_best(),
            ExtractionMode::StateBiased { weight } => extractor
                .with_checked_bias(self.relaxer.state(), weight)
                .extract_best(),
        };
        self.best = Some(result.clone());
        result
    }

    /// Relaxes for `budget` steps, then solves.
    pub fn train(&mut self, budget: impl Into<StepBudget>) -> SolveResult {
        self.relax(budget);
        self.solve()
    }

    /// Best tour from the last `solve`, if any.
    pub fn best_tour(&self) -> Option<&Tour> {
        self.best.as_ref().map(|r| &r.tour)
    }

    /// Cost of the best tour from the last `solve`, if any.
    pub fn best_cost(&self) -> Option<f64> {
        self.best.as_ref().map(|r| r.cost)
    }

    /// Current relaxed state.
    pub fn state(&self) -> &StateMatrix {
        self.relaxer.state()
    }

    /// Distance matrix the solver was built with.
    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }

    /// Number of cities.
    pub fn size(&self) -> usize {
        self.distances.size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HopfieldError;

    fn six_cities() -> DistanceMatrix {
        DistanceMatrix::from_integer_rows(&[
            [0i64, 5, 2, 4, 9, 1],
            [5, 0, 3, 9, 3, 7],
            [2, 3, 0, 5, 6, 8],
            [4, 9, 5, 0, 2, 7],
            [9, 3, 6, 2, 0, 1],
            [1, 7, 8, 7, 1, 0],
        ])
        .expect("valid")
    }

    #[test]
    fn test_no_best_before_solve() {
        let solver = HopfieldSolver::with_seed(six_cities(), 1);
        assert!(solver.best_tour().is_none());
        assert!(solver.best_cost().is_none());
        assert!(solver.state().is_symmetric());
        assert_eq!(solver.size(), 6);
    }

    #[test]
    fn test_train_reference_matrix() {
        for seed in [0, 1, 42, 2024] {
            let mut solver = HopfieldSolver::with_seed(six_cities(), seed);
            let result = solver.train(10_000usize);
            assert_eq!(result.tour.cities(), &[0, 5, 4, 3, 2, 1]);
            assert_eq!(result.cost, 17.0);
            assert_eq!(solver.best_cost(), Some(17.0));
            assert_eq!(solver.best_tour(), Some(&result.tour));
        }
    }

    #[test]
    fn test_zero_steps_keeps_initial_state() {
        let mut solver = HopfieldSolver::with_seed(six_cities(), 5);
        let initial = solver.state().clone();
        let stats = solver.relax(0usize);
        assert_eq!(stats.steps, 0);
        assert_eq!(solver.state(), &initial);

        let result = solver.solve();
        assert!(result.tour.is_permutation_of(6));
    }

    #[test]
    fn test_same_seed_same_output() {
        let run = |seed| {
            let mut solver = HopfieldSolver::with_seed(six_cities(), seed)
                .with_extraction(ExtractionMode::StateBiased { weight: 3.0 })
                .expect("valid mode");
            let stats = solver.relax(2_000usize);
            (stats, solver.state().clone(), solver.solve())
        };
        assert_eq!(run(17), run(17));
    }

    #[test]
    fn test_biased_extraction_is_valid() {
        let mut solver = HopfieldSolver::with_seed(six_cities(), 8)
            .with_extraction(ExtractionMode::StateBiased { weight: 4.0 })
            .expect("valid mode");
        let result = solver.train(5_000usize);
        assert!(result.tour.is_permutation_of(6));
        assert_eq!(result.cost, result.tour.closed_cost(solver.distances()));
        assert_eq!(result.candidate_costs.len(), 6);
    }

    #[test]
    fn test_rejects_bad_mode() {
        let err = HopfieldSolver::with_seed(six_cities(), 0)
            .with_extraction(ExtractionMode::StateBiased { weight: -2.0 })
            .unwrap_err();
        assert!(matches!(err, HopfieldError::InvalidConfig { .. }));
    }

    #[test]
    fn test_signed_budget_checked_before_relax() {
        let mut solver = HopfieldSolver::with_seed(six_cities(), 0);
        assert_eq!(
            StepBudget::try_from(-10i64),
            Err(HopfieldError::InvalidStepBudget { steps: -10 })
        );
        let budget = StepBudget::try_from(10i64).expect("non-negative");
        assert_eq!(solver.relax(budget).steps, 10);
        assert!(solver.state().is_symmetric());
    }
}
