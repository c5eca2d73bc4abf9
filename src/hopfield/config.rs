//! Solver configuration: step budget, extraction mode and runner settings.

use crate::error::{HopfieldError, Result};

/// Number of relaxation steps, self-pairs included.
///
/// Built infallibly from `usize`. A signed count goes through
/// [`TryFrom<i64>`], which rejects negative values instead of clamping them.
///
/// # Examples
///
/// ```
/// use hopfield_tsp::hopfield::StepBudget;
///
/// assert_eq!(StepBudget::from(100usize).get(), 100);
/// assert!(StepBudget::try_from(-1i64).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StepBudget(usize);

impl StepBudget {
    /// The number of steps.
    pub fn get(self) -> usize {
        self.0
    }
}

impl From<usize> for StepBudget {
    fn from(steps: usize) -> Self {
        Self(steps)
    }
}

impl TryFrom<i64> for StepBudget {
    type Error = HopfieldError;

    fn try_from(steps: i64) -> Result<Self> {
        usize::try_from(steps)
            .map(Self)
            .map_err(|_| HopfieldError::InvalidStepBudget { steps })
    }
}

/// How the nearest-neighbor extraction picks the next city.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExtractionMode {
    /// Pure nearest neighbor on distance. The relaxed state is not read.
    #[default]
    Distance,

    /// Nearest neighbor on `d(prev, l) − weight · s[prev][l]`.
    ///
    /// Edges the relaxation switched on look `weight` shorter while
    /// choosing. The tour cost still uses true distances.
    StateBiased {
        /// Bias subtracted from active edges. Finite, `>= 0`.
        weight: f64,
    },
}

impl ExtractionMode {
    /// Validates the mode parameters.
    pub fn validate(&self) -> Result<()> {
        if let ExtractionMode::StateBiased { weight } = *self {
            if !weight.is_finite() || weight < 0.0 {
                return Err(HopfieldError::config(format!(
                    "state bias weight must be finite and >= 0, got {weight}"
                )));
            }
        }
        Ok(())
    }
}

/// Configuration for [`HopfieldRunner`](super::HopfieldRunner).
///
/// # Examples
///
/// ```
/// use hopfield_tsp::hopfield::{ExtractionMode, HopfieldConfig};
///
/// let config = HopfieldConfig::default()
///     .with_max_steps(5_000)
///     .with_seed(42)
///     .with_extraction(ExtractionMode::StateBiased { weight: 0.5 });
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HopfieldConfig {
    /// Relaxation steps, self-pairs included.
    pub max_steps: usize,

    /// Random seed for reproducibility. `None` draws one per run.
    pub seed: Option<u64>,

    /// Tour extraction mode.
    pub extraction: ExtractionMode,
}

impl Default for HopfieldConfig {
    fn default() -> Self {
        Self {
            max_steps: 10_000,
            seed: None,
            extraction: ExtractionMode::default(),
        }
    }
}

impl HopfieldConfig {
    pub fn with_max_steps(mut self, steps: usize) -> Self {
        self.max_steps = steps;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_extraction(mut self, mode: ExtractionMode) -> Self {
        self.extraction = mode;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        self.extraction.validate()
    }
}
