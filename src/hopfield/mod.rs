//! Hopfield-style relaxation for the symmetric TSP.
//!
//! A symmetric binary state matrix is relaxed by randomized hard-threshold
//! updates of single edge cells. A nearest-neighbor construction from every
//! start city then reads out the cheapest tour.
//!
//! In the default [`ExtractionMode::Distance`] the readout uses distances
//! only, so the relaxed state does not affect the returned tour.
//! [`ExtractionMode::StateBiased`] lets active state cells pull the
//! nearest-neighbor choice toward them.
//!
//! # References
//!
//! - Hopfield & Tank (1985), "Neural Computation of Decisions in Optimization Problems"
//! - Rosenkrantz, Stearns & Lewis (1977), "An Analysis of Several Heuristics for the TSP"

mod config;
mod extractor;
mod relaxer;
mod runner;
mod solver;

pub use config::{ExtractionMode, HopfieldConfig, StepBudget};
pub use extractor::{SolveResult, TourExtractor};
pub use relaxer::{RelaxStats, StateRelaxer};
pub use runner::{HopfieldResult, HopfieldRunner};
pub use solver::HopfieldSolver;
