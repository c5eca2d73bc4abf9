//! Approximate symmetric TSP solving by Hopfield-style state relaxation.
//!
//! - **Matrices**: validated distance input and the symmetric binary state
//!   the relaxation works on ([`matrix`]).
//! - **Relaxation**: random initialization and randomized threshold updates
//!   of state cells ([`hopfield::StateRelaxer`]).
//! - **Extraction**: nearest-neighbor tours from every start city, keeping
//!   the cheapest ([`hopfield::TourExtractor`]).
//! - **Solver / Runner**: a stateful solver and a one-shot configured run
//!   ([`hopfield::HopfieldSolver`], [`hopfield::HopfieldRunner`]).
//!
//! All randomness flows through an explicit, seedable RNG, so a fixed seed
//! reproduces a run exactly.
//!
//! # Example
//!
//! ```
//! use hopfield_tsp::hopfield::{HopfieldConfig, HopfieldRunner};
//! use hopfield_tsp::matrix::DistanceMatrix;
//!
//! let dm = DistanceMatrix::from_integer_rows(&[
//!     [0i64, 5, 2, 4, 9, 1],
//!     [5, 0, 3, 9, 3, 7],
//!     [2, 3, 0, 5, 6, 8],
//!     [4, 9, 5, 0, 2, 7],
//!     [9, 3, 6, 2, 0, 1],
//!     [1, 7, 8, 7, 1, 0],
//! ])?;
//! let result = HopfieldRunner::run(&dm, &HopfieldConfig::default().with_seed(7))?;
//! assert_eq!(result.solution.tour.cities(), &[0, 5, 4, 3, 2, 1]);
//! assert_eq!(result.solution.cost, 17.0);
//! # Ok::<(), hopfield_tsp::HopfieldError>(())
//! ```

pub mod error;
pub mod hopfield;
pub mod matrix;
pub mod tour;

pub use error::{HopfieldError, Result};
