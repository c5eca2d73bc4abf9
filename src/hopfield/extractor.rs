//! Nearest-neighbor tour extraction from every start city.
//!
//! For each start city the tour is extended with the closest unvisited
//! city (lowest index on ties) and closed back to the start. The cheapest
//! closed tour wins; on equal cost the earlier start city is kept.
//!
//! By default only distances are read. The relaxed state influences the
//! choice only when a state bias is attached explicitly.

use super::config::ExtractionMode;
use crate::error::{HopfieldError, Result};
use crate::matrix::{DistanceMatrix, StateMatrix};
use crate::tour::Tour;

/// Best tour found over all start cities.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolveResult {
    /// The cheapest tour.
    pub tour: Tour,

    /// Its closed length.
    pub cost: f64,

    /// Start city that produced it.
    pub start_city: usize,

    /// Closed length of the tour built from each start city, in order.
    pub candidate_costs: Vec<f64>,
}

/// Builds nearest-neighbor tours over a distance matrix.
#[derive(Debug, Clone, Copy)]
pub struct TourExtractor<'a> {
    distances: &'a DistanceMatrix,
    bias: Option<(&'a StateMatrix, f64)>,
}

impl<'a> TourExtractor<'a> {
    /// Pure distance extraction.
    pub fn new(distances: &'a DistanceMatrix) -> Self {
        Self {
            distances,
            bias: None,
        }
    }

    /// Makes edges set in `state` look `weight` shorter while choosing.
    ///
    /// # Errors
    ///
    /// `InvalidDimension` if `state` and the distances differ in size,
    /// `InvalidConfig` if `weight` is negative or not finite.
    pub fn with_state_bias(self, state: &'a StateMatrix, weight: f64) -> Result<Self> {
        state.check_matches(self.distances)?;
        ExtractionMode::StateBiased { weight }.validate()?;
        Ok(self.with_checked_bias(state, weight))
    }

    /// Attaches a bias already known to match the distances.
    pub(crate) fn with_checked_bias(mut self, state: &'a StateMatrix, weight: f64) -> Self {
        self.bias = Some((state, weight));
        self
    }

    fn score(&self, from: usize, to: usize) -> f64 {
        let d = self.distances.get(from, to);
        match self.bias {
            Some((state, weight)) => d - weight * f64::from(state.get(from, to)),
            None => d,
        }
    }

    /// Builds the nearest-neighbor tour starting at `start` and returns it
    /// with its closed length.
    ///
    /// # Errors
    ///
    /// `InvalidDimension` if `start` is not a city of the matrix.
    pub fn extract_from(&self, start: usize) -> Result<(Tour, f64)> {
        let n = self.distances.size();
        if start >= n {
            return Err(HopfieldError::dimension(format!(
                "start city {start} out of range for {n} cities"
            )));
        }
        Ok(self.build_from(start))
    }

    fn build_from(&self, start: usize) -> (Tour, f64) {
        let n = self.distances.size();
        let mut visited = vec![false; n];
        let mut tour = Vec::with_capacity(n);
        let mut cost = 0.0;

        visited[start] = true;
        tour.push(start);
        let mut current = start;

        for _ in 1..n {
            let mut next = None;
            let mut best_score = f64::INFINITY;
            for (l, &seen) in visited.iter().enumerate() {
                if seen {
                    continue;
                }
                let score = self.score(current, l);
                // strict: the lowest index wins ties
                if next.is_none() || score < best_score {
                    next = Some(l);
                    best_score = score;
                }
            }
            let Some(next) = next else { break };

            visited[next] = true;
            tour.push(next);
            cost += self.distances.get(current, next);
            current = next;
        }

        cost += self.distances.get(current, start);
        (Tour::new(tour), cost)
    }

    /// Tries every start city and keeps the strictly cheapest tour.
    pub fn extract_best(&self) -> SolveResult {
        let n = self.distances.size();
        let mut candidate_costs = Vec::with_capacity(n);

        // DistanceMatrix has at least one city, so start 0 always exists.
        let (mut tour, mut cost) = self.build_from(0);
        let mut start_city = 0;
        candidate_costs.push(cost);

        for start in 1..n {
            let (candidate, candidate_cost) = self.build_from(start);
            candidate_costs.push(candidate_cost);
            if candidate_cost < cost {
                tour = candidate;
                cost = candidate_cost;
                start_city = start;
            }
        }

        SolveResult {
            tour,
            cost,
            start_city,
            candidate_costs,
        }
    }
}
