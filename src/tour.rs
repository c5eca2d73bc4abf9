//! Closed tours over a set of cities.

use crate::matrix::DistanceMatrix;

/// An ordering of all cities, each visited exactly once. The last city
/// implicitly connects back to the first.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tour(Vec<usize>);

impl Tour {
    pub(crate) fn new(cities: Vec<usize>) -> Self {
        Self(cities)
    }

    /// City indices in visiting order.
    pub fn cities(&self) -> &[usize] {
        &self.0
    }

    /// Number of cities in the tour.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the tour has no cities.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The city the tour starts (and ends) at.
    pub fn start(&self) -> Option<usize> {
        self.0.first().copied()
    }

    /// Total length: consecutive edges plus the closing edge back to the start.
    pub fn closed_cost(&self, distances: &DistanceMatrix) -> f64 {
        let open: f64 = self
            .0
            .windows(2)
            .map(|w| distances.get(w[0], w[1]))
            .sum();
        match (self.0.first(), self.0.last()) {
            (Some(&first), Some(&last)) => open + distances.get(last, first),
            _ => 0.0,
        }
    }

    /// Returns `true` if the tour visits every city in `0..n` exactly once.
    pub fn is_permutation_of(&self, n: usize) -> bool {
        if self.0.len() != n {
            return false;
        }
        let mut seen = vec![false; n];
        for &c in &self.0 {
            if c >= n || seen[c] {
                return false;
            }
            seen[c] = true;
        }
        true
    }

    /// Consumes the tour, returning the city indices.
    pub fn into_inner(self) -> Vec<usize> {
        self.0
    }
}

impl AsRef<[usize]> for Tour {
    fn as_ref(&self) -> &[usize] {
        &self.0
    }
}
