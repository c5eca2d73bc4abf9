//! Seed 42, 10 000 steps on the reference six-city matrix.
//!
//! The expected state, counters and state-biased tour are produced by a
//! plain integer model that consumes the same seeded `StdRng` stream in
//! the documented order: upper-triangle bits row by row as `u8`, then per
//! step `i` before `j` as `usize`. Any change to draw order, draw types or
//! the update rule breaks the match.

use hopfield_tsp::hopfield::{ExtractionMode, HopfieldConfig, HopfieldRunner, HopfieldSolver};
use hopfield_tsp::matrix::DistanceMatrix;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SEED: u64 = 42;
const STEPS: usize = 10_000;
const WEIGHT: i64 = 3;

const REFERENCE: [[i64; 6]; 6] = [
    [0, 5, 2, 4, 9, 1],
    [5, 0, 3, 9, 3, 7],
    [2, 3, 0, 5, 6, 8],
    [4, 9, 5, 0, 2, 7],
    [9, 3, 6, 2, 0, 1],
    [1, 7, 8, 7, 1, 0],
];

struct Expected {
    state: Vec<Vec<i64>>,
    self_pairs_skipped: usize,
    cells_changed: usize,
    ones_after: usize,
}

fn replay(seed: u64, steps: usize) -> Expected {
    let d = &REFERENCE;
    let n = d.len();
    let mut rng = StdRng::seed_from_u64(seed);
    let mut s = vec![vec![0i64; n]; n];

    for i in 0..n {
        for j in (i + 1)..n {
            let bit: u8 = rng.random_range(0..2);
            s[i][j] = i64::from(bit);
            s[j][i] = i64::from(bit);
        }
    }

    let mut self_pairs_skipped = 0;
    let mut cells_changed = 0;
    for _ in 0..steps {
        let i: usize = rng.random_range(0..n);
        let j: usize = rng.random_range(0..n);
        if i == j {
            self_pairs_skipped += 1;
            continue;
        }
        let mut sum = 0i64;
        for l in 0..n {
            if l != i && l != j {
                sum += d[i][l] * (s[l][j] - s[l][i]);
                sum += d[j][l] * (s[i][l] - s[j][l]);
            }
        }
        let v = i64::from(sum < 0);
        if s[i][j] != v {
            cells_changed += 1;
        }
        s[i][j] = v;
        s[j][i] = v;
    }

    let ones_after = (0..n)
        .flat_map(|i| ((i + 1)..n).map(move |j| (i, j)))
        .filter(|&(i, j)| s[i][j] == 1)
        .count();
    Expected {
        state: s,
        self_pairs_skipped,
        cells_changed,
        ones_after,
    }
}

/// Nearest neighbor on `d − WEIGHT·s`, lowest index on ties, strict
/// improvement across start cities.
fn biased_best(s: &[Vec<i64>]) -> (Vec<usize>, i64) {
    let d = &REFERENCE;
    let n = d.len();
    let mut best: Option<(Vec<usize>, i64)> = None;
    for start in 0..n {
        let mut visited = vec![false; n];
        visited[start] = true;
        let mut tour = vec![start];
        let mut cost = 0;
        for _ in 1..n {
            let prev = tour[tour.len() - 1];
            let mut k = n;
            let mut min = i64::MAX;
            for l in 0..n {
                let score = d[prev][l] - WEIGHT * s[prev][l];
                if !visited[l] && score < min {
                    k = l;
                    min = score;
                }
            }
            visited[k] = true;
            tour.push(k);
            cost += d[prev][k];
        }
        cost += d[tour[n - 1]][start];
        if best.as_ref().is_none_or(|(_, c)| cost < *c) {
            best = Some((tour, cost));
        }
    }
    best.expect("at least one start city")
}

fn reference_matrix() -> DistanceMatrix {
    DistanceMatrix::from_integer_rows(&REFERENCE).expect("valid reference matrix")
}

#[test]
fn test_relaxed_state_matches_replay() {
    let expected = replay(SEED, STEPS);
    let mut solver = HopfieldSolver::with_seed(reference_matrix(), SEED);
    let stats = solver.relax(STEPS);

    assert_eq!(stats.steps, STEPS);
    assert_eq!(stats.self_pairs_skipped, expected.self_pairs_skipped);
    assert_eq!(stats.cells_changed, expected.cells_changed);
    assert_eq!(stats.ones_after, expected.ones_after);

    let state = solver.state();
    for (i, row) in expected.state.iter().enumerate() {
        for (j, &v) in row.iter().enumerate() {
            assert_eq!(i64::from(state.get(i, j)), v, "cell ({i}, {j})");
        }
    }
}

#[test]
fn test_self_pair_rate_is_plausible() {
    // one draw in six is a self-pair; mean 1666.7, sd about 37
    let expected = replay(SEED, STEPS);
    assert!(
        (1_400..=1_950).contains(&expected.self_pairs_skipped),
        "got {}",
        expected.self_pairs_skipped
    );
}

#[test]
fn test_state_biased_tour_matches_replay() {
    let expected = replay(SEED, STEPS);
    let (tour, cost) = biased_best(&expected.state);

    let config = HopfieldConfig::default()
        .with_seed(SEED)
        .with_max_steps(STEPS)
        .with_extraction(ExtractionMode::StateBiased {
            weight: WEIGHT as f64,
        });
    let result = HopfieldRunner::run(&reference_matrix(), &config).expect("valid config");

    assert_eq!(result.seed, SEED);
    assert_eq!(result.relax.cells_changed, expected.cells_changed);
    assert_eq!(result.solution.tour.cities(), tour.as_slice());
    assert_eq!(result.solution.cost, cost as f64);
}

#[test]
fn test_distance_mode_fixture() {
    let config = HopfieldConfig::default().with_seed(SEED).with_max_steps(STEPS);
    let result = HopfieldRunner::run(&reference_matrix(), &config).expect("valid config");
    assert_eq!(result.solution.tour.cities(), &[0, 5, 4, 3, 2, 1]);
    assert_eq!(result.solution.cost, 17.0);
    assert_eq!(result.relax.ones_after, replay(SEED, STEPS).ones_after);
}
