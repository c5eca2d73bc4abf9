//! Dense square matrices: the validated distance input and the symmetric
//! binary state the relaxation works on.

use crate::error::{HopfieldError, Result};

/// A validated n×n symmetric distance matrix stored in row-major order.
///
/// Entries are `f64`; integer distances are represented exactly, so sums of
/// integer tours compare exactly as well.
///
/// Construction rejects empty, non-square and asymmetric input, a non-zero
/// diagonal, and negative or non-finite entries. Once built the matrix is
/// immutable.
///
/// # Examples
///
/// ```
/// use hopfield_tsp::matrix::DistanceMatrix;
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0.0, 5.0, 2.0],
///     vec![5.0, 0.0, 3.0],
///     vec![2.0, 3.0, 0.0],
/// ])
/// .unwrap();
/// assert_eq!(dm.size(), 3);
/// assert_eq!(dm.get(0, 2), 2.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")
)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix from an explicit row-major n×n buffer.
    pub fn from_data(size: usize, data: Vec<f64>) -> Result<Self> {
        if size == 0 {
            return Err(HopfieldError::dimension("matrix must have at least one city"));
        }
        if data.len() != size * size {
            return Err(HopfieldError::dimension(format!(
                "expected {} entries for {size} cities, got {}",
                size * size,
                data.len()
            )));
        }
        let dm = Self { data, size };
        dm.validate()?;
        Ok(dm)
    }

    /// Creates a distance matrix from a vector of rows.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let size = rows.len();
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != size) {
            return Err(HopfieldError::dimension(format!(
                "row {i} has {} entries, expected {size}",
                row.len()
            )));
        }
        Self::from_data(size, rows.into_iter().flatten().collect())
    }

    /// Creates a distance matrix from integer rows.
    pub fn from_integer_rows<R: AsRef<[i64]>>(rows: &[R]) -> Result<Self> {
        Self::from_rows(
            rows.iter()
                .map(|r| r.as_ref().iter().map(|&d| d as f64).collect())
                .collect(),
        )
    }

    fn validate(&self) -> Result<()> {
        let n = self.size;
        for i in 0..n {
            if self.get(i, i) != 0.0 {
                return Err(HopfieldError::dimension(format!(
                    "diagonal entry ({i}, {i}) is {}, expected 0",
                    self.get(i, i)
                )));
            }
            for j in 0..n {
                let d = self.get(i, j);
                if !d.is_finite() || d < 0.0 {
                    return Err(HopfieldError::dimension(format!(
                        "entry ({i}, {j}) = {d} is not a non-negative finite distance"
                    )));
                }
                if j > i && d != self.get(j, i) {
                    return Err(HopfieldError::dimension(format!(
                        "asymmetric entries ({i}, {j}) = {d} and ({j}, {i}) = {}",
                        self.get(j, i)
                    )));
                }
            }
        }
        Ok(())
    }

    /// Returns the distance between cities `from` and `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[inline]
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Returns the distances from city `from` to every city.
    pub fn row(&self, from: usize) -> &[f64] {
        &self.data[from * self.size..(from + 1) * self.size]
    }

    /// Number of cities.
    pub fn size(&self) -> usize {
        self.size
    }
}

impl TryFrom<Vec<Vec<f64>>> for DistanceMatrix {
    type Error = HopfieldError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self> {
        Self::from_rows(rows)
    }
}

impl From<DistanceMatrix> for Vec<Vec<f64>> {
    fn from(dm: DistanceMatrix) -> Self {
        dm.data.chunks(dm.size).map(<[f64]>::to_vec).collect()
    }
}

/// Symmetric binary n×n matrix used as the relaxation's working memory.
///
/// The only write path is [`set_symmetric`](Self::set_symmetric), so
/// `get(i, j) == get(j, i)` holds at every observable point. The diagonal
/// is unused and always reads 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateMatrix {
    data: Vec<u8>,
    size: usize,
}

impl StateMatrix {
    /// Creates an all-zero state of the given size.
    pub fn zeros(size: usize) -> Self {
        Self {
            data: vec![0; size * size],
            size,
        }
    }

    /// Builds a state from the upper triangle of `rows`, mirroring it.
    ///
    /// Any non-zero value is stored as 1. Entries on or below the diagonal
    /// are ignored.
    pub fn from_upper<R: AsRef<[u8]>>(rows: &[R]) -> Self {
        let mut state = Self::zeros(rows.len());
        for (i, row) in rows.iter().enumerate() {
            for (j, &v) in row.as_ref().iter().enumerate().skip(i + 1) {
                if j < state.size {
                    state.set_symmetric(i, j, v);
                }
            }
        }
        state
    }

    /// Returns the cell at (i, j): 0 or 1.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> u8 {
        self.data[i * self.size + j]
    }

    /// Writes `value` (normalized to 0/1) to both (i, j) and (j, i).
    ///
    /// Writes to the diagonal are ignored. Returns `true` if the cell
    /// changed.
    #[inline]
    pub fn set_symmetric(&mut self, i: usize, j: usize, value: u8) -> bool {
        if i == j {
            return false;
        }
        let v = u8::from(value != 0);
        let changed = self.get(i, j) != v;
        self.data[i * self.size + j] = v;
        self.data[j * self.size + i] = v;
        changed
    }

    /// Number of cities.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Fails with `InvalidDimension` unless this state covers exactly the
    /// cities of `distances`.
    pub fn check_matches(&self, distances: &DistanceMatrix) -> Result<()> {
        if self.size != distances.size() {
            return Err(HopfieldError::dimension(format!(
                "state has {} cities but the distance matrix has {}",
                self.size,
                distances.size()
            )));
        }
        Ok(())
    }

    /// Number of unordered pairs currently set to 1.
    pub fn ones(&self) -> usize {
        self.iter_pairs().filter(|&(_, _, v)| v == 1).count()
    }

    /// Iterates the upper triangle as `(i, j, value)` with `i < j`.
    pub fn iter_pairs(&self) -> impl Iterator<Item = (usize, usize, u8)> + '_ {
        (0..self.size)
            .flat_map(move |i| ((i + 1)..self.size).map(move |j| (i, j, self.get(i, j))))
    }

    /// Returns `true` if every (i, j) equals (j, i) and the diagonal is 0.
    pub fn is_symmetric(&self) -> bool {
        (0..self.size).all(|i| {
            self.get(i, i) == 0 && ((i + 1)..self.size).all(|j| self.get(i, j) == self.get(j, i))
        })
    }
}
