//! Cost matrices for complete directed graphs.
//!
//! A [`CostMatrix`] holds the non-negative travel cost between every
//! ordered pair of `n` locations. Costs may be asymmetric; the diagonal
//! is stored but never read by the search.
//!
//! Matrices are validated once on construction and are immutable
//! afterwards, so a single matrix can be shared by reference across any
//! number of solver runs.

mod parse;

use crate::error::{TspError, TspResult};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Cost of a single edge or a (partial) tour.
pub type Cost = u64;

/// Square matrix of non-negative travel costs, stored row-major.
///
/// # Examples
///
/// ```
/// use u_bnb::matrix::CostMatrix;
///
/// let m = CostMatrix::new(vec![
///     vec![0, 10, 15],
///     vec![10, 0, 35],
///     vec![15, 35, 0],
/// ]).unwrap();
/// assert_eq!(m.len(), 3);
/// assert_eq!(m.cost(1, 2), 35);
/// assert_eq!(m.tour_cost(&[0, 1, 2]), 60);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawCostMatrix"))]
pub struct CostMatrix {
    n: usize,
    costs: Vec<Cost>,
}

/// Unvalidated wire form; deserialization goes through [`CostMatrix::from_flat`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawCostMatrix {
    n: usize,
    costs: Vec<Cost>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawCostMatrix> for CostMatrix {
    type Error = TspError;

    fn try_from(raw: RawCostMatrix) -> TspResult<Self> {
        CostMatrix::from_flat(raw.n, raw.costs)
    }
}

impl CostMatrix {
    /// Builds a matrix from rows, validating shape and values.
    ///
    /// # Errors
    ///
    /// - [`TspError::NotSquare`] if any row length differs from the row count
    /// - [`TspError::NegativeCost`] on a negative entry
    /// - [`TspError::CostOverflow`] if a tour sum could overflow [`Cost`]
    pub fn new(rows: Vec<Vec<i64>>) -> TspResult<Self> {
        let n = rows.len();
        let mut costs = Vec::with_capacity(n * n);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(TspError::NotSquare {
                    row: i,
                    len: row.len(),
                    expected: n,
                });
            }
            for (j, &value) in row.iter().enumerate() {
                if value < 0 {
                    return Err(TspError::NegativeCost {
                        row: i,
                        col: j,
                        value,
                    });
                }
                costs.push(value as Cost);
            }
        }
        Self::from_flat(n, costs)
    }

    /// Builds a matrix from `n * n` row-major costs.
    pub fn from_flat(n: usize, costs: Vec<Cost>) -> TspResult<Self> {
        let cells = cell_count(n)?;
        if costs.len() != cells {
            return Err(TspError::DimensionMismatch {
                expected: cells,
                actual: costs.len(),
            });
        }
        let matrix = Self { n, costs };
        let max_cost = matrix.max_cost();
        match max_cost.checked_mul(n as Cost) {
            Some(total) if total < Cost::MAX => Ok(matrix),
            _ => Err(TspError::CostOverflow { n, max_cost }),
        }
    }

    /// Generates a seeded random instance with off-diagonal costs in
    /// `1..=max_cost` (all zero when `max_cost` is 0).
    ///
    /// The result is asymmetric in general.
    pub fn random(n: usize, max_cost: Cost, seed: u64) -> TspResult<Self> {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut costs = vec![0; cell_count(n)?];
        if max_cost > 0 {
            for i in 0..n {
                for j in 0..n {
                    if i != j {
                        costs[i * n + j] = rng.random_range(1..=max_cost);
                    }
                }
            }
        }
        Self::from_flat(n, costs)
    }

    /// Number of locations.
    #[inline]
    pub fn len(&self) -> usize {
        self.n
    }

    /// Whether the matrix has no locations.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Cost of travelling from `from` to `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    #[inline]
    pub fn cost(&self, from: usize, to: usize) -> Cost {
        assert!(from < self.n && to < self.n, "location index out of range");
        self.costs[from * self.n + to]
    }

    /// Outgoing costs of `from`.
    #[inline]
    pub fn row(&self, from: usize) -> &[Cost] {
        &self.costs[from * self.n..(from + 1) * self.n]
    }

    /// Largest entry, 0 for an empty matrix.
    pub fn max_cost(&self) -> Cost {
        self.costs.iter().copied().max().unwrap_or(0)
    }

    /// Sum of the edges along `path` without the closing edge.
    pub fn path_cost(&self, path: &[usize]) -> Cost {
        path.windows(2).map(|w| self.cost(w[0], w[1])).sum()
    }

    /// Cost of the closed cycle through `path`, returning to `path[0]`.
    ///
    /// Paths of length 0 or 1 cost nothing.
    pub fn tour_cost(&self, path: &[usize]) -> Cost {
        match (path.first(), path.last()) {
            (Some(&first), Some(&last)) if path.len() > 1 => {
                self.path_cost(path) + self.cost(last, first)
            }
            _ => 0,
        }
    }
}

/// `n * n`, or an error when it does not fit in `usize`.
fn cell_count(n: usize) -> TspResult<usize> {
    n.checked_mul(n).ok_or(TspError::DimensionMismatch {
        expected: usize::MAX,
        actual: n,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CostMatrix {
        CostMatrix::new(vec![
            vec![0, 10, 15, 20],
            vec![10, 0, 35, 25],
            vec![15, 35, 0, 30],
            vec![20, 25, 30, 0],
        ])
        .unwrap()
    }

    #[test]
    fn test_new_and_lookup() {
        let m = sample();
        assert_eq!(m.len(), 4);
        assert!(!m.is_empty());
        assert_eq!(m.cost(0, 3), 20);
        assert_eq!(m.cost(3, 1), 25);
        assert_eq!(m.row(2), &[15, 35, 0, 30]);
        assert_eq!(m.max_cost(), 35);
    }

    #[test]
    fn test_tour_cost() {
        let m = sample();
        assert_eq!(m.tour_cost(&[0, 1, 3, 2]), 10 + 25 + 30 + 15);
        assert_eq!(m.path_cost(&[0, 1, 3, 2]), 10 + 25 + 30);
        assert_eq!(m.tour_cost(&[2]), 0);
        assert_eq!(m.tour_cost(&[]), 0);
    }

    #[test]
    fn test_asymmetric_allowed() {
        let m = CostMatrix::new(vec![vec![0, 1], vec![7, 0]]).unwrap();
        assert_eq!(m.cost(0, 1), 1);
        assert_eq!(m.cost(1, 0), 7);
        assert_eq!(m.tour_cost(&[0, 1]), 8);
    }

    #[test]
    fn test_empty_matrix() {
        let m = CostMatrix::new(Vec::new()).unwrap();
        assert!(m.is_empty());
        assert_eq!(m.max_cost(), 0);
    }

    #[test]
    fn test_not_square() {
        let err = CostMatrix::new(vec![vec![0, 1, 2], vec![1, 0]]).unwrap_err();
        assert!(matches!(
            err,
            TspError::NotSquare {
                row: 0,
                len: 3,
                expected: 2
            }
        ));
    }

    #[test]
    fn test_negative_cost() {
        let err = CostMatrix::new(vec![vec![0, -4], vec![1, 0]]).unwrap_err();
        assert!(matches!(
            err,
            TspError::NegativeCost {
                row: 0,
                col: 1,
                value: -4
            }
        ));
    }

    #[test]
    fn test_overflow_rejected() {
        let err = CostMatrix::from_flat(2, vec![0, Cost::MAX / 2 + 1, 1, 0]).unwrap_err();
        assert!(matches!(err, TspError::CostOverflow { n: 2, .. }));
    }

    #[test]
    fn test_from_flat_wrong_length() {
        let err = CostMatrix::from_flat(3, vec![0; 8]).unwrap_err();
        assert!(matches!(
            err,
            TspError::DimensionMismatch {
                expected: 9,
                actual: 8
            }
        ));
    }

    #[test]
    fn test_from_flat_huge_dimension() {
        #[cfg(target_pointer_width = "64")]
        {
            let err = CostMatrix::from_flat(1 << 33, Vec::new()).unwrap_err();
            assert!(matches!(err, TspError::DimensionMismatch { .. }));
        }
        let err = CostMatrix::from_flat(usize::MAX, Vec::new()).unwrap_err();
        assert!(matches!(err, TspError::DimensionMismatch { .. }));
        assert!(CostMatrix::random(usize::MAX, 10, 1).is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_validates() {
        let m: CostMatrix = serde_json::from_str(r#"{"n":2,"costs":[0,3,4,0]}"#).unwrap();
        assert_eq!(m.cost(1, 0), 4);
        assert!(serde_json::from_str::<CostMatrix>(r#"{"n":3,"costs":[1,2]}"#).is_err());
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(serde_json::from_str::<CostMatrix>(&json).unwrap(), m);
    }

    #[test]
    fn test_random_is_seeded() {
        let a = CostMatrix::random(6, 50, 42).unwrap();
        let b = CostMatrix::random(6, 50, 42).unwrap();
        assert_eq!(a, b);
        for i in 0..6 {
            assert_eq!(a.cost(i, i), 0);
            for j in 0..6 {
                if i != j {
                    assert!((1..=50).contains(&a.cost(i, j)));
                }
            }
        }
    }

    #[test]
    fn test_random_zero_max() {
        let m = CostMatrix::random(4, 0, 7).unwrap();
        assert_eq!(m.max_cost(), 0);
    }
}
