//! Lower bounds for partial tours.
//!
//! The estimate is the exact cost of the edges already fixed by the path
//! plus, for every unvisited location, the cheapest edge it could leave
//! by. Each unvisited location leaves exactly once in any completion, so
//! summing those minima ignores only connectivity. The edge from the last
//! visited location into the unvisited set is not counted.

use super::config::BoundRule;
use crate::matrix::{Cost, CostMatrix};

impl BoundRule {
    /// Lower bound on the total tour cost reachable from `path`.
    ///
    /// `path` must be non-empty and start at the origin; `remaining` must
    /// hold exactly the locations not on `path`.
    pub fn estimate(self, matrix: &CostMatrix, path: &[usize], remaining: &[usize]) -> Cost {
        let fixed = matrix.path_cost(path);
        let origin = path[0];

        let relaxed: Cost = remaining
            .iter()
            .map(|&v| {
                let row = matrix.row(v);
                let nearest = remaining
                    .iter()
                    .filter(|&&u| u != v)
                    .map(|&u| row[u])
                    .min();
                match self {
                    BoundRule::NearestRemaining => nearest.unwrap_or(0),
                    BoundRule::NearestSuccessor => {
                        nearest.map_or(row[origin], |c| c.min(row[origin]))
                    }
                }
            })
            .sum();

        fixed + relaxed
    }
}
