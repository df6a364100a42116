//! Branch-and-bound execution loop.
//!
//! # Algorithm
//!
//! 1. Seed the frontier with the partial tour `[0]`
//! 2. Pop a state; drop it if its distance already exceeds the incumbent
//! 3. If it is a complete permutation, close the cycle and keep it when it
//!    strictly improves the incumbent
//! 4. Otherwise, for each unvisited location in ascending order, keep the
//!    child only if both its distance and its lower bound stay strictly
//!    below the incumbent
//! 5. When the frontier is empty the incumbent is optimal
//!
//! Ties never replace the incumbent, so among equal-cost tours the one
//! found first in traversal order is reported.

use super::config::{BnbConfig, Strategy};
use super::frontier::{
    BreadthFirstQueue, CallStack, DepthFirstStack, Expansion, Frontier, SearchNode,
};
use super::types::{FrontierState, SearchStats, ORIGIN};
use crate::error::{Interruption, TspError, TspResult};
use crate::matrix::{Cost, CostMatrix};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Result of a completed branch-and-bound run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BnbResult {
    /// Cost of the optimal cycle.
    pub cost: Cost,

    /// Optimal cycle, starting at location 0 (the return edge is implied).
    pub path: Vec<usize>,

    /// Strategy that produced the result.
    pub strategy: Strategy,

    /// Search counters.
    pub stats: SearchStats,

    /// Wall-clock time spent in the search.
    pub elapsed: Duration,
}

/// Executes branch-and-bound search.
pub struct BnbRunner;

impl BnbRunner {
    /// Solves `matrix` to optimality.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_bnb::bnb::{BnbConfig, BnbRunner};
    /// use u_bnb::matrix::CostMatrix;
    ///
    /// let m = CostMatrix::new(vec![
    ///     vec![0, 10, 15, 20],
    ///     vec![10, 0, 35, 25],
    ///     vec![15, 35, 0, 30],
    ///     vec![20, 25, 30, 0],
    /// ]).unwrap();
    /// let result = BnbRunner::run(&m, &BnbConfig::default()).unwrap();
    /// assert_eq!(result.cost, 80);
    /// ```
    pub fn run(matrix: &CostMatrix, config: &BnbConfig) -> TspResult<BnbResult> {
        Self::run_with_cancel(matrix, config, None)
    }

    /// Runs with an optional cancellation token.
    ///
    /// Cancellation, the time limit and the node limit are checked each
    /// time a node is popped; any of them ends the run with
    /// [`TspError::Interrupted`].
    pub fn run_with_cancel(
        matrix: &CostMatrix,
        config: &BnbConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> TspResult<BnbResult> {
        config.validate()?;

        let started = Instant::now();
        let n = matrix.len();

        // No routing decision exists for two or fewer locations.
        if n <= 2 {
            return Ok(BnbResult {
                cost: 0,
                path: (0..n).collect(),
                strategy: config.strategy,
                stats: SearchStats::default(),
                elapsed: started.elapsed(),
            });
        }

        let mut search = Search {
            matrix,
            config,
            cancel: cancel.as_deref(),
            deadline: config.time_limit.map(|limit| started + limit),
            best_cost: Cost::MAX,
            best_path: None,
            stats: SearchStats::default(),
        };

        let mut root = FrontierState::root(n);
        root.bound = config.bound.estimate(matrix, &root.path, &root.remaining);

        match config.strategy {
            Strategy::Recursive => search.explore(CallStack::new(), root)?,
            Strategy::BreadthFirst => search.explore(BreadthFirstQueue::new(), root)?,
            Strategy::DepthFirst => search.explore(DepthFirstStack::new(), root)?,
        }

        // Validated matrices keep every tour below Cost::MAX, so the first
        // completed tour always becomes the incumbent.
        let path = search.best_path.ok_or(TspError::CostOverflow {
            n,
            max_cost: matrix.max_cost(),
        })?;
        let elapsed = started.elapsed();

        log::info!(
            "{}: n={} cost={} popped={} expanded={} pruned={} peak_frontier={} in {:.3?}",
            config.strategy,
            n,
            search.best_cost,
            search.stats.states_popped,
            search.stats.states_expanded,
            search.stats.children_pruned,
            search.stats.peak_frontier,
            elapsed,
        );

        Ok(BnbResult {
            cost: search.best_cost,
            path,
            strategy: config.strategy,
            stats: search.stats,
            elapsed,
        })
    }

    /// Runs each strategy independently on the same matrix.
    ///
    /// With the `parallel` feature each strategy runs on its own rayon
    /// task; every run still owns its frontier and incumbent.
    pub fn compare(
        matrix: &CostMatrix,
        strategies: &[Strategy],
        config: &BnbConfig,
    ) -> TspResult<Vec<BnbResult>> {
        let run_one = |&strategy: &Strategy| {
            let config = config.clone().with_strategy(strategy);
            Self::run(matrix, &config)
        };

        #[cfg(feature = "parallel")]
        let results: TspResult<Vec<BnbResult>> =
            strategies.par_iter().map(run_one).collect();
        #[cfg(not(feature = "parallel"))]
        let results: TspResult<Vec<BnbResult>> = strategies.iter().map(run_one).collect();

        results
    }
}

/// Solves an `n`-location instance with `strategy` and default settings,
/// returning the optimal cost and cycle.
///
/// # Errors
///
/// [`TspError::DimensionMismatch`] if `n` differs from the matrix size.
pub fn solve(
    n: usize,
    matrix: &CostMatrix,
    strategy: Strategy,
) -> TspResult<(Cost, Vec<usize>)> {
    if n != matrix.len() {
        return Err(TspError::DimensionMismatch {
            expected: n,
            actual: matrix.len(),
        });
    }
    let result = BnbRunner::run(matrix, &BnbConfig::default().with_strategy(strategy))?;
    Ok((result.cost, result.path))
}

/// Mutable state of one run.
struct Search<'a> {
    matrix: &'a CostMatrix,
    config: &'a BnbConfig,
    cancel: Option<&'a AtomicBool>,
    deadline: Option<Instant>,
    best_cost: Cost,
    best_path: Option<Vec<usize>>,
    stats: SearchStats,
}

impl Search<'_> {
    fn explore<F: Frontier>(&mut self, mut frontier: F, root: FrontierState) -> TspResult<()> {
        frontier.push(SearchNode::new(root));
        self.stats.peak_frontier = 1;

        while let Some(mut node) = frontier.pop() {
            self.check_interrupt()?;

            if node.is_fresh() {
                self.stats.states_popped += 1;

                if self.config.pruning && node.state.distance > self.best_cost {
                    self.stats.states_discarded += 1;
                    continue;
                }
                if node.state.is_complete() {
                    self.close_tour(&node.state);
                    continue;
                }
                self.stats.states_expanded += 1;
            }

            let width = node.state.remaining.len();
            match F::EXPANSION {
                Expansion::Eager => {
                    for index in 0..width {
                        if let Some(child) = self.branch(&node.state, index) {
                            frontier.push(SearchNode::new(child));
                        }
                    }
                }
                Expansion::Deferred => {
                    let mut child = None;
                    while child.is_none() && node.next_child < width {
                        child = self.branch(&node.state, node.next_child);
                        node.next_child += 1;
                    }
                    if let Some(child) = child {
                        frontier.push(node);
                        frontier.push(SearchNode::new(child));
                    }
                }
            }

            self.stats.peak_frontier = self.stats.peak_frontier.max(frontier.len());
        }

        Ok(())
    }

    /// Builds the child that moves to `state.remaining[index]`, or `None`
    /// if it cannot beat the incumbent.
    fn branch(&mut self, state: &FrontierState, index: usize) -> Option<FrontierState> {
        let next = state.remaining[index];
        let distance = state.distance + self.matrix.cost(state.last(), next);
        if self.config.pruning && distance >= self.best_cost {
            self.stats.children_pruned += 1;
            return None;
        }

        let (path, remaining) = state.extend(index);
        let bound = self.config.bound.estimate(self.matrix, &path, &remaining);
        if self.config.pruning && bound >= self.best_cost {
            self.stats.children_pruned += 1;
            return None;
        }

        Some(FrontierState {
            path,
            remaining,
            distance,
            bound,
        })
    }

    fn close_tour(&mut self, state: &FrontierState) {
        self.stats.tours_completed += 1;
        let total = state.distance + self.matrix.cost(state.last(), ORIGIN);
        if total < self.best_cost {
            log::debug!("new incumbent: cost={} path={:?}", total, state.path);
            self.best_cost = total;
            self.best_path = Some(state.path.clone());
            self.stats.incumbent_updates += 1;
        }
    }

    fn check_interrupt(&self) -> TspResult<()> {
        let reason = if self.cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
            Some(Interruption::Cancelled)
        } else if self.config.max_nodes > 0 && self.stats.states_popped >= self.config.max_nodes {
            Some(Interruption::NodeLimit)
        } else if self.deadline.is_some_and(|deadline| Instant::now() >= deadline) {
            Some(Interruption::TimeLimit)
        } else {
            None
        };

        match reason {
            Some(reason) => {
                log::warn!(
                    "{} search interrupted ({}) after {} states",
                    self.config.strategy,
                    reason,
                    self.stats.states_popped
                );
                Err(TspError::Interrupted {
                    reason,
                    states_popped: self.stats.states_popped,
                })
            }
            None => Ok(()),
        }
    }
}
