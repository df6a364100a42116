//! Branch-and-bound configuration, traversal strategies and bound rules.

use crate::error::{TspError, TspResult};
use std::str::FromStr;
use std::time::Duration;

/// Order in which pending partial tours are explored.
///
/// All strategies return the same optimal cost. They differ in memory
/// use and in how early a good incumbent is found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// Depth-first in native recursion order: the first child is explored
    /// completely before the next sibling is even evaluated.
    ///
    /// Runs on an explicit stack, so depth is not limited by the call stack.
    #[default]
    Recursive,

    /// Breadth-first over a FIFO queue, level by level.
    ///
    /// The widest level can hold factorially many states; keep `n` small
    /// (roughly 12 or fewer on dense, uniform instances).
    BreadthFirst,

    /// Depth-first over an explicit LIFO stack. All children are evaluated
    /// when their parent is expanded and the last one pushed is explored
    /// first, i.e. siblings run in reverse order compared to
    /// [`Strategy::Recursive`].
    DepthFirst,
}

impl Strategy {
    /// All strategies, in the order a benchmark runs them.
    pub const ALL: [Strategy; 3] = [
        Strategy::Recursive,
        Strategy::BreadthFirst,
        Strategy::DepthFirst,
    ];

    /// Report label. These strings are part of the output format.
    pub fn label(self) -> &'static str {
        match self {
            Strategy::Recursive => "Low cost",
            Strategy::BreadthFirst => "Breadth search",
            Strategy::DepthFirst => "Depth search",
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Strategy {
    type Err = TspError;

    /// Accepts the report labels as well as short names
    /// (`recursive`, `bfs`, `dfs`, ...), case-insensitively.
    fn from_str(s: &str) -> TspResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low cost" | "low-cost" | "recursive" | "low_cost" => Ok(Strategy::Recursive),
            "breadth search" | "breadth" | "breadth-first" | "bfs" => Ok(Strategy::BreadthFirst),
            "depth search" | "depth" | "depth-first" | "dfs" => Ok(Strategy::DepthFirst),
            other => Err(TspError::InvalidConfig(format!("unknown strategy {other:?}"))),
        }
    }
}

/// Relaxation used to bound the cost of completing a partial tour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BoundRule {
    /// Every unvisited location pays its cheapest edge to another
    /// unvisited location or back to the origin.
    ///
    /// Never exceeds the true completion cost, so the search is exact on
    /// every matrix.
    #[default]
    NearestSuccessor,

    /// Every unvisited location pays its cheapest edge to another
    /// unvisited location; a lone unvisited location pays nothing.
    ///
    /// Ignores that the last location must return to the origin, so on
    /// matrices where returning is much cheaper than any edge between
    /// unvisited locations it can overestimate and prune the optimum.
    NearestRemaining,
}

/// Configuration for a branch-and-bound run.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use u_bnb::bnb::{BnbConfig, BoundRule, Strategy};
///
/// let config = BnbConfig::default()
///     .with_strategy(Strategy::DepthFirst)
///     .with_bound(BoundRule::NearestSuccessor)
///     .with_time_limit(Duration::from_secs(10));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct BnbConfig {
    /// Traversal order.
    pub strategy: Strategy,

    /// Lower-bound relaxation.
    pub bound: BoundRule,

    /// Whether partial tours are pruned against the incumbent.
    ///
    /// Disabling this enumerates every permutation; only useful for
    /// checking that pruning never changes the answer.
    pub pruning: bool,

    /// Wall-clock budget. `None` = no limit.
    pub time_limit: Option<Duration>,

    /// Maximum number of states popped from the frontier. 0 = no limit.
    pub max_nodes: u64,
}

impl Default for BnbConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            bound: BoundRule::default(),
            pruning: true,
            time_limit: None,
            max_nodes: 0,
        }
    }
}

impl BnbConfig {
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_bound(mut self, bound: BoundRule) -> Self {
        self.bound = bound;
        self
    }

    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }

    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    pub fn with_max_nodes(mut self, n: u64) -> Self {
        self.max_nodes = n;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> TspResult<()> {
        if self.time_limit.is_some_and(|t| t.is_zero()) {
            return Err(TspError::InvalidConfig(
                "time_limit must be positive".into(),
            ));
        }
        Ok(())
    }
}
