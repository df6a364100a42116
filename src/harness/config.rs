//! Benchmark harness configuration.

use crate::bnb::{BnbConfig, Strategy};
use std::path::PathBuf;

/// Default plan file.
pub const DEFAULT_PLAN: &str = "test.INI";

/// Default report file.
pub const DEFAULT_REPORT: &str = "b&b_TSP_output.csv";

/// Configuration for [`Harness`](super::Harness).
///
/// # Examples
///
/// ```
/// use u_bnb::harness::HarnessConfig;
///
/// let config = HarnessConfig::default()
///     .with_report("results.csv")
///     .with_full_strategy_inputs(2);
/// assert_eq!(config.full_strategy_inputs, 2);
/// ```
#[derive(Debug, Clone)]
pub struct HarnessConfig {
    /// CSV file results are appended to.
    pub report: PathBuf,

    /// Number of leading plan entries that run every strategy; later
    /// entries only run the recursive search.
    pub full_strategy_inputs: usize,

    /// Restricts the strategies run. `None` = no restriction.
    pub strategies: Option<Vec<Strategy>>,

    /// Settings for each solver run. The strategy field is overridden.
    pub solver: BnbConfig,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            report: PathBuf::from(DEFAULT_REPORT),
            full_strategy_inputs: 3,
            strategies: None,
            solver: BnbConfig::default(),
        }
    }
}

impl HarnessConfig {
    pub fn with_report<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.report = path.into();
        self
    }

    pub fn with_full_strategy_inputs(mut self, n: usize) -> Self {
        self.full_strategy_inputs = n;
        self
    }

    pub fn with_strategies(mut self, strategies: Vec<Strategy>) -> Self {
        self.strategies = Some(strategies);
        self
    }

    pub fn with_solver(mut self, solver: BnbConfig) -> Self {
        self.solver = solver;
        self
    }
}
