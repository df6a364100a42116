//! Run plans: which instances to benchmark and how often.
//!
//! One entry per line, at least three whitespace-separated tokens:
//!
//! ```text
//! data/tsp_6.txt 10 6
//! data/tsp_10.txt 5 10
//! ```
//!
//! The first token is the instance file, the second the repeat count; the
//! rest is ignored. Lines with fewer than three tokens are skipped.

use super::config::HarnessConfig;
use crate::bnb::Strategy;
use crate::error::{TspError, TspResult};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// One instance to benchmark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanEntry {
    /// Cost matrix file.
    pub input: PathBuf,
    /// Number of timed repetitions per strategy.
    pub repeats: usize,
}

/// Ordered list of benchmark entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunPlan {
    pub entries: Vec<PlanEntry>,
}

impl RunPlan {
    /// Parses a plan from text.
    pub fn parse(text: &str) -> TspResult<Self> {
        text.parse()
    }

    /// Reads a plan file.
    pub fn load<P: AsRef<Path>>(path: P) -> TspResult<Self> {
        std::fs::read_to_string(path)?.parse()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Strategies to run for the entry at `index`.
    ///
    /// The recursive search runs for every entry; breadth-first and
    /// depth-first only for the first `config.full_strategy_inputs`
    /// entries, since they get expensive quickly. An explicit strategy
    /// filter in `config` is applied on top.
    pub fn strategies_for(&self, index: usize, config: &HarnessConfig) -> Vec<Strategy> {
        Strategy::ALL
            .into_iter()
            .filter(|&s| s == Strategy::Recursive || index < config.full_strategy_inputs)
            .filter(|s| config.strategies.as_ref().is_none_or(|only| only.contains(s)))
            .collect()
    }
}

impl FromStr for RunPlan {
    type Err = TspError;

    fn from_str(text: &str) -> TspResult<Self> {
        let mut entries = Vec::new();
        for (i, line) in text.lines().enumerate() {
            let tokens: Vec<&str> = line.split_whitespace().collect();
            if tokens.len() < 3 {
                continue;
            }
            let repeats = tokens[1].parse::<usize>().map_err(|e| TspError::Parse {
                line: i + 1,
                message: format!("invalid repeat count {:?}: {e}", tokens[1]),
            })?;
            entries.push(PlanEntry {
                input: PathBuf::from(tokens[0]),
                repeats,
            });
        }
        Ok(Self { entries })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_entries() {
        let plan = RunPlan::parse("a.txt 3 4\n\nshort 2\nb.txt 10 12 extra\n").unwrap();
        assert_eq!(plan.len(), 2);
        assert_eq!(
            plan.entries[0],
            PlanEntry {
                input: PathBuf::from("a.txt"),
                repeats: 3
            }
        );
        assert_eq!(plan.entries[1].input, PathBuf::from("b.txt"));
        assert_eq!(plan.entries[1].repeats, 10);
    }

    #[test]
    fn test_parse_bad_repeat() {
        let err = RunPlan::parse("a.txt 3 4\nb.txt many 5\n").unwrap_err();
        assert!(matches!(err, TspError::Parse { line: 2, .. }));
    }

    #[test]
    fn test_parse_empty() {
        assert!(RunPlan::parse("").unwrap().is_empty());
    }

    #[test]
    fn test_selection_rule() {
        let plan = RunPlan::parse("a 1 x\nb 1 x\nc 1 x\nd 1 x\n").unwrap();
        let config = HarnessConfig::default();
        for i in 0..3 {
            assert_eq!(plan.strategies_for(i, &config), Strategy::ALL.to_vec());
        }
        assert_eq!(plan.strategies_for(3, &config), vec![Strategy::Recursive]);
    }

    #[test]
    fn test_selection_with_filter() {
        let plan = RunPlan::parse("a 1 x\nb 1 x\n").unwrap();
        let config = HarnessConfig::default()
            .with_full_strategy_inputs(1)
            .with_strategies(vec![Strategy::DepthFirst]);
        assert_eq!(plan.strategies_for(0, &config), vec![Strategy::DepthFirst]);
        assert!(plan.strategies_for(1, &config).is_empty());
    }
}
