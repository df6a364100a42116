//! Benchmark execution.

use super::config::HarnessConfig;
use super::plan::{PlanEntry, RunPlan};
use super::report::{append_record, format_path, RunRecord};
use crate::bnb::{BnbRunner, Strategy};
use crate::error::TspResult;
use crate::matrix::CostMatrix;
use std::time::Instant;

/// Runs every plan entry with its selected strategies and records timings.
pub struct Harness {
    config: HarnessConfig,
}

impl Harness {
    pub fn new(config: HarnessConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    /// Runs the whole plan, appending one record per (entry, strategy) to
    /// the report as soon as it is finished.
    ///
    /// Stops at the first entry whose matrix cannot be loaded or whose
    /// search fails; records already written stay in the report.
    pub fn run(&self, plan: &RunPlan) -> TspResult<Vec<RunRecord>> {
        let mut records = Vec::new();
        for (index, entry) in plan.entries.iter().enumerate() {
            if entry.repeats == 0 {
                log::warn!("skipping {}: repeat count is 0", entry.input.display());
                continue;
            }

            let matrix = CostMatrix::read(&entry.input)?;
            for strategy in plan.strategies_for(index, &self.config) {
                let record = self.run_entry(index, entry, &matrix, strategy)?;
                append_record(&self.config.report, &record)?;
                records.push(record);
            }
        }
        Ok(records)
    }

    /// Times `entry.repeats` solves of `matrix` with `strategy`.
    pub fn run_entry(
        &self,
        index: usize,
        entry: &PlanEntry,
        matrix: &CostMatrix,
        strategy: Strategy,
    ) -> TspResult<RunRecord> {
        let solver = self.config.solver.clone().with_strategy(strategy);
        let mut times = Vec::with_capacity(entry.repeats);
        let mut last = None;

        for rep in 0..entry.repeats {
            let start = Instant::now();
            let result = BnbRunner::run(matrix, &solver)?;
            let elapsed = start.elapsed();

            log::info!(
                "{} {}.{} {} cost: {} time: {} [s]",
                strategy,
                index + 1,
                rep + 1,
                format_path(&result.path),
                result.cost,
                elapsed.as_secs_f64(),
            );

            times.push(elapsed);
            last = Some(result);
        }

        let (cost, path) = last.map(|r| (r.cost, r.path)).unwrap_or_default();
        Ok(RunRecord {
            input: entry.input.display().to_string(),
            strategy,
            repeats: entry.repeats,
            cost,
            path,
            times,
        })
    }
}
