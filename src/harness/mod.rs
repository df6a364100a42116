//! Benchmark harness.
//!
//! Reads a [`RunPlan`], solves each listed instance with the selected
//! strategies a configured number of times, times every repetition, and
//! appends the results to a CSV report.

mod config;
mod plan;
mod report;
mod runner;

pub use config::{HarnessConfig, DEFAULT_PLAN, DEFAULT_REPORT};
pub use plan::{PlanEntry, RunPlan};
pub use report::{append_record, format_path, RunRecord};
pub use runner::Harness;
