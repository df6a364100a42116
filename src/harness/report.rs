//! CSV result reports.
//!
//! Each run appends one summary row followed by one row per repetition:
//!
//! ```text
//! data/tsp_6.txt,Low cost,3,132,"[0,1,3,5,4,2]"
//! 0.000412
//! 0.000398
//! 0.000401
//! ```

use crate::bnb::Strategy;
use crate::error::TspResult;
use crate::matrix::Cost;
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Duration;

/// Outcome of one strategy on one instance, over all repetitions.
#[derive(Debug, Clone, PartialEq)]
pub struct RunRecord {
    /// Instance file as written in the plan.
    pub input: String,
    pub strategy: Strategy,
    pub repeats: usize,
    /// Cost of the last repetition's tour.
    pub cost: Cost,
    /// Last repetition's tour.
    pub path: Vec<usize>,
    /// Wall-clock time of each repetition.
    pub times: Vec<Duration>,
}

impl RunRecord {
    /// Mean repetition time, zero when there are none.
    pub fn mean_time(&self) -> Duration {
        match u32::try_from(self.times.len()) {
            Ok(count) if count > 0 => self.times.iter().sum::<Duration>() / count,
            _ => Duration::ZERO,
        }
    }

    /// Writes the record as CSV rows.
    pub fn write_csv<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        let fields = [
            csv_field(&self.input),
            csv_field(self.strategy.label()),
            self.repeats.to_string(),
            self.cost.to_string(),
            csv_field(&format_path(&self.path)),
        ];
        writeln!(out, "{}", fields.join(","))?;
        for time in &self.times {
            writeln!(out, "{}", time.as_secs_f64())?;
        }
        Ok(())
    }
}

/// Renders a tour as `[0,1,3,2]`.
pub fn format_path(path: &[usize]) -> String {
    let items: Vec<String> = path.iter().map(usize::to_string).collect();
    format!("[{}]", items.join(","))
}

/// Appends `record` to the CSV file at `path`, creating it if needed.
pub fn append_record<P: AsRef<Path>>(path: P, record: &RunRecord) -> TspResult<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut out = BufWriter::new(file);
    record.write_csv(&mut out)?;
    out.flush()?;
    Ok(())
}

/// Quotes a field when it contains a delimiter, quote or line break.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
