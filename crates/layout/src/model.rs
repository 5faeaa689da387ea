//! Aggregate statistics over a roster.

use rollbook_types::Record;
use serde::Serialize;

/// Presence counts for one render. `present + absent == total` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReportTotals {
    pub total: u32,
    pub present: u32,
    pub absent: u32,
    /// Attendance rate in percent, at full precision.
    pub rate: f64,
}

impl ReportTotals {
    /// The rate rounded to one decimal place with a `%` suffix, e.g. `"66.7%"`.
    pub fn rate_label(&self) -> String {
        format!("{:.1}%", self.rate)
    }
}

/// Counts present and absent records. Order independent; never fails.
pub fn compute_totals(records: &[Record]) -> ReportTotals {
    let total = u32::try_from(records.len()).unwrap_or(u32::MAX);
    let present = u32::try_from(records.iter().filter(|r| r.present).count()).unwrap_or(u32::MAX);
    let rate = if total == 0 {
        0.0
    } else {
        f64::from(present) * 100.0 / f64::from(total)
    };
    ReportTotals {
        total,
        present,
        absent: total - present,
        rate,
    }
}
