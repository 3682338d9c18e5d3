use std::collections::BTreeMap;

use super::model::{Record, YearSummary};

// ---------------------------------------------------------------------------
// Per-year aggregation
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Clone, Copy)]
struct YearTotals {
    jobs: usize,
    salary: f64,
}

/// Collapse records into one [`YearSummary`] per distinct work year.
///
/// Output is ordered by ascending year. A year only gets an entry once a
/// record contributed to it, so `total_jobs` is never zero.
pub fn summarize_by_year(records: &[Record]) -> Vec<YearSummary> {
    let mut totals: BTreeMap<i32, YearTotals> = BTreeMap::new();

    for record in records {
        let entry = totals.entry(record.work_year).or_default();
        entry.jobs += 1;
        entry.salary += record.salary_in_usd;
    }

    totals
        .into_iter()
        .map(|(year, t)| YearSummary {
            year,
            total_jobs: t.jobs,
            average_salary: t.salary / t.jobs as f64,
        })
        .collect()
}
