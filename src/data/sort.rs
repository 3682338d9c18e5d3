use std::cmp::Ordering;

use super::model::YearSummary;

// ---------------------------------------------------------------------------
// Summary table sorting
// ---------------------------------------------------------------------------

/// Sortable columns of the per-year summary table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryColumn {
    Year,
    TotalJobs,
    AverageSalary,
}

impl SummaryColumn {
    pub const ALL: [SummaryColumn; 3] = [
        SummaryColumn::Year,
        SummaryColumn::TotalJobs,
        SummaryColumn::AverageSalary,
    ];

    pub fn header(self) -> &'static str {
        match self {
            SummaryColumn::Year => "Year",
            SummaryColumn::TotalJobs => "Number of Total Jobs",
            SummaryColumn::AverageSalary => "Average Salary in USD",
        }
    }

    fn compare(self, a: &YearSummary, b: &YearSummary) -> Ordering {
        match self {
            SummaryColumn::Year => a.year.cmp(&b.year),
            SummaryColumn::TotalJobs => a.total_jobs.cmp(&b.total_jobs),
            SummaryColumn::AverageSalary => a.average_salary.total_cmp(&b.average_salary),
        }
    }
}

/// Which column the table is sorted by, if any.
///
/// Header clicks cycle a column through ascending → descending → unsorted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortState {
    pub column: Option<SummaryColumn>,
    pub descending: bool,
}

impl SortState {
    /// Advance the sort cycle for `column`.
    pub fn toggle(&mut self, column: SummaryColumn) {
        match self.column {
            Some(current) if current == column => {
                if self.descending {
                    self.column = None;
                    self.descending = false;
                } else {
                    self.descending = true;
                }
            }
            _ => {
                self.column = Some(column);
                self.descending = false;
            }
        }
    }

    /// Header decoration for `column`.
    pub fn indicator(&self, column: SummaryColumn) -> &'static str {
        match self.column {
            Some(current) if current == column => {
                if self.descending {
                    " 🔽"
                } else {
                    " 🔼"
                }
            }
            _ => "",
        }
    }
}

/// Return row indices into `summaries` in display order.
///
/// Unsorted means source order. Equal keys keep their source order.
pub fn sorted_order(summaries: &[YearSummary], sort: SortState) -> Vec<usize> {
    let mut order: Vec<usize> = (0..summaries.len()).collect();
    if let Some(column) = sort.column {
        order.sort_by(|&a, &b| {
            let ord = column.compare(&summaries[a], &summaries[b]);
            if sort.descending {
                ord.reverse()
            } else {
                ord
            }
        });
    }
    order
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(year: i32, total_jobs: usize, average_salary: f64) -> YearSummary {
        YearSummary {
            year,
            total_jobs,
            average_salary,
        }
    }

    fn rows() -> Vec<YearSummary> {
        vec![
            summary(2020, 72, 95_813.0),
            summary(2021, 217, 99_853.8),
            summary(2022, 318, 124_522.0),
            summary(2023, 72, 150_000.0),
        ]
    }

    #[test]
    fn toggle_cycles_through_three_states() {
        let mut sort = SortState::default();
        sort.toggle(SummaryColumn::TotalJobs);
        assert_eq!(sort.column, Some(SummaryColumn::TotalJobs));
        assert!(!sort.descending);

        sort.toggle(SummaryColumn::TotalJobs);
        assert_eq!(sort.column, Some(SummaryColumn::TotalJobs));
        assert!(sort.descending);

        sort.toggle(SummaryColumn::TotalJobs);
        assert_eq!(sort, SortState::default());
    }

    #[test]
    fn switching_column_restarts_ascending() {
        let mut sort = SortState::default();
        sort.toggle(SummaryColumn::Year);
        sort.toggle(SummaryColumn::Year);
        sort.toggle(SummaryColumn::AverageSalary);
        assert_eq!(sort.column, Some(SummaryColumn::AverageSalary));
        assert!(!sort.descending);
    }

    #[test]
    fn unsorted_keeps_source_order() {
        assert_eq!(sorted_order(&rows(), SortState::default()), vec![0, 1, 2, 3]);
    }

    #[test]
    fn descending_salary_order() {
        let sort = SortState {
            column: Some(SummaryColumn::AverageSalary),
            descending: true,
        };
        assert_eq!(sorted_order(&rows(), sort), vec![3, 2, 1, 0]);
    }

    #[test]
    fn ties_keep_source_order() {
        let sort = SortState {
            column: Some(SummaryColumn::TotalJobs),
            descending: false,
        };
        assert_eq!(sorted_order(&rows(), sort), vec![0, 3, 1, 2]);
    }

    #[test]
    fn indicator_marks_only_sorted_column() {
        let sort = SortState {
            column: Some(SummaryColumn::Year),
            descending: true,
        };
        assert_eq!(sort.indicator(SummaryColumn::Year), " 🔽");
        assert_eq!(sort.indicator(SummaryColumn::TotalJobs), "");
    }
}
