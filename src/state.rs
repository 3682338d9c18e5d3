use crate::color::TitleColors;
use crate::data::aggregate::summarize_by_year;
use crate::data::filter::job_title_breakdown;
use crate::data::model::{JobTitleCount, SalaryDataset, YearSummary};
use crate::data::sort::{SortState, SummaryColumn, sorted_order};

// ---------------------------------------------------------------------------
// Year selection
// ---------------------------------------------------------------------------

/// Drill-down state of the summary table.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Selection {
    /// No row clicked yet.
    #[default]
    None,
    /// A row was clicked; holds that year's job-title tally.
    Year {
        year: i32,
        job_titles: Vec<JobTitleCount>,
    },
}

impl Selection {
    pub fn year(&self) -> Option<i32> {
        match self {
            Selection::None => None,
            Selection::Year { year, .. } => Some(*year),
        }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
#[derive(Default)]
pub struct AppState {
    /// Loaded dataset (None until something is loaded).
    pub dataset: Option<SalaryDataset>,

    /// Per-year aggregation of `dataset`, ascending by year.
    pub summaries: Vec<YearSummary>,

    /// Active sort of the summary table.
    pub sort: SortState,

    /// Indices into `summaries` in display order (cached).
    pub row_order: Vec<usize>,

    /// Current drill-down.
    pub selection: Selection,

    /// Colours for the job titles of the current drill-down.
    pub title_colors: TitleColors,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    /// Ingest a newly loaded dataset and recompute the summaries.
    ///
    /// Any previous drill-down belongs to the old data and is cleared; the
    /// sort column is kept.
    pub fn set_dataset(&mut self, dataset: SalaryDataset) {
        self.summaries = summarize_by_year(&dataset.records);
        self.resort();
        self.selection = Selection::None;
        self.title_colors = TitleColors::default();

        self.dataset = Some(dataset);
        self.status_message = None;
    }

    /// Drill into `year`: tally its job titles and make it the selection.
    pub fn select_year(&mut self, year: i32) {
        let Some(ds) = &self.dataset else {
            return;
        };
        let job_titles = job_title_breakdown(&ds.records, year);
        log::debug!("selected {year}: {} distinct job titles", job_titles.len());

        self.title_colors = TitleColors::new(job_titles.iter().map(|c| c.job_title.as_str()));
        self.selection = Selection::Year { year, job_titles };
    }

    /// Header click on the summary table.
    pub fn toggle_sort(&mut self, column: SummaryColumn) {
        self.sort.toggle(column);
        log::debug!("summary sort now {:?}", self.sort);
        self.resort();
    }

    /// Recompute `row_order` after a sort or data change.
    pub fn resort(&mut self) {
        self.row_order = sorted_order(&self.summaries, self.sort);
    }

    /// Summary rows in display order.
    pub fn sorted_summaries(&self) -> impl Iterator<Item = &YearSummary> {
        self.row_order.iter().map(|&i| &self.summaries[i])
    }

    /// Pretty JSON of the per-year summaries and the current drill-down.
    pub fn export_json(&self) -> serde_json::Result<String> {
        let selected = match &self.selection {
            Selection::None => None,
            Selection::Year { year, job_titles } => {
                Some(serde_json::json!({ "year": year, "jobTitles": job_titles }))
            }
        };
        serde_json::to_string_pretty(&serde_json::json!({
            "summaries": self.summaries,
            "selectedYear": selected,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Record;
    use pretty_assertions::assert_eq;

    fn dataset() -> SalaryDataset {
        SalaryDataset::new(
            vec![
                Record::new(2020, "A", 100.0),
                Record::new(2020, "B", 200.0),
                Record::new(2021, "A", 300.0),
            ],
            Vec::new(),
            "test",
        )
    }

    #[test]
    fn starts_with_no_selection() {
        let state = AppState::default();
        assert_eq!(state.selection, Selection::None);
        assert!(state.summaries.is_empty());
    }

    #[test]
    fn loading_computes_summaries() {
        let mut state = AppState::default();
        state.status_message = Some("Error: stale".into());
        state.set_dataset(dataset());
        assert_eq!(state.status_message, None);
        assert_eq!(
            state.summaries,
            vec![
                YearSummary {
                    year: 2020,
                    total_jobs: 2,
                    average_salary: 150.0,
                },
                YearSummary {
                    year: 2021,
                    total_jobs: 1,
                    average_salary: 300.0,
                },
            ]
        );
        assert_eq!(state.row_order, vec![0, 1]);
    }

    #[test]
    fn row_click_enters_year_selection() {
        let mut state = AppState::default();
        state.set_dataset(dataset());

        state.select_year(2020);
        assert_eq!(
            state.selection,
            Selection::Year {
                year: 2020,
                job_titles: vec![
                    JobTitleCount {
                        job_title: "A".into(),
                        job_count: 1,
                    },
                    JobTitleCount {
                        job_title: "B".into(),
                        job_count: 1,
                    },
                ],
            }
        );
        assert_ne!(state.title_colors.color_for("A"), state.title_colors.color_for("B"));

        state.select_year(2021);
        assert_eq!(state.selection.year(), Some(2021));
    }

    #[test]
    fn new_dataset_clears_selection() {
        let mut state = AppState::default();
        state.set_dataset(dataset());
        state.select_year(2021);
        state.set_dataset(dataset());
        assert_eq!(state.selection, Selection::None);
    }

    #[test]
    fn select_without_dataset_is_ignored() {
        let mut state = AppState::default();
        state.select_year(2020);
        assert_eq!(state.selection, Selection::None);
    }

    #[test]
    fn sorting_reorders_rows_not_summaries() {
        let mut state = AppState::default();
        state.set_dataset(dataset());
        state.toggle_sort(SummaryColumn::Year);
        state.toggle_sort(SummaryColumn::Year);

        let years: Vec<i32> = state.sorted_summaries().map(|s| s.year).collect();
        assert_eq!(years, vec![2021, 2020]);
        assert_eq!(state.summaries[0].year, 2020);
    }

    #[test]
    fn export_includes_selection() {
        let mut state = AppState::default();
        state.set_dataset(dataset());
        let before: serde_json::Value =
            serde_json::from_str(&state.export_json().unwrap()).unwrap();
        assert_eq!(before["selectedYear"], serde_json::Value::Null);
        assert_eq!(before["summaries"][0]["totalJobs"], 2);

        state.select_year(2021);
        let after: serde_json::Value =
            serde_json::from_str(&state.export_json().unwrap()).unwrap();
        assert_eq!(after["selectedYear"]["year"], 2021);
        assert_eq!(after["selectedYear"]["jobTitles"][0]["jobTitle"], "A");
    }
}
