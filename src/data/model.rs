use std::collections::BTreeSet;

use serde::Serialize;
use thiserror::Error;

// ---------------------------------------------------------------------------
// Record – one row of the salary dataset
// ---------------------------------------------------------------------------

/// A single employment data point.
///
/// Source files carry more columns (`experience_level`, `salary_currency`,
/// `company_size`, ...); only the three below take part in aggregation and
/// the rest are dropped at load time.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub work_year: i32,
    pub job_title: String,
    pub salary_in_usd: f64,
}

impl Record {
    pub fn new(work_year: i32, job_title: impl Into<String>, salary_in_usd: f64) -> Self {
        Self {
            work_year,
            job_title: job_title.into(),
            salary_in_usd,
        }
    }
}

// ---------------------------------------------------------------------------
// Derived views
// ---------------------------------------------------------------------------

/// Aggregated statistics for one work year.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearSummary {
    pub year: i32,
    pub total_jobs: usize,
    pub average_salary: f64,
}

/// Number of records carrying a job title within one selected year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobTitleCount {
    pub job_title: String,
    pub job_count: usize,
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Why a source row was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecordIssue {
    #[error("missing field '{0}'")]
    MissingField(&'static str),
    #[error("work_year '{0}' is not a number")]
    NonNumericYear(String),
    #[error("work_year {0} is not a whole year")]
    FractionalYear(f64),
    #[error("salary_in_usd '{0}' is not a finite number")]
    InvalidSalary(String),
    #[error("job_title is not a string")]
    NonStringTitle,
    #[error("row is not an object")]
    NotAnObject,
}

/// A source row that failed validation, kept so the UI can report it.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRow {
    /// Zero-based index among the data rows (a CSV header is not counted).
    pub row: usize,
    pub issue: RecordIssue,
}

// ---------------------------------------------------------------------------
// SalaryDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct SalaryDataset {
    /// Valid records in source order.
    pub records: Vec<Record>,
    /// Rows rejected during loading.
    pub skipped: Vec<SkippedRow>,
    /// Where the data came from (file name or "bundled").
    pub source: String,
}

impl SalaryDataset {
    pub fn new(records: Vec<Record>, skipped: Vec<SkippedRow>, source: impl Into<String>) -> Self {
        Self {
            records,
            skipped,
            source: source.into(),
        }
    }

    /// Number of valid records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset holds no valid records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sorted set of work years present in the data.
    pub fn distinct_years(&self) -> BTreeSet<i32> {
        self.records.iter().map(|r| r.work_year).collect()
    }
}
