/// Data layer: core types, loading, aggregation and drill-down.
///
/// Architecture:
/// ```text
///  .json / .csv / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse + validate → SalaryDataset
///   └──────────┘
///        │
///        ▼
///   ┌────────────┐
///   │ aggregate   │  records → Vec<YearSummary>
///   └────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  (records, year) → Vec<JobTitleCount>
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │   sort    │  header clicks → summary row order
///   └──────────┘
/// ```

pub mod aggregate;
pub mod filter;
pub mod loader;
pub mod model;
pub mod sort;
