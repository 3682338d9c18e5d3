use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};
use arrow::array::{Array, ArrayRef, AsArray};
use arrow::datatypes::{DataType, Float32Type, Float64Type, Int16Type, Int32Type, Int64Type};
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::Value as JsonValue;

use super::model::{Record, RecordIssue, SalaryDataset, SkippedRow};

const WORK_YEAR: &str = "work_year";
const JOB_TITLE: &str = "job_title";
const SALARY_IN_USD: &str = "salary_in_usd";

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load a salary dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.json`    – `[{ "work_year": 2023, "job_title": "...", "salary_in_usd": 85847, ... }, ...]`
/// * `.csv`     – header row containing `work_year`, `job_title`, `salary_in_usd`
/// * `.parquet` – columns of the same names
///
/// Rows that fail validation are skipped and reported in
/// [`SalaryDataset::skipped`]; only file-level problems are errors.
pub fn load_file(path: &Path) -> Result<SalaryDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();
    let source = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    match ext.as_str() {
        "json" => {
            let text = std::fs::read_to_string(path).context("reading JSON file")?;
            load_json_str(&text, &source)
        }
        "csv" => {
            let file = std::fs::File::open(path).context("opening CSV")?;
            load_csv_reader(file, &source)
        }
        "parquet" | "pq" => load_parquet(path, &source),
        other => bail!("Unsupported file extension: .{other}"),
    }
}

// ---------------------------------------------------------------------------
// Row collection
// ---------------------------------------------------------------------------

#[derive(Default)]
struct RowSink {
    records: Vec<Record>,
    skipped: Vec<SkippedRow>,
}

impl RowSink {
    fn push(&mut self, row: usize, result: std::result::Result<Record, RecordIssue>) {
        match result {
            Ok(record) => self.records.push(record),
            Err(issue) => self.skipped.push(SkippedRow { row, issue }),
        }
    }

    fn finish(self, source: &str) -> SalaryDataset {
        if let Some(first) = self.skipped.first() {
            log::warn!(
                "{source}: skipped {} malformed row(s); first at row {}: {}",
                self.skipped.len(),
                first.row,
                first.issue
            );
        }
        SalaryDataset::new(self.records, self.skipped, source)
    }
}

// -- Field validation shared by the text-based formats --

fn year_from_f64(v: f64) -> std::result::Result<i32, RecordIssue> {
    if !v.is_finite() {
        return Err(RecordIssue::NonNumericYear(v.to_string()));
    }
    if v.fract() != 0.0 {
        return Err(RecordIssue::FractionalYear(v));
    }
    if v < i32::MIN as f64 || v > i32::MAX as f64 {
        return Err(RecordIssue::NonNumericYear(v.to_string()));
    }
    Ok(v as i32)
}

fn parse_year_text(s: &str) -> std::result::Result<i32, RecordIssue> {
    let s = s.trim();
    if s.is_empty() {
        return Err(RecordIssue::MissingField(WORK_YEAR));
    }
    if let Ok(i) = s.parse::<i32>() {
        return Ok(i);
    }
    match s.parse::<f64>() {
        Ok(f) => year_from_f64(f),
        Err(_) => Err(RecordIssue::NonNumericYear(s.to_string())),
    }
}

/// Job titles are compared after trimming surrounding whitespace.
fn normalize_title(s: &str) -> std::result::Result<String, RecordIssue> {
    let s = s.trim();
    if s.is_empty() {
        return Err(RecordIssue::MissingField(JOB_TITLE));
    }
    Ok(s.to_string())
}

fn salary_from_f64(v: f64) -> std::result::Result<f64, RecordIssue> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(RecordIssue::InvalidSalary(v.to_string()))
    }
}

fn parse_salary_text(s: &str) -> std::result::Result<f64, RecordIssue> {
    let s = s.trim();
    if s.is_empty() {
        return Err(RecordIssue::MissingField(SALARY_IN_USD));
    }
    s.parse::<f64>()
        .map_err(|_| RecordIssue::InvalidSalary(s.to_string()))
        .and_then(salary_from_f64)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Parse a records-oriented JSON array.
///
/// ```json
/// [
///   {
///     "work_year": 2023,
///     "experience_level": "SE",
///     "job_title": "Data Scientist",
///     "salary_in_usd": 85847,
///     "company_size": "L"
///   },
///   ...
/// ]
/// ```
pub fn load_json_str(text: &str, source: &str) -> Result<SalaryDataset> {
    let root: JsonValue = serde_json::from_str(text).context("parsing JSON")?;
    let rows = root.as_array().context("Expected top-level JSON array")?;

    let mut sink = RowSink::default();
    for (i, row) in rows.iter().enumerate() {
        sink.push(i, record_from_json(row));
    }
    Ok(sink.finish(source))
}

fn record_from_json(val: &JsonValue) -> std::result::Result<Record, RecordIssue> {
    let obj = val.as_object().ok_or(RecordIssue::NotAnObject)?;

    let work_year = match obj.get(WORK_YEAR) {
        None | Some(JsonValue::Null) => return Err(RecordIssue::MissingField(WORK_YEAR)),
        Some(JsonValue::Number(n)) => match n.as_i64() {
            Some(i) => i32::try_from(i).map_err(|_| RecordIssue::NonNumericYear(n.to_string()))?,
            None => year_from_f64(n.as_f64().unwrap_or(f64::NAN))?,
        },
        Some(other) => return Err(RecordIssue::NonNumericYear(other.to_string())),
    };

    let job_title = match obj.get(JOB_TITLE) {
        None | Some(JsonValue::Null) => return Err(RecordIssue::MissingField(JOB_TITLE)),
        Some(JsonValue::String(s)) => normalize_title(s)?,
        Some(_) => return Err(RecordIssue::NonStringTitle),
    };

    let salary_in_usd = match obj.get(SALARY_IN_USD) {
        None | Some(JsonValue::Null) => return Err(RecordIssue::MissingField(SALARY_IN_USD)),
        Some(JsonValue::Number(n)) => salary_from_f64(n.as_f64().unwrap_or(f64::NAN))?,
        Some(other) => return Err(RecordIssue::InvalidSalary(other.to_string())),
    };

    Ok(Record {
        work_year,
        job_title,
        salary_in_usd,
    })
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names, the three record columns
/// anywhere among the others.  Extra columns are ignored.  Short rows are
/// read and rejected as missing fields rather than failing the file.
pub fn load_csv_reader<R: Read>(input: R, source: &str) -> Result<SalaryDataset> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(input);
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let column = |name: &str| {
        headers
            .iter()
            .position(|h| h == name)
            .with_context(|| format!("CSV missing '{name}' column"))
    };
    let year_idx = column(WORK_YEAR)?;
    let title_idx = column(JOB_TITLE)?;
    let salary_idx = column(SALARY_IN_USD)?;

    let mut sink = RowSink::default();

    for (row_no, result) in reader.records().enumerate() {
        let row = result.with_context(|| format!("CSV row {row_no}"))?;

        sink.push(row_no, csv_record(&row, year_idx, title_idx, salary_idx));
    }

    Ok(sink.finish(source))
}

fn csv_record(
    row: &csv::StringRecord,
    year_idx: usize,
    title_idx: usize,
    salary_idx: usize,
) -> std::result::Result<Record, RecordIssue> {
    let work_year = parse_year_text(row.get(year_idx).unwrap_or(""))?;
    let job_title = normalize_title(row.get(title_idx).unwrap_or(""))?;
    let salary_in_usd = parse_salary_text(row.get(salary_idx).unwrap_or(""))?;
    Ok(Record::new(work_year, job_title, salary_in_usd))
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file of salary records.
///
/// Expected schema:
/// - `work_year`: Int16, Int32 or Int64
/// - `job_title`: Utf8 or LargeUtf8
/// - `salary_in_usd`: any integer or float column
///
/// Any other columns are ignored.  Works with files written by both
/// **Pandas** (`df.to_parquet()`) and **Polars** (`df.write_parquet()`).
fn load_parquet(path: &Path, source: &str) -> Result<SalaryDataset> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;
    let reader = builder.build().context("building parquet reader")?;

    let mut sink = RowSink::default();
    let mut row_offset = 0usize;

    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        let year_col = batch_column(&batch, WORK_YEAR)?;
        let title_col = batch_column(&batch, JOB_TITLE)?;
        let salary_col = batch_column(&batch, SALARY_IN_USD)?;

        check_type(year_col, WORK_YEAR, is_year_type)?;
        check_type(title_col, JOB_TITLE, is_text_type)?;
        check_type(salary_col, SALARY_IN_USD, is_salary_type)?;

        for row in 0..batch.num_rows() {
            let parsed = year_at(year_col, row).and_then(|work_year| {
                Ok(Record {
                    work_year,
                    job_title: title_at(title_col, row)?,
                    salary_in_usd: salary_at(salary_col, row)?,
                })
            });
            sink.push(row_offset + row, parsed);
        }
        row_offset += batch.num_rows();
    }

    Ok(sink.finish(source))
}

// -- Parquet / Arrow helpers --

fn batch_column<'a>(batch: &'a RecordBatch, name: &str) -> Result<&'a ArrayRef> {
    let idx = batch
        .schema()
        .index_of(name)
        .map_err(|_| anyhow::anyhow!("Parquet file missing '{name}' column"))?;
    Ok(batch.column(idx))
}

fn is_year_type(dt: &DataType) -> bool {
    matches!(dt, DataType::Int16 | DataType::Int32 | DataType::Int64)
}

fn is_text_type(dt: &DataType) -> bool {
    matches!(dt, DataType::Utf8 | DataType::LargeUtf8)
}

fn is_salary_type(dt: &DataType) -> bool {
    matches!(
        dt,
        DataType::Int32 | DataType::Int64 | DataType::Float32 | DataType::Float64
    )
}

fn check_type(col: &ArrayRef, name: &str, accepts: fn(&DataType) -> bool) -> Result<()> {
    if !accepts(col.data_type()) {
        bail!("Parquet column '{name}' has unsupported type {:?}", col.data_type());
    }
    Ok(())
}

// The `as_*` casts below rely on `check_type` having accepted the column.

fn year_at(col: &ArrayRef, row: usize) -> std::result::Result<i32, RecordIssue> {
    if col.is_null(row) {
        return Err(RecordIssue::MissingField(WORK_YEAR));
    }
    match col.data_type() {
        DataType::Int16 => Ok(col.as_primitive::<Int16Type>().value(row) as i32),
        DataType::Int32 => Ok(col.as_primitive::<Int32Type>().value(row)),
        _ => {
            let v = col.as_primitive::<Int64Type>().value(row);
            i32::try_from(v).map_err(|_| RecordIssue::NonNumericYear(v.to_string()))
        }
    }
}

fn title_at(col: &ArrayRef, row: usize) -> std::result::Result<String, RecordIssue> {
    if col.is_null(row) {
        return Err(RecordIssue::MissingField(JOB_TITLE));
    }
    normalize_title(match col.data_type() {
        DataType::Utf8 => col.as_string::<i32>().value(row),
        _ => col.as_string::<i64>().value(row),
    })
}

fn salary_at(col: &ArrayRef, row: usize) -> std::result::Result<f64, RecordIssue> {
    if col.is_null(row) {
        return Err(RecordIssue::MissingField(SALARY_IN_USD));
    }
    let v = match col.data_type() {
        DataType::Int32 => col.as_primitive::<Int32Type>().value(row) as f64,
        DataType::Int64 => col.as_primitive::<Int64Type>().value(row) as f64,
        DataType::Float32 => col.as_primitive::<Float32Type>().value(row) as f64,
        _ => col.as_primitive::<Float64Type>().value(row),
    };
    salary_from_f64(v)
}
