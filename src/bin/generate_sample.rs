use std::sync::Arc;

use arrow::array::{Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use serde_json::json;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }

    /// Uniform in `[lo, hi)`.
    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }
}

/// (title, base salary in USD)
const TITLES: [(&str, f64); 8] = [
    ("Data Scientist", 120_000.0),
    ("Data Engineer", 115_000.0),
    ("Data Analyst", 85_000.0),
    ("Machine Learning Engineer", 140_000.0),
    ("Research Scientist", 135_000.0),
    ("Analytics Engineer", 125_000.0),
    ("Data Architect", 150_000.0),
    ("Applied Scientist", 160_000.0),
];

/// (experience level, salary multiplier)
const LEVELS: [(&str, f64); 4] = [("EN", 0.7), ("MI", 0.9), ("SE", 1.2), ("EX", 1.6)];

const SIZES: [&str; 3] = ["S", "M", "L"];

fn main() {
    let mut rng = SimpleRng::new(42);

    // Hiring grows year on year.
    let jobs_per_year = [(2020_i64, 60), (2021, 140), (2022, 320), (2023, 480)];

    let mut all_year: Vec<i64> = Vec::new();
    let mut all_title: Vec<String> = Vec::new();
    let mut all_level: Vec<String> = Vec::new();
    let mut all_salary: Vec<i64> = Vec::new();
    let mut all_size: Vec<String> = Vec::new();

    for &(year, n) in &jobs_per_year {
        // Newer years see more distinct roles.
        let n_titles = (4 + (year - 2020) as usize * 2).min(TITLES.len());
        let growth = 1.0 + 0.04 * (year - 2020) as f64;

        for _ in 0..n {
            let &(title, base) = rng.pick(&TITLES[..n_titles]);
            let &(level, mult) = rng.pick(&LEVELS);
            let salary = base * mult * growth * rng.uniform(0.8, 1.2);

            all_year.push(year);
            all_title.push(title.to_string());
            all_level.push(level.to_string());
            all_salary.push(salary.round() as i64);
            all_size.push(rng.pick(&SIZES).to_string());
        }
    }

    // ---- Parquet ----
    let schema = Arc::new(Schema::new(vec![
        Field::new("work_year", DataType::Int64, false),
        Field::new("experience_level", DataType::Utf8, false),
        Field::new("job_title", DataType::Utf8, false),
        Field::new("salary_in_usd", DataType::Int64, false),
        Field::new("company_size", DataType::Utf8, false),
    ]));

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(Int64Array::from(all_year.clone())),
            Arc::new(StringArray::from(
                all_level.iter().map(|s| s.as_str()).collect::<Vec<_>>(),
            )),
            Arc::new(StringArray::from(
                all_title.iter().map(|s| s.as_str()).collect::<Vec<_>>(),
            )),
            Arc::new(Int64Array::from(all_salary.clone())),
            Arc::new(StringArray::from(
                all_size.iter().map(|s| s.as_str()).collect::<Vec<_>>(),
            )),
        ],
    )
    .expect("Failed to create RecordBatch");

    let parquet_path = "sample_salaries.parquet";
    let file = std::fs::File::create(parquet_path).expect("Failed to create output file");
    let mut writer = ArrowWriter::try_new(file, schema, None).expect("Failed to create writer");
    writer.write(&batch).expect("Failed to write batch");
    writer.close().expect("Failed to close writer");

    // ---- JSON (records-oriented) ----
    let rows: Vec<serde_json::Value> = (0..all_year.len())
        .map(|i| {
            json!({
                "work_year": all_year[i],
                "experience_level": all_level[i],
                "job_title": all_title[i],
                "salary_in_usd": all_salary[i],
                "company_size": all_size[i],
            })
        })
        .collect();
    let json_path = "sample_salaries.json";
    let text = serde_json::to_string_pretty(&rows).expect("Failed to serialise JSON");
    std::fs::write(json_path, text).expect("Failed to write JSON");

    println!(
        "Wrote {} salary records to {parquet_path} and {json_path}",
        all_year.len()
    );
}
