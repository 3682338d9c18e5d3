use std::collections::HashMap;

use super::model::{JobTitleCount, Record};

// ---------------------------------------------------------------------------
// Year drill-down
// ---------------------------------------------------------------------------

/// Return indices of records whose work year equals `year`.
pub fn records_for_year(records: &[Record], year: i32) -> Vec<usize> {
    records
        .iter()
        .enumerate()
        .filter(|(_, r)| r.work_year == year)
        .map(|(i, _)| i)
        .collect()
}

/// Tally job titles among the records of one work year.
///
/// Titles appear in the order they are first encountered in `records`.
/// A year with no records yields an empty list.
pub fn job_title_breakdown(records: &[Record], year: i32) -> Vec<JobTitleCount> {
    let mut counts: Vec<JobTitleCount> = Vec::new();
    // title → position in `counts`
    let mut position: HashMap<&str, usize> = HashMap::new();

    for idx in records_for_year(records, year) {
        let title = records[idx].job_title.as_str();
        match position.get(title) {
            Some(&pos) => counts[pos].job_count += 1,
            None => {
                position.insert(title, counts.len());
                counts.push(JobTitleCount {
                    job_title: title.to_string(),
                    job_count: 1,
                });
            }
        }
    }

    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::aggregate::summarize_by_year;
    use pretty_assertions::assert_eq;

    fn count(title: &str, n: usize) -> JobTitleCount {
        JobTitleCount {
            job_title: title.to_string(),
            job_count: n,
        }
    }

    #[test]
    fn selecting_a_year_tallies_its_titles() {
        let records = vec![
            Record::new(2020, "A", 100.0),
            Record::new(2020, "B", 200.0),
            Record::new(2021, "A", 300.0),
        ];
        assert_eq!(
            job_title_breakdown(&records, 2020),
            vec![count("A", 1), count("B", 1)]
        );
    }

    #[test]
    fn titles_keep_first_seen_order() {
        let records = vec![
            Record::new(2022, "Data Scientist", 1.0),
            Record::new(2022, "Analytics Engineer", 1.0),
            Record::new(2021, "Zeta", 1.0),
            Record::new(2022, "Data Scientist", 1.0),
            Record::new(2022, "AI Researcher", 1.0),
        ];
        assert_eq!(
            job_title_breakdown(&records, 2022),
            vec![
                count("Data Scientist", 2),
                count("Analytics Engineer", 1),
                count("AI Researcher", 1),
            ]
        );
    }

    #[test]
    fn unknown_year_is_empty() {
        let records = vec![Record::new(2020, "A", 1.0)];
        assert!(job_title_breakdown(&records, 1999).is_empty());
        assert!(records_for_year(&records, 1999).is_empty());
    }

    #[test]
    fn breakdown_counts_match_year_totals() {
        let records = vec![
            Record::new(2020, "A", 1.0),
            Record::new(2021, "B", 2.0),
            Record::new(2020, "A", 3.0),
            Record::new(2021, "C", 4.0),
            Record::new(2020, "D", 5.0),
        ];
        for summary in summarize_by_year(&records) {
            let tallied: usize = job_title_breakdown(&records, summary.year)
                .iter()
                .map(|c| c.job_count)
                .sum();
            assert_eq!(tallied, summary.total_jobs, "year {}", summary.year);
        }
    }

    #[test]
    fn indices_point_at_matching_records() {
        let records = vec![
            Record::new(2020, "A", 1.0),
            Record::new(2021, "B", 2.0),
            Record::new(2020, "C", 3.0),
        ];
        assert_eq!(records_for_year(&records, 2020), vec![0, 2]);
    }
}
