//! Per-column descriptive statistics over cleaned records.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::record::CleanedRecord;

/// Descriptive statistics for one numeric-looking column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnStat {
    /// Number of values that passed the numeric predicate.
    pub count: usize,
    /// Arithmetic mean, rounded to 2 decimal places.
    pub mean: f64,
    /// Minimum retained value, compared numerically.
    pub min: f64,
    /// Maximum retained value, compared numerically.
    pub max: f64,
}

/// Check whether a cleaned value is a numeric-looking string: parseable
/// as a finite IEEE-754 double, including negative and decimal forms.
pub fn is_numeric(value: &str) -> bool {
    value.parse::<f64>().map(f64::is_finite).unwrap_or(false)
}

/// Round to 2 decimal places, half away from zero (`f64::round` semantics).
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Compute statistics for every column with at least one numeric value.
///
/// Columns whose retained subset is empty contribute no entry: absence,
/// not zero, is the sentinel for a non-numeric column. The result is a
/// pure function of the records and headers; column order is preserved.
pub fn column_statistics(
    headers: &[String],
    records: &[CleanedRecord],
) -> IndexMap<String, ColumnStat> {
    let mut stats = IndexMap::new();

    for header in headers {
        let numbers: Vec<f64> = records
            .iter()
            .filter_map(|record| record.get(header))
            .filter(|value| is_numeric(value))
            .filter_map(|value| value.parse::<f64>().ok())
            .collect();

        if numbers.is_empty() {
            continue;
        }

        let count = numbers.len();
        let sum: f64 = numbers.iter().sum();
        let min = numbers.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = numbers.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

        stats.insert(
            header.clone(),
            ColumnStat {
                count,
                mean: round2(sum / count as f64),
                min,
                max,
            },
        );
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records_for(header: &str, values: &[&str]) -> Vec<CleanedRecord> {
        values
            .iter()
            .map(|v| {
                let mut record = CleanedRecord::new();
                record.insert(header.to_string(), v.to_string());
                record
            })
            .collect()
    }

    #[test]
    fn test_mixed_column_keeps_numeric_subset() {
        let records = records_for("v", &["10", "20", "abc", "30"]);
        let stats = column_statistics(&["v".to_string()], &records);

        let stat = &stats["v"];
        assert_eq!(stat.count, 3);
        assert_eq!(stat.mean, 20.0);
        assert_eq!(stat.min, 10.0);
        assert_eq!(stat.max, 30.0);
    }

    #[test]
    fn test_non_numeric_column_absent() {
        let records = records_for("name", &["Alice", "Bob", ""]);
        let stats = column_statistics(&["name".to_string()], &records);

        assert!(!stats.contains_key("name"));
    }

    #[test]
    fn test_negative_and_decimal_forms() {
        let records = records_for("delta", &["-1.5", "2.5", "0"]);
        let stats = column_statistics(&["delta".to_string()], &records);

        let stat = &stats["delta"];
        assert_eq!(stat.count, 3);
        assert_eq!(stat.min, -1.5);
        assert_eq!(stat.max, 2.5);
        assert_eq!(stat.mean, 0.33);
    }

    #[test]
    fn test_mean_rounds_half_away_from_zero() {
        // 0.125 * 2 values -> mean 0.125 -> rounds to 0.13
        let records = records_for("v", &["0.12", "0.13"]);
        let stats = column_statistics(&["v".to_string()], &records);
        assert_eq!(stats["v"].mean, 0.13);

        let records = records_for("w", &["-0.12", "-0.13"]);
        let stats = column_statistics(&["w".to_string()], &records);
        assert_eq!(stats["w"].mean, -0.13);
    }

    #[test]
    fn test_infinity_and_nan_are_not_numeric() {
        assert!(!is_numeric("inf"));
        assert!(!is_numeric("NaN"));
        assert!(!is_numeric(""));
        assert!(is_numeric("1e3"));
        assert!(is_numeric("-42"));
    }
}
