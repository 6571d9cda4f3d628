//! Chart-ready series derived from cleaned records.
//!
//! Two views coexist on purpose. Trend-style consumers want every row,
//! with missing Y values rendered as zero; scatter/correlation consumers
//! want rows with missing values excluded. Both policies are preserved as
//! separate, independently testable functions rather than merged.

use serde::{Deserialize, Serialize};

use crate::record::CleanedRecord;
use crate::stats::is_numeric;

/// Label/value view: one label and one value per record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelValueSeries {
    pub x_field: String,
    pub y_field: String,
    /// Raw X value per record, in record order.
    pub labels: Vec<String>,
    /// Y coerced to f64 per record; non-numeric values become 0.0.
    pub values: Vec<f64>,
}

/// One (x, y) pair in a point series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: String,
    pub y: f64,
}

/// Point view: only rows with a non-empty X and a numeric Y.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointSeries {
    pub x_field: String,
    pub y_field: String,
    pub points: Vec<Point>,
}

/// Build the label/value view over `x_field` and `y_field`.
///
/// Never drops rows: `labels` and `values` always have one entry per
/// record, with non-numeric Y values coerced to 0.0.
pub fn label_value_series(
    x_field: &str,
    y_field: &str,
    records: &[CleanedRecord],
) -> LabelValueSeries {
    let labels = records
        .iter()
        .map(|record| record.get(x_field).cloned().unwrap_or_default())
        .collect();

    let values = records
        .iter()
        .map(|record| {
            record
                .get(y_field)
                .and_then(|v| if is_numeric(v) { v.parse().ok() } else { None })
                .unwrap_or(0.0)
        })
        .collect();

    LabelValueSeries {
        x_field: x_field.to_string(),
        y_field: y_field.to_string(),
        labels,
        values,
    }
}

/// Build one point series per Y column (every header after the first),
/// against the first header as X.
///
/// A point is emitted only when X is non-empty and Y is numeric; rows
/// failing either test are dropped from that series. Series with zero
/// points are omitted entirely.
pub fn point_series(headers: &[String], records: &[CleanedRecord]) -> Vec<PointSeries> {
    let Some(x_field) = headers.first() else {
        return Vec::new();
    };

    let mut series = Vec::new();

    for y_field in headers.iter().skip(1) {
        let points: Vec<Point> = records
            .iter()
            .filter_map(|record| {
                let x = record.get(x_field)?;
                if x.is_empty() {
                    return None;
                }
                let y = record.get(y_field)?;
                if !is_numeric(y) {
                    return None;
                }
                Some(Point {
                    x: x.clone(),
                    y: y.parse().ok()?,
                })
            })
            .collect();

        if !points.is_empty() {
            series.push(PointSeries {
                x_field: x_field.clone(),
                y_field: y_field.clone(),
                points,
            });
        }
    }

    series
}
