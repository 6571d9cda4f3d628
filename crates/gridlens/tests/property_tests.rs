//! Property-based tests for the Gridlens pipeline.
//!
//! These tests use proptest to generate random grids and verify that the
//! pipeline maintains its invariants under all conditions.
//!
//! # Running Property Tests
//!
//! ```bash
//! cargo test -p gridlens --test property_tests
//!
//! # Run with more cases (slower but more thorough)
//! PROPTEST_CASES=10000 cargo test -p gridlens --test property_tests
//! ```

use proptest::prelude::*;

use gridlens::chart::label_value_series;
use gridlens::input::CellValue;
use gridlens::record::{build_records, clean_records, Record};
use gridlens::stats::column_statistics;

// =============================================================================
// Test Strategies
// =============================================================================

/// Generate an arbitrary cell value.
fn cell_value() -> impl Strategy<Value = CellValue> {
    prop_oneof![
        "[ a-zA-Z0-9_\\-\\.]{0,20}".prop_map(CellValue::Text),
        (-1.0e9..1.0e9f64).prop_map(CellValue::Number),
        Just(CellValue::Empty),
    ]
}

/// Generate headers (2-6 distinct names).
fn headers() -> impl Strategy<Value = Vec<String>> {
    (2usize..=6).prop_map(|n| (0..n).map(|i| format!("col_{}", i)).collect())
}

/// Generate data rows of possibly ragged width.
fn ragged_rows() -> impl Strategy<Value = Vec<Vec<CellValue>>> {
    prop::collection::vec(
        prop::collection::vec(cell_value(), 0..=8),
        0..=30,
    )
}

/// Generate data rows of exactly the given width.
fn aligned_rows(width: usize) -> impl Strategy<Value = Vec<Vec<CellValue>>> {
    prop::collection::vec(prop::collection::vec(cell_value(), width..=width), 1..=30)
}

// =============================================================================
// Record Builder Invariants
// =============================================================================

proptest! {
    #[test]
    fn record_count_never_exceeds_row_count(
        headers in headers(),
        rows in ragged_rows(),
    ) {
        let records = build_records(&headers, &rows);
        prop_assert!(records.len() <= rows.len());
    }

    #[test]
    fn aligned_rows_all_become_records(
        (headers, rows) in headers().prop_flat_map(|h| {
            let width = h.len();
            (Just(h), aligned_rows(width))
        }),
    ) {
        let records = build_records(&headers, &rows);
        prop_assert_eq!(records.len(), rows.len());
    }

    #[test]
    fn records_preserve_row_order(
        headers in headers(),
        rows in ragged_rows(),
    ) {
        let records = build_records(&headers, &rows);
        let kept: Vec<&Vec<CellValue>> = rows
            .iter()
            .filter(|r| r.len() == headers.len())
            .collect();

        for (record, row) in records.iter().zip(kept.iter()) {
            // First header's value matches the row's first cell (no
            // duplicate headers in generated input).
            prop_assert_eq!(record.get(&headers[0]), Some(&row[0]));
        }
    }
}

// =============================================================================
// Cleaner Invariants
// =============================================================================

proptest! {
    #[test]
    fn cleaning_is_idempotent(
        headers in headers(),
        rows in ragged_rows(),
    ) {
        let records = build_records(&headers, &rows);
        let once = clean_records(&records);

        // Re-wrap the cleaned strings as text cells and clean again.
        let rewrapped: Vec<Record> = once
            .iter()
            .map(|r| {
                r.iter()
                    .map(|(k, v)| (k.clone(), CellValue::Text(v.clone())))
                    .collect()
            })
            .collect();
        let twice = clean_records(&rewrapped);

        prop_assert_eq!(once, twice);
    }

    #[test]
    fn cleaned_values_are_trimmed(
        headers in headers(),
        rows in ragged_rows(),
    ) {
        let records = build_records(&headers, &rows);
        for record in clean_records(&records) {
            for value in record.values() {
                prop_assert_eq!(value.as_str(), value.trim());
            }
        }
    }
}

// =============================================================================
// Statistics and Chart Invariants
// =============================================================================

proptest! {
    #[test]
    fn statistics_are_deterministic(
        headers in headers(),
        rows in ragged_rows(),
    ) {
        let records = build_records(&headers, &rows);
        let cleaned = clean_records(&records);

        let a = column_statistics(&headers, &cleaned);
        let b = column_statistics(&headers, &cleaned);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn stat_bounds_are_ordered(
        headers in headers(),
        rows in ragged_rows(),
    ) {
        let records = build_records(&headers, &rows);
        let cleaned = clean_records(&records);

        for stat in column_statistics(&headers, &cleaned).values() {
            prop_assert!(stat.count > 0);
            prop_assert!(stat.min <= stat.max);
            prop_assert!(stat.mean >= stat.min - 0.005 && stat.mean <= stat.max + 0.005);
        }
    }

    #[test]
    fn label_value_lengths_equal_record_count(
        headers in headers(),
        rows in ragged_rows(),
    ) {
        let records = build_records(&headers, &rows);
        let cleaned = clean_records(&records);

        let series = label_value_series(&headers[0], &headers[1], &cleaned);
        prop_assert_eq!(series.labels.len(), cleaned.len());
        prop_assert_eq!(series.values.len(), cleaned.len());
    }
}
