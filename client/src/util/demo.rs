//! Built-in demo dataset used when the backend is unreachable.
//!
//! The series is deterministic monthly data for 2024 through 2026, so the
//! time-range filter still visibly narrows the dashboard in demo mode.

#[cfg(test)]
#[path = "demo_test.rs"]
mod demo_test;

use chrono::{Datelike, Months, NaiveDate};
use timerange::StatsQuery;
use timerange::selection::DATE_FORMAT;

use crate::net::types::{ColumnStats, DatasetStats, DatasetSummary, SeriesPoint};

pub const DEMO_DATASET_ID: &str = "demo";

const FIRST_YEAR: i32 = 2024;
const MONTHS: u32 = 36;
const ROWS_PER_UNIT: u64 = 12;

pub fn demo_datasets() -> Vec<DatasetSummary> {
    vec![DatasetSummary {
        id: DEMO_DATASET_ID.to_owned(),
        name: "Demo sales".to_owned(),
        row_count: monthly_points().iter().map(|(_, v)| rows_for(*v)).sum(),
        column_count: 4,
        uploaded_at: None,
    }]
}

/// Demo overview restricted to the window in `query`.
pub fn demo_stats(query: &StatsQuery) -> DatasetStats {
    let from = parse_bound(query.from.as_deref());
    let to = parse_bound(query.to.as_deref());
    let points: Vec<(NaiveDate, f64)> = monthly_points()
        .into_iter()
        .filter(|(month, _)| from.is_none_or(|f| *month >= f) && to.is_none_or(|t| *month < t))
        .collect();

    let values: Vec<f64> = points.iter().map(|(_, v)| *v).collect();
    let revenue = numeric_column("revenue", &values);
    let orders: Vec<f64> = values.iter().map(|v| (v / 4.0).round()).collect();
    let orders = numeric_column("orders", &orders);

    DatasetStats {
        dataset_id: DEMO_DATASET_ID.to_owned(),
        row_count: values.iter().map(|v| rows_for(*v)).sum(),
        column_count: 4,
        columns: vec![text_column("date"), text_column("region"), revenue, orders],
        series: points
            .iter()
            .map(|(month, value)| SeriesPoint { label: month.format("%b %Y").to_string(), value: *value })
            .collect(),
    }
}

fn parse_bound(raw: Option<&str>) -> Option<NaiveDate> {
    raw.and_then(|s| NaiveDate::parse_from_str(s, DATE_FORMAT).ok())
}

fn monthly_points() -> Vec<(NaiveDate, f64)> {
    let Some(start) = NaiveDate::from_ymd_opt(FIRST_YEAR, 1, 1) else {
        return Vec::new();
    };
    (0..MONTHS)
        .filter_map(|i| start.checked_add_months(Months::new(i)))
        .map(|month| (month, value_for(month)))
        .collect()
}

fn value_for(month: NaiveDate) -> f64 {
    let m = f64::from(month.month());
    let trend = f64::from(month.year() - FIRST_YEAR) * 18.0;
    let seasonal = [0.0, -6.0, 4.0, 9.0, 14.0, 22.0, 27.0, 25.0, 12.0, 6.0, 18.0, 34.0][month.month0() as usize];
    (100.0 + trend + seasonal + m).round()
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn rows_for(value: f64) -> u64 {
    value.max(0.0) as u64 * ROWS_PER_UNIT
}

fn text_column(name: &str) -> ColumnStats {
    ColumnStats { name: name.to_owned(), dtype: "string".to_owned(), null_count: 0, mean: None, min: None, max: None }
}

#[allow(clippy::cast_precision_loss)]
fn numeric_column(name: &str, values: &[f64]) -> ColumnStats {
    let mean = (!values.is_empty()).then(|| values.iter().sum::<f64>() / values.len() as f64);
    ColumnStats {
        name: name.to_owned(),
        dtype: "float".to_owned(),
        null_count: 0,
        mean,
        min: values.iter().copied().reduce(f64::min),
        max: values.iter().copied().reduce(f64::max),
    }
}
