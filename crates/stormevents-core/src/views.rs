//! Dashboard aggregation logic as pure functions over the cleaned table.
//! Each dashboard is (selected filters) -> (aggregated frame); rendering
//! happens elsewhere.

use std::collections::BTreeSet;

use polars::prelude::*;

use crate::error::{PipelineError, Result};

/// The numeric columns a dashboard may sum.
pub const METRIC_COLUMNS: [&str; 6] = [
    "INJURIES_DIRECT",
    "INJURIES_INDIRECT",
    "DEATHS_DIRECT",
    "DEATHS_INDIRECT",
    "DAMAGE_PROPERTY",
    "DAMAGE_CROPS",
];

pub const MONTH_ORDER: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

fn ensure_metric(metric: &str) -> Result<()> {
    if METRIC_COLUMNS.contains(&metric) {
        Ok(())
    } else {
        Err(PipelineError::Validation(format!(
            "unknown metric column '{metric}'"
        )))
    }
}

/// Sorted distinct values of a column, for populating a selector.
pub fn distinct_values(df: &DataFrame, column: &str) -> Result<Vec<String>> {
    let casted = df.column(column)?.cast(&DataType::String)?;
    let values = casted.str()?;

    let mut set = BTreeSet::new();
    for value in values.into_iter().flatten() {
        set.insert(value.to_string());
    }
    Ok(set.into_iter().collect())
}

/// Keeps rows whose column value is among the selected options, preserving
/// row order. An empty selection keeps nothing, matching a cleared
/// multi-select.
pub fn filter_by_values(df: &DataFrame, column: &str, selected: &[&str]) -> Result<DataFrame> {
    let casted = df.column(column)?.cast(&DataType::String)?;
    let values = casted.str()?;

    let keep: Vec<bool> = values
        .into_iter()
        .map(|value| value.map(|v| selected.contains(&v)).unwrap_or(false))
        .collect();
    let mask = BooleanChunked::from_slice("selected".into(), &keep);
    Ok(df.filter(&mask)?)
}

/// Sums a metric per group key, descending by total. Feeds the per-state and
/// per-event-type bar charts.
pub fn totals_by_group(df: &DataFrame, group: &str, metric: &str) -> Result<DataFrame> {
    ensure_metric(metric)?;
    let totals = df
        .clone()
        .lazy()
        .group_by([col(group)])
        .agg([col(metric).cast(DataType::Float64).sum().alias("TOTAL")])
        .collect()?;
    Ok(totals.sort(
        ["TOTAL"],
        SortMultipleOptions::default().with_order_descending(true),
    )?)
}

/// Sums a metric per (group, month), ordered by calendar month. Feeds the
/// monthly line charts.
pub fn monthly_totals(df: &DataFrame, group: &str, metric: &str) -> Result<DataFrame> {
    ensure_metric(metric)?;
    let summary = df
        .clone()
        .lazy()
        .group_by([col(group), col("MONTH_NAME")])
        .agg([col(metric).cast(DataType::Float64).sum().alias("VALUE")])
        .collect()?;

    let months = summary.column("MONTH_NAME")?.str()?;
    let order: Vec<i64> = months.into_iter().map(month_number).collect();

    let mut keyed = summary.clone();
    keyed.with_column(Series::new("month_number".into(), order))?;
    let sorted = keyed.sort(
        ["month_number", group],
        SortMultipleOptions::default().with_maintain_order(true),
    )?;
    Ok(sorted.drop("month_number")?)
}

/// Sums a metric per state, keyed by both the two-letter code and the full
/// name. Feeds the choropleth map.
pub fn state_map_totals(df: &DataFrame, metric: &str) -> Result<DataFrame> {
    ensure_metric(metric)?;
    let totals = df
        .clone()
        .lazy()
        .group_by([col("state"), col("STATE")])
        .agg([col(metric).cast(DataType::Float64).sum().alias("VALUE")])
        .collect()?;
    Ok(totals.sort(["state"], SortMultipleOptions::default())?)
}

fn month_number(name: Option<&str>) -> i64 {
    name.and_then(|name| {
        MONTH_ORDER
            .iter()
            .position(|month| month.eq_ignore_ascii_case(name))
    })
    .map(|index| index as i64 + 1)
    // unknown month labels sort after December
    .unwrap_or(13)
}
