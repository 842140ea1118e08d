use std::collections::HashSet;

use polars::prelude::*;

use crate::error::{PipelineError, Result};

/// The columns the raw storm extract must provide before any transformation
/// runs. Names are case-sensitive and must match the source header exactly.
pub const REQUIRED_COLUMNS: [&str; 11] = [
    "STATE",
    "STATE_FIPS",
    "YEAR",
    "MONTH_NAME",
    "EVENT_TYPE",
    "INJURIES_DIRECT",
    "INJURIES_INDIRECT",
    "DEATHS_DIRECT",
    "DEATHS_INDIRECT",
    "DAMAGE_PROPERTY",
    "DAMAGE_CROPS",
];

/// Checks that every required column exists, naming all absentees at once
/// rather than failing on the first.
pub fn ensure_columns(df: &DataFrame, required: &[&str], context: &str) -> Result<()> {
    let present: HashSet<&str> = df
        .get_column_names()
        .iter()
        .map(|name| name.as_str())
        .collect();

    let missing: Vec<String> = required
        .iter()
        .filter(|column| !present.contains(**column))
        .map(|column| column.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(PipelineError::MissingColumns {
            context: context.to_string(),
            columns: missing,
        })
    }
}

/// Validates the required column set and projects the frame down to exactly
/// those columns, in the order given.
pub fn select_columns(df: &DataFrame, required: &[&str], context: &str) -> Result<DataFrame> {
    ensure_columns(df, required, context)?;
    Ok(df.select(required.iter().copied())?)
}
