use std::collections::HashSet;

use polars::prelude::*;

use crate::error::Result;
use crate::schema;

/// Key column of the state reference table.
pub const STATE_NAME_COLUMN: &str = "name";

#[derive(Debug)]
pub struct EnrichmentOutcome {
    pub dataframe: DataFrame,
    /// Storm rows whose state name found no reference entry. They survive
    /// the join with null coordinates.
    pub unmatched_rows: usize,
}

/// Left joins storm rows to the state reference table on state name,
/// appending every reference column. Both key columns are uppercased before
/// comparison, every storm row is preserved, and storm-row order is
/// maintained. Duplicate reference names multiply matching rows; they never
/// remove any.
pub fn merge_state_coordinates(
    storm_df: &DataFrame,
    states_df: &DataFrame,
) -> Result<EnrichmentOutcome> {
    schema::ensure_columns(states_df, &[STATE_NAME_COLUMN], "state reference table")?;

    let storm_names: Vec<Option<String>> = storm_df
        .column("STATE")?
        .cast(&DataType::String)?
        .str()?
        .into_iter()
        .map(|value| value.map(|name| name.to_uppercase()))
        .collect();

    let reference_names: Vec<Option<String>> = states_df
        .column(STATE_NAME_COLUMN)?
        .cast(&DataType::String)?
        .str()?
        .into_iter()
        .map(|value| value.map(|name| name.to_uppercase()))
        .collect();

    let known: HashSet<&str> = reference_names
        .iter()
        .flatten()
        .map(|name| name.as_str())
        .collect();
    let unmatched_rows = storm_names
        .iter()
        .filter(|name| match name {
            Some(name) => !known.contains(name.as_str()),
            None => true,
        })
        .count();

    let mut storm = storm_df.clone();
    storm.with_column(Series::new("STATE".into(), storm_names))?;

    let mut states = states_df.clone();
    states.with_column(Series::new(STATE_NAME_COLUMN.into(), reference_names))?;

    let mut args = JoinArgs::new(JoinType::Left);
    args.coalesce = JoinCoalesce::KeepColumns;
    args.maintain_order = MaintainOrderJoin::Left;

    let joined = storm
        .lazy()
        .join(
            states.lazy(),
            [col("STATE")],
            [col(STATE_NAME_COLUMN)],
            args,
        )
        .collect()?;

    Ok(EnrichmentOutcome {
        dataframe: joined,
        unmatched_rows,
    })
}
