use polars::prelude::*;

use crate::error::Result;

/// Valid US state and territory FIPS range for this dataset.
pub const MIN_STATE_FIPS: i64 = 1;
pub const MAX_STATE_FIPS: i64 = 53;

#[derive(Debug)]
pub struct FipsFilterOutcome {
    pub dataframe: DataFrame,
    /// Rows removed because their identifier was out of range or unparseable.
    pub dropped_rows: usize,
    /// Identifier values that failed numeric coercion (always dropped).
    pub coercion_failures: usize,
}

/// Coerces the state identifier column to numeric and keeps only rows whose
/// value lies in [1, 53] inclusive. Coercion failures are counted, never
/// raised; surviving rows keep their original order and the identifier column
/// is replaced with its integer form.
pub fn filter_valid_state_fips(df: &DataFrame, column: &str) -> Result<FipsFilterOutcome> {
    let casted = df.column(column)?.cast(&DataType::String)?;
    let values = casted.str()?;

    let mut keep = Vec::with_capacity(df.height());
    let mut kept_codes: Vec<i64> = Vec::new();
    let mut coercion_failures = 0usize;

    for value in values.into_iter() {
        let parsed = value.and_then(|raw| raw.trim().parse::<f64>().ok());
        if value.is_some() && parsed.is_none() {
            coercion_failures += 1;
        }

        match parsed {
            Some(code)
                if code >= MIN_STATE_FIPS as f64 && code <= MAX_STATE_FIPS as f64 =>
            {
                keep.push(true);
                kept_codes.push(code as i64);
            }
            _ => keep.push(false),
        }
    }

    let mask = BooleanChunked::from_slice("valid_fips".into(), &keep);
    let mut filtered = df.filter(&mask)?;
    filtered.with_column(Series::new(column.into(), kept_codes))?;

    let dropped_rows = df.height() - filtered.height();
    Ok(FipsFilterOutcome {
        dataframe: filtered,
        dropped_rows,
        coercion_failures,
    })
}
