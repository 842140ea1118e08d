use polars::prelude::*;

use crate::error::Result;

#[derive(Debug, Default, Clone, Copy)]
pub struct DamageStats {
    /// Non-null values that failed to parse and defaulted to 0.0.
    pub fallback_count: usize,
    /// Null cells that defaulted to 0.0.
    pub missing_count: usize,
}

/// Parses one shorthand damage value ("150.00K", "1.2M", "2500") into USD.
/// Returns `None` for anything malformed, including the empty string.
pub fn parse_damage_value(raw: &str) -> Option<f64> {
    let trimmed = raw.trim().to_ascii_uppercase();
    if let Some(prefix) = trimmed.strip_suffix('K') {
        prefix.parse::<f64>().ok().map(|value| value * 1_000.0)
    } else if let Some(prefix) = trimmed.strip_suffix('M') {
        prefix.parse::<f64>().ok().map(|value| value * 1_000_000.0)
    } else {
        trimmed.parse::<f64>().ok()
    }
}

/// Replaces a shorthand damage column with plain floating-point USD values.
/// Positional transform: exactly one output per input, order preserved.
/// Null and malformed inputs become 0.0 and are counted separately so a
/// data-quality regression shows up in the run summary.
pub fn convert_damage_column(df: &mut DataFrame, column: &str) -> Result<DamageStats> {
    let casted = df.column(column)?.cast(&DataType::String)?;
    let values = casted.str()?;

    let mut converted = Vec::with_capacity(values.len());
    let mut stats = DamageStats::default();

    for value in values.into_iter() {
        match value {
            None => {
                stats.missing_count += 1;
                converted.push(0.0);
            }
            Some(raw) => match parse_damage_value(raw) {
                Some(usd) => converted.push(usd),
                None => {
                    stats.fallback_count += 1;
                    converted.push(0.0);
                }
            },
        }
    }

    df.with_column(Series::new(column.into(), converted))?;
    Ok(stats)
}
