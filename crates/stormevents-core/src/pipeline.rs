use std::path::PathBuf;

use serde::Serialize;
use tracing::{info, warn};

use crate::error::Result;
use crate::{damage, enrich, fips, io, schema};

pub const RAW_DATA_PATH: &str = "cache/storm_data_2024.csv";
pub const STATE_REFERENCE_PATH: &str = "cache/states.csv";
pub const CLEAN_DATA_PATH: &str = "cache/storm_data_2024_filtered.csv";

#[derive(Debug, Clone)]
pub struct PipelinePaths {
    pub raw: PathBuf,
    pub states: PathBuf,
    pub output: PathBuf,
}

impl Default for PipelinePaths {
    fn default() -> Self {
        Self {
            raw: PathBuf::from(RAW_DATA_PATH),
            states: PathBuf::from(STATE_REFERENCE_PATH),
            output: PathBuf::from(CLEAN_DATA_PATH),
        }
    }
}

/// Row counts and fallback diagnostics for one pipeline run. Malformed
/// values never fail a run; these counts are how regressions surface.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineSummary {
    pub rows_loaded: usize,
    pub rows_kept: usize,
    pub rows_dropped_invalid_fips: usize,
    pub fips_coercion_failures: usize,
    pub damage_property_fallbacks: usize,
    pub damage_property_missing: usize,
    pub damage_crops_fallbacks: usize,
    pub damage_crops_missing: usize,
    pub unmatched_states: usize,
    pub rows_written: usize,
}

/// Runs the full cleaning pipeline: load, validate the required column set,
/// filter to valid state FIPS codes, convert damage shorthand to USD, join
/// state coordinates, and write the enriched table. One sequential pass;
/// output is written once, at the end.
pub fn run(paths: &PipelinePaths) -> Result<PipelineSummary> {
    info!(path = %paths.raw.display(), "loading raw storm data");
    let raw = io::read_table_untyped(&paths.raw)?;
    let rows_loaded = raw.height();

    let selected = schema::select_columns(
        &raw,
        &schema::REQUIRED_COLUMNS,
        &paths.raw.display().to_string(),
    )?;

    let filtered = fips::filter_valid_state_fips(&selected, "STATE_FIPS")?;
    info!(
        kept = filtered.dataframe.height(),
        dropped = filtered.dropped_rows,
        "filtered to valid state FIPS codes"
    );

    let mut cleaned = filtered.dataframe;
    let property = damage::convert_damage_column(&mut cleaned, "DAMAGE_PROPERTY")?;
    let crops = damage::convert_damage_column(&mut cleaned, "DAMAGE_CROPS")?;
    if property.fallback_count > 0 || crops.fallback_count > 0 {
        warn!(
            property = property.fallback_count,
            crops = crops.fallback_count,
            "malformed damage values defaulted to 0.0"
        );
    }

    let states = io::read_table(&paths.states)?;
    let enriched = enrich::merge_state_coordinates(&cleaned, &states)?;
    if enriched.unmatched_rows > 0 {
        warn!(
            rows = enriched.unmatched_rows,
            "storm rows without a state reference entry kept null coordinates"
        );
    }

    let mut output = enriched.dataframe;
    io::write_table(&mut output, &paths.output)?;
    info!(path = %paths.output.display(), rows = output.height(), "cleaned data saved");

    Ok(PipelineSummary {
        rows_loaded,
        rows_kept: cleaned.height(),
        rows_dropped_invalid_fips: filtered.dropped_rows,
        fips_coercion_failures: filtered.coercion_failures,
        damage_property_fallbacks: property.fallback_count,
        damage_property_missing: property.missing_count,
        damage_crops_fallbacks: crops.fallback_count,
        damage_crops_missing: crops.missing_count,
        unmatched_states: enriched.unmatched_rows,
        rows_written: output.height(),
    })
}
