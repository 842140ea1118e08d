use std::fs::File;
use std::path::Path;

use polars::prelude::*;

use crate::error::Result;

/// Full-table CSV load with ordinary dtype inference. Used for the state
/// reference table and for reading the cleaned output back.
pub fn read_table(path: &Path) -> Result<DataFrame> {
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))?
        .finish()?;
    Ok(df)
}

/// Full-table CSV load with every column kept as a string. The raw storm
/// extract mixes types within columns, so no inference is attempted.
pub fn read_table_untyped(path: &Path) -> Result<DataFrame> {
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))?
        .finish()?;
    Ok(df)
}

/// Writes the frame as CSV with a header row and no index column, creating
/// any missing parent directories first.
pub fn write_table(df: &mut DataFrame, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let mut file = File::create(path)?;
    CsvWriter::new(&mut file).include_header(true).finish(df)?;
    Ok(())
}
