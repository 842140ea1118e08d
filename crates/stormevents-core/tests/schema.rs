use polars::prelude::*;

use stormevents_core::error::PipelineError;
use stormevents_core::schema::{ensure_columns, select_columns, REQUIRED_COLUMNS};

fn sample_frame() -> DataFrame {
    DataFrame::new(vec![
        Series::new("STATE".into(), vec!["TEXAS", "VIRGINIA"]).into(),
        Series::new("STATE_FIPS".into(), vec!["48", "51"]).into(),
        Series::new("EVENT_TYPE".into(), vec!["Tornado", "Hail"]).into(),
    ])
    .unwrap()
}

#[test]
fn missing_columns_are_all_reported() {
    let df = sample_frame();
    let err = ensure_columns(&df, &REQUIRED_COLUMNS, "raw extract").unwrap_err();

    match &err {
        PipelineError::MissingColumns { context, columns } => {
            assert_eq!(context, "raw extract");
            assert!(columns.contains(&"YEAR".to_string()));
            assert!(columns.contains(&"MONTH_NAME".to_string()));
            assert!(columns.contains(&"DAMAGE_CROPS".to_string()));
            assert!(!columns.contains(&"STATE".to_string()));
            assert_eq!(columns.len(), 8);
        }
        other => panic!("expected MissingColumns, got {other:?}"),
    }

    let message = err.to_string();
    assert!(message.contains("YEAR"));
    assert!(message.contains("DAMAGE_PROPERTY"));
}

#[test]
fn select_preserves_requested_order() {
    let df = sample_frame();
    let selected = select_columns(&df, &["EVENT_TYPE", "STATE"], "raw extract").unwrap();

    let names: Vec<&str> = selected
        .get_column_names()
        .iter()
        .map(|name| name.as_str())
        .collect();
    assert_eq!(names, vec!["EVENT_TYPE", "STATE"]);
    assert_eq!(selected.height(), 2);
}

#[test]
fn select_is_case_sensitive() {
    let df = sample_frame();
    let err = select_columns(&df, &["state"], "raw extract").unwrap_err();
    assert!(err.to_string().contains("state"));
}
