use polars::prelude::*;

use stormevents_core::views::{
    distinct_values, filter_by_values, monthly_totals, state_map_totals, totals_by_group,
};

fn cleaned_frame() -> DataFrame {
    DataFrame::new(vec![
        Series::new(
            "STATE".into(),
            vec!["TEXAS", "TEXAS", "VIRGINIA", "VIRGINIA"],
        )
        .into(),
        Series::new("state".into(), vec!["TX", "TX", "VA", "VA"]).into(),
        Series::new(
            "EVENT_TYPE".into(),
            vec!["Tornado", "Hail", "Tornado", "Flood"],
        )
        .into(),
        Series::new(
            "MONTH_NAME".into(),
            vec!["April", "January", "April", "December"],
        )
        .into(),
        Series::new("DAMAGE_PROPERTY".into(), vec![100.0, 50.0, 25.0, 10.0]).into(),
        Series::new("INJURIES_DIRECT".into(), vec![2i64, 0, 1, 4]).into(),
    ])
    .unwrap()
}

#[test]
fn distinct_values_are_sorted() {
    let df = cleaned_frame();
    let events = distinct_values(&df, "EVENT_TYPE").unwrap();
    assert_eq!(events, vec!["Flood", "Hail", "Tornado"]);
}

#[test]
fn multiselect_filter_preserves_order() {
    let df = cleaned_frame();
    let filtered = filter_by_values(&df, "EVENT_TYPE", &["Tornado", "Flood"]).unwrap();

    assert_eq!(filtered.height(), 3);
    let months = filtered.column("MONTH_NAME").unwrap().str().unwrap();
    assert_eq!(months.get(0), Some("April"));
    assert_eq!(months.get(1), Some("April"));
    assert_eq!(months.get(2), Some("December"));

    let empty = filter_by_values(&df, "EVENT_TYPE", &[]).unwrap();
    assert_eq!(empty.height(), 0);
}

#[test]
fn group_totals_sum_and_sort_descending() {
    let df = cleaned_frame();
    let totals = totals_by_group(&df, "STATE", "DAMAGE_PROPERTY").unwrap();

    assert_eq!(totals.height(), 2);
    let states = totals.column("STATE").unwrap().str().unwrap();
    let values = totals.column("TOTAL").unwrap().f64().unwrap();
    assert_eq!(states.get(0), Some("TEXAS"));
    assert_eq!(values.get(0), Some(150.0));
    assert_eq!(states.get(1), Some("VIRGINIA"));
    assert_eq!(values.get(1), Some(35.0));
}

#[test]
fn monthly_totals_follow_calendar_order() {
    let df = cleaned_frame();
    let summary = monthly_totals(&df, "STATE", "INJURIES_DIRECT").unwrap();

    let months = summary.column("MONTH_NAME").unwrap().str().unwrap();
    assert_eq!(months.get(0), Some("January"));
    assert_eq!(months.get(summary.height() - 1), Some("December"));

    let values = summary.column("VALUE").unwrap().f64().unwrap();
    let total: f64 = (0..summary.height())
        .map(|idx| values.get(idx).unwrap_or(0.0))
        .sum();
    assert_eq!(total, 7.0);
}

#[test]
fn map_totals_key_on_state_code_and_name() {
    let df = cleaned_frame();
    let totals = state_map_totals(&df, "DAMAGE_PROPERTY").unwrap();

    assert_eq!(totals.height(), 2);
    let codes = totals.column("state").unwrap().str().unwrap();
    assert_eq!(codes.get(0), Some("TX"));
    assert_eq!(codes.get(1), Some("VA"));
    let values = totals.column("VALUE").unwrap().f64().unwrap();
    assert_eq!(values.get(0), Some(150.0));
    assert_eq!(values.get(1), Some(35.0));
}

#[test]
fn unknown_metric_is_rejected() {
    let df = cleaned_frame();
    let err = totals_by_group(&df, "STATE", "MONTH_NAME").unwrap_err();
    assert!(err.to_string().contains("MONTH_NAME"));
}
