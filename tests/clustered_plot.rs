//! ClusteredPlot Integration Tests
//!
//! Exercise the accumulator contract and both rendering layouts against
//! the fixture workbook, the way the binary wires them together.
//!
//! Run with: cargo test --test clustered_plot

use std::path::Path;

use thermoplot::analysis::merge::merge_on_hour;
use thermoplot::chart::clustered::{ClusteredPlot, ClusteredPlotError};
use thermoplot::config::WorkbookConfig;
use thermoplot::ingest::workbook;

// ---------------------------------------------------------------------------
// Test Helpers
// ---------------------------------------------------------------------------

fn fixture_config() -> WorkbookConfig {
    WorkbookConfig {
        dir: "tests/data/samples".to_string(),
        sheet_one: "sheet_one".to_string(),
        sheet_two: "sheet_two".to_string(),
    }
}

/// A plot populated from the two fixture sheets: one group per day half,
/// one subgroup per sheet.
fn fixture_plot() -> ClusteredPlot {
    let config = fixture_config();
    let dir = Path::new("tests/data/samples");

    let first = workbook::read_sheet(dir, &config.sheet_one)
        .expect("sheet parses")
        .expect("sheet exists");
    let second = workbook::read_sheet(dir, &config.sheet_two)
        .expect("sheet parses")
        .expect("sheet exists");
    let merged = merge_on_hour(&first, &second);

    let mut plot = ClusteredPlot::new(
        "Indoor vs Outdoor Temperatures",
        "Temperature (°C)",
        "Hour",
        &["am", "pm"],
    );

    for row in &merged {
        let group = if row.hour < 12 { "am" } else { "pm" };
        let label = format!("{:02}", row.hour);
        plot.add_subgroup_with_data(
            group,
            "sheet_one",
            &[row.first_average],
            &[row.first_deviation],
            &[&label],
        )
        .expect("group was declared");
        plot.add_subgroup_with_data(
            group,
            "sheet_two",
            &[row.second_average],
            &[row.second_deviation],
            &[&label],
        )
        .expect("group was declared");
    }

    plot
}

// ---------------------------------------------------------------------------
// 1. Accumulator contract
// ---------------------------------------------------------------------------

#[test]
fn test_unknown_group_is_rejected() {
    let mut plot = ClusteredPlot::new("t", "y", "x", &["am", "pm"]);

    let err = plot
        .add_subgroup_with_data("midnight", "sheet_one", &[1.0], &[0.1], &["00"])
        .unwrap_err();

    assert_eq!(
        err,
        ClusteredPlotError::UnknownGroup("midnight".to_string()),
        "groups are fixed at construction, never created by adds"
    );
}

#[test]
fn test_empty_data_and_labels_are_rejected() {
    let mut plot = ClusteredPlot::new("t", "y", "x", &["am"]);

    assert_eq!(
        plot.add_subgroup_with_data("am", "", &[1.0], &[0.1], &["00"]),
        Err(ClusteredPlotError::EmptySubgroupName)
    );
    assert_eq!(
        plot.add_subgroup_with_data("am", "s", &[], &[], &["00"]),
        Err(ClusteredPlotError::EmptyValues)
    );
    assert_eq!(
        plot.add_subgroup_with_data("am", "s", &[1.0], &[0.1], &[]),
        Err(ClusteredPlotError::EmptyLabels)
    );
}

#[test]
fn test_repeated_adds_accumulate_per_subgroup() {
    let plot = fixture_plot();

    // 10 shared morning hours (10 and 11 are missing from sheet_two)
    let am = plot.subgroups("am").expect("declared group");
    assert_eq!(am.len(), 2, "one subgroup per sheet");
    assert_eq!(am[0].name, "sheet_one");
    assert_eq!(am[0].values.len(), 10, "each merged row extended the lists");
    assert_eq!(am[0].labels.first().map(String::as_str), Some("00"));
    assert_eq!(am[0].labels.last().map(String::as_str), Some("09"));

    let pm = plot.subgroups("pm").expect("declared group");
    assert_eq!(pm[1].values.len(), 12);
}

// ---------------------------------------------------------------------------
// 2. Rendering
// ---------------------------------------------------------------------------

#[test]
fn test_clustered_rendering_shows_both_sheets_per_group() {
    let mut plot = fixture_plot();
    let text = plot.render_clustered().to_string();
    println!("\n{}", text);

    assert!(text.contains("Indoor vs Outdoor Temperatures"));
    assert!(text.contains("am:"));
    assert!(text.contains("pm:"));
    assert!(text.contains("  █ sheet_one"));
    assert!(text.contains("  ▓ sheet_two"));
    // Hour 12 from both sheets
    assert!(text.contains("21.8 ±1.4"));
    assert!(text.contains("21.4 ±0.7"));
}

#[test]
fn test_stacked_rendering_sums_shared_labels() {
    let mut plot = fixture_plot();
    let text = plot.render_stacked().to_string();
    println!("\n{}", text);

    // Hour 0: 11.5 + 18.9 stacked, sheet_two's deviation on top
    assert!(
        text.contains("30.4 ±0.4"),
        "stack total for hour 00 with top error:\n{}",
        text
    );
}

#[test]
fn test_legend_survives_manual_adjustment() {
    let mut plot = fixture_plot();
    plot.figure_mut().legend_mut()[0].label = "indoor".to_string();
    let text = plot.render_clustered().to_string();
    assert!(text.contains("  █ indoor"));
}

// ---------------------------------------------------------------------------
// 3. Figure save
// ---------------------------------------------------------------------------

#[test]
fn test_rendered_chart_saves_to_file() {
    let mut plot = fixture_plot();
    plot.render_stacked();

    let path = std::env::temp_dir().join("thermoplot_stacked_chart.txt");
    plot.figure().save_to(&path).expect("save should succeed");

    let saved = std::fs::read_to_string(&path).expect("chart file exists");
    assert!(saved.contains("Indoor vs Outdoor Temperatures"));
    let _ = std::fs::remove_file(&path);
}
