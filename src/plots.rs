/// Ready-made temperature figures.
///
/// The two standard views over a single sample sheet: a per-hour bar chart
/// with deviation whiskers, and a two-curve trend view of the average and
/// deviation columns.

use crate::chart::bars::{bar_row, subgroup_glyph};
use crate::chart::curves::{CurveSeries, curve_grid, series_marker};
use crate::chart::figure::Figure;
use crate::chart::scale::Scale;
use crate::model::SampleSheet;

// ---------------------------------------------------------------------------
// Bar chart with error bars
// ---------------------------------------------------------------------------

/// One bar per hour, deviation drawn as an upper whisker.
pub fn temperature_bars(sheet: &SampleSheet, width: usize) -> Figure {
    let mut figure = Figure::new(
        "Temperature and Standard Deviation Over a Day",
        "Hour",
        "Temperature (°C)",
    );
    figure.add_legend(subgroup_glyph(0), "Average Temperature with Deviation");

    let upper = sheet
        .samples
        .iter()
        .map(|s| s.average + s.deviation.max(0.0))
        .fold(0.0_f64, f64::max);
    let scale = Scale::new(0.0, upper, width);

    let label_width = sheet
        .samples
        .iter()
        .map(|s| s.hour.to_string().chars().count())
        .chain(std::iter::once(figure.xlabel().chars().count()))
        .max()
        .unwrap_or(1);

    let mut body = Vec::with_capacity(sheet.samples.len() + 1);
    body.push(format!(
        "{:>lw$} │ {}",
        figure.xlabel(),
        figure.ylabel(),
        lw = label_width
    ));
    for sample in &sheet.samples {
        body.push(bar_row(
            &sample.hour.to_string(),
            label_width,
            subgroup_glyph(0),
            sample.average,
            sample.deviation,
            &scale,
        ));
    }

    let footer = format!(
        "{:>lw$} └{}",
        "",
        scale.ruler(figure.ylabel()),
        lw = label_width
    );
    figure.set_body(body);
    figure.set_footer(footer);
    figure
}

// ---------------------------------------------------------------------------
// Curve view
// ---------------------------------------------------------------------------

/// Average and Deviation curves over the hour axis.
pub fn temperature_curves(sheet: &SampleSheet, height: usize) -> Figure {
    let mut figure = Figure::new("Temperature Curves Over a Day", "Hour", "Temperature (°C)");
    figure.add_legend(series_marker(0), "Average");
    figure.add_legend(series_marker(1), "Deviation");

    let hours: Vec<u32> = sheet.samples.iter().map(|s| s.hour).collect();
    let averages: Vec<f64> = sheet.samples.iter().map(|s| s.average).collect();
    let deviations: Vec<f64> = sheet.samples.iter().map(|s| s.deviation).collect();

    let series = [
        CurveSeries {
            marker: series_marker(0),
            values: &averages,
        },
        CurveSeries {
            marker: series_marker(1),
            values: &deviations,
        },
    ];

    let mut body = curve_grid(&hours, &series, height);
    body.push(format!("  {}", figure.xlabel()));
    figure.set_body(body);
    figure
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
