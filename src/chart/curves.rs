/// Character-grid trend view.
///
/// Plots one or more series against a shared x axis, one column per x
/// position, markers placed on a height×width grid. Later series draw on
/// top of earlier ones where they collide.

use crate::chart::scale::Scale;

// ---------------------------------------------------------------------------
// Series
// ---------------------------------------------------------------------------

/// Markers assigned to curve series, in order.
pub const SERIES_MARKERS: &[char] = &['●', '○', '◆', '◇'];

/// Marker for the n-th series, wrapping when the palette is exhausted.
pub fn series_marker(index: usize) -> char {
    SERIES_MARKERS[index % SERIES_MARKERS.len()]
}

pub struct CurveSeries<'a> {
    pub marker: char,
    pub values: &'a [f64],
}

// ---------------------------------------------------------------------------
// Grid rendering
// ---------------------------------------------------------------------------

/// Render series over `xs` as grid rows, including a y-axis gutter and an
/// x-axis line with tick labels.
///
/// Series shorter than `xs` simply stop early; extra values are ignored.
pub fn curve_grid(xs: &[u32], series: &[CurveSeries<'_>], height: usize) -> Vec<String> {
    let height = height.max(2);
    let width = xs.len().max(1);

    let values = series.iter().flat_map(|s| s.values.iter().copied());
    let min = values.clone().fold(f64::INFINITY, f64::min);
    let max = values.fold(f64::NEG_INFINITY, f64::max);
    let (min, max) = if min.is_finite() && max.is_finite() {
        (min, max)
    } else {
        (0.0, 1.0)
    };
    // Rows map top-down, so project onto height - 1 steps.
    let scale = Scale::new(min, max, height - 1);

    let mut grid = vec![vec![' '; width]; height];
    for s in series {
        for (col, value) in s.values.iter().enumerate().take(width) {
            let row = height - 1 - scale.columns(*value);
            grid[row][col] = s.marker;
        }
    }

    let hi_label = format!("{:.1}", max);
    let lo_label = format!("{:.1}", min);
    let gutter = hi_label.chars().count().max(lo_label.chars().count());

    let mut lines = Vec::with_capacity(height + 2);
    for (row, cells) in grid.iter().enumerate() {
        let label = if row == 0 {
            hi_label.as_str()
        } else if row == height - 1 {
            lo_label.as_str()
        } else {
            ""
        };
        let body: String = cells.iter().collect();
        lines.push(format!("{:>gutter$} │{}", label, body, gutter = gutter));
    }

    lines.push(format!("{:>gutter$} └{}", "", "─".repeat(width), gutter = gutter));
    lines.push(format!("{:>gutter$}  {}", "", tick_labels(xs), gutter = gutter));

    lines
}

/// X tick labels, one every few columns, left-aligned under their column.
fn tick_labels(xs: &[u32]) -> String {
    const TICK_EVERY: usize = 6;

    let mut line = String::new();
    for (col, x) in xs.iter().enumerate() {
        if col % TICK_EVERY != 0 {
            continue;
        }
        let label = x.to_string();
        if col < line.chars().count() {
            continue; // Previous label ran over this tick's column
        }
        while line.chars().count() < col {
            line.push(' ');
        }
        line.push_str(&label);
    }
    line
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_has_height_plus_axis_rows() {
        let xs: Vec<u32> = (0..24).collect();
        let values: Vec<f64> = (0..24).map(|h| h as f64).collect();
        let series = [CurveSeries {
            marker: '●',
            values: &values,
        }];

        let lines = curve_grid(&xs, &series, 10);
        assert_eq!(lines.len(), 12, "10 grid rows plus axis and tick lines");
    }

    #[test]
    fn test_extremes_sit_on_top_and_bottom_rows() {
        let xs = [0, 1, 2];
        let values = [5.0, 20.0, 5.0];
        let series = [CurveSeries {
            marker: '●',
            values: &values,
        }];

        let lines = curve_grid(&xs, &series, 8);
        assert!(lines[0].contains('●'), "max value should reach the top row");
        assert!(
            lines[7].contains('●'),
            "min value should sit on the bottom row"
        );
        assert!(lines[0].starts_with("20.0"), "top row carries the max label");
        assert!(lines[7].contains("5.0"), "bottom row carries the min label");
    }

    #[test]
    fn test_two_series_use_their_own_markers() {
        let xs = [0, 1];
        let a = [1.0, 2.0];
        let b = [9.0, 10.0];
        let series = [
            CurveSeries { marker: '●', values: &a },
            CurveSeries { marker: '○', values: &b },
        ];

        let text = curve_grid(&xs, &series, 6).join("\n");
        assert!(text.contains('●'));
        assert!(text.contains('○'));
    }

    #[test]
    fn test_tick_labels_start_at_origin() {
        let xs: Vec<u32> = (0..24).collect();
        let ticks = tick_labels(&xs);
        assert!(ticks.starts_with('0'));
        assert!(ticks.contains("6"));
        assert!(ticks.contains("12"));
        assert!(ticks.contains("18"));
    }
}
