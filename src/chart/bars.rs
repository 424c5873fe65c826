/// Bar rows with error whiskers.
///
/// Bars are horizontal runs of a fill glyph. The error bar is drawn on the
/// upper side only, a `─` run capped with `┤`, so the deviation reads as a
/// whisker past the bar top. Stacked rows place each segment at a running
/// offset so segments sit end to end.

use crate::chart::scale::Scale;

// ---------------------------------------------------------------------------
// Glyphs
// ---------------------------------------------------------------------------

/// Fill glyphs assigned to subgroups, in order of first appearance.
pub const SUBGROUP_GLYPHS: &[char] = &['█', '▓', '▒', '░', '▞', '▚'];

/// Glyph for the n-th subgroup, wrapping when the palette is exhausted.
pub fn subgroup_glyph(index: usize) -> char {
    SUBGROUP_GLYPHS[index % SUBGROUP_GLYPHS.len()]
}

// ---------------------------------------------------------------------------
// Single bars
// ---------------------------------------------------------------------------

/// The cells of one bar: fill up to `value`, whisker up to `value + error`.
pub fn bar_cells(fill: char, value: f64, error: f64, scale: &Scale) -> String {
    let bar_end = scale.columns(value);
    let whisker_end = scale.columns(value + error.max(0.0));

    let mut cells = String::new();
    for _ in 0..bar_end {
        cells.push(fill);
    }

    if error > 0.0 && whisker_end > bar_end {
        for _ in 0..whisker_end - bar_end - 1 {
            cells.push('─');
        }
        cells.push('┤');
    }

    cells
}

/// A labelled bar row: `label │cells  value ±error`.
pub fn bar_row(
    label: &str,
    label_width: usize,
    fill: char,
    value: f64,
    error: f64,
    scale: &Scale,
) -> String {
    let cells = bar_cells(fill, value, error, scale);
    let annotation = annotate(value, error);
    format!(
        "{:>lw$} │{:<cw$}  {}",
        label,
        cells,
        annotation,
        lw = label_width,
        cw = scale.width()
    )
}

// ---------------------------------------------------------------------------
// Stacked bars
// ---------------------------------------------------------------------------

/// A labelled stacked row: segments placed end to end at running offsets,
/// whisker at the stack total.
pub fn stacked_row(
    label: &str,
    label_width: usize,
    segments: &[(char, f64)],
    error: f64,
    scale: &Scale,
) -> String {
    let mut cells = String::new();
    let mut offset = 0usize;
    let mut total = 0.0;

    for &(glyph, value) in segments {
        total += value;
        let end = scale.columns(total);
        for _ in 0..end.saturating_sub(offset) {
            cells.push(glyph);
        }
        offset = offset.max(end);
    }

    let whisker_end = scale.columns(total + error.max(0.0));
    if error > 0.0 && whisker_end > offset {
        for _ in 0..whisker_end - offset - 1 {
            cells.push('─');
        }
        cells.push('┤');
    }

    let annotation = annotate(total, error);
    format!(
        "{:>lw$} │{:<cw$}  {}",
        label,
        cells,
        annotation,
        lw = label_width,
        cw = scale.width()
    )
}

fn annotate(value: f64, error: f64) -> String {
    if error > 0.0 {
        format!("{:.1} ±{:.1}", value, error)
    } else {
        format!("{:.1}", value)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
