/// Chart framing: title, axis labels, legend, and a rendered body.
///
/// A `Figure` owns everything around the chart body; the body itself is
/// produced by the bar/curve builders and installed with `set_body`.
/// Rendering goes through `Display`, so showing a figure is
/// `print!("{}", figure)`; `save_to` writes the same rendering to a file.

use std::fmt;
use std::path::Path;

// ---------------------------------------------------------------------------
// Legend
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    /// Glyph or marker used for the series in the chart body.
    pub glyph: char,
    pub label: String,
}

// ---------------------------------------------------------------------------
// Figure
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    title: String,
    xlabel: String,
    ylabel: String,
    legend: Vec<LegendEntry>,
    body: Vec<String>,
    /// Axis ruler line printed below the body.
    footer: Option<String>,
}

impl Figure {
    pub fn new(title: &str, xlabel: &str, ylabel: &str) -> Self {
        Figure {
            title: title.to_string(),
            xlabel: xlabel.to_string(),
            ylabel: ylabel.to_string(),
            legend: Vec::new(),
            body: Vec::new(),
            footer: None,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn xlabel(&self) -> &str {
        &self.xlabel
    }

    pub fn ylabel(&self) -> &str {
        &self.ylabel
    }

    /// Replace the chart body.
    pub fn set_body(&mut self, lines: Vec<String>) {
        self.body = lines;
    }

    pub fn set_footer(&mut self, line: String) {
        self.footer = Some(line);
    }

    pub fn add_legend(&mut self, glyph: char, label: &str) {
        self.legend.push(LegendEntry {
            glyph,
            label: label.to_string(),
        });
    }

    pub fn legend(&self) -> &[LegendEntry] {
        &self.legend
    }

    /// Mutable legend access for post-construction adjustments.
    pub fn legend_mut(&mut self) -> &mut Vec<LegendEntry> {
        &mut self.legend
    }

    /// Write the rendered figure to a file.
    pub fn save_to(&self, path: &Path) -> std::io::Result<()> {
        std::fs::write(path, self.to_string())
    }
}

impl fmt::Display for Figure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", "═".repeat(self.title.chars().count().max(1)))?;

        for line in &self.body {
            writeln!(f, "{}", line)?;
        }

        if let Some(ref footer) = self.footer {
            writeln!(f, "{}", footer)?;
        }

        if !self.legend.is_empty() {
            writeln!(f)?;
            for entry in &self.legend {
                writeln!(f, "  {} {}", entry.glyph, entry.label)?;
            }
        }

        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_frames_body_with_title_and_legend() {
        let mut figure = Figure::new("Test Chart", "Hour", "Temperature (°C)");
        figure.set_body(vec!["row one".to_string(), "row two".to_string()]);
        figure.set_footer("0.0 ── 10.0".to_string());
        figure.add_legend('█', "Average");

        let text = figure.to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Test Chart");
        assert!(lines[1].chars().all(|c| c == '═'));
        assert!(text.contains("row one\nrow two\n"));
        assert!(text.contains("0.0 ── 10.0"));
        assert!(text.ends_with("  █ Average\n"));
    }

    #[test]
    fn test_legend_is_adjustable_after_construction() {
        let mut figure = Figure::new("t", "x", "y");
        figure.add_legend('█', "first");
        figure.legend_mut().clear();
        figure.add_legend('░', "second");

        assert_eq!(figure.legend().len(), 1);
        assert_eq!(figure.legend()[0].label, "second");
    }

    #[test]
    fn test_empty_figure_renders_title_block_only() {
        let figure = Figure::new("Bare", "x", "y");
        let text = figure.to_string();
        assert_eq!(text, "Bare\n════\n");
    }
}
