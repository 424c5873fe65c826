/// Clustered/stacked bar chart accumulator.
///
/// `ClusteredPlot` maintains a nested mapping of group → subgroup →
/// (values, errors, labels) and renders it as a clustered bar chart
/// (subgroup bars adjacent within each group) or a stacked one (subgroup
/// segments placed end to end per label). Groups are fixed at
/// construction; adding data to a group that was never declared is an
/// error, never an implicit insert.

use crate::chart::bars::{bar_row, stacked_row, subgroup_glyph};
use crate::chart::figure::Figure;
use crate::chart::scale::Scale;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, PartialEq)]
pub enum ClusteredPlotError {
    /// The subgroup name was empty.
    EmptySubgroupName,
    /// The values list was empty.
    EmptyValues,
    /// The labels list was empty.
    EmptyLabels,
    /// The three parallel lists disagree on length.
    LengthMismatch {
        values: usize,
        errors: usize,
        labels: usize,
    },
    /// The named group was not declared at construction.
    UnknownGroup(String),
}

impl std::fmt::Display for ClusteredPlotError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClusteredPlotError::EmptySubgroupName => write!(f, "Subgroup name is empty"),
            ClusteredPlotError::EmptyValues => write!(f, "Subgroup values are empty"),
            ClusteredPlotError::EmptyLabels => write!(f, "Subgroup labels are empty"),
            ClusteredPlotError::LengthMismatch {
                values,
                errors,
                labels,
            } => write!(
                f,
                "Parallel lists differ in length: {} values, {} errors, {} labels",
                values, errors, labels
            ),
            ClusteredPlotError::UnknownGroup(group) => write!(f, "Group not existing: {}", group),
        }
    }
}

impl std::error::Error for ClusteredPlotError {}

// ---------------------------------------------------------------------------
// Data types
// ---------------------------------------------------------------------------

/// One subgroup's accumulated data: three index-aligned lists.
#[derive(Debug, Clone, PartialEq)]
pub struct SubgroupSeries {
    pub name: String,
    pub values: Vec<f64>,
    pub errors: Vec<f64>,
    pub labels: Vec<String>,
}

/// A declared group and its subgroups, in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub name: String,
    pub subgroups: Vec<SubgroupSeries>,
}

// ---------------------------------------------------------------------------
// ClusteredPlot
// ---------------------------------------------------------------------------

pub struct ClusteredPlot {
    groups: Vec<Group>,
    /// Distinct subgroup names across all groups, in first-appearance
    /// order. The index here picks the subgroup's fill glyph, so the same
    /// subgroup uses the same glyph in every group.
    series_order: Vec<String>,
    figure: Figure,
    width: usize,
}

impl ClusteredPlot {
    /// A plot with a fixed set of groups, each starting with no subgroups.
    /// Duplicate group names collapse to one group.
    pub fn new(title: &str, ylabel: &str, xlabel: &str, groups: &[&str]) -> Self {
        let mut declared: Vec<Group> = Vec::with_capacity(groups.len());
        for name in groups {
            if declared.iter().any(|g| g.name == *name) {
                continue;
            }
            declared.push(Group {
                name: name.to_string(),
                subgroups: Vec::new(),
            });
        }

        ClusteredPlot {
            groups: declared,
            series_order: Vec::new(),
            figure: Figure::new(title, xlabel, ylabel),
            width: 48,
        }
    }

    /// Override the bar body width in terminal columns.
    pub fn set_width(&mut self, width: usize) {
        self.width = width.max(1);
    }

    /// Add data to a subgroup within a group. The group must exist.
    ///
    /// If the subgroup exists, the new values, errors, and labels are
    /// appended to its lists; otherwise the subgroup is created with them.
    pub fn add_subgroup_with_data(
        &mut self,
        group: &str,
        subgroup: &str,
        values: &[f64],
        errors: &[f64],
        labels: &[&str],
    ) -> Result<(), ClusteredPlotError> {
        if subgroup.is_empty() {
            return Err(ClusteredPlotError::EmptySubgroupName);
        }
        if values.is_empty() {
            return Err(ClusteredPlotError::EmptyValues);
        }
        if labels.is_empty() {
            return Err(ClusteredPlotError::EmptyLabels);
        }
        if values.len() != errors.len() || values.len() != labels.len() {
            return Err(ClusteredPlotError::LengthMismatch {
                values: values.len(),
                errors: errors.len(),
                labels: labels.len(),
            });
        }

        let add_to = self
            .groups
            .iter_mut()
            .find(|g| g.name == group)
            .ok_or_else(|| ClusteredPlotError::UnknownGroup(group.to_string()))?;

        match add_to.subgroups.iter_mut().find(|s| s.name == subgroup) {
            Some(existing) => {
                existing.values.extend_from_slice(values);
                existing.errors.extend_from_slice(errors);
                existing.labels.extend(labels.iter().map(|l| l.to_string()));
            }
            None => {
                add_to.subgroups.push(SubgroupSeries {
                    name: subgroup.to_string(),
                    values: values.to_vec(),
                    errors: errors.to_vec(),
                    labels: labels.iter().map(|l| l.to_string()).collect(),
                });
            }
        }

        if !self.series_order.iter().any(|s| s == subgroup) {
            let glyph = subgroup_glyph(self.series_order.len());
            self.series_order.push(subgroup.to_string());
            self.figure.add_legend(glyph, subgroup);
        }

        Ok(())
    }

    // -- Accessors ----------------------------------------------------------

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Subgroups of one group, or `None` if the group does not exist.
    pub fn subgroups(&self, group: &str) -> Option<&[SubgroupSeries]> {
        self.groups
            .iter()
            .find(|g| g.name == group)
            .map(|g| g.subgroups.as_slice())
    }

    /// The underlying figure, for further adjustments like the legend.
    pub fn figure(&self) -> &Figure {
        &self.figure
    }

    pub fn figure_mut(&mut self) -> &mut Figure {
        &mut self.figure
    }

    fn glyph_for(&self, subgroup: &str) -> char {
        let index = self
            .series_order
            .iter()
            .position(|s| s == subgroup)
            .unwrap_or(0);
        subgroup_glyph(index)
    }

    fn label_width(&self) -> usize {
        self.groups
            .iter()
            .flat_map(|g| g.subgroups.iter())
            .flat_map(|s| s.labels.iter())
            .map(|l| l.chars().count())
            .chain(std::iter::once(self.figure.xlabel().chars().count()))
            .max()
            .unwrap_or(1)
    }

    // -- Rendering ----------------------------------------------------------

    /// Render subgroup bars side by side within each group.
    pub fn render_clustered(&mut self) -> &Figure {
        let upper = self
            .groups
            .iter()
            .flat_map(|g| g.subgroups.iter())
            .flat_map(|s| s.values.iter().zip(s.errors.iter()))
            .map(|(v, e)| v + e.max(0.0))
            .fold(0.0_f64, f64::max);
        let scale = Scale::new(0.0, upper, self.width);
        let label_width = self.label_width();

        let mut body = Vec::new();
        body.push(format!(
            "{:>lw$} │ {}",
            self.figure.xlabel(),
            self.figure.ylabel(),
            lw = label_width
        ));

        for group in &self.groups {
            body.push(format!("{}:", group.name));
            for sub in &group.subgroups {
                let glyph = self.glyph_for(&sub.name);
                for ((value, error), label) in sub
                    .values
                    .iter()
                    .zip(sub.errors.iter())
                    .zip(sub.labels.iter())
                {
                    body.push(bar_row(label, label_width, glyph, *value, *error, &scale));
                }
            }
        }

        let footer = format!(
            "{:>lw$} └{}",
            "",
            scale.ruler(self.figure.ylabel()),
            lw = label_width
        );
        self.figure.set_body(body);
        self.figure.set_footer(footer);
        &self.figure
    }

    /// Render subgroup segments stacked end to end, one row per label.
    ///
    /// Rows align by label index across a group's subgroups; the running
    /// offset places each segment where the previous one ended. The
    /// whisker sits at the stack total, carrying the top segment's error.
    pub fn render_stacked(&mut self) -> &Figure {
        let upper = self
            .groups
            .iter()
            .map(|g| {
                let rows = g.subgroups.iter().map(|s| s.values.len()).max().unwrap_or(0);
                (0..rows)
                    .map(|i| {
                        let total: f64 = g
                            .subgroups
                            .iter()
                            .filter_map(|s| s.values.get(i))
                            .sum();
                        let top_error = g
                            .subgroups
                            .iter()
                            .filter_map(|s| s.errors.get(i))
                            .next_back()
                            .copied()
                            .unwrap_or(0.0);
                        total + top_error.max(0.0)
                    })
                    .fold(0.0_f64, f64::max)
            })
            .fold(0.0_f64, f64::max);
        let scale = Scale::new(0.0, upper, self.width);
        let label_width = self.label_width();

        let mut body = Vec::new();
        body.push(format!(
            "{:>lw$} │ {}",
            self.figure.xlabel(),
            self.figure.ylabel(),
            lw = label_width
        ));

        for group in &self.groups {
            body.push(format!("{}:", group.name));
            let rows = group.subgroups.iter().map(|s| s.values.len()).max().unwrap_or(0);
            for i in 0..rows {
                let segments: Vec<(char, f64)> = group
                    .subgroups
                    .iter()
                    .filter_map(|s| s.values.get(i).map(|v| (self.glyph_for(&s.name), *v)))
                    .collect();
                let top_error = group
                    .subgroups
                    .iter()
                    .filter_map(|s| s.errors.get(i))
                    .next_back()
                    .copied()
                    .unwrap_or(0.0);
                let label = group
                    .subgroups
                    .iter()
                    .filter_map(|s| s.labels.get(i))
                    .next()
                    .cloned()
                    .unwrap_or_default();
                body.push(stacked_row(&label, label_width, &segments, top_error, &scale));
            }
        }

        let footer = format!(
            "{:>lw$} └{}",
            "",
            scale.ruler(self.figure.ylabel()),
            lw = label_width
        );
        self.figure.set_body(body);
        self.figure.set_footer(footer);
        &self.figure
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
