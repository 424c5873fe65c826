/// Data organization utilities for the sample-charting crate.
///
/// Submodules:
/// - `merge` — joins two parsed sheets into per-hour merged rows.

pub mod merge;
