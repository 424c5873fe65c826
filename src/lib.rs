//! Hourly temperature sample loading and terminal bar charts.
//!
//! Sample workbooks (directories of CSV sheets with `Hour`, `Average`,
//! and `Deviation` columns) are loaded into typed sheets and rendered as
//! text charts: per-hour bars with error whiskers, two-curve trends, or
//! clustered/stacked group charts via [`chart::clustered::ClusteredPlot`].
//!
//! ```rust
//! use thermoplot::chart::clustered::ClusteredPlot;
//!
//! let mut plot = ClusteredPlot::new(
//!     "Temperatures by Day Part",
//!     "Temperature (°C)",
//!     "Hour",
//!     &["morning", "afternoon"],
//! );
//! plot.add_subgroup_with_data("morning", "indoor", &[18.0], &[0.5], &["06"])
//!     .expect("group was declared");
//! print!("{}", plot.render_clustered());
//! ```

pub mod analysis;
pub mod chart;
pub mod config;
pub mod dev_mode;
pub mod ingest;
pub mod logging;
pub mod model;
pub mod plots;
pub mod verify;
