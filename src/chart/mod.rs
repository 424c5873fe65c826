/// Text chart rendering.
///
/// A small general-purpose plotting layer: charts are assembled into a
/// `Figure` and rendered through `Display`, so showing one is just
/// `print!("{}", figure)`.
///
/// Submodules:
/// - `scale` — linear value→column projection for a fixed width.
/// - `figure` — title/labels/legend framing around a chart body.
/// - `bars` — bar rows with error whiskers, single and stacked.
/// - `curves` — character-grid trend view over a shared x axis.
/// - `clustered` — the `ClusteredPlot` group/subgroup accumulator.

pub mod bars;
pub mod clustered;
pub mod curves;
pub mod figure;
pub mod scale;
