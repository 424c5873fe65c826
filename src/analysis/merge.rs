/// Sheet merging on the `Hour` key.
///
/// An inner join: the output carries one row per hour that appears in
/// *both* sheets, ordered by the first sheet's row order. Hours present in
/// only one sheet are dropped. If a sheet repeats an hour, the first
/// occurrence wins.

use std::collections::HashMap;

use crate::model::{MergedSample, SampleSheet};

// ---------------------------------------------------------------------------
// Merge
// ---------------------------------------------------------------------------

/// Join two sheets on their `hour` field.
pub fn merge_on_hour(first: &SampleSheet, second: &SampleSheet) -> Vec<MergedSample> {
    let mut by_hour = HashMap::new();
    for sample in &second.samples {
        by_hour.entry(sample.hour).or_insert(sample);
    }

    let mut seen = Vec::new();
    let mut merged = Vec::new();

    for sample in &first.samples {
        if seen.contains(&sample.hour) {
            continue;
        }
        seen.push(sample.hour);

        if let Some(other) = by_hour.get(&sample.hour) {
            merged.push(MergedSample {
                hour: sample.hour,
                first_average: sample.average,
                first_deviation: sample.deviation,
                second_average: other.average,
                second_deviation: other.deviation,
            });
        }
    }

    merged
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
