/// Development mode utilities for working without a sample workbook.
///
/// When no workbook is available, use this module to produce plausible
/// days of temperature samples for testing and development.

use crate::model::{HourlySample, SampleSheet};

/// Hours in the synthetic day.
const HOURS: u32 = 24;

/// A deterministic 24-hour diurnal temperature sheet.
///
/// The curve bottoms out in the early morning and peaks mid-afternoon,
/// with the deviation largest around the daily extremes. Deterministic so
/// demo output and tests are stable.
pub fn synthetic_day() -> SampleSheet {
    diurnal_sheet("synthetic", 14.0, 8.0)
}

/// Two sheets sharing the hour axis, for exercising merged views: a mild
/// indoor curve and a wider-swinging outdoor one.
pub fn synthetic_pair() -> (SampleSheet, SampleSheet) {
    (
        diurnal_sheet("indoor", 20.0, 2.0),
        diurnal_sheet("outdoor", 12.0, 8.0),
    )
}

fn diurnal_sheet(name: &str, base: f64, swing: f64) -> SampleSheet {
    let mut samples = Vec::with_capacity(HOURS as usize);

    for hour in 0..HOURS {
        // Coldest around 04:00, warmest around 16:00
        let phase = (hour as f64 - 4.0) / HOURS as f64 * std::f64::consts::TAU;
        let average = base - swing * phase.cos();
        let deviation = 0.6 + 0.1 * swing * phase.cos().abs();

        samples.push(HourlySample {
            hour,
            average: (average * 10.0).round() / 10.0,
            deviation: (deviation * 10.0).round() / 10.0,
        });
    }

    SampleSheet {
        name: name.to_string(),
        samples,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthetic_day_covers_all_hours() {
        let sheet = synthetic_day();
        assert_eq!(sheet.samples.len(), 24);
        let hours: Vec<u32> = sheet.samples.iter().map(|s| s.hour).collect();
        assert_eq!(hours, (0..24).collect::<Vec<u32>>());
    }

    #[test]
    fn test_synthetic_day_is_deterministic() {
        assert_eq!(synthetic_day(), synthetic_day());
    }

    #[test]
    fn test_afternoon_is_warmer_than_early_morning() {
        let sheet = synthetic_day();
        let morning = &sheet.samples[4];
        let afternoon = &sheet.samples[16];
        assert!(afternoon.average > morning.average);
        assert!(sheet.samples.iter().all(|s| s.deviation > 0.0));
    }

    #[test]
    fn test_pair_shares_the_hour_axis() {
        let (indoor, outdoor) = synthetic_pair();
        assert_eq!(indoor.samples.len(), outdoor.samples.len());
        assert_eq!(indoor.name, "indoor");
        assert_eq!(outdoor.name, "outdoor");
        // Outdoor swings wider than indoor
        let spread = |sheet: &SampleSheet| {
            let max = sheet.samples.iter().map(|s| s.average).fold(f64::MIN, f64::max);
            let min = sheet.samples.iter().map(|s| s.average).fold(f64::MAX, f64::min);
            max - min
        };
        assert!(spread(&outdoor) > spread(&indoor));
    }
}
