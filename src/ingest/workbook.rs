/// Sample workbook reader.
///
/// A workbook is a directory holding one CSV file per sheet, each with a
/// header row naming its columns. Sheets carry hourly temperature samples:
/// an `Hour` column plus precomputed `Average` and `Deviation` columns.
///
/// Only one failure is treated as routine: a workbook or sheet file that
/// does not exist is logged and surfaced as `None`. Everything else
/// (missing columns, unparseable fields, headers without data) is a real
/// `WorkbookError`.

use std::path::{Path, PathBuf};

use crate::analysis::merge::merge_on_hour;
use crate::config::WorkbookConfig;
use crate::logging::{self, Source};
use crate::model::{
    COL_AVERAGE, COL_DEVIATION, COL_HOUR, HourlySample, MergedSample, SampleSheet, WorkbookError,
};

// ============================================================================
// Sheet file layout
// ============================================================================

/// Path of a named sheet within a workbook directory.
pub fn sheet_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{}.csv", name))
}

// ============================================================================
// Sheet parsing
// ============================================================================

/// Parse the text of one sheet into samples.
///
/// The header row is matched by column *name*, not position, so sheets may
/// carry extra columns or order them freely. Blank lines are skipped, and
/// rows with fewer fields than the header are ignored as incomplete.
pub fn parse_sheet(name: &str, text: &str) -> Result<SampleSheet, WorkbookError> {
    let mut lines = text.lines().enumerate();

    let header = loop {
        match lines.next() {
            Some((_, line)) if line.trim().is_empty() => continue,
            Some((_, line)) => break line,
            None => return Err(WorkbookError::EmptySheet(name.to_string())),
        }
    };

    let columns: Vec<&str> = header.split(',').map(str::trim).collect();

    let column_index = |column: &str| -> Result<usize, WorkbookError> {
        columns
            .iter()
            .position(|c| *c == column)
            .ok_or_else(|| WorkbookError::MissingColumn {
                sheet: name.to_string(),
                column: column.to_string(),
            })
    };

    let hour_idx = column_index(COL_HOUR)?;
    let average_idx = column_index(COL_AVERAGE)?;
    let deviation_idx = column_index(COL_DEVIATION)?;
    let width = hour_idx.max(average_idx).max(deviation_idx) + 1;

    let mut samples = Vec::new();

    for (i, line) in lines {
        if line.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() < width {
            continue; // Skip incomplete rows
        }

        let parse_error = |message: String| WorkbookError::ParseError {
            sheet: name.to_string(),
            line: i + 1,
            message,
        };

        let hour: u32 = fields[hour_idx]
            .trim()
            .parse()
            .map_err(|_| parse_error(format!("invalid hour '{}'", fields[hour_idx].trim())))?;
        let average: f64 = fields[average_idx].trim().parse().map_err(|_| {
            parse_error(format!("invalid average '{}'", fields[average_idx].trim()))
        })?;
        let deviation: f64 = fields[deviation_idx].trim().parse().map_err(|_| {
            parse_error(format!(
                "invalid deviation '{}'",
                fields[deviation_idx].trim()
            ))
        })?;

        samples.push(HourlySample {
            hour,
            average,
            deviation,
        });
    }

    if samples.is_empty() {
        return Err(WorkbookError::EmptySheet(name.to_string()));
    }

    Ok(SampleSheet {
        name: name.to_string(),
        samples,
    })
}

/// Read and parse one sheet from a workbook directory.
///
/// Returns `Ok(None)`, after logging, if the sheet file does not exist.
pub fn read_sheet(dir: &Path, name: &str) -> Result<Option<SampleSheet>, WorkbookError> {
    let path = sheet_path(dir, name);

    let text = match std::fs::read_to_string(&path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            logging::error(
                Source::Workbook,
                Some(name),
                &format!("Sheet file '{}' not found", path.display()),
            );
            return Ok(None);
        }
        Err(e) => return Err(WorkbookError::Io(e.to_string())),
    };

    parse_sheet(name, &text).map(Some)
}

// ============================================================================
// Loaders
// ============================================================================

/// Load both configured sheets and merge them on the `Hour` column.
///
/// Returns `Ok(None)` if either sheet file is missing.
pub fn load_sample_data(
    dir: &Path,
    config: &WorkbookConfig,
) -> Result<Option<Vec<MergedSample>>, WorkbookError> {
    let Some(first) = read_sheet(dir, &config.sheet_one)? else {
        return Ok(None);
    };
    let Some(second) = read_sheet(dir, &config.sheet_two)? else {
        return Ok(None);
    };

    let merged = merge_on_hour(&first, &second);
    logging::debug(
        Source::Workbook,
        None,
        &format!(
            "Merged '{}' and '{}' on {}: {} rows",
            first.name,
            second.name,
            COL_HOUR,
            merged.len()
        ),
    );

    Ok(Some(merged))
}

/// Load only the first configured sheet (averages and deviations).
///
/// Returns `Ok(None)` if the sheet file is missing.
pub fn load_sample_average_deviation(
    dir: &Path,
    config: &WorkbookConfig,
) -> Result<Option<SampleSheet>, WorkbookError> {
    read_sheet(dir, &config.sheet_one)
}

// ============================================================================
// Tests
// ============================================================================
