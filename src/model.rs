/// Core data types for the thermoplot sample-charting crate.
///
/// This module defines the shared domain model imported by all other modules.
/// It contains no logic and no I/O, only types.

// ---------------------------------------------------------------------------
// Sheet column names
// ---------------------------------------------------------------------------

/// Header name of the hour-of-day column (0–23).
pub const COL_HOUR: &str = "Hour";

/// Header name of the precomputed average temperature column, in °C.
pub const COL_AVERAGE: &str = "Average";

/// Header name of the precomputed standard deviation column, in °C.
pub const COL_DEVIATION: &str = "Deviation";

// ---------------------------------------------------------------------------
// Sample types
// ---------------------------------------------------------------------------

/// One row of a sample sheet: an hour of the day with its precomputed
/// average temperature and standard deviation.
///
/// Averages and deviations are computed upstream of this crate; no
/// statistics are derived here.
#[derive(Debug, Clone, PartialEq)]
pub struct HourlySample {
    pub hour: u32,
    pub average: f64,
    pub deviation: f64,
}

/// A fully parsed sample sheet, in file row order.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSheet {
    /// Sheet name (the file stem within the workbook directory).
    pub name: String,
    pub samples: Vec<HourlySample>,
}

/// One row of two sheets joined on the `Hour` column.
///
/// Produced by `analysis::merge::merge_on_hour`. Hours present in only one
/// of the two sheets do not appear here.
#[derive(Debug, Clone, PartialEq)]
pub struct MergedSample {
    pub hour: u32,
    pub first_average: f64,
    pub first_deviation: f64,
    pub second_average: f64,
    pub second_deviation: f64,
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can arise when reading or parsing a sample workbook.
///
/// A *missing* workbook file is deliberately not represented here: the
/// loaders catch that case, log it, and return `None` instead.
#[derive(Debug, PartialEq)]
pub enum WorkbookError {
    /// A required column header was not present in the sheet.
    MissingColumn { sheet: String, column: String },
    /// A field could not be parsed as the expected type.
    ParseError {
        sheet: String,
        line: usize,
        message: String,
    },
    /// The sheet had a header but no usable data rows.
    EmptySheet(String),
    /// Any I/O failure other than file-not-found.
    Io(String),
}

impl std::fmt::Display for WorkbookError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WorkbookError::MissingColumn { sheet, column } => {
                write!(f, "Sheet '{}' is missing column '{}'", sheet, column)
            }
            WorkbookError::ParseError {
                sheet,
                line,
                message,
            } => {
                write!(
                    f,
                    "Parse error in sheet '{}' line {}: {}",
                    sheet, line, message
                )
            }
            WorkbookError::EmptySheet(sheet) => {
                write!(f, "No data rows in sheet: {}", sheet)
            }
            WorkbookError::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for WorkbookError {}
