/// Structured logging for the sample-charting crate.
///
/// Provides context-rich logging with subsystem tags, timestamps, and
/// severity levels. Supports both console output and file-based logging.

use chrono::Utc;
use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::sync::Mutex;

// ---------------------------------------------------------------------------
// Log Levels
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warning => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
        }
    }
}

// ---------------------------------------------------------------------------
// Subsystem Tags
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Workbook,
    Chart,
    Config,
    System,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Workbook => write!(f, "WORKBOOK"),
            Source::Chart => write!(f, "CHART"),
            Source::Config => write!(f, "CONFIG"),
            Source::System => write!(f, "SYS"),
        }
    }
}

// ---------------------------------------------------------------------------
// Failure Classification
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureType {
    /// Expected failure - e.g. the sample workbook simply isn't there yet
    Expected,
    /// Unexpected failure - indicates a malformed sheet or a bug
    Unexpected,
    /// Unknown - cannot determine if this is expected or not
    Unknown,
}

impl fmt::Display for FailureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureType::Expected => write!(f, "EXPECTED"),
            FailureType::Unexpected => write!(f, "UNEXPECTED"),
            FailureType::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

// ---------------------------------------------------------------------------
// Logger Configuration
// ---------------------------------------------------------------------------

/// Global logger instance
static LOGGER: Mutex<Option<Logger>> = Mutex::new(None);

pub struct Logger {
    /// Minimum log level to display
    min_level: LogLevel,
    /// Optional file path for logging
    log_file: Option<String>,
    /// Whether to include timestamps in console output
    console_timestamps: bool,
}

impl Logger {
    /// Initialize the global logger
    pub fn init(min_level: LogLevel, log_file: Option<String>, console_timestamps: bool) {
        let logger = Logger {
            min_level,
            log_file,
            console_timestamps,
        };

        *LOGGER.lock().unwrap() = Some(logger);
    }

    /// Log a message with the global logger
    fn log(&self, level: LogLevel, source: &Source, sheet: Option<&str>, message: &str) {
        if level < self.min_level {
            return;
        }

        let timestamp = Utc::now().format("%Y-%m-%d %H:%M:%S UTC");

        // Format the log entry
        let sheet_part = sheet.map(|s| format!(" [{}]", s)).unwrap_or_default();
        let log_entry = format!(
            "{} {} {}{}: {}",
            timestamp, level, source, sheet_part, message
        );

        // Console output
        if self.console_timestamps {
            match level {
                LogLevel::Error => eprintln!("{}", log_entry),
                LogLevel::Warning => eprintln!("   {}", log_entry),
                LogLevel::Info => println!("   {}", message),
                LogLevel::Debug => println!("   [DEBUG] {}", message),
            }
        } else {
            match level {
                LogLevel::Error => eprintln!("   ✗ {}{}: {}", source, sheet_part, message),
                LogLevel::Warning => eprintln!("   ⚠ {}{}: {}", source, sheet_part, message),
                LogLevel::Info => println!("   {}", message),
                LogLevel::Debug => {} // Skip debug in non-timestamp mode
            }
        }

        // File output
        if let Some(ref path) = self.log_file {
            if let Err(e) = Self::append_to_file(path, &log_entry) {
                eprintln!("Failed to write to log file {}: {}", path, e);
            }
        }
    }

    fn append_to_file(path: &str, entry: &str) -> std::io::Result<()> {
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        writeln!(file, "{}", entry)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Public Logging Functions
// ---------------------------------------------------------------------------

/// Initialize the global logger
pub fn init_logger(min_level: LogLevel, log_file: Option<&str>, console_timestamps: bool) {
    Logger::init(min_level, log_file.map(String::from), console_timestamps);
}

/// Log a general informational message
pub fn info(source: Source, sheet: Option<&str>, message: &str) {
    if let Some(logger) = LOGGER.lock().unwrap().as_ref() {
        logger.log(LogLevel::Info, &source, sheet, message);
    }
}

/// Log a warning message
pub fn warn(source: Source, sheet: Option<&str>, message: &str) {
    if let Some(logger) = LOGGER.lock().unwrap().as_ref() {
        logger.log(LogLevel::Warning, &source, sheet, message);
    }
}

/// Log an error message
pub fn error(source: Source, sheet: Option<&str>, message: &str) {
    if let Some(logger) = LOGGER.lock().unwrap().as_ref() {
        logger.log(LogLevel::Error, &source, sheet, message);
    }
}

/// Log a debug message
pub fn debug(source: Source, sheet: Option<&str>, message: &str) {
    if let Some(logger) = LOGGER.lock().unwrap().as_ref() {
        logger.log(LogLevel::Debug, &source, sheet, message);
    }
}

// ---------------------------------------------------------------------------
// Failure Classification Helpers
// ---------------------------------------------------------------------------

/// Classify a workbook load failure based on the error message
pub fn classify_workbook_failure(_sheet: &str, error_message: &str) -> FailureType {
    // A workbook that simply isn't there is a normal condition: the caller
    // is told via `None` and may fall back to dev mode.
    if error_message.contains("not found") || error_message.contains("No such file") {
        FailureType::Expected
    }
    // Parse and column errors suggest a malformed sheet
    else if error_message.contains("Parse error") || error_message.contains("missing column") {
        FailureType::Unexpected
    } else {
        FailureType::Unknown
    }
}

/// Log a workbook failure with automatic classification
pub fn log_workbook_failure(sheet: &str, operation: &str, err: &dyn std::error::Error) {
    let error_msg = err.to_string();
    let failure_type = classify_workbook_failure(sheet, &error_msg);

    let message = format!("{} failed [{}]: {}", operation, failure_type, error_msg);

    match failure_type {
        FailureType::Expected => debug(Source::Workbook, Some(sheet), &message),
        FailureType::Unexpected => error(Source::Workbook, Some(sheet), &message),
        FailureType::Unknown => warn(Source::Workbook, Some(sheet), &message),
    }
}

// ---------------------------------------------------------------------------
// Load Summary Logging
// ---------------------------------------------------------------------------

/// Log a summary of sheet load operations
pub fn log_load_summary(source: Source, total: usize, successful: usize, failed: usize) {
    let message = format!(
        "Sheet load complete: {}/{} successful, {} failed",
        successful, total, failed
    );

    if failed == 0 {
        info(source, None, &message);
    } else if successful == 0 {
        error(source, None, &message);
    } else {
        warn(source, None, &message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_ordering() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warning);
        assert!(LogLevel::Warning < LogLevel::Error);
    }

    #[test]
    fn test_failure_classification() {
        let missing_file = "Sample workbook 'samples' not found";
        let result = classify_workbook_failure("sheet_one", missing_file);
        assert_eq!(result, FailureType::Expected);

        let parse_error = "Parse error in sheet 'sheet_one' line 3: invalid float";
        let result = classify_workbook_failure("sheet_one", parse_error);
        assert_eq!(result, FailureType::Unexpected);
    }
}
