//! Workbook Verification Module
//!
//! Framework for testing a configured workbook against what is actually on
//! disk: which sheets exist, which columns they carry, and how many data
//! rows they hold.
//!
//! Use this before pointing the charts at a new workbook.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::path::Path;

use crate::config::WorkbookConfig;
use crate::ingest::workbook::{parse_sheet, sheet_path};
use crate::model::{COL_AVERAGE, COL_DEVIATION, COL_HOUR, WorkbookError};

// ============================================================================
// Verification Results
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkbookReport {
    pub timestamp: String,
    pub workbook_dir: String,
    pub results: Vec<SheetVerification>,
    pub summary: VerificationSummary,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationSummary {
    pub total: usize,
    pub working: usize,
    pub failed: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetVerification {
    pub sheet: String,
    pub status: VerificationStatus,
    pub file_exists: bool,
    pub columns_available: Vec<String>,
    pub columns_missing: Vec<String>,
    pub row_count: usize,
    /// First and last hour present, if any rows parsed.
    pub hour_range: Option<(u32, u32)>,
    pub error_message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum VerificationStatus {
    Success,
    PartialSuccess,
    Failed,
}

// ============================================================================
// Sheet Verification
// ============================================================================

pub fn verify_sheet(dir: &Path, name: &str) -> SheetVerification {
    let mut result = SheetVerification {
        sheet: name.to_string(),
        status: VerificationStatus::Failed,
        file_exists: false,
        columns_available: Vec::new(),
        columns_missing: Vec::new(),
        row_count: 0,
        hour_range: None,
        error_message: None,
    };

    let path = sheet_path(dir, name);
    let text = match std::fs::read_to_string(&path) {
        Ok(text) => text,
        Err(e) => {
            result.error_message = Some(format!("Cannot read '{}': {}", path.display(), e));
            return result;
        }
    };
    result.file_exists = true;

    // Record which of the expected columns the header actually carries
    if let Some(header) = text.lines().find(|l| !l.trim().is_empty()) {
        let columns: Vec<&str> = header.split(',').map(str::trim).collect();
        for expected in [COL_HOUR, COL_AVERAGE, COL_DEVIATION] {
            if columns.contains(&expected) {
                result.columns_available.push(expected.to_string());
            } else {
                result.columns_missing.push(expected.to_string());
            }
        }
    }

    match parse_sheet(name, &text) {
        Ok(sheet) => {
            result.row_count = sheet.samples.len();
            let first = sheet.samples.iter().map(|s| s.hour).min();
            let last = sheet.samples.iter().map(|s| s.hour).max();
            if let (Some(first), Some(last)) = (first, last) {
                result.hour_range = Some((first, last));
            }
            result.status = if result.columns_missing.is_empty() {
                VerificationStatus::Success
            } else {
                VerificationStatus::PartialSuccess
            };
        }
        Err(WorkbookError::EmptySheet(_)) => {
            result.status = VerificationStatus::PartialSuccess;
            result.error_message = Some("Sheet has a header but no data rows".to_string());
        }
        Err(e) => {
            result.error_message = Some(e.to_string());
        }
    }

    result
}

// ============================================================================
// Full Verification Runner
// ============================================================================

pub fn run_workbook_verification(dir: &Path, config: &WorkbookConfig) -> WorkbookReport {
    let sheet_names = [config.sheet_one.as_str(), config.sheet_two.as_str()];

    let mut report = WorkbookReport {
        timestamp: Utc::now().to_rfc3339(),
        workbook_dir: dir.display().to_string(),
        results: Vec::new(),
        summary: VerificationSummary {
            total: sheet_names.len(),
            working: 0,
            failed: 0,
        },
    };

    println!("🔍 Verifying workbook '{}'...", dir.display());

    for name in sheet_names {
        print!("  {} ... ", name);
        let result = verify_sheet(dir, name);

        match result.status {
            VerificationStatus::Success => {
                println!("✓ OK ({} rows)", result.row_count);
                report.summary.working += 1;
            }
            VerificationStatus::PartialSuccess => {
                println!("⚠ Partial (missing: {:?})", result.columns_missing);
                report.summary.working += 1;
            }
            VerificationStatus::Failed => {
                println!(
                    "✗ FAILED: {}",
                    result.error_message.as_deref().unwrap_or("Unknown")
                );
                report.summary.failed += 1;
            }
        }

        report.results.push(result);
    }

    report
}

pub fn print_summary(report: &WorkbookReport) {
    println!("\n═══════════════════════════════════════════════════════════");
    println!("📊 WORKBOOK VERIFICATION SUMMARY");
    println!("═══════════════════════════════════════════════════════════");
    println!();
    println!("Workbook: {}", report.workbook_dir);
    println!(
        "Sheets:   {}/{} working  ({} failed)",
        report.summary.working, report.summary.total, report.summary.failed
    );
    println!();

    for result in &report.results {
        let icon = match result.status {
            VerificationStatus::Success => "✓",
            VerificationStatus::PartialSuccess => "⚠",
            VerificationStatus::Failed => "✗",
        };
        let range = result
            .hour_range
            .map(|(a, b)| format!("hours {}-{}", a, b))
            .unwrap_or_else(|| "no rows".to_string());
        println!("  {} {} — {} rows, {}", icon, result.sheet, result.row_count, range);
    }

    let success_rate = if report.summary.total > 0 {
        (report.summary.working as f64 / report.summary.total as f64) * 100.0
    } else {
        0.0
    };
    println!();
    println!(
        "Overall Success Rate: {:.1}% ({}/{})",
        success_rate, report.summary.working, report.summary.total
    );
    println!("═══════════════════════════════════════════════════════════");
}

/// Save a report as pretty-printed JSON.
pub fn save_report(report: &WorkbookReport, path: &Path) -> Result<(), Box<dyn Error>> {
    let json = serde_json::to_string_pretty(report)?;
    std::fs::write(path, json)?;
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_workbook(tag: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("thermoplot_verify_{}", tag));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).expect("temp workbook dir");
        dir
    }

    #[test]
    fn test_missing_sheet_fails() {
        let dir = temp_workbook("missing");
        let result = verify_sheet(&dir, "sheet_one");

        assert_eq!(result.status, VerificationStatus::Failed);
        assert!(!result.file_exists);
        assert!(result.error_message.is_some());
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_well_formed_sheet_succeeds() {
        let dir = temp_workbook("ok");
        std::fs::write(
            dir.join("sheet_one.csv"),
            "Hour,Average,Deviation\n0,11.5,0.8\n23,12.3,0.9\n",
        )
        .expect("fixture sheet");

        let result = verify_sheet(&dir, "sheet_one");

        assert_eq!(result.status, VerificationStatus::Success);
        assert_eq!(result.row_count, 2);
        assert_eq!(result.hour_range, Some((0, 23)));
        assert!(result.columns_missing.is_empty());
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_header_without_rows_is_partial() {
        let dir = temp_workbook("empty");
        std::fs::write(dir.join("sheet_one.csv"), "Hour,Average,Deviation\n")
            .expect("fixture sheet");

        let result = verify_sheet(&dir, "sheet_one");

        assert_eq!(result.status, VerificationStatus::PartialSuccess);
        assert_eq!(result.row_count, 0);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_missing_column_is_reported() {
        let dir = temp_workbook("columns");
        std::fs::write(dir.join("sheet_one.csv"), "Hour,Average\n0,11.5\n")
            .expect("fixture sheet");

        let result = verify_sheet(&dir, "sheet_one");

        assert_eq!(result.status, VerificationStatus::Failed);
        assert_eq!(result.columns_missing, vec![COL_DEVIATION.to_string()]);
        assert_eq!(
            result.columns_available,
            vec![COL_HOUR.to_string(), COL_AVERAGE.to_string()]
        );
        let _ = std::fs::remove_dir_all(&dir);
    }
}
