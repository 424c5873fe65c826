/// Sample data ingestion.
///
/// Submodules:
/// - `workbook` — reads sample workbooks (directories of CSV sheets).

pub mod workbook;
