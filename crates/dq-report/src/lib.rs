pub mod export;
pub mod json;
pub mod summary;
pub mod worksheet;

pub use export::{export_workbook, write_workbook_csv};
pub use json::{ReportPayload, report_payload, write_report_json};
pub use summary::{ColumnIssues, DuplicateDetail, SummaryReport};
pub use worksheet::{SUMMARY_SHEET_NAME, summary_sheet};
