pub mod json;
pub mod report;

pub use json::JsonReport;
pub use report::ReportView;
