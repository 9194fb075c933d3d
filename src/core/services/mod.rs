pub mod report_service;
pub mod summary_service;

pub use report_service::ReportService;
pub use summary_service::{CategoryStatus, MonthlyCategoryTotal, SummaryService};
