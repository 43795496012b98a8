pub mod classifier;
pub mod config;
pub mod constants;
pub mod input;
pub mod logging;
pub mod models;
pub mod report;
pub mod source;
pub mod utils;

pub use classifier::{build_report, classify_all, is_complete, select_missing, summarize};
pub use input::{CountOrList, DocumentCountInput};
pub use models::{CategoryKey, CategoryStatus, CompletenessReport, DocStatus, DocumentCategory, StatusSummary};
pub use source::CountSource;
