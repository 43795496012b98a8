pub mod status;
pub mod summary;

pub use status::classify_all;
pub use summary::{build_report, is_complete, select_missing, summarize};
