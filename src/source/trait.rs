use crate::input::DocumentCountInput;
use anyhow::Result;

/// Trait for anything that can produce the uploaded-document counts for a period
pub trait CountSource: Send + Sync {
    /// Load the document input; fail only on I/O-level problems
    fn load(&self) -> Result<DocumentCountInput>;

    /// Human-readable description used in logs
    fn describe(&self) -> String;
}
