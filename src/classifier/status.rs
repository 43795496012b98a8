use crate::constants::{DOCUMENT_CATEGORIES, EXPECTED_MINIMUM};
use crate::input::DocumentCountInput;
use crate::models::{CategoryStatus, DocStatus};
use std::collections::HashMap;

/// Classify every required category against the uploaded counts
///
/// Always returns one entry per category in catalog order. Absent input,
/// unknown keys and malformed values all resolve to a count of 0.
pub fn classify_all(input: Option<&DocumentCountInput>) -> Vec<CategoryStatus> {
    let counts: HashMap<&str, u32> = input
        .map(|input| {
            input
                .iter()
                .filter_map(|(key, value)| value.resolve().map(|count| (key, count)))
                .collect()
        })
        .unwrap_or_default();

    DOCUMENT_CATEGORIES
        .iter()
        .map(|category| {
            let count = counts.get(category.key.as_str()).copied().unwrap_or(0);
            CategoryStatus {
                category,
                status: derive_status(count),
                count,
                expected_minimum: EXPECTED_MINIMUM,
            }
        })
        .collect()
}

// Only present/missing are reachable; partial would need a minimum above 1
fn derive_status(count: u32) -> DocStatus {
    if count == 0 {
        DocStatus::Missing
    } else {
        DocStatus::Present
    }
}
