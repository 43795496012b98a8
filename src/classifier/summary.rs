use crate::classifier::classify_all;
use crate::input::DocumentCountInput;
use crate::models::{CategoryStatus, CompletenessReport, DocStatus, StatusSummary};

/// Count statuses and compute the rounded completion percentage
pub fn summarize(statuses: &[CategoryStatus]) -> StatusSummary {
    let count_of = |status: DocStatus| statuses.iter().filter(|s| s.status == status).count();

    let total = statuses.len();
    let present = count_of(DocStatus::Present);

    StatusSummary {
        total,
        present,
        missing: count_of(DocStatus::Missing),
        error: count_of(DocStatus::Error),
        completion_percent: completion_percent(present, total),
    }
}

/// round(100 * present / total) with halves rounded up, 0 for an empty list
fn completion_percent(present: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let percent = (200 * present + total) / (2 * total);
    u32::try_from(percent).unwrap_or(u32::MAX)
}

/// Categories still waiting for an upload, in their original order
pub fn select_missing(statuses: &[CategoryStatus]) -> Vec<CategoryStatus> {
    statuses
        .iter()
        .filter(|s| s.status == DocStatus::Missing)
        .cloned()
        .collect()
}

/// True when every entry is present; an empty list is complete
pub fn is_complete(statuses: &[CategoryStatus]) -> bool {
    statuses.iter().all(|s| s.status == DocStatus::Present)
}

/// Classify the input and bundle statuses with their summary
pub fn build_report(input: Option<&DocumentCountInput>, period: Option<&str>) -> CompletenessReport {
    let statuses = classify_all(input);
    let summary = summarize(&statuses);
    let complete = is_complete(&statuses);

    tracing::debug!(
        present = summary.present,
        missing = summary.missing,
        percent = summary.completion_percent,
        "classified document input"
    );

    CompletenessReport {
        period: period.map(str::to_string),
        statuses,
        summary,
        complete,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{category, DOCUMENT_CATEGORIES};
    use crate::models::CategoryKey;
    use serde_json::json;

    fn with_present(p: usize) -> Vec<CategoryStatus> {
        let mut input = DocumentCountInput::new();
        for c in DOCUMENT_CATEGORIES.iter().take(p) {
            input.insert_count(c.key.as_str(), 1);
        }
        classify_all(Some(&input))
    }

    #[test]
    fn test_summary_of_empty_input() {
        let statuses = classify_all(None);
        assert_eq!(
            summarize(&statuses),
            StatusSummary {
                total: 6,
                present: 0,
                missing: 6,
                error: 0,
                completion_percent: 0,
            }
        );
        assert!(!is_complete(&statuses));
    }

    #[test]
    fn test_completion_percent_rounding() {
        let expected = [0, 17, 33, 50, 67, 83, 100];
        for (p, percent) in expected.iter().enumerate() {
            let summary = summarize(&with_present(p));
            assert_eq!(summary.present, p);
            assert_eq!(summary.missing, 6 - p);
            assert_eq!(summary.completion_percent, *percent, "p={p}");
        }
    }

    #[test]
    fn test_completion_percent_rounds_half_up() {
        assert_eq!(completion_percent(1, 8), 13); // 12.5
        assert_eq!(completion_percent(1, 200), 1); // 0.5
        assert_eq!(completion_percent(1, 3), 33);
    }

    #[test]
    fn test_half_present_scenario() {
        let input = DocumentCountInput::from_json(&json!({"MIZAN": 1, "BEYANNAME": 3, "BANKA": 2}));
        let summary = summarize(&classify_all(Some(&input)));
        assert_eq!(summary.present, 3);
        assert_eq!(summary.missing, 3);
        assert_eq!(summary.completion_percent, 50);
    }

    #[test]
    fn test_summary_of_empty_list() {
        assert_eq!(summarize(&[]), StatusSummary::default());
    }

    #[test]
    fn test_summary_counts_error_status() {
        let statuses = vec![
            CategoryStatus {
                category: category(CategoryKey::Mizan),
                status: DocStatus::Error,
                count: 1,
                expected_minimum: 1,
            },
            CategoryStatus {
                category: category(CategoryKey::Banka),
                status: DocStatus::Partial,
                count: 1,
                expected_minimum: 2,
            },
        ];
        let summary = summarize(&statuses);
        assert_eq!(summary.total, 2);
        assert_eq!(summary.error, 1);
        assert_eq!(summary.present, 0);
        assert_eq!(summary.missing, 0);
        assert!(!is_complete(&statuses));
        assert!(select_missing(&statuses).is_empty());
    }

    #[test]
    fn test_select_missing_preserves_order() {
        for p in 0..=6 {
            let missing = select_missing(&with_present(p));
            assert_eq!(missing.len(), 6 - p);
            assert!(missing.iter().all(|s| s.status == DocStatus::Missing));
        }

        let input = DocumentCountInput::from_json(&json!({"BEYANNAME": 1, "BANKA": 1}));
        let keys: Vec<CategoryKey> = select_missing(&classify_all(Some(&input)))
            .iter()
            .map(|s| s.category.key)
            .collect();
        assert_eq!(
            keys,
            vec![CategoryKey::Mizan, CategoryKey::Tahakkuk, CategoryKey::EdefterBerat, CategoryKey::EfaturaArsiv]
        );
    }

    #[test]
    fn test_is_complete_only_when_all_present() {
        for p in 0..=6 {
            assert_eq!(is_complete(&with_present(p)), p == 6);
        }
    }

    #[test]
    fn test_all_present_scenario() {
        let input = DocumentCountInput::from_json(&json!({
            "MIZAN": 1, "BEYANNAME": [1, 2], "TAHAKKUK": 4,
            "BANKA": 3, "EDEFTER_BERAT": [{}], "EFATURA_ARSIV": 120
        }));
        let report = build_report(Some(&input), Some("2025-Q1"));
        assert_eq!(report.summary.completion_percent, 100);
        assert_eq!(report.summary.missing, 0);
        assert!(report.complete);
        assert_eq!(report.period.as_deref(), Some("2025-Q1"));
    }

    #[test]
    fn test_empty_list_is_complete() {
        assert!(is_complete(&[]));
    }

    #[test]
    fn test_report_serializes_lowercase_statuses() {
        let input = DocumentCountInput::from_json(&json!({"MIZAN": 1}));
        let value = serde_json::to_value(build_report(Some(&input), None)).unwrap();
        assert_eq!(value["statuses"][0]["status"], "present");
        assert_eq!(value["statuses"][0]["category"]["key"], "MIZAN");
        assert_eq!(value["statuses"][1]["status"], "missing");
        assert_eq!(value["summary"]["completion_percent"], 17);
        assert!(value.get("period").is_none());
    }
}
