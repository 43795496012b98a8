use crate::models::{CategoryStatus, StatusSummary};
use anyhow::{Context, Result};

fn finish(writer: csv::Writer<Vec<u8>>) -> Result<String> {
    let bytes = writer.into_inner().context("Failed to flush CSV output")?;
    String::from_utf8(bytes).context("CSV output is not valid UTF-8")
}

/// One row per category status
pub fn render_statuses(statuses: &[CategoryStatus], localized: bool) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["key", "label", "status", "count", "expected_minimum"])?;

    for s in statuses {
        writer.write_record([
            s.category.key.as_str(),
            s.category.display_label(localized),
            s.status.as_str(),
            s.count.to_string().as_str(),
            s.expected_minimum.to_string().as_str(),
        ])?;
    }

    finish(writer)
}

/// Single-row summary table
pub fn render_summary(summary: &StatusSummary) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.serialize(summary)?;
    finish(writer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::{classify_all, summarize};
    use crate::input::DocumentCountInput;
    use serde_json::json;

    #[test]
    fn test_status_rows() {
        let input = DocumentCountInput::from_json(&json!({"MIZAN": [1, 2]}));
        let out = render_statuses(&classify_all(Some(&input)), false).unwrap();
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "key,label,status,count,expected_minimum");
        assert_eq!(lines[1], "MIZAN,Trial Balance,present,2,1");
        assert_eq!(lines[6], "EFATURA_ARSIV,E-Invoice Archive,missing,0,1");
    }

    #[test]
    fn test_empty_status_list_has_header_only() {
        let out = render_statuses(&[], true).unwrap();
        assert_eq!(out, "key,label,status,count,expected_minimum\n");
    }

    #[test]
    fn test_summary_row() {
        let out = render_summary(&summarize(&classify_all(None))).unwrap();
        assert_eq!(out, "total,present,missing,error,completion_percent\n6,0,6,0,0\n");
    }
}
