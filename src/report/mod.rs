pub mod table;
pub mod text;

use crate::classifier::select_missing;
use crate::models::CompletenessReport;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Output format for completeness reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
    Csv,
}

/// Which part of a report to render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportView {
    #[default]
    Full,
    MissingOnly,
    SummaryOnly,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    pub view: ReportView,
    pub localized: bool,
}

/// Render a report in the requested format
pub fn render(report: &CompletenessReport, format: ReportFormat, options: RenderOptions) -> Result<String> {
    match format {
        ReportFormat::Text => Ok(match options.view {
            ReportView::Full => text::render_card(report, options.localized),
            ReportView::MissingOnly => text::render_missing(report, options.localized),
            ReportView::SummaryOnly => format!("{}\n", text::summary_line(&report.summary)),
        }),
        ReportFormat::Json => {
            let rendered = match options.view {
                ReportView::Full => serde_json::to_string_pretty(report),
                ReportView::MissingOnly => serde_json::to_string_pretty(&select_missing(&report.statuses)),
                ReportView::SummaryOnly => serde_json::to_string_pretty(&report.summary),
            };
            Ok(rendered.context("Failed to serialize report")? + "\n")
        }
        ReportFormat::Csv => match options.view {
            ReportView::Full => table::render_statuses(&report.statuses, options.localized),
            ReportView::MissingOnly => {
                table::render_statuses(&select_missing(&report.statuses), options.localized)
            }
            ReportView::SummaryOnly => table::render_summary(&report.summary),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::build_report;
    use crate::input::DocumentCountInput;
    use serde_json::{json, Value};

    fn sample() -> CompletenessReport {
        let input = DocumentCountInput::from_json(&json!({"MIZAN": 1, "BEYANNAME": 3, "BANKA": 2}));
        build_report(Some(&input), Some("2025-Q1"))
    }

    #[test]
    fn test_json_full_report() {
        let out = render(&sample(), ReportFormat::Json, RenderOptions::default()).unwrap();
        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["period"], "2025-Q1");
        assert_eq!(value["summary"]["completion_percent"], 50);
        assert_eq!(value["complete"], false);
        assert_eq!(value["statuses"].as_array().unwrap().len(), 6);
    }

    #[test]
    fn test_json_missing_only() {
        let options = RenderOptions { view: ReportView::MissingOnly, localized: true };
        let out = render(&sample(), ReportFormat::Json, options).unwrap();
        let value: Value = serde_json::from_str(&out).unwrap();
        let keys: Vec<&str> = value
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["category"]["key"].as_str().unwrap())
            .collect();
        assert_eq!(keys, vec!["TAHAKKUK", "EDEFTER_BERAT", "EFATURA_ARSIV"]);
    }

    #[test]
    fn test_json_summary_only() {
        let options = RenderOptions { view: ReportView::SummaryOnly, localized: false };
        let out = render(&sample(), ReportFormat::Json, options).unwrap();
        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(
            value,
            json!({"total": 6, "present": 3, "missing": 3, "error": 0, "completion_percent": 50})
        );
    }

    #[test]
    fn test_text_summary_only() {
        let options = RenderOptions { view: ReportView::SummaryOnly, localized: false };
        let out = render(&sample(), ReportFormat::Text, options).unwrap();
        assert_eq!(out, "3/6 present (50%)\n");
    }

    #[test]
    fn test_format_parses_lowercase() {
        let format: ReportFormat = serde_json::from_str("\"csv\"").unwrap();
        assert_eq!(format, ReportFormat::Csv);
        assert_eq!(ReportFormat::default(), ReportFormat::Text);
    }
}
