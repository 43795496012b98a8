use crate::models::{CategoryStatus, CompletenessReport, DocStatus, StatusSummary};

/// One-line progress summary, e.g. `3/6 present (50%)`
pub fn summary_line(summary: &StatusSummary) -> String {
    format!(
        "{}/{} present ({}%)",
        summary.present, summary.total, summary.completion_percent
    )
}

fn marker(status: DocStatus) -> &'static str {
    match status {
        DocStatus::Present => "[x]",
        DocStatus::Missing => "[ ]",
        DocStatus::Error => "[!]",
        DocStatus::Partial => "[~]",
    }
}

fn header(report: &CompletenessReport, title: &str) -> String {
    match &report.period {
        Some(period) => format!("{} ({})\n", title, period),
        None => format!("{}\n", title),
    }
}

fn status_line(status: &CategoryStatus, localized: bool) -> String {
    let label = status.category.display_label(localized);
    match status.status {
        DocStatus::Missing => format!("  {} {:<20} missing\n", marker(status.status), label),
        _ => format!(
            "  {} {:<20} {} file(s)\n",
            marker(status.status),
            label,
            status.count
        ),
    }
}

/// Full card: progress line plus one line per category
pub fn render_card(report: &CompletenessReport, localized: bool) -> String {
    let mut output = header(report, "Document completeness");
    output.push_str(&summary_line(&report.summary));
    output.push('\n');

    for status in &report.statuses {
        output.push_str(&status_line(status, localized));
    }

    output.push_str(&closing_line(report));
    output
}

/// Missing documents card: only categories still waiting for uploads
pub fn render_missing(report: &CompletenessReport, localized: bool) -> String {
    let missing: Vec<&CategoryStatus> = report
        .statuses
        .iter()
        .filter(|s| s.status == DocStatus::Missing)
        .collect();

    let mut output = header(report, &format!("Missing documents: {}", missing.len()));
    for status in missing {
        output.push_str(&format!(
            "  {} {}\n      {}\n",
            marker(status.status),
            status.category.display_label(localized),
            status.category.description
        ));
    }

    output.push_str(&closing_line(report));
    output
}

fn closing_line(report: &CompletenessReport) -> String {
    if report.complete {
        "All required documents uploaded\n".to_string()
    } else {
        match report.summary.missing {
            1 => "1 document missing\n".to_string(),
            n => format!("{} documents missing\n", n),
        }
    }
}
