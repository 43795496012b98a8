use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Stable identifier of a required document category.
///
/// The wire names double as keys into the upstream API response, so they
/// must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CategoryKey {
    /// Trial balance ledger
    Mizan,
    /// Tax declaration
    Beyanname,
    /// Tax assessment
    Tahakkuk,
    /// Bank statement
    Banka,
    /// E-ledger certificate
    EdefterBerat,
    /// E-invoice archive
    EfaturaArsiv,
}

impl CategoryKey {
    /// Wire name used in upstream payloads
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryKey::Mizan => "MIZAN",
            CategoryKey::Beyanname => "BEYANNAME",
            CategoryKey::Tahakkuk => "TAHAKKUK",
            CategoryKey::Banka => "BANKA",
            CategoryKey::EdefterBerat => "EDEFTER_BERAT",
            CategoryKey::EfaturaArsiv => "EFATURA_ARSIV",
        }
    }
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for CategoryKey {
    type Err = ();

    /// Exact, case-sensitive match on the wire name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MIZAN" => Ok(CategoryKey::Mizan),
            "BEYANNAME" => Ok(CategoryKey::Beyanname),
            "TAHAKKUK" => Ok(CategoryKey::Tahakkuk),
            "BANKA" => Ok(CategoryKey::Banka),
            "EDEFTER_BERAT" => Ok(CategoryKey::EdefterBerat),
            "EFATURA_ARSIV" => Ok(CategoryKey::EfaturaArsiv),
            _ => Err(()),
        }
    }
}

/// A required document kind for a reporting period
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentCategory {
    pub key: CategoryKey,
    /// English display label
    pub label: &'static str,
    /// Turkish display label
    pub localized_label: &'static str,
    pub description: &'static str,
    pub required: bool,
    /// Icon name for the presentation layer, passed through untouched
    pub icon_ref: &'static str,
}

impl DocumentCategory {
    /// Pick the label to display
    pub fn display_label(&self, localized: bool) -> &'static str {
        if localized {
            self.localized_label
        } else {
            self.label
        }
    }
}

/// Classification outcome for one category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocStatus {
    Present,
    Missing,
    /// Reserved for per-file error signals from upstream; not produced yet
    Error,
    /// Reserved for counts below the expected minimum; not produced yet
    Partial,
}

impl DocStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocStatus::Present => "present",
            DocStatus::Missing => "missing",
            DocStatus::Error => "error",
            DocStatus::Partial => "partial",
        }
    }
}

impl fmt::Display for DocStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Per-category status, recomputed on every classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryStatus {
    pub category: &'static DocumentCategory,
    pub status: DocStatus,
    pub count: u32,
    pub expected_minimum: u32,
}

/// Aggregate over a list of category statuses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatusSummary {
    pub total: usize,
    pub present: usize,
    pub missing: usize,
    pub error: usize,
    pub completion_percent: u32,
}

/// Everything a renderer needs for one period
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletenessReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
    pub statuses: Vec<CategoryStatus>,
    pub summary: StatusSummary,
    pub complete: bool,
}
