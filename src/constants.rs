//! Constants used throughout docstatus
//! The category catalog is static and never mutated at runtime

use crate::models::{CategoryKey, DocumentCategory};

/// Minimum number of uploads for a category to count as present
pub const EXPECTED_MINIMUM: u32 = 1;

/// Required document categories for a reporting period, in display order
pub static DOCUMENT_CATEGORIES: &[DocumentCategory] = &[
    DocumentCategory {
        key: CategoryKey::Mizan,
        label: "Trial Balance",
        localized_label: "Mizan",
        description: "Period-end trial balance exported from the accounting ledger",
        required: true,
        icon_ref: "file-spreadsheet",
    },
    DocumentCategory {
        key: CategoryKey::Beyanname,
        label: "Tax Declaration",
        localized_label: "Beyanname",
        description: "Filed VAT, withholding and corporate tax declarations",
        required: true,
        icon_ref: "file-text",
    },
    DocumentCategory {
        key: CategoryKey::Tahakkuk,
        label: "Tax Assessment",
        localized_label: "Tahakkuk",
        description: "Assessment slips issued by the tax office for filed declarations",
        required: true,
        icon_ref: "receipt",
    },
    DocumentCategory {
        key: CategoryKey::Banka,
        label: "Bank Statement",
        localized_label: "Banka Ekstresi",
        description: "Statements for every bank account held during the period",
        required: true,
        icon_ref: "landmark",
    },
    DocumentCategory {
        key: CategoryKey::EdefterBerat,
        label: "E-Ledger Certificate",
        localized_label: "e-Defter Berat",
        description: "GIB receipt certificates for submitted e-ledger parts",
        required: true,
        icon_ref: "badge-check",
    },
    DocumentCategory {
        key: CategoryKey::EfaturaArsiv,
        label: "E-Invoice Archive",
        localized_label: "e-Fatura Arşivi",
        description: "Issued and received e-invoice and e-archive XML files",
        required: true,
        icon_ref: "archive",
    },
];

/// Look up a category definition by key
/// The catalog is declared in `CategoryKey` variant order
pub fn category(key: CategoryKey) -> &'static DocumentCategory {
    &DOCUMENT_CATEGORIES[key as usize]
}

/// Staging directory entries that are never uploads
pub const IGNORED_FILE_NAMES: &[&str] = &[
    "Thumbs.db",
    "desktop.ini",
];
