use crate::input::DocumentCountInput;
use crate::source::CountSource;
use anyhow::{Context, Result};
use serde_json::Value;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Path marker for reading from standard input
pub const STDIN_MARKER: &str = "-";

/// Reads document counts from a JSON file or stdin
///
/// The counts may sit under a field of a larger API response: a plain name
/// selects a top-level key, a name starting with `/` is a JSON pointer.
pub struct JsonSource {
    path: PathBuf,
    field: Option<String>,
}

impl JsonSource {
    pub fn new<P: AsRef<Path>>(path: P, field: Option<String>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            field: field.filter(|f| !f.is_empty()),
        }
    }

    pub fn is_stdin(&self) -> bool {
        self.path.as_os_str() == STDIN_MARKER
    }

    fn read_text(&self) -> Result<String> {
        if self.is_stdin() {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read document input from stdin")?;
            return Ok(text);
        }

        std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read document input: {}", self.path.display()))
    }

    /// Decode already-read JSON text, applying the field selection
    pub fn parse(&self, text: &str) -> Result<DocumentCountInput> {
        let value: Value = serde_json::from_str(text)
            .with_context(|| format!("Invalid JSON in {}", self.describe()))?;

        let Some(field) = &self.field else {
            return Ok(DocumentCountInput::from_json(&value));
        };

        match select_field(&value, field) {
            Some(selected) => Ok(DocumentCountInput::from_json(selected)),
            None => {
                tracing::warn!(field = %field, "field not found in document input, treating as empty");
                Ok(DocumentCountInput::default())
            }
        }
    }
}

/// Select a top-level key or, for `/a/b` forms, a JSON pointer
pub fn select_field<'a>(value: &'a Value, field: &str) -> Option<&'a Value> {
    if field.starts_with('/') {
        value.pointer(field)
    } else {
        value.get(field)
    }
}

impl CountSource for JsonSource {
    fn load(&self) -> Result<DocumentCountInput> {
        let text = self.read_text()?;
        let input = self.parse(&text)?;
        tracing::info!(source = %self.describe(), keys = input.len(), "loaded document input");
        Ok(input)
    }

    fn describe(&self) -> String {
        if self.is_stdin() {
            "stdin".to_string()
        } else {
            self.path.display().to_string()
        }
    }
}
