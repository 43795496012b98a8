use crate::input::DocumentCountInput;
use crate::source::CountSource;
use crate::utils;
use anyhow::{Context, Result};
use serde_json::Value;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Default depth scanned below each category folder
pub const DEFAULT_SCAN_DEPTH: usize = 2;

/// Counts files in a local staging directory laid out as `<root>/<KEY>/...`
///
/// Each sub-directory of the root becomes one input key and its files become
/// the uploaded items. Folder names outside the catalog are kept and later
/// ignored by the classifier.
pub struct DirectorySource {
    root: PathBuf,
    max_depth: usize,
}

impl DirectorySource {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self::with_depth(root, DEFAULT_SCAN_DEPTH)
    }

    pub fn with_depth<P: AsRef<Path>>(root: P, max_depth: usize) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            max_depth: max_depth.max(1),
        }
    }

    /// Relative paths of the uploads in one category folder, sorted
    fn collect_items(&self, category_dir: &Path) -> Vec<Value> {
        let mut items: Vec<String> = WalkDir::new(category_dir)
            .min_depth(1)
            .max_depth(self.max_depth)
            .into_iter()
            .filter_entry(|e| !utils::is_hidden(e.path()))
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    tracing::warn!(error = %e, "skipping unreadable staging entry");
                    None
                }
            })
            .filter(|e| e.file_type().is_file() && !utils::is_ignored_file(e.path()))
            .filter_map(|e| {
                e.path()
                    .strip_prefix(category_dir)
                    .ok()
                    .map(utils::to_slash_path)
            })
            .collect();

        items.sort();
        items.into_iter().map(Value::String).collect()
    }
}

impl CountSource for DirectorySource {
    fn load(&self) -> Result<DocumentCountInput> {
        if !self.root.is_dir() {
            anyhow::bail!("Staging path is not a directory: {}", self.root.display());
        }

        let mut input = DocumentCountInput::new();
        let children = std::fs::read_dir(&self.root)
            .with_context(|| format!("Failed to read staging directory: {}", self.root.display()))?;

        for child in children {
            let child = child.context("Failed to read staging directory entry")?;
            let path = child.path();

            if utils::is_hidden(&path) {
                continue;
            }
            if !path.is_dir() {
                tracing::debug!(path = %path.display(), "ignoring file outside category folders");
                continue;
            }

            let Some(key) = path.file_name().and_then(|n| n.to_str()) else {
                tracing::warn!(path = %path.display(), "skipping non UTF-8 folder name");
                continue;
            };

            let items = self.collect_items(&path);
            tracing::debug!(key = %key, files = items.len(), "scanned category folder");
            input.insert_items(key, items);
        }

        tracing::info!(source = %self.describe(), keys = input.len(), "scanned staging directory");
        Ok(input)
    }

    fn describe(&self) -> String {
        self.root.display().to_string()
    }
}
