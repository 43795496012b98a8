use crate::constants::IGNORED_FILE_NAMES;
use std::path::{Component, Path, PathBuf};

/// Check whether the final path component starts with a dot
pub fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

/// Check whether a file is OS metadata rather than an upload
pub fn is_ignored_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(|name| IGNORED_FILE_NAMES.contains(&name))
        .unwrap_or(false)
}

/// Render a relative path with `/` separators on every platform
pub fn to_slash_path(path: &Path) -> String {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Expand a leading `~` in a user supplied path
pub fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_hidden() {
        assert!(is_hidden(Path::new("/staging/MIZAN/.DS_Store")));
        assert!(is_hidden(Path::new(".git")));
        assert!(!is_hidden(Path::new("/staging/MIZAN/mizan.xlsx")));
    }

    #[test]
    fn test_is_ignored_file() {
        assert!(is_ignored_file(Path::new("BANKA/Thumbs.db")));
        assert!(!is_ignored_file(Path::new("BANKA/ekstre.pdf")));
    }

    #[test]
    fn test_to_slash_path() {
        let path: PathBuf = ["kdv", "2025", "march.pdf"].iter().collect();
        assert_eq!(to_slash_path(&path), "kdv/2025/march.pdf");
    }

    #[test]
    fn test_expand_path_plain() {
        assert_eq!(expand_path("config/settings.toml"), PathBuf::from("config/settings.toml"));
    }

    #[test]
    fn test_expand_path_tilde() {
        let expanded = expand_path("~/.config/docstatus/settings.toml");
        assert!(expanded.ends_with(".config/docstatus/settings.toml"));
    }
}
