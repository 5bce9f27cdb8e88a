use std::fmt;
use std::path::{Path, PathBuf};

use crate::util::strip_extension;

/// One file or folder found during a scan.
///
/// The name is kept separately from the path so that identity comparisons
/// never depend on how the parent directory was spelled.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DirectoryEntry {
    name: String,
    path: PathBuf,
}

impl DirectoryEntry {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }

    /// Build an entry from a path, taking the name from its last component.
    ///
    /// Returns `None` for paths without a UTF-8 file name (e.g. `/` or `..`).
    pub fn from_path(path: impl Into<PathBuf>) -> Option<Self> {
        let path = path.into();
        let name = path.file_name()?.to_str()?.to_string();
        Some(Self { name, path })
    }

    /// File or folder name, including any extension.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Name with the final extension removed, used to pair a game manifest
    /// with its launcher manifest (`ABC.manifest` and `ABC.item` share `ABC`).
    pub fn raw_name(&self) -> &str {
        strip_extension(&self.name)
    }
}

impl fmt::Display for DirectoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_name_strips_last_extension() {
        let entry = DirectoryEntry::new("GameA.manifest", "/games/GameA/.egstore/GameA.manifest");
        assert_eq!(entry.raw_name(), "GameA");

        let entry = DirectoryEntry::new("GameA.manifest2", "/x/GameA.manifest2");
        assert_eq!(entry.raw_name(), "GameA");
    }

    #[test]
    fn test_raw_name_without_extension() {
        let entry = DirectoryEntry::new("Fortnite", "/games/Fortnite");
        assert_eq!(entry.raw_name(), "Fortnite");
    }

    #[test]
    fn test_from_path() {
        let entry = DirectoryEntry::from_path("/launcher/Manifests/ABC123.item").unwrap();
        assert_eq!(entry.name(), "ABC123.item");
        assert_eq!(entry.path(), Path::new("/launcher/Manifests/ABC123.item"));
        assert_eq!(entry.to_string(), "ABC123.item");
    }

    #[test]
    fn test_from_path_without_name() {
        assert!(DirectoryEntry::from_path("/").is_none());
    }
}
