use std::fmt;

use crate::entry::DirectoryEntry;
use crate::layout::GAME_MANIFEST_FOLDER_NAME;

/// An installed game as discovered under a games root.
///
/// A record always holds at least one game manifest; folders whose
/// `.egstore` is empty are incomplete installs and never become records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    game_folder: DirectoryEntry,
    manifest_folder: DirectoryEntry,
    manifest_files: Vec<DirectoryEntry>,
}

impl GameRecord {
    /// Create a record for `game_folder`.
    ///
    /// Returns `None` when `manifest_files` is empty.
    pub fn new(game_folder: DirectoryEntry, manifest_files: Vec<DirectoryEntry>) -> Option<Self> {
        if manifest_files.is_empty() {
            return None;
        }
        let manifest_folder = DirectoryEntry::new(
            GAME_MANIFEST_FOLDER_NAME,
            game_folder.path().join(GAME_MANIFEST_FOLDER_NAME),
        );
        Some(Self {
            game_folder,
            manifest_folder,
            manifest_files,
        })
    }

    pub fn game_folder(&self) -> &DirectoryEntry {
        &self.game_folder
    }

    /// The game's reserved `.egstore` subfolder.
    pub fn manifest_folder(&self) -> &DirectoryEntry {
        &self.manifest_folder
    }

    /// Game manifests found in the `.egstore` folder. Never empty.
    pub fn manifest_files(&self) -> &[DirectoryEntry] {
        &self.manifest_files
    }

    /// Folder name of the install, as shown to the user.
    pub fn name(&self) -> &str {
        self.game_folder.name()
    }
}

impl fmt::Display for GameRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn folder() -> DirectoryEntry {
        DirectoryEntry::new("GameA", "/games/GameA")
    }

    #[test]
    fn test_new_rejects_empty_manifest_list() {
        assert!(GameRecord::new(folder(), Vec::new()).is_none());
    }

    #[test]
    fn test_manifest_folder_is_egstore() {
        let manifest = DirectoryEntry::new("GameA.manifest", "/games/GameA/.egstore/GameA.manifest");
        let record = GameRecord::new(folder(), vec![manifest]).unwrap();
        assert_eq!(record.manifest_folder().name(), ".egstore");
        assert_eq!(record.manifest_folder().path(), Path::new("/games/GameA/.egstore"));
        assert_eq!(record.manifest_files().len(), 1);
        assert_eq!(record.to_string(), "GameA");
    }
}
