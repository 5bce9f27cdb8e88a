//! Directory scanner for game installs and launcher manifests.
//!
//! Only reads: a scan never creates, moves or modifies anything.

use std::fs::DirEntry;
use std::path::{Path, PathBuf};

use egs_relocate_core::layout::{
    GAME_MANIFEST_FOLDER_NAME, GAME_MANIFEST_MARKER, LAUNCHER_MANIFEST_MARKER,
    MANIFEST_BACKUP_FOLDER_NAME,
};
use egs_relocate_core::util::has_marker;
use egs_relocate_core::{DirectoryEntry, GameRecord};

/// Why an entry of the games root did not become a [`GameRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanSkipReason {
    /// Not a directory, or a directory without an `.egstore` subfolder.
    NotAGameFolder,
    /// `.egstore` exists but holds no game manifest (incomplete install).
    MissingManifest,
}

/// An entry of the games root that was left out of the catalog.
#[derive(Debug, Clone)]
pub struct ScanSkip {
    pub name: String,
    pub path: PathBuf,
    pub reason: ScanSkipReason,
}

/// Result of scanning a games root.
#[derive(Debug, Default)]
pub struct GameScan {
    /// Admitted games, sorted by folder name.
    pub games: Vec<GameRecord>,
    /// Entries that were skipped with a warning.
    pub skipped: Vec<ScanSkip>,
}

/// Scan the immediate children of `games_root` for installed games.
///
/// A child is a game when it is a directory holding an `.egstore` folder
/// with at least one game manifest. The backup folder is skipped without a
/// warning; every other non-game entry is logged and listed in
/// [`GameScan::skipped`].
pub fn scan_games(games_root: &Path) -> std::io::Result<GameScan> {
    let mut scan = GameScan::default();
    let mut dir_entries: Vec<DirEntry> = readable_entries(games_root)?.collect();
    dir_entries.sort_by_key(|e| e.path());

    for entry in dir_entries {
        let path = entry.path();
        let name = entry.file_name().to_string_lossy().into_owned();

        if name == MANIFEST_BACKUP_FOLDER_NAME {
            continue;
        }

        let manifest_folder = path.join(GAME_MANIFEST_FOLDER_NAME);
        if !path.is_dir() || !manifest_folder.exists() {
            log::warn!("Skipping \"{name}\" as it is not a valid game folder.");
            scan.skipped.push(ScanSkip {
                name,
                path,
                reason: ScanSkipReason::NotAGameFolder,
            });
            continue;
        }

        let manifest_files = collect_marked_files(&manifest_folder, GAME_MANIFEST_MARKER);
        match GameRecord::new(DirectoryEntry::new(name.clone(), path.clone()), manifest_files) {
            Some(record) => {
                log::info!("Adding \"{name}\"");
                scan.games.push(record);
            }
            None => {
                log::warn!(
                    "Skipping \"{name}/{GAME_MANIFEST_FOLDER_NAME}/\" as it is missing a manifest file. \
                     (May be an incomplete installation)."
                );
                scan.skipped.push(ScanSkip {
                    name,
                    path,
                    reason: ScanSkipReason::MissingManifest,
                });
            }
        }
    }

    Ok(scan)
}

/// List launcher manifests (`*.item*` files) directly under `folder`.
///
/// Entries come back in directory enumeration order, which is stable for a
/// single call but otherwise unspecified.
pub fn scan_launcher_manifests(folder: &Path) -> std::io::Result<Vec<DirectoryEntry>> {
    Ok(readable_entries(folder)?
        .filter_map(|e| marked_file_entry(&e, LAUNCHER_MANIFEST_MARKER))
        .collect())
}

/// Collect files under `dir` whose name contains `marker`, sorted by name.
fn collect_marked_files(dir: &Path, marker: &str) -> Vec<DirectoryEntry> {
    let entries = match readable_entries(dir) {
        Ok(e) => e,
        Err(e) => {
            log::warn!("Cannot read {}: {e}", dir.display());
            return Vec::new();
        }
    };

    let mut files: Vec<DirectoryEntry> = entries
        .filter_map(|e| marked_file_entry(&e, marker))
        .collect();
    files.sort_by(|a, b| a.name().cmp(b.name()));
    files
}

/// Entries of `dir`. Entries that fail to read are logged and left out.
fn readable_entries(dir: &Path) -> std::io::Result<impl Iterator<Item = DirEntry>> {
    let dir = dir.to_path_buf();
    Ok(std::fs::read_dir(&dir)?.filter_map(move |entry| match entry {
        Ok(entry) => Some(entry),
        Err(e) => {
            log::warn!("Cannot read an entry of {}: {e}", dir.display());
            None
        }
    }))
}

fn marked_file_entry(entry: &DirEntry, marker: &str) -> Option<DirectoryEntry> {
    let path = entry.path();
    if !path.is_file() {
        return None;
    }
    let name = entry.file_name().into_string().ok()?;
    has_marker(&name, marker).then(|| DirectoryEntry::new(name, path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn make_game(root: &Path, name: &str, manifests: &[&str]) {
        let egstore = root.join(name).join(GAME_MANIFEST_FOLDER_NAME);
        fs::create_dir_all(&egstore).unwrap();
        for m in manifests {
            fs::write(egstore.join(m), "binary manifest").unwrap();
        }
    }

    #[test]
    fn test_scan_games_admits_valid_folders() {
        let tmp = TempDir::new().unwrap();
        make_game(tmp.path(), "GameB", &["B.manifest"]);
        make_game(tmp.path(), "GameA", &["A.manifest", "A.manifest2", "A.mancpn"]);

        let scan = scan_games(tmp.path()).unwrap();
        assert_eq!(scan.games.len(), 2);
        assert!(scan.skipped.is_empty());
        assert_eq!(scan.games[0].name(), "GameA");
        let names: Vec<&str> = scan.games[0]
            .manifest_files()
            .iter()
            .map(|m| m.name())
            .collect();
        assert_eq!(names, vec!["A.manifest", "A.manifest2"]);
    }

    #[test]
    fn test_scan_games_skips_incomplete_installs() {
        let tmp = TempDir::new().unwrap();
        make_game(tmp.path(), "Partial", &[]);
        make_game(tmp.path(), "Full", &["F.manifest"]);

        let scan = scan_games(tmp.path()).unwrap();
        assert_eq!(scan.games.len(), 1);
        assert_eq!(scan.skipped.len(), 1);
        assert_eq!(scan.skipped[0].name, "Partial");
        assert_eq!(scan.skipped[0].reason, ScanSkipReason::MissingManifest);
        assert!(scan.games.iter().all(|g| !g.manifest_files().is_empty()));
    }

    #[test]
    fn test_scan_games_skips_non_games() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("NotAGame")).unwrap();
        fs::write(tmp.path().join("readme.txt"), "hi").unwrap();
        fs::create_dir(tmp.path().join(MANIFEST_BACKUP_FOLDER_NAME)).unwrap();

        let scan = scan_games(tmp.path()).unwrap();
        assert!(scan.games.is_empty());
        // The backup folder is skipped silently, the other two are reported.
        let mut skipped: Vec<&str> = scan.skipped.iter().map(|s| s.name.as_str()).collect();
        skipped.sort();
        assert_eq!(skipped, vec!["NotAGame", "readme.txt"]);
        assert!(
            scan.skipped
                .iter()
                .all(|s| s.reason == ScanSkipReason::NotAGameFolder)
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_scan_games_reports_unreadable_manifest_folder() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = TempDir::new().unwrap();
        make_game(tmp.path(), "Locked", &["L.manifest"]);
        make_game(tmp.path(), "Open", &["O.manifest"]);
        let egstore = tmp.path().join("Locked").join(GAME_MANIFEST_FOLDER_NAME);
        fs::set_permissions(&egstore, fs::Permissions::from_mode(0o000)).unwrap();
        let readable = fs::read_dir(&egstore).is_ok();

        let scan = scan_games(tmp.path()).unwrap();
        fs::set_permissions(&egstore, fs::Permissions::from_mode(0o755)).unwrap();

        if readable {
            // Permission bits do not apply to this user (e.g. root).
            return;
        }
        assert_eq!(scan.games.len(), 1);
        assert_eq!(scan.games[0].name(), "Open");
        assert_eq!(scan.skipped.len(), 1);
        assert_eq!(scan.skipped[0].name, "Locked");
        assert_eq!(scan.skipped[0].reason, ScanSkipReason::MissingManifest);
    }

    #[test]
    fn test_readable_entries_lists_directory() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("A.item"), "{}").unwrap();
        fs::create_dir(tmp.path().join("GameA")).unwrap();

        let mut names: Vec<String> = readable_entries(tmp.path())
            .unwrap()
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        assert_eq!(names, vec!["A.item", "GameA"]);
        assert!(readable_entries(&tmp.path().join("missing")).is_err());
    }

    #[test]
    fn test_scan_games_missing_root() {
        let tmp = TempDir::new().unwrap();
        assert!(scan_games(&tmp.path().join("missing")).is_err());
    }

    #[test]
    fn test_scan_launcher_manifests_filters_by_marker() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("A.item"), "{}").unwrap();
        fs::write(tmp.path().join("B.item"), "{}").unwrap();
        fs::write(tmp.path().join("notes.txt"), "").unwrap();
        fs::create_dir(tmp.path().join("C.item")).unwrap();

        let mut names: Vec<String> = scan_launcher_manifests(tmp.path())
            .unwrap()
            .into_iter()
            .map(|e| e.name().to_string())
            .collect();
        names.sort();
        assert_eq!(names, vec!["A.item", "B.item"]);
    }
}
