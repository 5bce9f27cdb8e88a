//! Relocation context: configured folders plus the catalog of installed games.

use std::path::{Path, PathBuf};

use egs_relocate_core::GameRecord;
use egs_relocate_core::layout::MANIFEST_BACKUP_FOLDER_NAME;

use crate::error::{RelocateError, Result};
use crate::scanner::{self, ScanSkip};

/// Hint shown when an operation needs the backup folder and it is missing.
pub const BACKUP_FIRST_HINT: &str = "You may need to backup manifests first.";

/// The folders an invocation works on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelocationConfig {
    /// Folder where the launcher keeps its `.item` manifests.
    pub launcher_manifest_root: PathBuf,
    /// Folder holding the game installs.
    pub games_root: PathBuf,
}

impl RelocationConfig {
    pub fn new(launcher_manifest_root: impl Into<PathBuf>, games_root: impl Into<PathBuf>) -> Self {
        Self {
            launcher_manifest_root: launcher_manifest_root.into(),
            games_root: games_root.into(),
        }
    }

    /// `<games root>/_MANIFEST_BACKUPS`.
    pub fn backup_folder(&self) -> PathBuf {
        backup_folder_in(&self.games_root)
    }
}

/// The backup folder convention for any root (source or destination).
pub fn backup_folder_in(root: &Path) -> PathBuf {
    root.join(MANIFEST_BACKUP_FOLDER_NAME)
}

/// Result of an operation that can be declined by the operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// The operation ran; `T` summarizes what happened.
    Completed(T),
    /// The operator declined a confirmation or selected nothing.
    /// Nothing was changed on disk.
    Aborted,
}

impl<T> Outcome<T> {
    pub fn is_aborted(&self) -> bool {
        matches!(self, Self::Aborted)
    }

    pub fn completed(self) -> Option<T> {
        match self {
            Self::Completed(t) => Some(t),
            Self::Aborted => None,
        }
    }
}

/// Entry point of the library.
///
/// Holds the configuration and a snapshot of the games found under the games
/// root when the context was created. The snapshot is not refreshed when an
/// operation moves games away; create a new context to rescan.
#[derive(Debug)]
pub struct RelocationContext {
    config: RelocationConfig,
    catalog: Vec<GameRecord>,
    scan_skips: Vec<ScanSkip>,
}

impl RelocationContext {
    /// Scan `config.games_root` and build the catalog.
    pub fn new(config: RelocationConfig) -> Result<Self> {
        if !config.games_root.is_dir() {
            return Err(RelocateError::missing_folder(
                &config.games_root,
                Some("Pass --games-root or save one with `config set-games-root`."),
            ));
        }
        let scan = scanner::scan_games(&config.games_root)?;
        log::debug!(
            "Catalog: {} games, {} skipped entries in {}",
            scan.games.len(),
            scan.skipped.len(),
            config.games_root.display()
        );
        Ok(Self {
            config,
            catalog: scan.games,
            scan_skips: scan.skipped,
        })
    }

    pub fn config(&self) -> &RelocationConfig {
        &self.config
    }

    /// Games found at construction time, sorted by folder name.
    pub fn catalog(&self) -> &[GameRecord] {
        &self.catalog
    }

    /// Entries of the games root that were not admitted to the catalog.
    pub fn scan_skips(&self) -> &[ScanSkip] {
        &self.scan_skips
    }

    pub fn game_count(&self) -> usize {
        self.catalog.len()
    }

    /// Look up a game by its folder name.
    pub fn find_game(&self, name: &str) -> Option<&GameRecord> {
        self.catalog.iter().find(|g| g.name() == name)
    }

    pub fn backup_folder(&self) -> PathBuf {
        self.config.backup_folder()
    }
}
