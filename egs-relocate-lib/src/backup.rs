//! Backup and restore of launcher manifests.

use std::collections::HashSet;
use std::path::Path;

use crate::context::{BACKUP_FIRST_HINT, Outcome, RelocationContext};
use crate::error::Result;
use crate::fs_ops;
use crate::matcher::ManifestIndex;
use crate::prompt::Prompter;
use crate::scanner;

/// Hint shown when the launcher manifest folder cannot be found.
pub const LAUNCHER_ROOT_HINT: &str =
    "Pass --manifests-root or save one with `config set-manifests-root`.";

/// A game manifest that has no launcher manifest counterpart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnmatchedManifest {
    /// Game folder name.
    pub game: String,
    /// Game manifest file name.
    pub manifest: String,
}

/// Summary of a backup run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BackupSummary {
    /// Launcher manifests copied into the backup folder.
    pub backed_up: Vec<String>,
    /// Game manifests with no launcher manifest to back up.
    pub unmatched: Vec<UnmatchedManifest>,
}

/// Summary of a restore run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RestoreSummary {
    /// Launcher manifests copied back into the launcher folder.
    pub restored: Vec<String>,
}

impl RelocationContext {
    /// Copy the launcher manifest of every cataloged game into the backup folder.
    ///
    /// Games without a launcher manifest are reported and skipped; they never
    /// fail the run.
    pub fn backup_manifests(&self, prompter: &dyn Prompter) -> Result<Outcome<BackupSummary>> {
        let launcher_root = &self.config().launcher_manifest_root;
        fs_ops::require_dir(launcher_root, Some(LAUNCHER_ROOT_HINT))?;

        let backup_folder = self.backup_folder();
        let message = format!(
            "Launcher manifests will backup to \"{}\". Continue?",
            backup_folder.display()
        );
        if !prompter.confirm(&message)? {
            return Ok(Outcome::Aborted);
        }

        fs_ops::ensure_dir(&backup_folder)?;

        let launcher_manifests = scanner::scan_launcher_manifests(launcher_root)?;
        let index = ManifestIndex::new(&launcher_manifests);
        let mut copied: HashSet<&Path> = HashSet::new();
        let mut summary = BackupSummary::default();

        for game in self.catalog() {
            for game_manifest in game.manifest_files() {
                let Some(launcher_manifest) = index.get(game_manifest) else {
                    log::warn!(
                        "Unable to backup launcher manifest for \"{}\" ({}). \
                         (Launcher manifest does not exist).",
                        game.name(),
                        game_manifest.name(),
                    );
                    summary.unmatched.push(UnmatchedManifest {
                        game: game.name().to_string(),
                        manifest: game_manifest.name().to_string(),
                    });
                    continue;
                };

                if !copied.insert(launcher_manifest.path()) {
                    continue;
                }
                log::info!("Backing up \"{}\".", launcher_manifest.name());
                fs_ops::copy_into(launcher_manifest.path(), &backup_folder)?;
                summary.backed_up.push(launcher_manifest.name().to_string());
            }
        }

        Ok(Outcome::Completed(summary))
    }

    /// Copy every backed-up launcher manifest back into the launcher folder,
    /// overwriting the launcher's copies.
    pub fn restore_manifests(&self, prompter: &dyn Prompter) -> Result<Outcome<RestoreSummary>> {
        let backup_folder = self.backup_folder();
        fs_ops::require_dir(&backup_folder, Some(BACKUP_FIRST_HINT))?;
        let launcher_root = &self.config().launcher_manifest_root;
        fs_ops::require_dir(launcher_root, Some(LAUNCHER_ROOT_HINT))?;

        let message = format!(
            "Launcher manifests will restore to \"{}\". Continue?",
            launcher_root.display()
        );
        if !prompter.confirm(&message)? {
            return Ok(Outcome::Aborted);
        }

        let mut summary = RestoreSummary::default();
        for manifest in scanner::scan_launcher_manifests(&backup_folder)? {
            log::info!("Restoring launcher manifest: {}", manifest.name());
            fs_ops::copy_into(manifest.path(), launcher_root)?;
            summary.restored.push(manifest.name().to_string());
        }

        Ok(Outcome::Completed(summary))
    }
}

#[cfg(test)]
#[path = "tests/backup_tests.rs"]
mod tests;
