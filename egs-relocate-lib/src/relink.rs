//! Re-pointing backed-up launcher manifests at the games' current folders.

use std::collections::HashSet;
use std::path::Path;

use egs_relocate_core::{DirectoryEntry, GameRecord};

use crate::backup::UnmatchedManifest;
use crate::context::{BACKUP_FIRST_HINT, Outcome, RelocationContext};
use crate::error::Result;
use crate::fs_ops;
use crate::matcher::ManifestIndex;
use crate::prompt::Prompter;
use crate::{rewriter, scanner};

/// A launcher manifest whose locations were rewritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelinkedManifest {
    pub game: String,
    pub manifest: String,
}

/// Summary of a relink run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelinkSummary {
    pub relinked: Vec<RelinkedManifest>,
    pub unmatched: Vec<UnmatchedManifest>,
}

impl RelocationContext {
    /// Rewrite every backed-up launcher manifest to point at its game's
    /// current folder. Nothing is moved.
    ///
    /// All matched manifests are validated before the first one is written,
    /// so an unsupported `FormatVersion` anywhere leaves every file untouched.
    pub fn relink_manifests(&self, prompter: &dyn Prompter) -> Result<Outcome<RelinkSummary>> {
        let backup_folder = self.backup_folder();
        fs_ops::require_dir(&backup_folder, Some(BACKUP_FIRST_HINT))?;

        let message = format!(
            "Launcher manifests within \"{}\" will be relinked to their associated games.\nContinue?",
            backup_folder.display()
        );
        if !prompter.confirm(&message)? {
            return Ok(Outcome::Aborted);
        }

        let backed_up = scanner::scan_launcher_manifests(&backup_folder)?;
        let index = ManifestIndex::new(&backed_up);
        let mut summary = RelinkSummary::default();
        let mut seen: HashSet<&Path> = HashSet::new();
        let mut pending: Vec<(&GameRecord, &DirectoryEntry)> = Vec::new();

        for game in self.catalog() {
            for game_manifest in game.manifest_files() {
                match index.get(game_manifest) {
                    Some(manifest) => {
                        if seen.insert(manifest.path()) {
                            pending.push((game, manifest));
                        }
                    }
                    None => {
                        log::warn!(
                            "Launcher manifest for \"{}\" matching {} does not exist.",
                            game.name(),
                            game_manifest.name(),
                        );
                        summary.unmatched.push(UnmatchedManifest {
                            game: game.name().to_string(),
                            manifest: game_manifest.name().to_string(),
                        });
                    }
                }
            }
        }

        for (_, manifest) in &pending {
            rewriter::read_manifest(manifest.path())?;
        }

        for (game, manifest) in pending {
            log::info!("Relinking \"{}\"", game.name());
            rewriter::rewrite_locations(manifest, game.game_folder().path())?;
            summary.relinked.push(RelinkedManifest {
                game: game.name().to_string(),
                manifest: manifest.name().to_string(),
            });
        }

        Ok(Outcome::Completed(summary))
    }
}

#[cfg(test)]
#[path = "tests/relink_tests.rs"]
mod tests;
