//! Moving game installs to another folder while keeping their launcher
//! manifests consistent.
//!
//! For every selected game the order is fixed:
//!
//! 1. skip if the destination already has a folder with the game's name;
//! 2. rescan the backup folder and match every game manifest, skipping the
//!    game if any match is missing (nothing is touched);
//! 3. rewrite each matched launcher manifest to the new location and move it
//!    into `<destination>/_MANIFEST_BACKUPS`;
//! 4. move the install folder itself.
//!
//! The launcher's own manifest folder is never written here; a restore
//! afterwards makes the launcher see the new locations.

use std::path::{Path, PathBuf};

use egs_relocate_core::layout::MANIFEST_BACKUP_FOLDER_NAME;
use egs_relocate_core::{DirectoryEntry, GameRecord};

use crate::context::{BACKUP_FIRST_HINT, Outcome, RelocationContext, backup_folder_in};
use crate::error::{RelocateError, Result};
use crate::fs_ops;
use crate::matcher::ManifestIndex;
use crate::prompt::Prompter;
use crate::{rewriter, scanner};

/// What the operator asked to move. Empty fields are asked for interactively.
#[derive(Debug, Clone, Default)]
pub struct MoveRequest {
    /// Game folder names, in the order they should be processed.
    pub games: Vec<String>,
    /// Folder to move the games into.
    pub destination: Option<PathBuf>,
}

/// Games and destination after selection and validation.
#[derive(Debug, Clone)]
pub struct MoveSelection<'a> {
    games: Vec<&'a GameRecord>,
    destination: PathBuf,
}

impl<'a> MoveSelection<'a> {
    pub fn games(&self) -> &[&'a GameRecord] {
        &self.games
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }
}

/// Why a selected game was left in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveSkipReason {
    /// The destination already holds a folder with this name.
    AlreadyExists(PathBuf),
    /// This game manifest has no launcher manifest in the backup folder.
    UnmatchedManifest(String),
}

impl MoveSkipReason {
    pub fn description(&self) -> String {
        match self {
            Self::AlreadyExists(path) => {
                format!("game folder already exists at {}", path.display())
            }
            Self::UnmatchedManifest(manifest) => format!(
                "no launcher manifest for {manifest} within {MANIFEST_BACKUP_FOLDER_NAME}"
            ),
        }
    }
}

/// Decision for a single game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveAction {
    /// Move the install to `target`, relocating these backed-up manifests.
    Move {
        target: PathBuf,
        manifests: Vec<DirectoryEntry>,
    },
    Skip(MoveSkipReason),
}

/// A game and what a move would do with it.
#[derive(Debug, Clone)]
pub struct PlannedMove<'a> {
    pub game: &'a GameRecord,
    pub action: MoveAction,
}

/// Dry-run result of a move.
#[derive(Debug, Clone)]
pub struct MovePlan<'a> {
    pub destination: PathBuf,
    pub moves: Vec<PlannedMove<'a>>,
}

impl MovePlan<'_> {
    pub fn move_count(&self) -> usize {
        self.moves
            .iter()
            .filter(|m| matches!(m.action, MoveAction::Move { .. }))
            .count()
    }
}

/// Progress information for callbacks.
#[derive(Debug, Clone)]
pub enum MoveProgress {
    /// Starting on a game (`index` is zero-based).
    Game {
        name: String,
        index: usize,
        total: usize,
    },
    /// All selected games processed.
    Done { total: usize },
}

impl MoveProgress {
    /// Percentage of selected games processed before this event.
    pub fn percent(&self) -> usize {
        match self {
            Self::Game { index, total, .. } if *total > 0 => index * 100 / total,
            _ => 100,
        }
    }
}

/// A game that was moved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovedGame {
    pub name: String,
    /// New install folder.
    pub target: PathBuf,
    /// Launcher manifests relocated with it.
    pub manifests: Vec<String>,
}

/// A selected game that was left in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedMove {
    pub name: String,
    pub reason: MoveSkipReason,
}

/// Summary of an executed move.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveSummary {
    pub destination: PathBuf,
    pub moved: Vec<MovedGame>,
    pub skipped: Vec<SkippedMove>,
}

impl RelocationContext {
    /// Select games and a destination and run the move.
    ///
    /// Shorthand for [`prepare_move`](Self::prepare_move) followed by
    /// [`execute_move`](Self::execute_move).
    pub fn move_games(
        &self,
        prompter: &dyn Prompter,
        request: &MoveRequest,
        progress: &dyn Fn(MoveProgress),
    ) -> Result<Outcome<MoveSummary>> {
        match self.prepare_move(prompter, request)? {
            Some(selection) => self.execute_move(prompter, &selection, progress),
            None => Ok(Outcome::Aborted),
        }
    }

    /// Resolve the games and destination of a move and check its preconditions.
    ///
    /// Returns `None` when the operator selects nothing. Fails when the
    /// backup folder or the destination is missing, when the destination is
    /// the games root itself, or when it lies inside a selected game folder.
    pub fn prepare_move(
        &self,
        prompter: &dyn Prompter,
        request: &MoveRequest,
    ) -> Result<Option<MoveSelection<'_>>> {
        fs_ops::require_dir(&self.backup_folder(), Some(BACKUP_FIRST_HINT))?;

        let mut games: Vec<&GameRecord> = if request.games.is_empty() {
            let options: Vec<String> = self.catalog().iter().map(|g| g.to_string()).collect();
            prompter
                .select("Movable Games Menu:", &options)?
                .into_iter()
                .filter_map(|i| self.catalog().get(i))
                .collect()
        } else {
            request
                .games
                .iter()
                .map(|name| {
                    self.find_game(name)
                        .ok_or_else(|| RelocateError::UnknownGame(name.clone()))
                })
                .collect::<Result<_>>()?
        };
        dedup_in_order(&mut games);

        if games.is_empty() {
            log::info!("No games selected.");
            return Ok(None);
        }

        let destination = match &request.destination {
            Some(d) => d.clone(),
            None => match prompter.input_path("Input a destination path")? {
                Some(d) => d,
                None => {
                    log::info!("No destination given.");
                    return Ok(None);
                }
            },
        };

        if same_location(&destination, &self.config().games_root) {
            return Err(RelocateError::SameSourceAndDestination(destination));
        }
        fs_ops::require_dir(&destination, None)?;
        if let Some(game) = games
            .iter()
            .find(|g| is_within(&destination, g.game_folder().path()))
        {
            return Err(RelocateError::DestinationInsideGame {
                destination,
                game: game.name().to_string(),
            });
        }

        Ok(Some(MoveSelection { games, destination }))
    }

    /// Work out what a move would do, without touching anything.
    pub fn plan_move<'a>(&'a self, selection: &MoveSelection<'a>) -> Result<MovePlan<'a>> {
        let backed_up = scanner::scan_launcher_manifests(&self.backup_folder())?;
        let moves = selection
            .games
            .iter()
            .map(|&game| PlannedMove {
                game,
                action: plan_game(game, &selection.destination, &backed_up),
            })
            .collect();
        Ok(MovePlan {
            destination: selection.destination.clone(),
            moves,
        })
    }

    /// Confirm with the operator and move the selected games.
    ///
    /// Every launcher manifest the move would rewrite is validated first, so
    /// an unsupported `FormatVersion` stops the run before anything moves.
    /// Games that cannot be moved are skipped without affecting the others.
    pub fn execute_move(
        &self,
        prompter: &dyn Prompter,
        selection: &MoveSelection<'_>,
        progress: &dyn Fn(MoveProgress),
    ) -> Result<Outcome<MoveSummary>> {
        let destination = &selection.destination;

        let plan = self.plan_move(selection)?;
        for planned in &plan.moves {
            if let MoveAction::Move { manifests, .. } = &planned.action {
                for manifest in manifests {
                    rewriter::read_manifest(manifest.path())?;
                }
            }
        }

        let message = format!(
            "Selected game installations will be moved to \"{}\".\n\
             Manifest backup folder will be created.\n\
             Associated manifest files will be moved.\n\
             Manifest file location references will be updated.\nContinue?",
            destination.display()
        );
        if !prompter.confirm(&message)? {
            return Ok(Outcome::Aborted);
        }

        let destination_backup = backup_folder_in(destination);
        fs_ops::ensure_dir(&destination_backup)?;

        let total = selection.games.len();
        let mut summary = MoveSummary {
            destination: destination.clone(),
            ..Default::default()
        };

        for (index, game) in selection.games.iter().enumerate() {
            progress(MoveProgress::Game {
                name: game.name().to_string(),
                index,
                total,
            });

            // Rescan so manifests moved or backed up since the plan are seen.
            let backed_up = scanner::scan_launcher_manifests(&self.backup_folder())?;
            let (target, manifests) = match plan_game(game, destination, &backed_up) {
                MoveAction::Move { target, manifests } => (target, manifests),
                MoveAction::Skip(reason) => {
                    log::warn!("Skipping \"{}\": {}", game.name(), reason.description());
                    summary.skipped.push(SkippedMove {
                        name: game.name().to_string(),
                        reason,
                    });
                    continue;
                }
            };

            for manifest in &manifests {
                rewriter::rewrite_locations(manifest, &target)?;
                fs_ops::move_into(manifest.path(), &destination_backup)?;
            }

            log::info!("Moving \"{}\" to {}", game.name(), destination.display());
            let moved_to = fs_ops::move_into(game.game_folder().path(), destination)?;

            summary.moved.push(MovedGame {
                name: game.name().to_string(),
                target: moved_to,
                manifests: manifests.iter().map(|m| m.name().to_string()).collect(),
            });
        }

        progress(MoveProgress::Done { total });
        Ok(Outcome::Completed(summary))
    }
}

/// Decide what to do with one game given the current backup folder contents.
fn plan_game(game: &GameRecord, destination: &Path, backed_up: &[DirectoryEntry]) -> MoveAction {
    let target = destination.join(game.name());
    let raw_target = destination.join(game.game_folder().raw_name());
    if target.exists() {
        return MoveAction::Skip(MoveSkipReason::AlreadyExists(target));
    }
    if raw_target.exists() {
        return MoveAction::Skip(MoveSkipReason::AlreadyExists(raw_target));
    }

    let index = ManifestIndex::new(backed_up);
    let mut manifests: Vec<DirectoryEntry> = Vec::new();
    for game_manifest in game.manifest_files() {
        let Some(manifest) = index.get(game_manifest) else {
            return MoveAction::Skip(MoveSkipReason::UnmatchedManifest(
                game_manifest.name().to_string(),
            ));
        };
        // Several game manifests may share one launcher manifest.
        if !manifests.iter().any(|m| m.path() == manifest.path()) {
            manifests.push(manifest.clone());
        }
    }

    MoveAction::Move { target, manifests }
}

fn same_location(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

/// Whether `path` is `folder` itself or somewhere below it.
fn is_within(path: &Path, folder: &Path) -> bool {
    match (path.canonicalize(), folder.canonicalize()) {
        (Ok(p), Ok(f)) => p.starts_with(f),
        _ => path.starts_with(folder),
    }
}

fn dedup_in_order(games: &mut Vec<&GameRecord>) {
    let mut seen = std::collections::HashSet::new();
    games.retain(|g| seen.insert(g.name().to_string()));
}

#[cfg(test)]
#[path = "tests/relocate_tests.rs"]
mod tests;
