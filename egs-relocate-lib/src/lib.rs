//! Manifest-consistency engine for relocating launcher-managed game installs.
//!
//! Build a [`RelocationContext`] from a [`RelocationConfig`], then run the
//! operations on it: [`backup_manifests`](RelocationContext::backup_manifests),
//! [`restore_manifests`](RelocationContext::restore_manifests),
//! [`move_games`](RelocationContext::move_games) and
//! [`relink_manifests`](RelocationContext::relink_manifests). Each one asks the
//! operator through a [`Prompter`] before changing anything.

pub mod backup;
pub mod context;
pub mod error;
pub mod fs_ops;
pub mod matcher;
pub mod prompt;
pub mod relink;
pub mod relocate;
pub mod rewriter;
pub mod scanner;
pub mod settings;

pub use backup::{BackupSummary, RestoreSummary, UnmatchedManifest};
pub use context::{Outcome, RelocationConfig, RelocationContext};
pub use error::{RelocateError, Result};
pub use matcher::{ManifestIndex, find_matching_manifest};
pub use prompt::Prompter;
pub use relink::{RelinkSummary, RelinkedManifest};
pub use relocate::{
    MoveAction, MovePlan, MoveProgress, MoveRequest, MoveSelection, MoveSkipReason, MoveSummary,
    MovedGame, PlannedMove, SkippedMove,
};
pub use rewriter::{read_manifest, rewrite_locations};
pub use scanner::{GameScan, ScanSkip, ScanSkipReason, scan_games, scan_launcher_manifests};

// Re-export the data model so frontends only need this crate.
pub use egs_relocate_core::{DirectoryEntry, GameRecord, LauncherManifest, ManifestError, layout};

#[cfg(test)]
#[path = "tests/support.rs"]
pub(crate) mod test_support;
