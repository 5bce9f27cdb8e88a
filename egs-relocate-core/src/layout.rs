//! On-disk layout of the launcher and of installed games.
//!
//! ```text
//! <launcher manifests>/ABC.item            launcher manifest (JSON)
//! <games root>/Game/.egstore/ABC.manifest  game manifest
//! <games root>/_MANIFEST_BACKUPS/ABC.item  backed-up launcher manifest
//! ```

/// Where the launcher keeps its `.item` manifests on a default install.
pub const DEFAULT_LAUNCHER_MANIFEST_PATH: &str =
    r"C:\ProgramData\Epic\EpicGamesLauncher\Data\Manifests";

/// Working folder created under a games root to hold manifest backups.
pub const MANIFEST_BACKUP_FOLDER_NAME: &str = "_MANIFEST_BACKUPS";

/// Reserved subfolder that marks a directory as an installed game.
pub const GAME_MANIFEST_FOLDER_NAME: &str = ".egstore";

/// Marker in the name of a game-side manifest file.
pub const GAME_MANIFEST_MARKER: &str = ".manifest";

/// Marker in the name of a launcher-side manifest file.
pub const LAUNCHER_MANIFEST_MARKER: &str = ".item";

/// Staging subfolder referenced by `StagingLocation`, under the manifest folder.
pub const STAGING_FOLDER_NAME: &str = "bps";

/// Launcher manifest `FormatVersion` values this build knows how to rewrite.
///
/// Anything else is a hard stop: the schema has to be checked and added here
/// before the tool may touch those files.
pub const SUPPORTED_FORMAT_VERSIONS: &[i64] = &[0];

/// Whether a `FormatVersion` value is in [`SUPPORTED_FORMAT_VERSIONS`].
pub fn is_supported_format_version(version: i64) -> bool {
    SUPPORTED_FORMAT_VERSIONS.contains(&version)
}
