//! Read-modify-write of launcher manifest location fields.

use std::fs;
use std::path::Path;

use egs_relocate_core::{DirectoryEntry, LauncherManifest};

use crate::error::{RelocateError, Result};
use crate::fs_ops;

/// Read and validate a launcher manifest without modifying it.
///
/// Fails with an unsupported-version error when `FormatVersion` is not in
/// the supported list.
pub fn read_manifest(path: &Path) -> Result<LauncherManifest> {
    let contents = fs::read_to_string(path)?;
    LauncherManifest::from_json_str(&contents).map_err(|e| RelocateError::manifest(path, e))
}

/// Point a launcher manifest at `game_folder`.
///
/// Rewrites `InstallLocation`, `ManifestLocation` (`<folder>/.egstore`) and
/// `StagingLocation` (`<folder>/.egstore/bps`); all other keys are written
/// back unchanged. The file is replaced through a temporary sibling, so it
/// is either fully old or fully new. On an unsupported `FormatVersion` the
/// file is not written at all.
///
/// No backup is taken here.
pub fn rewrite_locations(manifest: &DirectoryEntry, game_folder: &Path) -> Result<()> {
    let path = manifest.path();
    let mut parsed = read_manifest(path)?;
    parsed.set_install_location(game_folder);

    let json = parsed
        .to_json_string()
        .map_err(|e| RelocateError::manifest(path, e))?;
    let tmp_name = format!(".{}.tmp", manifest.raw_name());
    fs_ops::write_atomic(path, json.as_bytes(), &tmp_name)?;

    log::debug!(
        "Rewrote {} -> InstallLocation {}",
        manifest.name(),
        parsed.install_location
    );
    Ok(())
}
