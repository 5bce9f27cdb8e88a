//! Typed view of a launcher `.item` manifest.
//!
//! Only the fields the relocation touches are modeled; every other key is
//! carried in [`LauncherManifest::extra`] in its original order and written
//! back unchanged.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ManifestError;
use crate::layout::{
    GAME_MANIFEST_FOLDER_NAME, STAGING_FOLDER_NAME, SUPPORTED_FORMAT_VERSIONS,
    is_supported_format_version,
};

/// JSON key holding the schema version.
pub const FORMAT_VERSION_KEY: &str = "FormatVersion";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LauncherManifest {
    #[serde(rename = "FormatVersion")]
    pub format_version: i64,

    /// Game install folder.
    #[serde(rename = "InstallLocation")]
    pub install_location: String,

    /// The install's `.egstore` folder.
    #[serde(rename = "ManifestLocation")]
    pub manifest_location: String,

    /// Patch staging folder inside `.egstore`.
    #[serde(rename = "StagingLocation")]
    pub staging_location: String,

    /// All remaining keys, preserved verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl LauncherManifest {
    /// Parse a manifest, rejecting unsupported schema versions.
    ///
    /// The version is checked before the rest of the document is interpreted,
    /// so a future schema that renamed the location fields is still reported
    /// as an unsupported version rather than as a malformed file.
    pub fn from_json_str(contents: &str) -> Result<Self, ManifestError> {
        let value: Value = serde_json::from_str(contents)
            .map_err(|e| ManifestError::malformed(format!("invalid JSON: {e}")))?;

        let object = value
            .as_object()
            .ok_or_else(|| ManifestError::malformed("top-level value is not an object"))?;

        let version = object
            .get(FORMAT_VERSION_KEY)
            .ok_or_else(|| ManifestError::malformed("missing FormatVersion"))?
            .as_i64()
            .ok_or_else(|| ManifestError::malformed("FormatVersion is not an integer"))?;
        check_format_version(version)?;

        serde_json::from_value(value).map_err(|e| ManifestError::malformed(e.to_string()))
    }

    /// Serialize with four-space indentation, keeping `extra` in order.
    pub fn to_json_string(&self) -> Result<String, ManifestError> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)
            .map_err(|e| ManifestError::malformed(format!("failed to serialize: {e}")))?;
        String::from_utf8(buf).map_err(|e| ManifestError::malformed(e.to_string()))
    }

    /// Point the three location fields at a game folder.
    ///
    /// `ManifestLocation` becomes `<folder>/.egstore` and `StagingLocation`
    /// becomes `<folder>/.egstore/bps`.
    pub fn set_install_location(&mut self, game_folder: &Path) {
        let manifest_location = game_folder.join(GAME_MANIFEST_FOLDER_NAME);
        let staging_location = manifest_location.join(STAGING_FOLDER_NAME);

        self.install_location = game_folder.to_string_lossy().into_owned();
        self.manifest_location = manifest_location.to_string_lossy().into_owned();
        self.staging_location = staging_location.to_string_lossy().into_owned();
    }

    /// Display name of the game, if the launcher recorded one.
    pub fn display_name(&self) -> Option<&str> {
        self.extra.get("DisplayName").and_then(Value::as_str)
    }
}

/// Reject `FormatVersion` values outside the supported list.
pub fn check_format_version(version: i64) -> Result<(), ManifestError> {
    if is_supported_format_version(version) {
        Ok(())
    } else {
        Err(ManifestError::UnsupportedVersion {
            version,
            supported: SUPPORTED_FORMAT_VERSIONS,
        })
    }
}

#[cfg(test)]
#[path = "tests/manifest_tests.rs"]
mod tests;
