//! Persistent settings: the games root and the launcher manifest folder.
//!
//! Stored in `~/.config/egs-relocate/settings.toml`:
//!
//! ```toml
//! [paths]
//! games_root = "D:\\Epic Games"
//! launcher_manifest_root = "C:\\ProgramData\\Epic\\EpicGamesLauncher\\Data\\Manifests"
//! ```

use std::io;
use std::path::{Path, PathBuf};

use egs_relocate_core::layout::DEFAULT_LAUNCHER_MANIFEST_PATH;

const PATHS_TABLE: &str = "paths";

/// A path that can be saved in `settings.toml`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathSetting {
    GamesRoot,
    LauncherManifestRoot,
}

impl PathSetting {
    pub fn key(&self) -> &'static str {
        match self {
            Self::GamesRoot => "games_root",
            Self::LauncherManifestRoot => "launcher_manifest_root",
        }
    }

    fn default_path(&self) -> PathBuf {
        match self {
            Self::GamesRoot => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            Self::LauncherManifestRoot => PathBuf::from(DEFAULT_LAUNCHER_MANIFEST_PATH),
        }
    }
}

/// Canonical path to the settings file: `~/.config/egs-relocate/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("egs-relocate").join("settings.toml")
}

/// Resolve a path setting using a priority chain:
///
/// 1. CLI override (if `Some`)
/// 2. Saved value in `settings.toml`
/// 3. Built-in default (current directory for the games root, the
///    launcher's default install location for the manifest folder)
pub fn resolve_path(setting: PathSetting, cli_override: Option<PathBuf>) -> PathBuf {
    resolve_path_in(&settings_path(), setting, cli_override)
}

fn resolve_path_in(settings: &Path, setting: PathSetting, cli_override: Option<PathBuf>) -> PathBuf {
    if let Some(p) = cli_override {
        return p;
    }
    if let Some(p) = load_path(settings, setting) {
        return p;
    }
    setting.default_path()
}

fn load_path(settings: &Path, setting: PathSetting) -> Option<PathBuf> {
    let contents = std::fs::read_to_string(settings).ok()?;
    let doc: toml::Value = contents.parse().ok()?;
    let value = doc.get(PATHS_TABLE)?.get(setting.key())?.as_str()?;
    if value.is_empty() {
        None
    } else {
        Some(PathBuf::from(value))
    }
}

/// Save (or clear) a path setting.
pub fn save_path(setting: PathSetting, path: Option<&Path>) -> io::Result<()> {
    save_path_in(&settings_path(), setting, path)
}

/// Uses `toml::Value` for a surgical update so unrelated keys are preserved.
fn save_path_in(settings: &Path, setting: PathSetting, path: Option<&Path>) -> io::Result<()> {
    let mut doc: toml::Value = if let Ok(contents) = std::fs::read_to_string(settings) {
        contents
            .parse()
            .unwrap_or_else(|_| toml::Value::Table(Default::default()))
    } else {
        toml::Value::Table(Default::default())
    };

    let table = doc
        .as_table_mut()
        .ok_or_else(|| io::Error::other("settings.toml root is not a table"))?;
    let paths = table
        .entry(PATHS_TABLE)
        .or_insert_with(|| toml::Value::Table(Default::default()));
    let paths_table = paths
        .as_table_mut()
        .ok_or_else(|| io::Error::other("[paths] is not a table"))?;

    match path {
        Some(p) => {
            paths_table.insert(
                setting.key().to_string(),
                toml::Value::String(p.to_string_lossy().into_owned()),
            );
        }
        None => {
            paths_table.remove(setting.key());
        }
    }

    // Write atomically
    if let Some(parent) = settings.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let serialized = toml::to_string_pretty(&doc).map_err(io::Error::other)?;
    let tmp = settings.with_extension("toml.tmp");
    std::fs::write(&tmp, &serialized)?;
    std::fs::rename(&tmp, settings)?;

    Ok(())
}

/// Load the full settings file as a pretty-printed TOML string for display.
pub fn load_settings_string() -> Option<String> {
    let contents = std::fs::read_to_string(settings_path()).ok()?;
    let doc: toml::Value = contents.parse().ok()?;
    toml::to_string_pretty(&doc).ok()
}
