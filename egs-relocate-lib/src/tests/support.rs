//! Fixtures shared by the operation tests.

use std::cell::{Cell, RefCell};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::context::{RelocationConfig, RelocationContext};
use crate::prompt::Prompter;

/// Prompter with canned answers that records what it was asked.
pub(crate) struct ScriptedPrompter {
    pub confirm_answer: bool,
    pub selection: Vec<usize>,
    pub destination: Option<PathBuf>,
    pub confirmations: Cell<usize>,
    pub questions: RefCell<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn yes() -> Self {
        Self {
            confirm_answer: true,
            selection: Vec::new(),
            destination: None,
            confirmations: Cell::new(0),
            questions: RefCell::new(Vec::new()),
        }
    }

    pub fn no() -> Self {
        Self {
            confirm_answer: false,
            ..Self::yes()
        }
    }

    pub fn selecting(selection: Vec<usize>, destination: &Path) -> Self {
        Self {
            selection,
            destination: Some(destination.to_path_buf()),
            ..Self::yes()
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn confirm(&self, message: &str) -> io::Result<bool> {
        self.confirmations.set(self.confirmations.get() + 1);
        self.questions.borrow_mut().push(message.to_string());
        Ok(self.confirm_answer)
    }

    fn select(&self, header: &str, _options: &[String]) -> io::Result<Vec<usize>> {
        self.questions.borrow_mut().push(header.to_string());
        Ok(self.selection.clone())
    }

    fn input_path(&self, prompt: &str) -> io::Result<Option<PathBuf>> {
        self.questions.borrow_mut().push(prompt.to_string());
        Ok(self.destination.clone())
    }
}

/// A games root, a launcher manifest folder and an empty destination in a
/// temporary directory.
pub(crate) struct Fixture {
    _tmp: TempDir,
    pub games_root: PathBuf,
    pub launcher_root: PathBuf,
    pub destination: PathBuf,
}

impl Fixture {
    pub fn new() -> Self {
        let tmp = TempDir::new().unwrap();
        let games_root = tmp.path().join("Games");
        let launcher_root = tmp.path().join("Manifests");
        let destination = tmp.path().join("NewDrive");
        for dir in [&games_root, &launcher_root, &destination] {
            fs::create_dir_all(dir).unwrap();
        }
        Self {
            _tmp: tmp,
            games_root,
            launcher_root,
            destination,
        }
    }

    /// Create `<games root>/<name>/.egstore/` with the given manifest files.
    pub fn add_game(&self, name: &str, manifests: &[&str]) -> PathBuf {
        let folder = self.games_root.join(name);
        let egstore = folder.join(".egstore");
        fs::create_dir_all(&egstore).unwrap();
        for manifest in manifests {
            fs::write(egstore.join(manifest), b"\x00binary").unwrap();
        }
        fs::write(folder.join("Game.exe"), b"exe").unwrap();
        folder
    }

    /// Write a launcher manifest pointing at the game's current folder.
    pub fn add_launcher_manifest(&self, name: &str, version: i64, game: &str) -> PathBuf {
        let path = self.launcher_root.join(name);
        fs::write(&path, item_json(version, &self.games_root.join(game))).unwrap();
        path
    }

    pub fn backup_folder(&self) -> PathBuf {
        self.games_root.join("_MANIFEST_BACKUPS")
    }

    pub fn config(&self) -> RelocationConfig {
        RelocationConfig::new(&self.launcher_root, &self.games_root)
    }

    pub fn context(&self) -> RelocationContext {
        RelocationContext::new(self.config()).unwrap()
    }
}

pub(crate) fn item_json(version: i64, install: &Path) -> String {
    let install = install.to_string_lossy().replace('\\', "\\\\");
    format!(
        r#"{{
    "FormatVersion": {version},
    "bIsIncompleteInstall": false,
    "InstallLocation": "{install}",
    "ManifestLocation": "{install}/.egstore",
    "StagingLocation": "{install}/.egstore/bps",
    "DisplayName": "Some Game",
    "AppName": "SomeApp"
}}"#
    )
}

/// Read `InstallLocation` from a launcher manifest on disk.
pub(crate) fn install_location(path: &Path) -> String {
    crate::rewriter::read_manifest(path)
        .unwrap()
        .install_location
}
