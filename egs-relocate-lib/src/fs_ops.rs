//! File-system primitives used by the relocation operations.
//!
//! Everything that creates, copies or moves something on disk goes through
//! here so the operations themselves only decide *what* to do.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use filetime::FileTime;
use walkdir::WalkDir;

use crate::error::{RelocateError, Result};

/// Create `dir` (and parents) if it does not exist yet.
///
/// Returns `true` when the folder was created by this call.
pub fn ensure_dir(dir: &Path) -> io::Result<bool> {
    if dir.is_dir() {
        return Ok(false);
    }
    fs::create_dir_all(dir)?;
    log::debug!("Created folder {}", dir.display());
    Ok(true)
}

/// Fail with [`RelocateError::MissingFolder`] unless `dir` is an existing directory.
pub fn require_dir(dir: &Path, hint: Option<&'static str>) -> Result<()> {
    if dir.is_dir() {
        Ok(())
    } else {
        Err(RelocateError::missing_folder(dir, hint))
    }
}

/// Copy `file` into `dir`, overwriting a file of the same name.
///
/// Permissions and the modification time are carried over. Returns the
/// path of the copy.
pub fn copy_into(file: &Path, dir: &Path) -> io::Result<PathBuf> {
    let target = dir.join(file_name(file)?);
    copy_with_metadata(file, &target)?;
    Ok(target)
}

/// Move `source` (file or folder) into `dir`, keeping its name.
///
/// Uses a rename when possible and falls back to copy + delete when the
/// destination is on another device. Existing files at the target are
/// replaced; callers check for folder collisions beforehand.
pub fn move_into(source: &Path, dir: &Path) -> io::Result<PathBuf> {
    let target = dir.join(file_name(source)?);
    match fs::rename(source, &target) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::CrossesDevices => {
            log::debug!(
                "{} is on another device, copying instead of renaming",
                target.display()
            );
            if source.is_dir() {
                copy_dir_recursive(source, &target)?;
                fs::remove_dir_all(source)?;
            } else {
                copy_with_metadata(source, &target)?;
                fs::remove_file(source)?;
            }
        }
        Err(e) => return Err(e),
    }
    Ok(target)
}

/// Replace `path` with `contents` without ever leaving a half-written file.
///
/// The data goes to `tmp_name` next to `path` first and is renamed over the
/// original once flushed to disk.
pub fn write_atomic(path: &Path, contents: &[u8], tmp_name: &str) -> io::Result<()> {
    let tmp = path.with_file_name(tmp_name);
    let result = (|| {
        let mut file = File::create(&tmp)?;
        file.write_all(contents)?;
        file.sync_all()?;
        fs::rename(&tmp, path)
    })();
    if result.is_err() {
        let _ = fs::remove_file(&tmp);
    }
    result
}

fn file_name(path: &Path) -> io::Result<&std::ffi::OsStr> {
    path.file_name().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} has no file name", path.display()),
        )
    })
}

/// `fs::copy` carries the permission bits over, so the target may already be
/// read-only here; the mtime is set by path without opening it for writing.
fn copy_with_metadata(source: &Path, target: &Path) -> io::Result<()> {
    fs::copy(source, target)?;
    let modified = FileTime::from_last_modification_time(&fs::metadata(source)?);
    filetime::set_file_mtime(target, modified)?;
    Ok(())
}

fn copy_dir_recursive(source: &Path, target: &Path) -> io::Result<()> {
    for entry in WalkDir::new(source) {
        let entry = entry.map_err(io::Error::other)?;
        let relative = entry
            .path()
            .strip_prefix(source)
            .map_err(io::Error::other)?;
        let dest = target.join(relative);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&dest)?;
        } else {
            copy_with_metadata(entry.path(), &dest)?;
        }
    }
    Ok(())
}
