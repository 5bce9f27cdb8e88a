use std::path::PathBuf;

use egs_relocate_core::ManifestError;
use thiserror::Error;

/// Errors that stop a relocation operation.
///
/// Per-game problems (no matching manifest, destination already taken) are
/// not errors; they are reported as skips in the operation summaries.
#[derive(Debug, Error)]
pub enum RelocateError {
    /// A launcher manifest could not be read or has an unsupported schema
    #[error("{}: {source}", path.display())]
    Manifest {
        path: PathBuf,
        #[source]
        source: ManifestError,
    },

    /// A folder the operation depends on does not exist
    #[error("path does not exist: {}", path.display())]
    MissingFolder {
        path: PathBuf,
        hint: Option<&'static str>,
    },

    /// Moving games into the folder they already live in
    #[error("source and destination paths are equal: {}", .0.display())]
    SameSourceAndDestination(PathBuf),

    /// The destination lies inside one of the games being moved
    #[error("destination {} is inside the game folder \"{game}\"", destination.display())]
    DestinationInsideGame { destination: PathBuf, game: String },

    /// A game requested by name is not in the catalog
    #[error("no game folder named \"{0}\" in the games root")]
    UnknownGame(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl RelocateError {
    pub fn manifest(path: impl Into<PathBuf>, source: ManifestError) -> Self {
        Self::Manifest {
            path: path.into(),
            source,
        }
    }

    pub fn missing_folder(path: impl Into<PathBuf>, hint: Option<&'static str>) -> Self {
        Self::MissingFolder {
            path: path.into(),
            hint,
        }
    }

    /// Remediation hint to show alongside the error, if any.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::MissingFolder { hint, .. } => *hint,
            Self::Manifest { source, .. } if source.is_unsupported_version() => Some(
                "Launcher manifests were left untouched. Update the supported format versions before retrying.",
            ),
            _ => None,
        }
    }

    /// True when a launcher manifest declared a schema this build does not know.
    pub fn is_unsupported_version(&self) -> bool {
        matches!(self, Self::Manifest { source, .. } if source.is_unsupported_version())
    }
}

pub type Result<T> = std::result::Result<T, RelocateError>;
