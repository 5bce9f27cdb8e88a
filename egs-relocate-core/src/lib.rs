//! Data model shared by the relocation engine and its frontends.
//!
//! Everything here is a read-only snapshot of what was found on disk:
//! directory entries, game records and the typed launcher manifest.

pub mod entry;
pub mod error;
pub mod game;
pub mod layout;
pub mod manifest;
pub mod util;

pub use entry::DirectoryEntry;
pub use error::ManifestError;
pub use game::GameRecord;
pub use manifest::LauncherManifest;
