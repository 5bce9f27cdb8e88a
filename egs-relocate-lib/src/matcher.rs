//! Pairing of game manifests with launcher manifests.
//!
//! A game manifest `ABC.manifest` belongs to the launcher manifest
//! `ABC.item`: the two are the same game when their raw names (file name
//! without the final extension) are equal. If several launcher manifests
//! share a raw name, the first one seen wins.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use egs_relocate_core::DirectoryEntry;

/// Find the launcher manifest matching `game_manifest` by raw name.
pub fn find_matching_manifest<'a>(
    game_manifest: &DirectoryEntry,
    launcher_manifests: &'a [DirectoryEntry],
) -> Option<&'a DirectoryEntry> {
    launcher_manifests
        .iter()
        .find(|m| m.raw_name() == game_manifest.raw_name())
}

/// Raw-name lookup over one scan of launcher manifests.
///
/// Gives the same answers as [`find_matching_manifest`] on the list it was
/// built from, without a linear search per lookup.
#[derive(Debug, Default)]
pub struct ManifestIndex<'a> {
    by_raw_name: HashMap<&'a str, &'a DirectoryEntry>,
}

impl<'a> ManifestIndex<'a> {
    pub fn new(launcher_manifests: &'a [DirectoryEntry]) -> Self {
        let mut by_raw_name = HashMap::with_capacity(launcher_manifests.len());
        for manifest in launcher_manifests {
            match by_raw_name.entry(manifest.raw_name()) {
                Entry::Vacant(slot) => {
                    slot.insert(manifest);
                }
                Entry::Occupied(kept) => {
                    let kept: &&DirectoryEntry = kept.get();
                    log::debug!(
                        "Ignoring duplicate launcher manifest \"{}\" (using \"{}\")",
                        manifest.name(),
                        kept.name(),
                    );
                }
            }
        }
        Self { by_raw_name }
    }

    pub fn get(&self, game_manifest: &DirectoryEntry) -> Option<&'a DirectoryEntry> {
        self.by_raw_name.get(game_manifest.raw_name()).copied()
    }

    pub fn len(&self) -> usize {
        self.by_raw_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_raw_name.is_empty()
    }
}
