/// Strip the final `.ext` suffix from a file name.
///
/// Mirrors `Path::file_stem` semantics on plain strings: a leading dot is
/// part of the name (`.egstore` stays `.egstore`), and only the text after
/// the last dot is removed.
pub fn strip_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(0) | None => name,
        Some(pos) => &name[..pos],
    }
}

/// Check whether a file name carries one of the layout markers.
///
/// Markers are matched anywhere in the name, so `X.manifest2` still counts
/// as a game manifest and `X.item.bak` as a launcher manifest.
pub fn has_marker(name: &str, marker: &str) -> bool {
    name.contains(marker)
}
