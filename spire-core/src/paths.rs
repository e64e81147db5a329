/// Name-derived pairing between opaque saves and their decoded siblings.
///
/// The pairing is inferred purely from file-name suffixes, never stored
/// anywhere. All suffix knowledge lives in this module.
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Suffix of the game's obfuscated save files.
pub const OPAQUE_SUFFIX: &str = ".autosave";

/// Suffix appended to an opaque save's name to form its decoded sibling.
pub const DECODED_SUFFIX: &str = ".json";

fn file_name(path: &Path) -> Option<&str> {
    path.file_name().and_then(|name| name.to_str())
}

fn has_suffix_ignore_case(name: &str, suffix: &str) -> bool {
    name.len() >= suffix.len()
        && name.as_bytes()[name.len() - suffix.len()..].eq_ignore_ascii_case(suffix.as_bytes())
}

/// True if the file name ends with the opaque suffix (case-insensitive).
pub fn is_opaque(path: &Path) -> bool {
    file_name(path).is_some_and(|name| has_suffix_ignore_case(name, OPAQUE_SUFFIX))
}

/// True if the file name ends with the decoded marker (case-insensitive).
pub fn is_decoded(path: &Path) -> bool {
    file_name(path).is_some_and(|name| has_suffix_ignore_case(name, DECODED_SUFFIX))
}

/// Decoded sibling of an opaque save: the same path with the marker appended.
pub fn to_decoded_path(path: &Path) -> PathBuf {
    let mut full = OsString::from(path.as_os_str());
    full.push(DECODED_SUFFIX);
    PathBuf::from(full)
}

/// Opaque sibling of a decoded file: the literal marker suffix stripped once
/// from the end of the name (case-insensitive). Paths without the marker are
/// returned unchanged.
pub fn to_opaque_path(path: &Path) -> PathBuf {
    match file_name(path) {
        Some(name) if has_suffix_ignore_case(name, DECODED_SUFFIX) => {
            path.with_file_name(&name[..name.len() - DECODED_SUFFIX.len()])
        }
        _ => path.to_path_buf(),
    }
}
