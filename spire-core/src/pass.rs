//! One full scan over a directory: every candidate file is classified, then
//! the decode or encode action it calls for is carried out.
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{error, info};

use crate::backup::make_backup;
use crate::codec;
use crate::paths;

/// What a single candidate file needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Opaque save without a decoded sibling: back it up, then decode.
    DecodeWithBackup,
    /// Decoded file: re-encode into the opaque path, then delete the source.
    EncodeAndDeleteSource,
    /// Nothing to do.
    Skip,
}

/// How the pass reacts to a per-file failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Stop the pass at the first failure.
    #[default]
    Abort,
    /// Report the failure and keep going with the remaining files.
    Continue,
}

/// Counts of what a pass did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PassSummary {
    pub decoded: usize,
    pub encoded: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Decides the action for one path from its name and the existence of its
/// decoded sibling. Verdicts for different files are independent.
pub fn classify(path: &Path) -> Action {
    if paths::is_opaque(path) && !paths::to_decoded_path(path).exists() {
        Action::DecodeWithBackup
    } else if paths::is_decoded(path) {
        Action::EncodeAndDeleteSource
    } else {
        Action::Skip
    }
}

/// Regular files directly in `dir` whose name carries one of the two
/// suffixes. Non-recursive; subdirectories, symlinks to directories and
/// non-UTF-8 names are not considered.
pub fn list_candidates(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("failed to read directory {}", dir.display()))?;

    let mut candidates = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("failed to list {}", dir.display()))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if paths::is_opaque(&path) || paths::is_decoded(&path) {
            candidates.push(path);
        }
    }

    Ok(candidates)
}

/// Runs one pass over `dir`.
///
/// All candidates are classified up front, before any file is touched, so
/// the outcome does not depend on directory-listing order. With
/// [`ErrorPolicy::Abort`] the first per-file failure ends the pass; with
/// [`ErrorPolicy::Continue`] it is logged and counted instead.
pub fn run_pass(dir: &Path, policy: ErrorPolicy) -> Result<PassSummary> {
    let actions: Vec<(PathBuf, Action)> = list_candidates(dir)?
        .into_iter()
        .map(|path| {
            let action = classify(&path);
            (path, action)
        })
        .collect();

    let mut summary = PassSummary::default();
    for (path, action) in actions {
        match apply(&path, action) {
            Ok(()) => match action {
                Action::DecodeWithBackup => summary.decoded += 1,
                Action::EncodeAndDeleteSource => summary.encoded += 1,
                Action::Skip => summary.skipped += 1,
            },
            Err(err) => match policy {
                ErrorPolicy::Abort => return Err(err),
                ErrorPolicy::Continue => {
                    error!("{}: {err:#}", path.display());
                    summary.failed += 1;
                }
            },
        }
    }

    Ok(summary)
}

fn apply(path: &Path, action: Action) -> Result<()> {
    match action {
        Action::DecodeWithBackup => {
            info!("decoding {}", basename(path));
            make_backup(path)?;
            decode_file(path)
        }
        Action::EncodeAndDeleteSource => {
            info!("encoding {}", basename(path));
            encode_file(path)
        }
        Action::Skip => Ok(()),
    }
}

/// Decodes an opaque save into its decoded sibling path.
/// The source file is left untouched.
pub fn decode_file(path: &Path) -> Result<()> {
    let opaque = fs::read(path)
        .with_context(|| format!("failed to read save file {}", path.display()))?;
    let plain = codec::decode(&opaque)
        .with_context(|| format!("failed to decode {}", path.display()))?;

    let target = paths::to_decoded_path(path);
    fs::write(&target, plain)
        .with_context(|| format!("failed to write decoded file {}", target.display()))?;

    Ok(())
}

/// Encodes a decoded file back into its opaque path (created or overwritten,
/// no backup), then deletes the source.
pub fn encode_file(path: &Path) -> Result<()> {
    let plain = fs::read(path)
        .with_context(|| format!("failed to read decoded file {}", path.display()))?;
    let opaque = codec::encode(&plain);

    let target = paths::to_opaque_path(path);
    fs::write(&target, opaque)
        .with_context(|| format!("failed to write save file {}", target.display()))?;
    fs::remove_file(path)
        .with_context(|| format!("failed to remove decoded file {}", path.display()))?;

    Ok(())
}

fn basename(path: &Path) -> String {
    path.file_name()
        .unwrap_or(path.as_os_str())
        .to_string_lossy()
        .into_owned()
}
