use anyhow::{bail, Context, Result};
use std::cmp::Ordering;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Compression of an archive file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArchiveKind {
    Bz2, // *.bz2
    Zst, // *.zst
}

impl ArchiveKind {
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("bz2") => Some(ArchiveKind::Bz2),
            Some(ext) if ext.eq_ignore_ascii_case("zst") => Some(ArchiveKind::Zst),
            _ => None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ArchiveJob {
    pub kind: ArchiveKind,
    pub path: PathBuf,
}

/// Sub-directories sort before files; ties broken by file name.
fn dirs_first(a: &DirEntry, b: &DirEntry) -> Ordering {
    let (da, db) = (a.file_type().is_dir(), b.file_type().is_dir());
    db.cmp(&da).then_with(|| a.file_name().cmp(b.file_name()))
}

/// Plan the archives to read, in discovery order.
///
/// A file input is read directly when its extension is a known archive kind.
/// A directory is walked depth-first: each sub-directory is fully visited
/// before the archives sitting next to it. Unreadable entries are logged and skipped.
pub fn discover_archives(input: &Path) -> Result<Vec<ArchiveJob>> {
    if !input.exists() {
        bail!("input path does not exist: {}", input.display());
    }
    if input.is_file() {
        let kind = ArchiveKind::from_path(input)
            .with_context(|| format!("unsupported archive (expected .bz2 or .zst): {}", input.display()))?;
        return Ok(vec![ArchiveJob { kind, path: input.to_path_buf() }]);
    }

    let mut jobs = Vec::new();
    for entry in WalkDir::new(input).min_depth(1).sort_by(dirs_first) {
        let ent = match entry {
            Ok(ent) => ent,
            Err(e) => {
                tracing::warn!(error = %e, "skipping unreadable directory entry");
                continue;
            }
        };
        if !ent.file_type().is_file() {
            continue;
        }
        if let Some(kind) = ArchiveKind::from_path(ent.path()) {
            jobs.push(ArchiveJob { kind, path: ent.into_path() });
        }
    }
    Ok(jobs)
}
