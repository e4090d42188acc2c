//! Applies a single computed destination path to a single source file
//! (spec.md §4.F, §4.G).

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenameError {
    #[error("source `{0}` does not exist")]
    SourceMissing(PathBuf),

    #[error("destination `{0}` already exists")]
    Exists(PathBuf),

    #[error("destination `{0}` lies inside a directory that doesn't exist")]
    InvalidDestination(PathBuf),

    #[error("I/O error while renaming `{from}` to `{to}`: {source}")]
    Io {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Moves one file from `from` to `to`, or simulates doing so. `override_existing`
/// mirrors the original `rename(src, dst, override=False)` call: an existing
/// destination file is replaced rather than rejected, but an existing
/// destination *directory* is always rejected regardless of this flag.
pub trait Renamer {
    fn rename(&mut self, from: &Path, to: &Path, override_existing: bool) -> Result<(), RenameError>;
}

fn check_common(from: &Path, to: &Path, from_exists: bool, to_exists: bool, override_existing: bool) -> Result<(), RenameError> {
    if !from_exists {
        return Err(RenameError::SourceMissing(from.to_path_buf()));
    }
    if to_exists {
        if to.is_dir() || !override_existing {
            return Err(RenameError::Exists(to.to_path_buf()));
        }
    }
    Ok(())
}

/// Renames within a single, already-existing directory. Destinations whose
/// parent directory doesn't exist are rejected rather than created.
pub struct FileRenamer;

impl Renamer for FileRenamer {
    fn rename(&mut self, from: &Path, to: &Path, override_existing: bool) -> Result<(), RenameError> {
        check_common(from, to, from.exists(), to.exists(), override_existing)?;
        if let Some(parent) = to.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                return Err(RenameError::InvalidDestination(to.to_path_buf()));
            }
        }
        fs::rename(from, to).map_err(|source| RenameError::Io {
            from: from.to_path_buf(),
            to: to.to_path_buf(),
            source,
        })
    }
}

/// Renames across directories, creating any missing intermediate
/// directories of the destination (spec.md's path mode).
pub struct FileMover;

impl Renamer for FileMover {
    fn rename(&mut self, from: &Path, to: &Path, override_existing: bool) -> Result<(), RenameError> {
        check_common(from, to, from.exists(), to.exists(), override_existing)?;
        if let Some(parent) = to.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| RenameError::Io {
                    from: from.to_path_buf(),
                    to: to.to_path_buf(),
                    source,
                })?;
            }
        }
        fs::rename(from, to).map_err(|source| RenameError::Io {
            from: from.to_path_buf(),
            to: to.to_path_buf(),
            source,
        })
    }
}

/// A virtual-filesystem renamer used by `--dry-run`: no file is ever
/// touched, but a job's sequence of renames is tracked so that later
/// renames in the same job see the effect of earlier ones (spec.md §4.G).
///
/// `removed` always takes priority over `created` and the real
/// filesystem, which is what lets an A -> B, B -> A sequence succeed: the
/// second rename's destination (A) was marked removed by the first, so it
/// reads as free even though A still exists on disk.
#[derive(Default)]
pub struct DryRunRenamer {
    created: HashSet<PathBuf>,
    removed: HashSet<PathBuf>,
}

impl DryRunRenamer {
    pub fn new() -> Self {
        Self::default()
    }

    fn exists(&self, path: &Path) -> bool {
        if self.removed.contains(path) {
            return false;
        }
        if self.created.contains(path) {
            return true;
        }
        path.exists()
    }
}

impl Renamer for DryRunRenamer {
    fn rename(&mut self, from: &Path, to: &Path, override_existing: bool) -> Result<(), RenameError> {
        check_common(from, to, self.exists(from), self.exists(to), override_existing)?;
        if let Some(parent) = to.parent() {
            if !parent.as_os_str().is_empty() && !self.exists(parent) && !parent.exists() {
                return Err(RenameError::InvalidDestination(to.to_path_buf()));
            }
        }

        self.removed.insert(from.to_path_buf());
        self.created.remove(from);
        self.created.insert(to.to_path_buf());
        self.removed.remove(to);
        Ok(())
    }
}
