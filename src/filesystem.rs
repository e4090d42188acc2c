//! File handles and directory traversal (spec.md §4.E), grounded on the
//! teacher's `filesystem.rs`: a small `thiserror` error enum plus free
//! functions/traits around `std::fs` and `ignore`.

use std::fs;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read metadata for `{path}`: {source}")]
    Metadata {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error at `{path}`: {source}")]
    IOError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A file found under some input directory, addressed relative to it so
/// that tags and the renamer never need to carry the absolute root around.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct File {
    pub input_directory: PathBuf,
    pub relative_path: PathBuf,
}

impl File {
    pub fn new(input_directory: impl Into<PathBuf>, relative_path: impl Into<PathBuf>) -> Self {
        Self {
            input_directory: input_directory.into(),
            relative_path: relative_path.into(),
        }
    }

    pub fn absolute_path(&self) -> PathBuf {
        self.input_directory.join(&self.relative_path)
    }

    /// Full file name, e.g. `archive.tar.gz`
    pub fn file_name(&self) -> String {
        self.relative_path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default()
    }

    /// File name without its final extension, e.g. `archive.tar`
    pub fn file_stem(&self) -> String {
        self.relative_path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default()
    }

    /// Final extension without the leading dot, e.g. `gz`. Empty if none.
    pub fn extension(&self) -> String {
        self.relative_path
            .extension()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default()
    }

    /// The directory this file lives in, relative to the input directory.
    /// Empty for files directly under the input directory.
    pub fn parent_relative(&self) -> PathBuf {
        self.relative_path.parent().map(Path::to_path_buf).unwrap_or_default()
    }

    pub fn metadata(&self) -> Result<fs::Metadata, Error> {
        fs::metadata(self.absolute_path()).map_err(|source| Error::Metadata {
            path: self.absolute_path(),
            source,
        })
    }
}

fn is_hidden(name: &std::ffi::OsStr) -> bool {
    name.to_string_lossy().starts_with('.')
}

/// Discovers the set of files a job should operate on
pub trait FileGatherer {
    fn gather(&self, input_directory: &Path) -> Result<Vec<File>, Error>;
}

/// Gathers files directly under `input_directory`, ignoring subdirectories
pub struct FlatFileGatherer {
    pub include_hidden: bool,
}

impl FileGatherer for FlatFileGatherer {
    fn gather(&self, input_directory: &Path) -> Result<Vec<File>, Error> {
        let mut files = Vec::new();
        let entries = fs::read_dir(input_directory).map_err(|source| Error::IOError {
            path: input_directory.to_path_buf(),
            source,
        })?;
        for entry in entries {
            let entry = entry.map_err(|source| Error::IOError {
                path: input_directory.to_path_buf(),
                source,
            })?;
            let file_type = entry.file_type().map_err(|source| Error::Metadata {
                path: entry.path(),
                source,
            })?;
            if !file_type.is_file() {
                continue;
            }
            if !self.include_hidden && is_hidden(&entry.file_name()) {
                continue;
            }
            files.push(File::new(input_directory.to_path_buf(), entry.file_name()));
        }
        Ok(files)
    }
}

/// Gathers files under `input_directory` and every subdirectory
pub struct RecursiveFileGatherer {
    pub include_hidden: bool,
}

impl FileGatherer for RecursiveFileGatherer {
    fn gather(&self, input_directory: &Path) -> Result<Vec<File>, Error> {
        let mut files = Vec::new();
        let walker = WalkBuilder::new(input_directory)
            .standard_filters(false)
            .hidden(!self.include_hidden)
            .build();
        for entry in walker {
            let entry = entry.map_err(|err| Error::IOError {
                path: input_directory.to_path_buf(),
                source: std::io::Error::new(std::io::ErrorKind::Other, err),
            })?;
            let file_type = match entry.file_type() {
                Some(ft) => ft,
                None => continue,
            };
            if !file_type.is_file() {
                continue;
            }
            let relative_path = entry
                .path()
                .strip_prefix(input_directory)
                .unwrap_or(entry.path())
                .to_path_buf();
            files.push(File::new(input_directory.to_path_buf(), relative_path));
        }
        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{create_dir, File as StdFile};

    fn touch(path: &Path) {
        StdFile::create(path).unwrap();
    }

    #[test]
    fn flat_gatherer_skips_subdirectories_and_hidden() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("a.txt"));
        touch(&dir.path().join(".hidden"));
        create_dir(dir.path().join("sub")).unwrap();
        touch(&dir.path().join("sub").join("b.txt"));

        let gatherer = FlatFileGatherer { include_hidden: false };
        let files = gatherer.gather(dir.path()).unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].file_name(), "a.txt");
    }

    #[test]
    fn flat_gatherer_includes_hidden_when_asked() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join(".hidden"));

        let gatherer = FlatFileGatherer { include_hidden: true };
        let files = gatherer.gather(dir.path()).unwrap();
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn recursive_gatherer_descends_into_subdirectories() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("a.txt"));
        create_dir(dir.path().join("sub")).unwrap();
        touch(&dir.path().join("sub").join("b.txt"));

        let gatherer = RecursiveFileGatherer { include_hidden: false };
        let files = gatherer.gather(dir.path()).unwrap();
        let mut names: Vec<String> = files.iter().map(|f| f.relative_path.to_string_lossy().to_string()).collect();
        names.sort();
        assert_eq!(names, vec!["a.txt".to_string(), format!("sub{}b.txt", std::path::MAIN_SEPARATOR)]);
    }

    #[test]
    fn recursive_gatherer_skips_hidden_directories() {
        let dir = tempfile::tempdir().unwrap();
        create_dir(dir.path().join(".git")).unwrap();
        touch(&dir.path().join(".git").join("config"));
        touch(&dir.path().join("a.txt"));

        let gatherer = RecursiveFileGatherer { include_hidden: false };
        let files = gatherer.gather(dir.path()).unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].file_name(), "a.txt");
    }

    #[test]
    fn empty_directory_yields_no_files() {
        let dir = tempfile::tempdir().unwrap();
        let gatherer = FlatFileGatherer { include_hidden: false };
        assert!(gatherer.gather(dir.path()).unwrap().is_empty());
    }
}
