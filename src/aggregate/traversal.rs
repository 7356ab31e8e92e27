//! Pre-order enumeration of a directory tree.
//!
//! Produces one [`DirRecord`] per directory, parents always before their
//! descendants. Entries are sorted by name so repeated runs over an unchanged
//! tree yield identical record order.

use std::fs::DirEntry;
use std::path::{Path, PathBuf};

use tracing::{trace, warn};

use crate::error::{Error, Result};

use super::config::AggregatorConfig;
use super::utils::{get_name, should_ignore_path};

/// A file directly inside a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub name: String,
    pub size: u64,
}

/// One visited directory.
#[derive(Debug, Clone)]
pub struct DirRecord {
    pub path: PathBuf,
    pub name: String,
    /// Position of the parent record, `None` for the root
    pub parent: Option<usize>,
    /// Levels below the root
    pub depth: usize,
    pub files: Vec<FileRecord>,
}

impl DirRecord {
    /// Bytes held by files directly in this directory.
    pub fn own_size(&self) -> u64 {
        self.files.iter().map(|f| f.size).sum()
    }
}

pub struct Traversal<'a> {
    config: &'a AggregatorConfig,
}

impl<'a> Traversal<'a> {
    pub fn new(config: &'a AggregatorConfig) -> Self {
        Self { config }
    }

    /// Walk `root` depth-first and return every directory in pre-order.
    pub fn enumerate(&self, root: &Path) -> Result<Vec<DirRecord>> {
        let mut records = Vec::new();
        let mut stack = vec![(root.to_path_buf(), None, 0usize)];

        while let Some((path, parent, depth)) = stack.pop() {
            let (files, subdirs) = self.read_dir(&path)?;
            trace!(
                path = %path.display(),
                files = files.len(),
                subdirs = subdirs.len(),
                "listed directory"
            );

            let index = records.len();
            records.push(DirRecord {
                name: get_name(&path),
                path,
                parent,
                depth,
                files,
            });

            // Reverse so the first subdirectory by name is visited next.
            for subdir in subdirs.into_iter().rev() {
                stack.push((subdir, Some(index), depth + 1));
            }
        }

        Ok(records)
    }

    /// List a directory into (files, subdirectories), both sorted by name.
    fn read_dir(&self, path: &Path) -> Result<(Vec<FileRecord>, Vec<PathBuf>)> {
        let entries = match std::fs::read_dir(path) {
            Ok(e) => e,
            Err(e) => return self.recover(path, e).map(|()| (Vec::new(), Vec::new())),
        };

        let mut listed: Vec<DirEntry> = Vec::new();
        for entry in entries {
            match entry {
                Ok(entry) => listed.push(entry),
                Err(e) => self.recover(path, e)?,
            }
        }
        listed.sort_by_key(|a| a.file_name());

        let mut files = Vec::new();
        let mut subdirs = Vec::new();

        for entry in listed {
            let entry_path = entry.path();

            if should_ignore_path(&entry_path, &self.config.ignore_patterns) {
                continue;
            }

            let file_type = match entry.file_type() {
                Ok(t) => t,
                Err(e) => {
                    self.recover(&entry_path, e)?;
                    continue;
                }
            };

            // Symlinks are never followed or counted, which also rules out cycles
            if file_type.is_symlink() {
                continue;
            }

            if file_type.is_dir() {
                subdirs.push(entry_path);
            } else if file_type.is_file() {
                let size = match entry.metadata() {
                    Ok(meta) => meta.len(),
                    Err(e) => {
                        self.recover(&entry_path, e)?;
                        0
                    }
                };
                files.push(FileRecord {
                    name: get_name(&entry_path),
                    size,
                });
            }
        }

        Ok((files, subdirs))
    }

    /// Either abort with an access error or log and carry on, per config.
    fn recover(&self, path: &Path, err: std::io::Error) -> Result<()> {
        if self.config.skip_unreadable {
            warn!(path = %path.display(), error = %err, "skipping unreadable entry");
            Ok(())
        } else {
            Err(Error::access(path, err))
        }
    }
}
