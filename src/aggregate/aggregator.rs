//! TreeAggregator - turns a directory tree into a byte-weighted graph

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::{NodeKind, SankeyGraph};

use super::config::AggregatorConfig;
use super::progress::Progress;
use super::traversal::{DirRecord, Traversal};

/// Walks a root directory and builds its [`SankeyGraph`].
///
/// Every call starts from empty state, so one aggregator can be reused for
/// any number of roots.
pub struct TreeAggregator {
    config: AggregatorConfig,
}

impl TreeAggregator {
    pub fn new(config: AggregatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AggregatorConfig {
        &self.config
    }

    /// Aggregate the tree under `root`.
    ///
    /// Fails with [`Error::PathNotFound`] before touching anything if `root`
    /// does not exist.
    pub fn aggregate(&self, root: &Path) -> Result<SankeyGraph> {
        let root = resolve_root(root)?;

        let records = Traversal::new(&self.config).enumerate(&root)?;
        let totals = subtree_totals(&records);
        debug!(
            root = %root.display(),
            directories = records.len(),
            "enumerated tree"
        );

        let mut graph = SankeyGraph::new();
        graph.total_bytes = totals.first().copied().unwrap_or(0);
        let mut registry: HashMap<&Path, usize> = HashMap::with_capacity(records.len());
        let progress = Progress::new(records.len());

        for (i, record) in records.iter().enumerate() {
            if self.emits_dir(record) {
                let index = graph.add_node(record.name.clone(), NodeKind::Dir);
                registry.insert(&record.path, index);

                // The root's parent is never registered, so it gets no link
                if let Some(&parent) = record.path.parent().and_then(|p| registry.get(p)) {
                    graph.add_link(parent, index, totals[i]);
                }

                if self.emits_files_of(record) {
                    for file in &record.files {
                        let file_index = graph.add_node(file.name.clone(), NodeKind::File);
                        graph.add_link(index, file_index, file.size);
                    }
                }

                debug!(path = %record.path.display(), bytes = totals[i], "added directory");
            }

            progress.tick(i);
        }

        Ok(graph)
    }

    fn emits_dir(&self, record: &DirRecord) -> bool {
        self.config.max_depth.is_none_or(|max| record.depth <= max)
    }

    fn emits_files_of(&self, record: &DirRecord) -> bool {
        self.config.include_files && self.config.max_depth.is_none_or(|max| record.depth < max)
    }
}

/// Check the root exists and is a directory, returning its canonical form.
fn resolve_root(root: &Path) -> Result<PathBuf> {
    if !root.exists() {
        return Err(Error::PathNotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(Error::NotADirectory(root.to_path_buf()));
    }
    root.canonicalize().map_err(|e| Error::access(root, e))
}

/// Total bytes beneath each record, indexed like `records`.
///
/// Records are in pre-order, so walking them backwards visits every child
/// before its parent and a single pass accumulates whole subtrees.
fn subtree_totals(records: &[DirRecord]) -> Vec<u64> {
    let mut totals: Vec<u64> = records.iter().map(DirRecord::own_size).collect();
    for i in (0..records.len()).rev() {
        if let Some(parent) = records[i].parent {
            totals[parent] += totals[i];
        }
    }
    totals
}
