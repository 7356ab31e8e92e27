//! Configuration for the tree aggregator

/// Controls what the aggregator turns into nodes.
#[derive(Debug, Clone)]
pub struct AggregatorConfig {
    /// Emit a node and link for every file (sizes always count either way)
    pub include_files: bool,
    /// Only emit nodes this many levels below the root
    pub max_depth: Option<usize>,
    /// Entry names (or globs) skipped entirely
    pub ignore_patterns: Vec<String>,
    /// Treat unreadable entries as empty instead of aborting
    pub skip_unreadable: bool,
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            include_files: true,
            max_depth: None,
            ignore_patterns: Vec::new(),
            skip_unreadable: false,
        }
    }
}
