//! Directory-to-graph aggregation
//!
//! - `traversal` enumerates directories in pre-order with their files
//! - `aggregator` sums sizes bottom-up and emits nodes and links
//! - `progress` reports how far the walk has come

mod aggregator;
mod config;
mod progress;
mod traversal;
mod utils;

pub use aggregator::TreeAggregator;
pub use config::AggregatorConfig;
pub use progress::Progress;
pub use traversal::{DirRecord, FileRecord, Traversal};
pub use utils::{format_size, get_name, glob_match, should_ignore_path};
