//! dirsankey - Sankey diagrams of where the bytes in a directory tree go
//!
//! [`TreeAggregator`] walks a directory and builds a [`SankeyGraph`] whose
//! links carry subtree byte sizes; the [`render`] module turns that graph
//! into an interactive HTML page or an SVG image.

pub mod aggregate;
pub mod error;
pub mod graph;
pub mod logging;
pub mod render;
pub mod summary;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use aggregate::{AggregatorConfig, TreeAggregator, format_size};
pub use error::{Error, Result};
pub use graph::{Link, Node, NodeKind, SankeyGraph};
pub use render::{
    DiagramRenderer, Figure, HtmlRenderer, RenderConfig, SankeyStyle, SvgRenderer, write_outputs,
};
pub use summary::{RunSummary, print_json, print_summary};
