//! Diagram rendering
//!
//! A [`Figure`] bundles the graph with its title, size and styling. Renderers
//! implement [`DiagramRenderer`] and write one artifact to a path:
//!
//! - `html` - interactive page drawn by plotly.js
//! - `svg` - static image laid out locally (see `layout`)

mod config;
mod html;
mod layout;
mod svg;

use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{Error, Result};
use crate::graph::SankeyGraph;

pub use config::{DEFAULT_HTML_OUT, RenderConfig, SankeyStyle};
pub use html::HtmlRenderer;
pub use layout::{Area, LinkBand, NodeRect, SankeyLayout};
pub use svg::SvgRenderer;

/// Everything a renderer needs to draw one diagram.
#[derive(Debug, Clone)]
pub struct Figure<'a> {
    pub graph: &'a SankeyGraph,
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub style: SankeyStyle,
}

impl<'a> Figure<'a> {
    pub fn new(graph: &'a SankeyGraph, title: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            graph,
            title: title.into(),
            width,
            height,
            style: SankeyStyle::default(),
        }
    }

    pub fn with_style(mut self, style: SankeyStyle) -> Self {
        self.style = style;
        self
    }
}

/// Writes a figure to a file.
pub trait DiagramRenderer {
    fn render(&self, figure: &Figure<'_>, path: &Path) -> Result<()>;
}

/// Pick the image renderer for `path` from its extension.
pub fn image_renderer_for(path: &Path) -> Result<Box<dyn DiagramRenderer>> {
    let extension = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "svg" => Ok(Box::new(SvgRenderer)),
        _ => Err(Error::UnsupportedImageFormat {
            path: path.to_path_buf(),
            extension,
        }),
    }
}

/// Write every output requested by `config` and return the written paths.
///
/// The image format is checked before anything is written, so an
/// unsupported extension leaves no partial output behind.
pub fn write_outputs(figure: &Figure<'_>, config: &RenderConfig) -> Result<Vec<PathBuf>> {
    let (html_out, img_out) = config.outputs();
    let image = img_out
        .map(|path| image_renderer_for(path).map(|r| (r, path)))
        .transpose()?;

    let mut written = Vec::new();
    if let Some(path) = html_out {
        HtmlRenderer.render(figure, path)?;
        info!(path = %path.display(), "wrote interactive diagram");
        written.push(path.to_path_buf());
    }
    if let Some((renderer, path)) = image {
        renderer.render(figure, path)?;
        info!(path = %path.display(), "wrote image");
        written.push(path.to_path_buf());
    }
    Ok(written)
}

pub(crate) fn write_file(path: &Path, contents: &str) -> Result<()> {
    std::fs::write(path, contents).map_err(|e| Error::write(path, e))
}

/// Escape text for use inside XML/HTML element content or attributes.
pub(crate) fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
