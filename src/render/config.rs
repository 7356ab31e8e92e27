//! Render configuration types

use std::path::{Path, PathBuf};

use serde::Serialize;

/// Where the interactive diagram goes when no output is requested.
pub const DEFAULT_HTML_OUT: &str = "output.html";

const DEFAULT_WIDTH: u32 = 3840;
const DEFAULT_HEIGHT: u32 = 2160;

/// Output dimensions and destinations.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    pub html_out: Option<PathBuf>,
    pub img_out: Option<PathBuf>,
}

impl RenderConfig {
    /// Resolve the (html, image) destinations. At least one is always set:
    /// with neither requested, HTML goes to [`DEFAULT_HTML_OUT`].
    pub fn outputs(&self) -> (Option<&Path>, Option<&Path>) {
        match (&self.html_out, &self.img_out) {
            (None, None) => (Some(Path::new(DEFAULT_HTML_OUT)), None),
            (html, img) => (html.as_deref(), img.as_deref()),
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            html_out: None,
            img_out: None,
        }
    }
}

/// Node and text styling shared by all renderers.
#[derive(Debug, Clone, Serialize)]
pub struct SankeyStyle {
    /// Vertical gap between nodes in a column
    pub pad: f64,
    /// Node width
    pub thickness: f64,
    pub line_color: String,
    pub line_width: f64,
    pub node_color: String,
    pub font_size: u32,
}

impl Default for SankeyStyle {
    fn default() -> Self {
        Self {
            pad: 15.0,
            thickness: 20.0,
            line_color: "black".to_string(),
            line_width: 0.5,
            node_color: "blue".to_string(),
            font_size: 12,
        }
    }
}
