//! Static SVG output

use std::path::Path;

use crate::aggregate::format_size;
use crate::error::Result;

use super::layout::{Area, LinkBand, SankeyLayout};
use super::{DiagramRenderer, Figure, escape_xml, write_file};

const MARGIN: f64 = 20.0;
const LABEL_GAP: f64 = 6.0;
const LINK_COLOR: &str = "black";
const LINK_OPACITY: f64 = 0.2;

/// Lays the figure out with [`SankeyLayout`] and writes it as SVG.
#[derive(Debug, Clone, Copy, Default)]
pub struct SvgRenderer;

impl SvgRenderer {
    /// Drawing area left after the title band and margins.
    fn area(figure: &Figure<'_>) -> Area {
        let title_band = figure.style.font_size as f64 * 4.0;
        Area {
            x0: MARGIN,
            y0: title_band,
            x1: (figure.width as f64 - MARGIN).max(MARGIN),
            y1: (figure.height as f64 - MARGIN).max(title_band),
        }
    }

    pub fn document(figure: &Figure<'_>) -> String {
        let graph = figure.graph;
        let style = &figure.style;
        let layout = SankeyLayout::compute(graph, Self::area(figure), style);
        let last_column = layout.columns.saturating_sub(1);

        let mut out = String::new();
        out.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="sans-serif" font-size="{font}">
<rect width="100%" height="100%" fill="white"/>
<text x="{MARGIN}" y="{title_y:.1}" font-size="{title_font}">{title}</text>
"#,
            w = figure.width,
            h = figure.height,
            font = style.font_size,
            title_y = style.font_size as f64 * 2.0,
            title_font = (style.font_size as f64 * 1.5).round(),
            title = escape_xml(&figure.title),
        ));

        out.push_str(&format!(
            "<g fill=\"{LINK_COLOR}\" fill-opacity=\"{LINK_OPACITY}\">\n"
        ));
        for (link, band) in graph.links.iter().zip(&layout.links) {
            out.push_str(&format!(
                "<path d=\"{}\"><title>{} → {}: {}</title></path>\n",
                band_path(band),
                escape_xml(&graph.nodes[link.source].label),
                escape_xml(&graph.nodes[link.target].label),
                format_size(link.value),
            ));
        }
        out.push_str("</g>\n");

        out.push_str(&format!(
            "<g fill=\"{}\" stroke=\"{}\" stroke-width=\"{}\">\n",
            escape_xml(&style.node_color),
            escape_xml(&style.line_color),
            style.line_width,
        ));
        for (index, rect) in layout.nodes.iter().enumerate() {
            out.push_str(&format!(
                "<rect x=\"{:.1}\" y=\"{:.1}\" width=\"{:.1}\" height=\"{:.1}\"><title>{}: {}</title></rect>\n",
                rect.x0,
                rect.y0,
                rect.x1 - rect.x0,
                // Zero-byte nodes still get a visible sliver
                rect.height().max(1.0),
                escape_xml(&graph.nodes[index].label),
                format_size(layout.values[index]),
            ));
        }
        out.push_str("</g>\n");

        out.push_str("<g fill=\"black\">\n");
        for (index, rect) in layout.nodes.iter().enumerate() {
            // Labels sit right of the node, except in the last column
            let (x, anchor) = if rect.column == last_column && last_column > 0 {
                (rect.x0 - LABEL_GAP, "end")
            } else {
                (rect.x1 + LABEL_GAP, "start")
            };
            out.push_str(&format!(
                "<text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"{}\" dominant-baseline=\"middle\">{}</text>\n",
                x,
                (rect.y0 + rect.y1) / 2.0,
                anchor,
                escape_xml(&graph.nodes[index].label),
            ));
        }
        out.push_str("</g>\n</svg>\n");

        out
    }
}

/// Closed path of a band: a cubic curve along the top, straight down at the
/// target, and the mirrored curve back along the bottom.
fn band_path(band: &LinkBand) -> String {
    let mid = (band.x0 + band.x1) / 2.0;
    let (sy0, sy1) = (band.source_y, band.source_y + band.width);
    let (ty0, ty1) = (band.target_y, band.target_y + band.width);
    format!(
        "M{x0:.1},{sy0:.1}C{mid:.1},{sy0:.1} {mid:.1},{ty0:.1} {x1:.1},{ty0:.1}L{x1:.1},{ty1:.1}C{mid:.1},{ty1:.1} {mid:.1},{sy1:.1} {x0:.1},{sy1:.1}Z",
        x0 = band.x0,
        x1 = band.x1,
    )
}

impl DiagramRenderer for SvgRenderer {
    fn render(&self, figure: &Figure<'_>, path: &Path) -> Result<()> {
        write_file(path, &Self::document(figure))
    }
}
