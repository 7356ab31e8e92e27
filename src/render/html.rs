//! Interactive HTML output backed by plotly.js

use std::path::Path;

use serde_json::{Value, json};

use crate::aggregate::format_size;
use crate::error::Result;

use super::{DiagramRenderer, Figure, escape_xml, write_file};

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

/// Writes a standalone page that draws the figure as a plotly `sankey` trace.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl HtmlRenderer {
    /// The plotly figure (`data` plus `layout`) as JSON.
    pub fn figure_json(figure: &Figure<'_>) -> Value {
        let graph = figure.graph;
        let style = &figure.style;

        let sources: Vec<usize> = graph.links.iter().map(|l| l.source).collect();
        let targets: Vec<usize> = graph.links.iter().map(|l| l.target).collect();
        let values: Vec<u64> = graph.links.iter().map(|l| l.value).collect();
        let sizes: Vec<String> = values.iter().map(|&v| format_size(v)).collect();

        json!({
            "data": [{
                "type": "sankey",
                "node": {
                    "pad": style.pad,
                    "thickness": style.thickness,
                    "line": { "color": style.line_color, "width": style.line_width },
                    "label": graph.labels(),
                    "color": style.node_color,
                },
                "link": {
                    "source": sources,
                    "target": targets,
                    "value": values,
                    "customdata": sizes,
                    "hovertemplate": "%{source.label} → %{target.label}<br>%{customdata}<extra></extra>",
                },
            }],
            "layout": {
                "title": { "text": figure.title },
                "font": { "size": style.font_size },
                "autosize": false,
                "width": figure.width,
                "height": figure.height,
            },
        })
    }

    /// Full HTML document for the figure.
    pub fn document(figure: &Figure<'_>) -> Result<String> {
        // Keep a "</script>" inside a label from closing the script block
        let json = serde_json::to_string(&Self::figure_json(figure))?.replace("</", "<\\/");

        Ok(format!(
            r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{title}</title>
<script src="{cdn}" charset="utf-8"></script>
</head>
<body>
<div id="sankey" style="width:{width}px;height:{height}px;"></div>
<script>
const figure = {json};
Plotly.newPlot("sankey", figure.data, figure.layout);
</script>
</body>
</html>
"#,
            title = escape_xml(&figure.title),
            cdn = PLOTLY_CDN,
            width = figure.width,
            height = figure.height,
            json = json,
        ))
    }
}

impl DiagramRenderer for HtmlRenderer {
    fn render(&self, figure: &Figure<'_>, path: &Path) -> Result<()> {
        write_file(path, &Self::document(figure)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{NodeKind, SankeyGraph};

    fn graph() -> SankeyGraph {
        let mut g = SankeyGraph::new();
        let root = g.add_node("root", NodeKind::Dir);
        let sub = g.add_node("sub", NodeKind::Dir);
        let leaf = g.add_node("leaf.txt", NodeKind::File);
        g.add_link(root, sub, 2048);
        g.add_link(sub, leaf, 2048);
        g
    }

    #[test]
    fn test_figure_json_matches_graph() {
        let graph = graph();
        let figure = Figure::new(&graph, "/data/root", 1920, 1080);

        let json = HtmlRenderer::figure_json(&figure);
        let trace = &json["data"][0];

        assert_eq!(trace["type"], "sankey");
        assert_eq!(trace["node"]["label"], json!(["root", "sub", "leaf.txt"]));
        assert_eq!(trace["node"]["pad"], 15.0);
        assert_eq!(trace["node"]["color"], "blue");
        assert_eq!(trace["link"]["source"], json!([0, 1]));
        assert_eq!(trace["link"]["target"], json!([1, 2]));
        assert_eq!(trace["link"]["value"], json!([2048, 2048]));
        assert_eq!(trace["link"]["customdata"], json!(["2.0K", "2.0K"]));
        assert_eq!(json["layout"]["title"]["text"], "/data/root");
        assert_eq!(json["layout"]["width"], 1920);
        assert_eq!(json["layout"]["autosize"], false);
    }

    #[test]
    fn test_document_escapes_script_breakouts() {
        let mut graph = SankeyGraph::new();
        graph.add_node("</script><b>", NodeKind::Dir);
        let figure = Figure::new(&graph, "<title>", 10, 10);

        let html = HtmlRenderer::document(&figure).unwrap();

        assert!(html.contains("<title>&lt;title&gt;</title>"));
        assert!(!html.contains("</script><b>"));
        assert!(html.contains(PLOTLY_CDN));
        assert!(html.contains("Plotly.newPlot"));
    }
}
