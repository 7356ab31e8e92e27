//! Column layout for static Sankey rendering.
//!
//! Nodes are placed in one column per tree depth and stacked top to bottom in
//! index order, which keeps siblings together because indices follow the
//! pre-order walk. Every node's height is its value times a single scale
//! chosen so the fullest column fits the drawing area. Link bands leave their
//! source and enter their target in link order, stacked the same way.

use crate::graph::SankeyGraph;

use super::SankeyStyle;

/// Largest share of the height a column may spend on gaps between nodes.
const MAX_PAD_SHARE: f64 = 0.3;

/// Rectangle the diagram is drawn into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Area {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl Area {
    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeRect {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
    pub column: usize,
}

impl NodeRect {
    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }
}

/// A link drawn as a band from the source's right edge to the target's left edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinkBand {
    pub x0: f64,
    pub x1: f64,
    /// Top of the band where it leaves the source
    pub source_y: f64,
    /// Top of the band where it enters the target
    pub target_y: f64,
    pub width: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SankeyLayout {
    pub nodes: Vec<NodeRect>,
    /// Bytes each node stands for, indexed like `nodes`
    pub values: Vec<u64>,
    pub links: Vec<LinkBand>,
    pub columns: usize,
}

impl SankeyLayout {
    pub fn compute(graph: &SankeyGraph, area: Area, style: &SankeyStyle) -> Self {
        if graph.is_empty() {
            return Self::default();
        }

        let depths = graph.depths();
        let columns = depths.iter().copied().max().unwrap_or(0) + 1;
        let byte_values = graph.node_values();
        let values: Vec<f64> = byte_values.iter().map(|&v| v as f64).collect();

        let mut members: Vec<Vec<usize>> = vec![Vec::new(); columns];
        for (index, &depth) in depths.iter().enumerate() {
            members[depth].push(index);
        }

        let pads: Vec<f64> = members
            .iter()
            .map(|m| column_pad(m.len(), area.height(), style.pad))
            .collect();

        // One scale for every column so equal bytes get equal heights
        let scale = members
            .iter()
            .zip(&pads)
            .filter_map(|(m, pad)| {
                let total: f64 = m.iter().map(|&i| values[i]).sum();
                let room = area.height() - pad * m.len().saturating_sub(1) as f64;
                (total > 0.0).then(|| room / total)
            })
            .fold(f64::INFINITY, f64::min);
        let scale = if scale.is_finite() { scale } else { 0.0 };

        let column_step = if columns > 1 {
            (area.width() - style.thickness).max(0.0) / (columns - 1) as f64
        } else {
            0.0
        };

        let mut nodes = vec![
            NodeRect {
                x0: 0.0,
                y0: 0.0,
                x1: 0.0,
                y1: 0.0,
                column: 0,
            };
            graph.nodes.len()
        ];
        for (column, m) in members.iter().enumerate() {
            let used: f64 = m.iter().map(|&i| values[i] * scale).sum::<f64>()
                + pads[column] * m.len().saturating_sub(1) as f64;
            let x0 = area.x0 + column as f64 * column_step;
            let mut y = area.y0 + ((area.height() - used) / 2.0).max(0.0);

            for &index in m {
                let height = values[index] * scale;
                nodes[index] = NodeRect {
                    x0,
                    y0: y,
                    x1: x0 + style.thickness,
                    y1: y + height,
                    column,
                };
                y += height + pads[column];
            }
        }

        let mut out_offset: Vec<f64> = nodes.iter().map(|n| n.y0).collect();
        let mut in_offset = out_offset.clone();
        let links = graph
            .links
            .iter()
            .map(|link| {
                let width = link.value as f64 * scale;
                let band = LinkBand {
                    x0: nodes[link.source].x1,
                    x1: nodes[link.target].x0,
                    source_y: out_offset[link.source],
                    target_y: in_offset[link.target],
                    width,
                };
                out_offset[link.source] += width;
                in_offset[link.target] += width;
                band
            })
            .collect();

        Self {
            nodes,
            values: byte_values,
            links,
            columns,
        }
    }
}

/// Gap between nodes in a column of `count` nodes, shrunk for crowded columns.
fn column_pad(count: usize, height: f64, pad: f64) -> f64 {
    if count < 2 {
        return 0.0;
    }
    pad.min(height * MAX_PAD_SHARE / (count - 1) as f64)
}
