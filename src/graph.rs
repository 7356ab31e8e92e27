//! Weighted node/link graph handed to the renderers

use serde::Serialize;

/// Whether a node stands for a directory or a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Dir,
    File,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    /// Base name of the entry, never the full path
    pub label: String,
    pub kind: NodeKind,
}

/// Containment edge from a directory to one of its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Link {
    pub source: usize,
    pub target: usize,
    /// Bytes attributed to the child
    pub value: u64,
}

/// Node list plus link list. A node's index is its position in `nodes`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SankeyGraph {
    pub nodes: Vec<Node>,
    pub links: Vec<Link>,
    /// Every file byte under the root, whether or not files are nodes
    pub total_bytes: u64,
}

impl SankeyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a node and return its index.
    pub fn add_node(&mut self, label: impl Into<String>, kind: NodeKind) -> usize {
        self.nodes.push(Node {
            label: label.into(),
            kind,
        });
        self.nodes.len() - 1
    }

    /// Append a link. Both endpoints must already exist.
    pub fn add_link(&mut self, source: usize, target: usize, value: u64) {
        debug_assert!(source < self.nodes.len() && target < self.nodes.len());
        self.links.push(Link {
            source,
            target,
            value,
        });
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The root node, if any node has been created.
    pub fn root(&self) -> Option<&Node> {
        self.nodes.first()
    }

    pub fn outgoing(&self, index: usize) -> impl Iterator<Item = &Link> {
        self.links.iter().filter(move |l| l.source == index)
    }

    pub fn incoming(&self, index: usize) -> impl Iterator<Item = &Link> {
        self.links.iter().filter(move |l| l.target == index)
    }

    /// Sum of the values flowing out of `index`.
    pub fn outflow(&self, index: usize) -> u64 {
        self.outgoing(index).map(|l| l.value).sum()
    }

    /// Size a node represents: its incoming value, or its outflow for the root.
    pub fn node_value(&self, index: usize) -> u64 {
        self.incoming(index)
            .next()
            .map(|l| l.value)
            .unwrap_or_else(|| self.outflow(index))
    }

    /// [`node_value`](Self::node_value) for every node, in one pass over the links.
    pub fn node_values(&self) -> Vec<u64> {
        let mut incoming: Vec<Option<u64>> = vec![None; self.nodes.len()];
        let mut outflow = vec![0u64; self.nodes.len()];
        for link in &self.links {
            if incoming[link.target].is_none() {
                incoming[link.target] = Some(link.value);
            }
            outflow[link.source] += link.value;
        }
        incoming
            .into_iter()
            .zip(outflow)
            .map(|(value, out)| value.unwrap_or(out))
            .collect()
    }

    /// Depth of every node below the root, indexed like `nodes`.
    pub fn depths(&self) -> Vec<usize> {
        let mut depths = vec![0; self.nodes.len()];
        // Links are created parent-first, so one forward pass suffices.
        for link in &self.links {
            depths[link.target] = depths[link.source] + 1;
        }
        depths
    }

    pub fn labels(&self) -> Vec<&str> {
        self.nodes.iter().map(|n| n.label.as_str()).collect()
    }
}
