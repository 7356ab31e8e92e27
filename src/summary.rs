//! End-of-run summary printed to stdout

use std::io::{self, Write};
use std::path::PathBuf;

use serde::Serialize;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::aggregate::format_size;
use crate::graph::{NodeKind, SankeyGraph};

/// Counts describing a finished run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub directories: usize,
    pub files: usize,
    pub links: usize,
    pub total_bytes: u64,
    pub written: Vec<PathBuf>,
}

impl RunSummary {
    pub fn new(graph: &SankeyGraph, written: Vec<PathBuf>) -> Self {
        let files = graph
            .nodes
            .iter()
            .filter(|n| n.kind == NodeKind::File)
            .count();
        Self {
            directories: graph.nodes.len() - files,
            files,
            links: graph.links.len(),
            total_bytes: graph.total_bytes,
            written,
        }
    }
}

/// Print the summary with optional color.
pub fn print_summary(summary: &RunSummary, use_color: bool) -> io::Result<()> {
    let color_choice = if use_color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(color_choice);

    let mut bold = ColorSpec::new();
    bold.set_bold(true);
    stdout.set_color(&bold)?;
    write!(stdout, "Total:        ")?;
    stdout.reset()?;
    writeln!(
        stdout,
        "{} ({} bytes)",
        format_size(summary.total_bytes),
        format_number(summary.total_bytes)
    )?;

    writeln!(stdout, "Directories:  {}", summary.directories)?;
    if summary.files > 0 {
        writeln!(stdout, "Files:        {}", summary.files)?;
    }
    writeln!(stdout, "Links:        {}", summary.links)?;

    let mut path_color = ColorSpec::new();
    path_color.set_fg(Some(Color::Cyan));
    for path in &summary.written {
        write!(stdout, "Wrote         ")?;
        stdout.set_color(&path_color)?;
        writeln!(stdout, "{}", path.display())?;
        stdout.reset()?;
    }

    Ok(())
}

/// Format a number with thousand separators.
fn format_number(n: u64) -> String {
    let digits = n.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    result
}

/// Print the graph as pretty JSON to stdout.
pub fn print_json(graph: &SankeyGraph) -> io::Result<()> {
    let json = serde_json::to_string_pretty(graph).map_err(io::Error::other)?;
    println!("{}", json);
    Ok(())
}
