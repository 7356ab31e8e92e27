//! CLI entry point for dirsankey

use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, ValueEnum};
use tracing::warn;
use dirsankey::logging::init_logging;
use dirsankey::{
    AggregatorConfig, Figure, RenderConfig, RunSummary, TreeAggregator, print_json, print_summary,
    write_outputs,
};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode, is_terminal: bool) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            is_terminal
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "dirsankey")]
#[command(about = "Generates a Sankey diagram depicting the size of a directory's contents")]
#[command(version)]
struct Args {
    /// The root directory to scan
    root: PathBuf,

    /// Ignore files while generating the diagram (only include directories)
    #[arg(long = "ignoreFiles")]
    ignore_files: bool,

    /// Output location of the HTML file (default: output.html unless --imgOut is given)
    #[arg(long = "htmlOut", value_name = "PATH")]
    html_out: Option<PathBuf>,

    /// Output location of the image file (SVG)
    #[arg(long = "imgOut", value_name = "PATH")]
    img_out: Option<PathBuf>,

    /// Output width in pixels
    #[arg(long, default_value = "3840")]
    width: u32,

    /// Output height in pixels
    #[arg(long, default_value = "2160")]
    height: u32,

    /// Log every directory as it is added
    #[arg(long)]
    verbose: bool,

    /// Only draw N levels below the root (deeper sizes still count)
    #[arg(short = 'L', long = "level")]
    level: Option<usize>,

    /// Skip entries matching pattern (can be used multiple times)
    #[arg(short = 'I', long = "ignore")]
    ignore: Vec<String>,

    /// Treat unreadable files and directories as empty instead of failing
    #[arg(long = "skip-unreadable")]
    skip_unreadable: bool,

    /// Print the graph as JSON to stdout instead of the summary
    #[arg(long = "json")]
    json: bool,

    /// Open the interactive diagram in the default browser once written
    #[arg(long = "open")]
    open: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

/// Hand the written page to the default browser; failure only warrants a warning.
fn open_in_browser(path: &Path) {
    let target = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    if let Err(e) = webbrowser::open(&target.to_string_lossy()) {
        warn!(path = %target.display(), error = %e, "failed to open browser");
    }
}

fn main() {
    let args = Args::parse();

    init_logging(
        args.verbose,
        should_use_color(args.color, std::io::stderr().is_terminal()),
    );

    let aggregator = TreeAggregator::new(AggregatorConfig {
        include_files: !args.ignore_files,
        max_depth: args.level,
        ignore_patterns: args.ignore.clone(),
        skip_unreadable: args.skip_unreadable,
    });

    let graph = aggregator.aggregate(&args.root).unwrap_or_else(|e| {
        eprintln!("dirsankey: {}", e);
        process::exit(1);
    });

    let title = std::path::absolute(&args.root)
        .unwrap_or_else(|_| args.root.clone())
        .display()
        .to_string();
    let render_config = RenderConfig {
        width: args.width,
        height: args.height,
        html_out: args.html_out.clone(),
        img_out: args.img_out.clone(),
    };
    let figure = Figure::new(&graph, title, render_config.width, render_config.height);

    let written = write_outputs(&figure, &render_config).unwrap_or_else(|e| {
        eprintln!("dirsankey: {}", e);
        process::exit(1);
    });

    if args.open {
        if let Some(html) = render_config.outputs().0 {
            open_in_browser(html);
        }
    }

    let result = if args.json {
        print_json(&graph)
    } else {
        print_summary(
            &RunSummary::new(&graph, written),
            should_use_color(args.color, std::io::stdout().is_terminal()),
        )
    };

    if let Err(e) = result {
        eprintln!("dirsankey: error writing output: {}", e);
        process::exit(1);
    }
}
