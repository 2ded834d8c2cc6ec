use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use knight_graph::core::square::Square;
use knight_graph::render::{JsonSurface, LayoutKind, RenderConfig, RenderSurface};
use knight_graph::KnightGraph;

#[derive(Parser, Debug)]
#[command(name = "knight-graph", version)]
struct Cli {
    /// Log at debug level.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write the graph and render settings as JSON.
    Export(ExportArgs),
    /// List the knight neighbors of a square.
    Neighbors {
        /// Square name, e.g. `d4`.
        square: String,
    },
}

#[derive(Parser, Debug)]
struct ExportArgs {
    /// Render config JSON; defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the config's layout (force, grid, circle, concentric, breadth-first, force3d).
    #[arg(long)]
    layout: Option<LayoutKind>,

    /// Output path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,

    #[arg(long)]
    pretty: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    match cli.cmd {
        Command::Export(args) => export(args),
        Command::Neighbors { square } => neighbors(&square),
    }
}

fn export(args: ExportArgs) -> anyhow::Result<()> {
    let mut config = match &args.config {
        Some(path) => RenderConfig::load(path)
            .with_context(|| format!("load render config {}", path.display()))?,
        None => RenderConfig::default(),
    };
    if let Some(layout) = args.layout {
        config.layout = layout;
    }

    let graph = KnightGraph::build();
    let out: Box<dyn Write> = match &args.out {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("create {}", path.display()))?,
        )),
        None => Box::new(io::stdout().lock()),
    };

    let mut surface = JsonSurface::new(out).pretty(args.pretty);
    surface.render(&graph, &config).context("write render document")?;

    if let Some(path) = &args.out {
        tracing::info!(path = %path.display(), "render document exported");
    }
    Ok(())
}

fn neighbors(name: &str) -> anyhow::Result<()> {
    let square = Square::parse(name)?;
    let graph = KnightGraph::build();
    let list = graph.neighbors(&square.id);
    println!("{} ({} neighbors): {}", square.id, list.len(), list.join(" "));
    Ok(())
}
