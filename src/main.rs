use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use clap::Parser;
use mazewright::{
    Generator, Grid, generate_maze_with,
    generators::get_rng,
    render::{self, PngStyle, SvgStyle},
};
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;

#[derive(Parser)]
#[command(author, version, about = "Generate and export perfect mazes", long_about = None)]
struct Args {
    /// Number of rows
    #[arg(long, default_value_t = 10)]
    rows: usize,

    /// Number of columns
    #[arg(long, default_value_t = 10)]
    cols: usize,

    /// Generation algorithm: backtracker, prim or kruskal
    #[arg(long = "algo", alias = "algorithm", default_value = "backtracker")]
    algorithm: Generator,

    /// Seed for a reproducible maze
    #[arg(long)]
    seed: Option<u64>,

    /// Start cell as `row,col` (ignored by kruskal)
    #[arg(long, value_parser = parse_coord, default_value = "0,0")]
    start: (usize, usize),

    /// Output file: `.png`, `.svg` or `.txt`. Prints to stdout when omitted
    #[arg(long = "out", alias = "output")]
    output: Option<PathBuf>,

    /// Cell size in pixels (PNG and SVG)
    #[arg(long, default_value_t = 20.0)]
    cell_size: f64,

    /// Wall width in pixels (PNG and SVG)
    #[arg(long, default_value_t = 2.0)]
    wall_width: f64,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
}

/// File formats the maze can be written as, picked from the output extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Png,
    Svg,
    Text,
}

impl OutputFormat {
    fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("png") => Ok(OutputFormat::Png),
            Some("svg") => Ok(OutputFormat::Svg),
            Some("txt") => Ok(OutputFormat::Text),
            _ => bail!(
                "unsupported output file {}: expected a .png, .svg or .txt extension",
                path.display()
            ),
        }
    }
}

fn parse_coord(s: &str) -> Result<(usize, usize), String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `row,col`, got `{s}`"))?;
    let row = row.trim().parse().map_err(|e| format!("invalid row: {e}"))?;
    let col = col.trim().parse().map_err(|e| format!("invalid column: {e}"))?;
    Ok((row, col))
}

/// File contents for `path`, encoded according to its extension.
fn render_for(path: &Path, grid: &Grid, cell_size: f64, wall_width: f64) -> Result<Vec<u8>> {
    let contents = match OutputFormat::from_path(path)? {
        OutputFormat::Png => {
            let style = PngStyle {
                cell_size: cell_size.round().max(1.0) as u32,
                wall_width: wall_width.round().max(1.0) as u32,
            };
            render::to_png(grid, &style).context("Failed to encode PNG")?
        }
        OutputFormat::Svg => {
            let style = SvgStyle {
                cell_size,
                wall_width,
                ..SvgStyle::default()
            };
            render::to_svg(grid, &style).into_bytes()
        }
        OutputFormat::Text => (render::to_ascii(grid) + "\n").into_bytes(),
    };
    Ok(contents)
}

/// Install the global subscriber. The returned guard must outlive all logging
/// so the file writer gets flushed.
fn init_tracing(verbose: u8, log_file: Option<&PathBuf>) -> Result<Option<WorkerGuard>> {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let builder = tracing_subscriber::fmt().with_max_level(level);

    match log_file {
        Some(path) => {
            let file = fs::File::create(path)
                .with_context(|| format!("Failed to create log file: {}", path.display()))?;
            let (writer, guard) = tracing_appender::non_blocking(file);
            builder.with_writer(writer).with_ansi(false).init();
            Ok(Some(guard))
        }
        None => {
            builder.with_writer(std::io::stderr).init();
            Ok(None)
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let _guard = init_tracing(args.verbose, args.log_file.as_ref())?;

    // Reject an unsupported output file before doing any work
    if let Some(path) = &args.output {
        OutputFormat::from_path(path)?;
    }

    let mut rng = get_rng(args.seed);
    let grid = generate_maze_with(args.rows, args.cols, args.algorithm, args.start, &mut rng)
        .with_context(|| {
            format!(
                "Failed to generate a {}x{} maze with {}",
                args.rows, args.cols, args.algorithm
            )
        })?;
    tracing::info!(
        "[main] generated {}x{} maze with {} ({} passages)",
        grid.rows(),
        grid.cols(),
        args.algorithm,
        grid.carved_edges()
    );

    match &args.output {
        Some(path) => {
            let contents = render_for(path, &grid, args.cell_size, args.wall_width)?;
            fs::write(path, contents)
                .with_context(|| format!("Failed to write maze to {}", path.display()))?;
            println!("Maze saved to {}", path.display());
        }
        None => {
            render::print_styled(&grid, &mut std::io::stdout().lock())
                .context("Failed to print maze")?;
        }
    }
    Ok(())
}
