//! quadwarp CLI — compute rendering-surface perspective transforms from
//! corner coordinate files.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use quadwarp::{compute_transform, css_matrix3d, Quad};

type CliError = Box<dyn std::error::Error>;
type CliResult<T> = Result<T, CliError>;

#[derive(Parser)]
#[command(name = "quadwarp")]
#[command(about = "Compute exact 4-point perspective (matrix3d) transforms from corner coordinates")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the transform for a source/destination corner file.
    Warp(CliWarpArgs),

    /// Print a sample input document.
    Sample,
}

#[derive(Debug, Clone, Args)]
struct CliWarpArgs {
    /// Path to the input JSON with "source" and "destination" quads.
    #[arg(long)]
    input: PathBuf,

    /// Path to write the computed transform (JSON). Prints to stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Untransformed container width; with --height, stands in for a missing "source" quad.
    #[arg(long)]
    width: Option<f64>,

    /// Untransformed container height.
    #[arg(long)]
    height: Option<f64>,

    /// Print only the CSS matrix3d(...) value.
    #[arg(long)]
    css: bool,
}

/// Input document for the `warp` subcommand.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
struct WarpInput {
    /// Source quad; when absent, --width/--height supply the axis-aligned rectangle.
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<Quad>,
    /// Destination quad: where the four corners should land.
    destination: Quad,
}

/// Output document for the `warp` subcommand.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
struct WarpOutput {
    /// Column-major 4x4 coefficients.
    matrix3d: [f64; 16],
    /// The same coefficients as a CSS transform value.
    css: String,
}

fn main() -> CliResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Warp(args) => run_warp(&args),
        Commands::Sample => run_sample(),
    }
}

// ── warp ─────────────────────────────────────────────────────────────────

fn resolve_source(input_source: Option<Quad>, width: Option<f64>, height: Option<f64>) -> CliResult<Quad> {
    match (input_source, width, height) {
        (Some(quad), _, _) => Ok(quad),
        (None, Some(w), Some(h)) => Ok(Quad::from_rect(w, h)),
        _ => Err("input has no \"source\" quad and --width/--height were not both given".into()),
    }
}

fn run_warp(args: &CliWarpArgs) -> CliResult<()> {
    tracing::info!("Loading corners: {}", args.input.display());

    let text = std::fs::read_to_string(&args.input).map_err(|e| -> CliError {
        format!("Failed to read {}: {}", args.input.display(), e).into()
    })?;
    let input: WarpInput = serde_json::from_str(&text)?;

    let source = resolve_source(input.source, args.width, args.height)?;
    let coeffs = compute_transform(&source, &input.destination)?;
    let css = css_matrix3d(&coeffs);

    tracing::info!("Transform computed: {}", css);

    if args.css {
        println!("{css}");
        return Ok(());
    }

    let output = WarpOutput {
        matrix3d: coeffs,
        css,
    };
    let json = serde_json::to_string_pretty(&output)?;
    match &args.out {
        Some(path) => {
            std::fs::write(path, &json)?;
            tracing::info!("Transform written to {}", path.display());
        }
        None => println!("{json}"),
    }

    Ok(())
}

// ── sample ───────────────────────────────────────────────────────────────

fn run_sample() -> CliResult<()> {
    let sample = WarpInput {
        source: Some(Quad::from_rect(100.0, 100.0)),
        destination: Quad::from([[20.0, 0.0], [80.0, 0.0], [100.0, 100.0], [0.0, 100.0]]),
    };
    println!("{}", serde_json::to_string_pretty(&sample)?);
    Ok(())
}
