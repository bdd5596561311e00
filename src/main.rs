use clap::Parser;
use cutpath_client::{ClientConfig, GenerationParams, SourceFile, SvgSummary, VectorizeClient};
use std::error::Error;
use std::path::{Path, PathBuf};
use std::process;
use tracing_subscriber::EnvFilter;

/// Generate an SVG cut path for an image using the remote generator
#[derive(Parser, Debug)]
#[command(name = "cutpath", version)]
struct Args {
    /// Source image (PNG recommended)
    input: PathBuf,

    /// Output SVG path (default: beside the input, with a .svg extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Distance of the cut path from the traced edges
    #[arg(long, default_value_t = 10.0, allow_negative_numbers = true)]
    offset: f64,

    /// Emit straight polygon segments instead of smoothed curves
    #[arg(long)]
    no_smooth: bool,

    /// Base URL of the generation service (default: $CUTPATH_API_BASE)
    #[arg(long)]
    api_base: Option<String>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("cutpath_client=info,cutpath=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if let Err(e) = run(args).await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let config = match &args.api_base {
        Some(base) => ClientConfig::new(base)?,
        None => ClientConfig::from_env()?,
    };
    let client = VectorizeClient::new(config);

    let file = SourceFile::from_path(&args.input).await?;
    let params = GenerationParams::new(args.offset, !args.no_smooth);
    let output = args.output.unwrap_or_else(|| default_output(&args.input));

    let handle = client.generate_vector_path(&file, params).await?;

    match SvgSummary::parse(handle.contents()) {
        Ok(summary) => tracing::info!(
            paths = summary.path_count,
            width = ?summary.width,
            height = ?summary.height,
            "received cut path"
        ),
        Err(e) => tracing::warn!("{}", e),
    }

    tokio::fs::write(&output, handle.contents())
        .await
        .map_err(|e| format!("failed to write output file '{}': {}", output.display(), e))?;

    println!(
        "Successfully generated '{}' from '{}'",
        output.display(),
        args.input.display()
    );
    handle.release();
    Ok(())
}

/// `sticker.png` -> `sticker.svg`; an SVG input gets `.cutpath.svg` so it is never overwritten
fn default_output(input: &Path) -> PathBuf {
    let is_svg = input
        .extension()
        .is_some_and(|e| e.eq_ignore_ascii_case("svg"));
    if is_svg {
        input.with_extension("cutpath.svg")
    } else {
        input.with_extension("svg")
    }
}
