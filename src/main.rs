use std::path::{Path, PathBuf};

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use swatchbook::models::{ChartSpec, CycleConfig};
use swatchbook::pipeline::ChartPipeline;

#[derive(Parser)]
#[command(name = "swatchbook")]
#[command(about = "Render the named-color reference chart to a single SVG file")]
struct Cli {
    /// Output SVG file path
    #[arg(short, long, default_value = "figures/colornames.svg")]
    output: PathBuf,

    /// Also write a PNG preview of the chart
    #[arg(long)]
    png: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Minimal logging for CLI
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "swatchbook=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let pipeline = ChartPipeline::new(ChartSpec::default());
    let groups = pipeline.grouped_entries(&CycleConfig::default())?;
    let svg = pipeline.compose(&groups)?;

    write_file(&cli.output, svg.as_bytes())?;
    println!(
        "Rendered {} ({} color groups)",
        cli.output.display(),
        groups.len()
    );

    if let Some(png_path) = &cli.png {
        let png_bytes = pipeline.render_png(&svg)?;
        write_file(png_path, &png_bytes)?;
        println!("Rendered {} ({} bytes)", png_path.display(), png_bytes.len());
    }

    Ok(())
}

/// Write a file, creating its parent directory when needed.
fn write_file(path: &Path, bytes: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, bytes)?;
    Ok(())
}
