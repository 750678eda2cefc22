use clap::Parser;
use std::path::PathBuf;
use storefit::config::{BgColor, Config, Method, TargetSize};
use storefit::process;

#[derive(Parser)]
#[command(name = "storefit")]
#[command(about = "Batch-resize PNG screenshots for store submission")]
#[command(long_about = "\
Batch-resize PNG screenshots for store submission

Reads screenshot-*.png files from the images directory, resizes each one
to the target dimensions, and writes the results to the output directory.
Originals are never modified.

Methods:

  fit      scale to fit within the target, pad the rest with --bg-color
  stretch  resample to exactly the target size, ignoring aspect ratio
  crop     center-crop to the target aspect ratio, then resize

Transparent pixels are composited over --bg-color; outputs are always
opaque PNG. A file that fails to process is reported and skipped — the
rest of the batch still runs.")]
#[command(version)]
struct Cli {
    /// Resize method
    #[arg(long, value_enum, default_value_t = Method::Fit)]
    method: Method,

    /// Target width
    #[arg(long, default_value_t = 1280, value_parser = clap::value_parser!(u32).range(1..))]
    width: u32,

    /// Target height
    #[arg(long, default_value_t = 800, value_parser = clap::value_parser!(u32).range(1..))]
    height: u32,

    /// Directory containing screenshot-*.png files
    #[arg(long, default_value = "images")]
    images_dir: PathBuf,

    /// Directory to save resized images
    #[arg(long, default_value = "dist/images")]
    output_dir: PathBuf,

    /// Background color for padding and flattening (R,G,B, e.g. "45,45,45")
    #[arg(long, default_value = "45,45,45")]
    bg_color: String,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    // A bad color aborts before any file is touched
    let bg_color: BgColor = cli.bg_color.parse()?;

    let config = Config {
        target: TargetSize {
            width: cli.width,
            height: cli.height,
        },
        method: cli.method,
        images_dir: cli.images_dir,
        output_dir: cli.output_dir,
        bg_color,
    };

    // Per-file failures surface in the summary, not the exit code; only
    // fatal errors reach the Err arm.
    process::run(&config)?;
    Ok(())
}
