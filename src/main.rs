use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use log::error;

use tilemask::batch::{self, FailurePolicy};
use tilemask::preview;
use tilemask::source::FileSource;

const DEFAULT_SRC_DIR: &str = "../koldun/resources/tiles/tga";
const DEFAULT_DEST_DIR: &str = "../koldun/resources/tiles/compressed";

#[derive(Parser, Debug)]
#[command(about = "Convert tile images into packed 1-bit masks")]
struct Args {
    /// Directory of source tiles
    #[arg(long, default_value = DEFAULT_SRC_DIR)]
    src: PathBuf,

    /// Existing directory receiving <stem>.bin files
    #[arg(long, default_value = DEFAULT_DEST_DIR)]
    dest: PathBuf,

    /// Convert every tile even if some fail, then report the failures
    #[arg(long, default_value_t = false)]
    keep_going: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a .bin mask as a grayscale image
    Preview {
        mask: PathBuf,

        output: PathBuf,

        #[arg(long)]
        width: u32,

        #[arg(long)]
        height: u32,
    },
}

fn run_batch(args: &Args) -> anyhow::Result<()> {
    let policy = if args.keep_going {
        FailurePolicy::KeepGoing
    } else {
        FailurePolicy::FailFast
    };
    let report = batch::convert_dir(&mut FileSource, &args.src, &args.dest, policy)
        .with_context(|| format!("Converting {} failed", args.src.display()))?;

    if !report.is_success() {
        for err in &report.failed {
            error!("Failed: {}", err.path().display());
        }
        anyhow::bail!(
            "{} of {} tiles failed to convert",
            report.failed.len(),
            report.attempted()
        );
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    let args = Args::parse();

    match &args.command {
        Some(Command::Preview {
            mask,
            output,
            width,
            height,
        }) => preview::render_mask_file(mask, *width, *height, output),
        None => run_batch(&args),
    }
}
