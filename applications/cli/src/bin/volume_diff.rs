/// volume-diff - loudness differences between same-named files in two directories
use anyhow::Context;
use clap::Parser;
use loudmatch_cli::{commands::diff, logging, AppConfig};
use loudmatch_loudness::MeasureMode;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "volume-diff")]
#[command(
    about = "Print the gain between same-named audio files in two directories",
    long_about = None
)]
struct Cli {
    /// Directory with the reference files
    dir1: String,

    /// Directory with the compared files
    dir2: String,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Loudness measure (dbfs or lufs)
    #[arg(short, long)]
    mode: Option<MeasureMode>,
}

fn main() -> anyhow::Result<()> {
    logging::init();

    let cli = Cli::parse();

    if cli.dir1.is_empty() || cli.dir2.is_empty() {
        println!("Provide 2 directories with audio files");
        return Ok(());
    }

    let config = AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    let mode = cli.mode.unwrap_or(config.loudness.mode);

    let mut stdout = std::io::stdout().lock();
    diff::run(Path::new(&cli.dir1), Path::new(&cli.dir2), mode, &mut stdout)
        .with_context(|| format!("Failed to compare {} with {}", cli.dir1, cli.dir2))?;

    Ok(())
}
