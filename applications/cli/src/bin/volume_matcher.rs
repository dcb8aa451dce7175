/// volume-matcher - match a target file's loudness to a reference file
use anyhow::Context;
use clap::Parser;
use loudmatch_audio::OutputFormat;
use loudmatch_cli::{commands::matcher, logging, AppConfig};
use loudmatch_loudness::MeasureMode;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "volume-matcher")]
#[command(
    about = "Gain a target audio file to the loudness of a reference file",
    long_about = None
)]
struct Cli {
    /// File whose loudness is matched
    reference: PathBuf,

    /// File to gain; the result is written next to it
    target: PathBuf,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Loudness measure (dbfs or lufs)
    #[arg(short, long)]
    mode: Option<MeasureMode>,

    /// Output container (flac or wav)
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// Output file, instead of "<target> - GAINED.<ext>"
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Do not copy the front cover into the output
    #[arg(long)]
    no_cover: bool,
}

fn main() -> anyhow::Result<()> {
    logging::init();

    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    let mut options = matcher::MatchOptions::from_config(&config);
    if let Some(mode) = cli.mode {
        options.mode = mode;
    }
    if let Some(format) = cli.format {
        options.format = format;
    }
    if cli.no_cover {
        options.copy_cover = false;
    }
    options.output = cli.output;

    let mut stdout = std::io::stdout().lock();
    let outcome = matcher::run(&cli.reference, &cli.target, &options, &mut stdout)
        .with_context(|| {
            format!(
                "Failed to match {} to {}",
                cli.target.display(),
                cli.reference.display()
            )
        })?;

    tracing::info!("Wrote {:?} ({})", outcome.output, outcome.gain);
    Ok(())
}
