use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use music_fixtures::logging::init_logging;
use music_fixtures::{FixtureGenerator, GeneratorConfig};

#[derive(Parser, Debug)]
#[command(
    name = "create_test_audio",
    about = "Write silent MP3 fixtures for the frontend music player"
)]
struct Cli {
    /// Override the target directory (defaults to frontend/public/assets/music)
    #[arg(long)]
    output_dir: Option<PathBuf>,
    /// JSON file with `output_dir` and/or `targets`
    #[arg(long)]
    config: Option<PathBuf>,
    /// Emit debug diagnostics on stderr
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:?}");
            ExitCode::from(1)
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = cli
        .config
        .map(GeneratorConfig::load_from_file)
        .unwrap_or_default();
    if let Some(dir) = cli.output_dir {
        config = config.with_output_dir(dir);
    }

    let generator = FixtureGenerator::new(config);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    generator.run(&mut out).with_context(|| {
        format!(
            "generating fixtures in {}",
            generator.config().output_dir.display()
        )
    })?;
    out.flush()?;
    Ok(())
}
