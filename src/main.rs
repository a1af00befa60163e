use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use gitver::config::{self, Config};
use gitver::describe;
use gitver::{fs, ui, Version};

#[derive(clap::Parser)]
#[command(
    name = "gitver",
    version,
    about = "Derive a semantic version from the nearest annotated git tag"
)]
struct Args {
    #[arg(default_value = ".", help = "Path to the repository root")]
    path: PathBuf,

    #[arg(
        short,
        long,
        help = "Version used when no annotated version tag is found"
    )]
    default_version: Option<String>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(long, help = "Maximum number of annotated tag candidates to consider")]
    max_candidates: Option<usize>,

    #[arg(short, long, help = "Also write the version to this file")]
    output: Option<PathBuf>,

    #[arg(long, help = "Show the matched tag, commits ahead and commit hash")]
    details: bool,

    #[arg(short, long, action = clap::ArgAction::Count, help = "Increase logging verbosity")]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let fallback = match verbose {
        0 => "warn",
        1 => "gitver=debug",
        _ => "gitver=trace",
    };

    FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)))
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

/// Apply command-line overrides on top of the loaded configuration.
fn effective_config(args: &Args, mut config: Config) -> Config {
    if let Some(default_version) = &args.default_version {
        config.default_version = default_version.clone();
    }
    if let Some(max_candidates) = args.max_candidates {
        config.describe.max_candidates = max_candidates;
    }
    config
}

fn write_output(path: &Path, version: &Version) -> Result<()> {
    match std::fs::symlink_metadata(path) {
        Ok(meta) => {
            if meta.file_type().is_symlink() {
                anyhow::bail!("refusing to write through symbolic link {}", path.display());
            }
            fs::is_file_writable(path)
                .with_context(|| format!("{} is not writable", path.display()))?;
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => {
            return Err(e).with_context(|| format!("failed to inspect {}", path.display()));
        }
    }

    std::fs::write(path, format!("{}\n", version))
        .with_context(|| format!("failed to write version to {}", path.display()))?;
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => effective_config(&args, cfg),
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    let version = match describe::derive_version_at(
        &config.default_version,
        &args.path,
        &config.describe,
    ) {
        Ok(version) => version,
        Err(e) => {
            ui::display_error(&format!(
                "Failed to derive version for {}: {}",
                args.path.display(),
                e
            ));
            std::process::exit(1);
        }
    };

    if version.latest_version_tag.is_none() && args.details {
        ui::display_warning("No annotated version tag found on the current branch");
    }

    ui::display_version(&version);
    if args.details {
        ui::display_details(&version);
    }

    if let Some(output) = &args.output {
        if let Err(e) = write_output(output, &version) {
            ui::display_error(&format!("{:#}", e));
            std::process::exit(1);
        }
        ui::display_status(&format!("Wrote version to {}", output.display()));
    }

    Ok(())
}
