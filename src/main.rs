//! publish-daily is a CLI tool that publishes a daily HTML email to a static
//! website and, unless told otherwise, commits and pushes the result.
//!
//! ```text
//! publish-daily --date 2026-02-18 --source /tmp/email_preview_secret.html
//! publish-daily                  # today, default source
//! publish-daily --no-push        # skip git commit/push
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Builder;
use log::{LevelFilter, error};

use publish_daily::{
    PublishOptions, SiteLayout,
    constants::{DATE_FORMAT, DEFAULT_SITE_URL, DEFAULT_SOURCE_PATH, SITE_ROOT_ENV_NAME},
    git::exit_code,
    publish,
};

/// Publish a daily email to the website
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Date in YYYY-MM-DD format (default: today)
    #[arg(long, default_value_t = today())]
    date: String,

    /// Path to source email HTML
    #[arg(long, default_value = DEFAULT_SOURCE_PATH)]
    source: PathBuf,

    /// Skip git commit and push
    #[arg(long)]
    no_push: bool,

    /// Root of the website checkout (default: $PUBLISH_DAILY_SITE_ROOT or the current directory)
    #[arg(long)]
    site_root: Option<PathBuf>,

    /// Public URL of the website
    #[arg(long, default_value = DEFAULT_SITE_URL)]
    site_url: String,

    #[arg(long, short, action = clap::ArgAction::Count, help = "Output v(v...)erbosity: error (0), warn (1), info (2), debug (3), trace (4)", default_value_t = 2)]
    verbose: u8,
}

fn today() -> String {
    chrono::Local::now().format(DATE_FORMAT).to_string()
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    Builder::new()
        .filter_level(match cli.verbose {
            0 => LevelFilter::Error,
            1 => LevelFilter::Warn,
            2 => LevelFilter::Info,
            3 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::from(exit_code(&err))
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let site_root = match cli.site_root {
        Some(root) => root,
        None => match std::env::var_os(SITE_ROOT_ENV_NAME) {
            Some(root) => PathBuf::from(root),
            None => std::env::current_dir().context("Unable to determine current directory")?,
        },
    };

    let layout = SiteLayout::new(site_root, &cli.site_url)?;
    publish(
        &layout,
        &PublishOptions {
            date: cli.date,
            source: cli.source,
            push: !cli.no_push,
        },
    )?;

    Ok(())
}
