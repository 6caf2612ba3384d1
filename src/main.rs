//! OpenWRT job matrix entry point
//!
//! Crawls the release tree and reports the `job-config` output to the CI host.

use clap::{Parser, ValueEnum};
use openwrt_job_matrix::config::{load_config_with_hash, CrawlConfig, FileConfig};
use openwrt_job_matrix::crawler::run_crawl;
use openwrt_job_matrix::output::{
    emit_job_config, log_statistics, ConsoleReporter, GithubActionsReporter, Reporter,
};
use openwrt_job_matrix::MatrixError;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Discovers the OpenWRT build target matrix for a release
///
/// Without filters every (target, subtarget) pair is selected. With both
/// TARGETS and SUBTARGETS given, only listed pairs are selected. Giving only
/// one of the two selects nothing.
#[derive(Parser, Debug)]
#[command(name = "openwrt-job-matrix")]
#[command(version)]
#[command(about = "Discovers the OpenWRT build target matrix for a release", long_about = None)]
struct Cli {
    /// OpenWRT release identifier, e.g. 23.05.0
    #[arg(value_name = "RELEASE")]
    release: Option<String>,

    /// Comma-separated target filter
    #[arg(value_name = "TARGETS")]
    targets: Option<String>,

    /// Comma-separated subtarget filter
    #[arg(value_name = "SUBTARGETS")]
    subtargets: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Override the release tree base URL
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Where to report outputs and failures
    #[arg(long, value_enum, default_value_t = OutputMode::Github)]
    output: OutputMode,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputMode {
    /// GitHub Actions workflow commands and GITHUB_OUTPUT
    Github,
    /// Plain stdout/stderr
    Stdout,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let mut reporter: Box<dyn Reporter> = match cli.output {
        OutputMode::Github => Box::new(GithubActionsReporter::from_env()),
        OutputMode::Stdout => Box::new(ConsoleReporter::stdio()),
    };

    let result = run(cli, reporter.as_mut()).await;

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            if let Err(report_err) = reporter.set_failed(&e.to_string()) {
                tracing::error!("Failed to report failure: {}", report_err);
            }
            ExitCode::FAILURE
        }
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// Logs go to stderr; stdout carries workflow commands.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("openwrt_job_matrix=info,warn"),
            1 => EnvFilter::new("openwrt_job_matrix=debug,info"),
            2 => EnvFilter::new("openwrt_job_matrix=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Builds the configuration, crawls, and emits the job list
async fn run(cli: Cli, reporter: &mut dyn Reporter) -> anyhow::Result<()> {
    let mut file_config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (cfg, hash) = load_config_with_hash(path).map_err(MatrixError::from)?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            cfg
        }
        None => FileConfig::default(),
    };

    if let Some(base_url) = cli.base_url {
        file_config.source.base_url = base_url;
    }

    let config = CrawlConfig::from_args(
        cli.release.as_deref(),
        cli.targets.as_deref(),
        cli.subtargets.as_deref(),
        file_config,
    )?;

    if config.filters.is_automatic() {
        tracing::info!("Automatic mode: selecting every target and subtarget");
    } else {
        tracing::info!(
            "Filtered run: targets {:?}, subtargets {:?}",
            config.filters.targets,
            config.filters.subtargets
        );
    }

    let outcome = run_crawl(config).await?;
    log_statistics(&outcome.stats);

    emit_job_config(reporter, &outcome.jobs)?;
    Ok(())
}
