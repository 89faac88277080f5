//! pingstat Binary Entry Point
//!
//! Runs one probe run end to end: collect samples, print the statistical
//! report, optionally hand the run to the plot collaborator. Core
//! functionality is provided by the `pingstat` library crate.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use pingstat::{
    config::{ProbeConfig, DEFAULT_PROBE_COMMAND},
    plot::{JsonDatasetPlotter, Plotter},
    report, stats, RunError, StreamCollector,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// pingstat - Network Stability Tester
#[derive(Parser, Debug)]
#[command(name = "pingstat", version, about, long_about = None)]
struct Cli {
    /// The hostname or IP address to ping
    target: String,

    /// The number of times to ping (minimum 10)
    count: u32,

    /// Emit the plot dataset to stdout after the report
    #[arg(long)]
    plot: bool,

    /// Save the plot dataset to a file (e.g., run.json)
    #[arg(long, value_name = "FILENAME")]
    save: Option<PathBuf>,

    /// Append the bell-curve (sigma coverage) analysis to the report
    #[arg(long)]
    sigma: bool,

    /// Abort the run after this long, keeping samples gathered so far
    #[arg(long, value_parser = humantime::parse_duration)]
    timeout: Option<Duration>,

    /// Probe executable to drive (must accept `-c <count> <target>`)
    #[arg(long, default_value = DEFAULT_PROBE_COMMAND, env = "PINGSTAT_PROBE")]
    probe: String,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,pingstat=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!(error = %e, "Run failed");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), RunError> {
    let mut config = ProbeConfig::new(cli.target, cli.count).with_probe_command(cli.probe);
    if let Some(timeout) = cli.timeout {
        config = config.with_timeout(timeout);
    }
    config.validate()?;

    println!("--- Starting Network Stability Test ---");
    println!("Target:   {}", config.target);
    println!("Pinging:  {} times", config.count);

    // Raw probe lines are echoed verbatim so the run is visible live; the
    // observer is independent of sample extraction.
    let collector = StreamCollector::new(config);
    let result = collector.run(|line| println!("{line}")).await?;

    // Zero samples is fatal at this boundary, distinctly from a probe that
    // never launched: the executable and arguments both worked.
    let summary = stats::summarize(&result.samples)?;

    println!();
    print!("{}", report::render(&summary));
    if cli.sigma {
        println!();
        print!("{}", report::render_sigma(&summary));
    }

    if cli.plot || cli.save.is_some() {
        // Last step on purpose: a collaborator failure must not take the
        // already-printed report with it.
        let plotter = JsonDatasetPlotter;
        if let Err(e) = plotter.plot(
            &result.samples,
            &summary,
            &result.target,
            cli.save.as_deref(),
        ) {
            tracing::warn!(error = %e, "Plot collaborator failed");
        }
    }

    Ok(())
}
