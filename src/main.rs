use anyhow::Context;
use clap::Parser;
use param_hunter::config::Cli;
use param_hunter::engine;
use param_hunter::ops::{telemetry, Reporter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // * Logs go to stderr; stdout may be the probe URL sink
    telemetry::init_tracing(&cli.log_level);

    let config = cli.into_config().context("invalid configuration")?;
    let reporter = Reporter::new(config.workers);

    let stats = engine::run(&config, &reporter)
        .await
        .context("parameter discovery aborted")?;

    if stats.pages_fetched == 0 && stats.targets > 0 {
        reporter.nothing_fetched(stats.targets);
    }

    Ok(())
}
