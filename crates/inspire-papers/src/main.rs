//! INSPIRE-HEP publication report - Entry Point
//!
//! Writes `papers.json` and `papers.xlsx` next to the executable.

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use inspire_papers::config::{Config, ReportSettings};
use inspire_papers::InspireClient;
use inspire_papers::report::{generate_report, program_dir};

#[derive(Parser, Debug)]
#[command(name = "inspire-papers")]
#[command(about = "Export an author's INSPIRE-HEP papers as an IOP report (JSON + Excel)")]
#[command(version)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        subscriber.with(tracing_subscriber::fmt::layer().compact()).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    let settings = ReportSettings::default();
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        author = %settings.author_name,
        max_authors = settings.max_authors,
        max_records = settings.max_records,
        "Starting INSPIRE-HEP report"
    );

    let output_dir = program_dir()?;
    let client = InspireClient::new(Config::default())?;
    let outcome = generate_report(&client, &settings, &output_dir).await?;

    tracing::info!(rows = outcome.rows, "Done");
    Ok(())
}
