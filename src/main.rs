use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use booking_api_suite::client::{ClientConfig, RestBookingClient};
use booking_api_suite::fixtures::load_fixtures;
use booking_api_suite::runner::BookingSuite;

const DEFAULT_FIXTURE_PATH: &str = "fixtures/test-data.csv";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let fixture_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_FIXTURE_PATH.to_string());
    let fixtures = load_fixtures(&fixture_path)
        .with_context(|| format!("loading fixtures from `{fixture_path}`"))?;

    let config = ClientConfig::from_env();
    info!(
        base_url = %config.base_url,
        records = fixtures.len(),
        "starting booking suite"
    );

    let client = RestBookingClient::new(config).context("building HTTP client")?;
    let suite = BookingSuite::new(client);
    let report = suite.run(&fixtures).await?;

    println!("{report}");
    if !report.passed() {
        anyhow::bail!("{} check(s) failed", report.failure_count());
    }
    Ok(())
}
