//! Airbyte Cloud provider plugin
//!
//! Entry point: initializes logging on stderr (stdout belongs to the host
//! RPC channel), builds the static resource registry and serves until the
//! host closes the pipe.

use airbyte_cloud_provider::framework::{serve, Registry};
use airbyte_cloud_provider::kinds::{
    amplitude, connection, facebook_marketing, freshdesk, google_analytics, google_sheets,
    hubspot, mysql, pipedrive, postgres, shopify, stripe, zendesk_support,
};
use airbyte_cloud_provider::provider::{AirbyteProvider, ResourceAdapter};
use anyhow::Context;
use clap::Parser;

/// Airbyte Cloud provider plugin
#[derive(Parser, Debug)]
#[command(name = "airbyte-cloud-provider")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Tracing filter, e.g. `info` or `airbyte_cloud_provider=debug`
    #[arg(long, default_value = "info")]
    log_filter: String,
}

fn build_registry() -> airbyte_cloud_provider::Result<Registry> {
    let mut registry = Registry::new(AirbyteProvider::new())?;

    registry.register(ResourceAdapter::<pipedrive::SourcePipedriveModel>::new())?;
    registry.register(ResourceAdapter::<stripe::SourceStripeModel>::new())?;
    registry.register(ResourceAdapter::<amplitude::SourceAmplitudeModel>::new())?;
    registry.register(ResourceAdapter::<shopify::SourceShopifyModel>::new())?;
    registry.register(ResourceAdapter::<freshdesk::SourceFreshdeskModel>::new())?;
    registry.register(ResourceAdapter::<zendesk_support::SourceZendeskSupportModel>::new())?;
    registry.register(ResourceAdapter::<hubspot::SourceHubspotModel>::new())?;
    registry.register(ResourceAdapter::<google_analytics::SourceGoogleAnalyticsModel>::new())?;
    registry.register(ResourceAdapter::<google_sheets::SourceGoogleSheetsModel>::new())?;
    registry
        .register(ResourceAdapter::<facebook_marketing::SourceFacebookMarketingModel>::new())?;
    registry.register(ResourceAdapter::<mysql::DestinationMysqlModel>::new())?;
    registry.register(ResourceAdapter::<postgres::DestinationPostgresModel>::new())?;
    registry.register(ResourceAdapter::<connection::ConnectionModel>::new())?;

    Ok(registry)
}

async fn run() -> anyhow::Result<()> {
    let registry = build_registry().context("failed to build resource registry")?;
    serve(airbyte_cloud_provider::VERSION, registry).await?;
    Ok(())
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_new(&cli.log_filter)
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
