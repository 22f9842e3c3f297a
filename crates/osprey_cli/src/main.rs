use clap::Parser;
use osprey_core::resolver::{DEFAULT_API_BASE, ResolverConfig};
use osprey_server::OspreyServer;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "osprey")]
#[command(about = "Relay server for downloading private GitHub release assets")]
struct Cli {
    /// IP/Port to listen on
    #[arg(long, default_value = "0.0.0.0:3000", env = "OSPREY_LISTEN")]
    listen: String,

    /// Base URL of the releases API
    #[arg(long, default_value = DEFAULT_API_BASE, env = "OSPREY_API_BASE")]
    api_base: String,

    /// Budget in seconds for each upstream call
    #[arg(long, default_value_t = 5, env = "OSPREY_TIMEOUT_SECS")]
    timeout_secs: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,osprey=debug"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let app = OspreyServer::new(ResolverConfig {
        api_base: cli.api_base,
        timeout: Duration::from_secs(cli.timeout_secs),
    })
    .build();

    let listener = tokio::net::TcpListener::bind(&cli.listen).await?;
    tracing::info!("Server listening on http://{}", cli.listen);
    axum::serve(listener, app).await?;

    Ok(())
}
