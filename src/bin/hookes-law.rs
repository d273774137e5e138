//! hookes-law - HTTP server for Hooke's Law transformations
//!
//! Holds every transformation in memory for the lifetime of the process.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hookes_law::{router, AppState, ServerConfig, TransformationRegistry};

#[derive(Parser)]
#[command(name = "hookes-law")]
#[command(version, about = "Hooke's Law transformation service", long_about = None)]
struct Cli {
    /// Address to bind (overrides HOST)
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (overrides PORT)
    #[arg(short, long)]
    port: Option<u16>,

    /// Log filter used when RUST_LOG is not set
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| cli.log_level.clone().into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::default().with_overrides(cli.host, cli.port);

    // Create application state
    let state = AppState::new(TransformationRegistry::new());
    let app = router(state);

    // Run server
    let listen_addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&listen_addr).await?;
    tracing::info!("Hooke's Law app listening on http://{}", listen_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
