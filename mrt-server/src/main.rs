use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use mrt_server::config::ServerConfig;
use mrt_server::db::{Database, SeedData};
use mrt_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("mrt_server=info")),
        )
        .init();

    if let Err(e) = run().await {
        error!("{e:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let config = ServerConfig::from_env()?;

    let database = Database::connect(&config.database_url).await?;
    database.init_schema().await?;
    info!(url = %config.database_url, "connected to database");

    if let Some(path) = &config.seed_file {
        let seed = SeedData::from_path(path)?;
        database.seed(&seed).await?;
    }

    let state = AppState::new(database.repository());
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    info!(addr = %config.listen_addr, "MRT schedule server listening");
    info!("  GET    /health");
    info!("  GET    /api/schedules");
    info!("  POST   /api/schedules");
    info!("  GET    /api/stations/:id/schedules?direction=<id>&holiday=<bool>");
    info!("  DELETE /api/lines/:id/schedules");
    info!("  GET    /api/lanes");

    axum::serve(listener, app).await?;

    Ok(())
}
