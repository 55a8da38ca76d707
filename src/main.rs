use cinebot::api::{create_router, AppState};
use cinebot::config::Config;
use cinebot::dataset;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    // The dataset is loaded exactly once. A failed load is not fatal for the
    // process: we keep serving and report the dataset as unavailable to every
    // caller instead.
    let state = match dataset::load(&config.dataset_path, &config.cache_path) {
        Ok(table) => {
            info!(
                movies = table.len(),
                genres = table.genres().len(),
                "dataset loaded"
            );
            AppState::ready(table)
        }
        Err(err) => {
            error!(%err, "failed to load dataset, serving in unavailable mode");
            AppState::unavailable()
        }
    };

    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("cinebot listening on http://{addr}");
    axum::serve(listener, app).await?;

    Ok(())
}
