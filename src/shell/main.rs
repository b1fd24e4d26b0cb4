use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use activity_signups::modules::activities::adapters::outbound::activity_store_in_memory::InMemoryActivityStore;
use activity_signups::modules::activities::core::seed::seed_activities;
use activity_signups::shell::config::Config;
use activity_signups::shell::http::app;
use activity_signups::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    let config = Config::from_env()?;

    // Seeded once; lives as long as the process.
    let store = Arc::new(InMemoryActivityStore::seeded(seed_activities()));
    let state = AppState::in_memory(store);

    let app = app(state, &config.static_dir);

    let addr = config.socket_addr()?;
    tracing::info!("Activities API: http://{}/activities", addr);
    tracing::info!("GraphQL endpoint: http://{}/gql", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
