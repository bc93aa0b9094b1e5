use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::{EnvFilter, fmt};

use mergington_activities::modules::activities::adapters::outbound::roster_in_memory::InMemoryRoster;
use mergington_activities::shell::config::Config;
use mergington_activities::shell::graphql::GRAPHQL_PATH;
use mergington_activities::shell::http::router;
use mergington_activities::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;

    // Lives until the process exits; nothing is persisted.
    let roster = Arc::new(InMemoryRoster::seeded());
    let state = AppState::new(roster);

    let app = router(state, &config.static_dir);

    let listener = TcpListener::bind((config.host.as_str(), config.port)).await?;
    let addr = listener.local_addr()?;
    tracing::info!("Activities API: http://{}/activities", addr);
    tracing::info!("GraphQL endpoint: http://{}{}", addr, GRAPHQL_PATH);
    axum::serve(listener, app).await?;
    Ok(())
}
