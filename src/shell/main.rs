use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use activities::modules::activities::adapters::outbound::activity_repository_in_memory::InMemoryActivityRepository;
use activities::shell::config::AppConfig;
use activities::shell::http::router;
use activities::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    // In-memory store, seeded on every start
    let repository = Arc::new(InMemoryActivityRepository::seeded());
    let state = AppState::in_memory(repository);

    let app = router(state, &config.static_dir);

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    let addr = listener.local_addr()?;
    tracing::info!("Activities API: http://{}/activities", addr);
    tracing::info!("GraphQL endpoint: http://{}/gql", addr);
    axum::serve(listener, app).await?;
    Ok(())
}
