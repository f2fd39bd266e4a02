use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use mood_entries::modules::entries::adapters::outbound::raw_entries_in_memory::InMemoryRawEntries;
use mood_entries::modules::entries::use_cases::list_entries::handler::ListEntriesHandler;
use mood_entries::shell::config::Config;
use mood_entries::shell::http::router;
use mood_entries::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::from_env()?;

    let source = match &config.seed_path {
        Some(path) => {
            let source = InMemoryRawEntries::from_json_file(path).await?;
            tracing::info!(path = %path.display(), "seeded raw entries");
            source
        }
        None => {
            tracing::warn!("ENTRIES_SEED_PATH not set, serving an empty entry list");
            InMemoryRawEntries::new()
        }
    };

    let state = AppState {
        list_entries: Arc::new(ListEntriesHandler::new(Arc::new(source))),
    };

    tracing::info!("Entries endpoint: http://{}/entries", config.listen_addr);
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    axum::serve(listener, router(state)).await?;
    Ok(())
}
