use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use portfolio_server::config::Config;
use portfolio_server::i18n::{register_persistence, LanguageStore};
use portfolio_server::routes::{self, AppState};
use portfolio_server::supabase::SupabaseClient;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("portfolio_server=info".parse()?),
        )
        .init();

    info!("Starting portfolio content service");

    // Load configuration from environment
    let config = Config::from_env()?;

    // One shared handle to the remote store
    let db = SupabaseClient::new(&config.supabase_url, &config.supabase_anon_key);

    // Language store: restore last selection, then mirror changes back
    let language = LanguageStore::restore(Path::new(&config.language_file));
    register_persistence(&language, PathBuf::from(&config.language_file));
    info!("Display language: {}", language.get().code());

    let port = config.port;
    let state = AppState {
        config: Arc::new(config),
        db: Arc::new(db),
        language: Arc::new(language),
    };

    let app = routes::router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
