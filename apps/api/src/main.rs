mod config;
mod errors;
mod headlines;
mod history;
mod models;
mod roadmap;
mod routes;
mod skills;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Config, StoreBackend};
use crate::headlines::HeadlineClient;
use crate::history::file_store::JsonFileStore;
use crate::history::memory::MemoryStore;
use crate::history::AnalysisStore;
use crate::roadmap::RoadmapProvider;
use crate::routes::build_router;
use crate::skills::catalog::RoleCatalog;
use crate::skills::matcher::SkillMatcher;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on malformed values)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Skillpath API v{}", env!("CARGO_PKG_VERSION"));

    // Role catalog: external file when configured, built-in tables otherwise
    let catalog = match &config.role_catalog_path {
        Some(path) => {
            let catalog = RoleCatalog::from_path(path)?;
            info!("Role catalog loaded from {}", path.display());
            catalog
        }
        None => RoleCatalog::default(),
    };
    info!("Role catalog has {} roles", catalog.roles().count());
    let matcher = SkillMatcher::new(Arc::new(catalog));

    // Analysis log
    let store: Arc<dyn AnalysisStore> = match config.store_backend {
        StoreBackend::File => {
            let store = JsonFileStore::new(config.analysis_log_path.clone());
            info!("Analysis log at {}", store.path().display());
            Arc::new(store)
        }
        StoreBackend::Memory => {
            info!("Analysis log kept in memory; history is lost on restart");
            Arc::new(MemoryStore::new())
        }
    };

    let headlines = HeadlineClient::new(config.headline_api_base.clone())?;
    info!("Headline client initialized ({})", config.headline_api_base);

    let state = AppState {
        matcher,
        roadmaps: Arc::new(RoadmapProvider::default()),
        store,
        headlines,
    };

    let app = build_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    );

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
