#![forbid(unsafe_code)]

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use gazette::{CacheMiddleware, Gazette, TracingMiddleware};
use gazette_http::{AppState, TokenCallerResolver, app};
use gazette_sqlite::SqliteStore;

fn env_str(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

fn env_usize(name: &str, default: usize) -> usize {
    env::var(name)
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(default)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let db_path = env_str("GAZETTE_DB", "gazette.db");
    let addr: SocketAddr = env_str("GAZETTE_ADDR", "127.0.0.1:8080").parse()?;
    let page_size = env_usize("GAZETTE_NEWS_COUNT_ON_HOME_PAGE", 10);
    let tokens = env::var("GAZETTE_TOKENS").unwrap_or_default();

    let store = Arc::new(SqliteStore::open(&db_path)?);
    let gazette = Gazette::builder()
        .with_store(store)
        .with_middleware(Box::new(TracingMiddleware))
        .with_middleware(Box::new(CacheMiddleware::default()))
        .news_count_on_home_page(page_size)
        .build()?;

    let state = AppState {
        gazette: Arc::new(gazette),
        resolver: Arc::new(TokenCallerResolver::from_table(&tokens)),
    };

    let listener = TcpListener::bind(addr).await?;
    info!(%addr, db = %db_path, "gazette server listening");
    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
