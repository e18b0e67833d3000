use anyhow::Result;
use axum::Router;
use clap::Parser;
use search_core::{index_catalog, EngineConfig, StopWords};
use server::{build_app, DEFAULT_RESULT_CAP};
use std::net::SocketAddr;
use std::path::PathBuf;
use tokio::net::TcpListener;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
struct Args {
    /// Tab-separated book catalog to index at startup
    #[arg(long, default_value = "data/title_author.tab.txt")]
    catalog: PathBuf,
    /// Stop-word file, one word per line (built-in English list otherwise)
    #[arg(long)]
    stop_words: Option<PathBuf>,
    /// IDF smoothing constant
    #[arg(long, default_value_t = 1)]
    smoothing: u32,
    /// Largest `k` a client may request
    #[arg(long, default_value_t = DEFAULT_RESULT_CAP)]
    max_results: usize,
    /// Host to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: String,
    /// Port to bind
    #[arg(long, default_value_t = 8080)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    let args = Args::parse();

    let stop_words = match &args.stop_words {
        Some(path) => StopWords::load(path)?,
        None => StopWords::english(),
    };
    let config = EngineConfig { smoothing: args.smoothing };
    let catalog = args.catalog.clone();
    let engine = tokio::task::spawn_blocking(move || index_catalog(catalog, stop_words, config)).await??;
    tracing::info!(num_docs = engine.count(), "catalog indexed");
    let app: Router = build_app(engine, args.max_results);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
