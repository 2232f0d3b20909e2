mod config;
mod embedding;
mod errors;
mod extraction;
mod llm_client;
mod models;
mod render;
mod routes;
mod scoring;
mod screening;
mod state;
mod summarizer;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::config::{Config, SummarizerBackend};
use crate::embedding::{Embedder, FastEmbedder};
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;
use crate::summarizer::{LlmSummarizer, Summarizer, TruncationSummarizer};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Screener v{}", env!("CARGO_PKG_VERSION"));

    std::fs::create_dir_all(&config.upload_dir).with_context(|| {
        format!(
            "Failed to create upload directory '{}'",
            config.upload_dir.display()
        )
    })?;
    info!("Upload directory: {}", config.upload_dir.display());

    // Load the embedding model once; downloads on first run
    let model_name = config.embedding_model.clone();
    let embedder: Arc<dyn Embedder> =
        Arc::new(tokio::task::spawn_blocking(move || FastEmbedder::load(&model_name)).await??);
    info!("Embedding model loaded: {}", embedder.model_name());

    let summarizer = build_summarizer(&config)?;
    info!("Summarizer backend: {}", summarizer.backend());

    let state = AppState {
        config: config.clone(),
        embedder,
        summarizer,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Picks the summarizer implementation named by `SUMMARIZER_BACKEND`.
fn build_summarizer(config: &Config) -> Result<Arc<dyn Summarizer>> {
    match config.summarizer_backend {
        SummarizerBackend::Stub => Ok(Arc::new(TruncationSummarizer)),
        SummarizerBackend::Llm => {
            let api_key = config
                .anthropic_api_key
                .clone()
                .context("ANTHROPIC_API_KEY is required for the llm summarizer")?;
            let mut client = LlmClient::new(api_key)?;
            if let Some(url) = &config.anthropic_api_url {
                client = client.with_api_url(url.clone());
                info!("LLM endpoint override: {url}");
            }
            info!("LLM client initialized (model: {})", llm_client::MODEL);
            Ok(Arc::new(LlmSummarizer(client)))
        }
    }
}
