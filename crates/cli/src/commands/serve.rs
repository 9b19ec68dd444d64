use anyhow::Result;
use holy_word_core::SystemClock;
use holy_word_core::constants::{DAILY_VERSE_PATH, HEALTH_PATH, VERSES_PATH};
use holy_word_http::{AppState, create_router};
use holy_word_service::VerseService;
use std::path::PathBuf;
use std::sync::Arc;

pub(crate) async fn run(host: &str, port: u16, dataset: PathBuf) -> Result<()> {
    tracing::info!(dataset = %dataset.display(), "Loading verses");
    // A failed load is kept in the service; requests answer 500 and the
    // process keeps running.
    let verse_service = VerseService::load_at_startup(dataset);
    let state = Arc::new(AppState::new(verse_service, Arc::new(SystemClock)));

    let router = create_router(state);
    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Holy Word API Server running on {}", addr);
    tracing::info!("  GET {} - Get all verses", VERSES_PATH);
    tracing::info!("  GET {} - Get today's verse", DAILY_VERSE_PATH);
    tracing::info!("  GET {} - Health check", HEALTH_PATH);
    axum::serve(listener, router).await?;

    Ok(())
}
