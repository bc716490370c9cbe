mod config;
mod errors;
mod interview;
mod models;
mod routes;
mod screening;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::config::Config;
use crate::interview::bank::QuestionBank;
use crate::interview::topics::TopicAliases;
use crate::interview::LexicalAnswerScorer;
use crate::routes::build_router;
use crate::screening::signals::SkillSignalTable;
use crate::state::{AppState, Catalog};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting screening API v{}", env!("CARGO_PKG_VERSION"));

    // Skill signals are compiled once; a bad built-in table is a startup failure.
    let signals = SkillSignalTable::builtin()?;
    info!("Skill signal table ready ({} skills)", signals.len());

    let bank = QuestionBank::load_or_default(&config.question_bank_path);
    let aliases = TopicAliases::builtin();
    info!("Topic aliases loaded ({} labels)", aliases.len());

    let state = AppState {
        config: config.clone(),
        catalog: Arc::new(Catalog {
            signals,
            bank,
            aliases,
        }),
        scorer: Arc::new(LexicalAnswerScorer),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
