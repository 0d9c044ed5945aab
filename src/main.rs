//! Fuzzy Diagnosis server binary.
//!
//! Loads configuration, installs tracing, loads the rule base and serves the
//! diagnosis API.

use std::sync::Arc;
use std::time::Duration;

use axum::http::HeaderValue;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use fuzzy_diagnosis::adapters::http::{diagnosis_router, DiagnosisAppState};
use fuzzy_diagnosis::adapters::rule_base::{EmbeddedRuleBaseSource, FileRuleBaseSource};
use fuzzy_diagnosis::config::{AppConfig, LogFormat, ServerConfig};
use fuzzy_diagnosis::domain::diagnosis::DiagnosisEngine;
use fuzzy_diagnosis::ports::RuleBaseSource;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;

    init_tracing(&config.server)?;

    let source: Box<dyn RuleBaseSource> = match &config.engine.rule_base_path {
        Some(path) => Box::new(FileRuleBaseSource::new(path)),
        None => Box::new(EmbeddedRuleBaseSource),
    };
    let rule_base = source.load().await?;
    info!(source = %source.describe(), rules = rule_base.len(), "Rule base ready");

    let engine = Arc::new(DiagnosisEngine::new(Arc::new(rule_base)));

    let app = diagnosis_router(DiagnosisAppState::new(engine)).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.server.request_timeout_secs,
            )))
            .layer(cors_layer(&config.server)),
    );

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, environment = ?config.server.environment, "Fuzzy diagnosis server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

fn init_tracing(server: &ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let registry = tracing_subscriber::registry().with(server.env_filter()?);

    match server.log_format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).try_init()?,
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).try_init()?,
    }

    Ok(())
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    if origins.is_empty() {
        CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any)
    } else {
        CorsLayer::new().allow_origin(origins).allow_methods(Any).allow_headers(Any)
    }
}
