//! Contract Analyzer Server
//!
//! Accepts a contract upload (.txt, .docx or .pdf), extracts its text and
//! answers with a compliance traffic light:
//!
//! - `POST /analyze` - multipart upload, field `file`
//! - `GET /health`
//!
//! Unreadable documents (no text even after OCR, or extraction past the
//! deadline) get HTTP 422.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use clap::{Parser, ValueEnum};
use clause_engine::ClauseEngine;
use doc_text::{DisabledOcr, OcrEngine, TesseractCli, TextExtractor};
use tokio::sync::Semaphore;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod api;
mod error;
#[cfg(test)]
mod tests;

use api::{handle_analyze, handle_health};

/// OCR backend for scanned PDFs
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OcrMode {
    Disabled,
    Tesseract,
}

/// Command-line arguments for the analyzer server
#[derive(Parser, Debug)]
#[command(name = "analyzer-server")]
#[command(about = "Contract analyzer - payment terms and clause risk signals")]
struct Args {
    /// Port to listen on
    #[arg(short, long, env = "ANALYZER_PORT", default_value = "8000")]
    port: u16,

    /// Host address to bind to
    #[arg(long, env = "ANALYZER_HOST", default_value = "0.0.0.0")]
    host: String,

    /// Deadline for extracting and analyzing one upload, in milliseconds
    #[arg(long, env = "ANALYZER_TIMEOUT_MS", default_value = "30000")]
    timeout_ms: u64,

    /// Maximum upload size in bytes
    #[arg(long, env = "ANALYZER_MAX_UPLOAD_BYTES", default_value = "26214400")]
    max_upload_bytes: usize,

    /// Documents extracted at the same time
    #[arg(long, env = "ANALYZER_EXTRACT_WORKERS", default_value = "4")]
    extract_workers: usize,

    /// Rate limit: requests per second per IP
    #[arg(long, env = "ANALYZER_RATE_LIMIT", default_value = "10")]
    rate_limit: u32,

    /// OCR backend used when a PDF has no text layer
    #[arg(long, env = "ANALYZER_OCR", value_enum, default_value = "disabled")]
    ocr: OcrMode,

    /// Factor the notice of assignment must name
    #[arg(long, env = "ANALYZER_COUNTERPARTY", default_value = "Rev Capital")]
    counterparty: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Extraction + analysis deadline in milliseconds
    pub timeout_ms: u64,
    pub engine: Arc<ClauseEngine>,
    pub extractor: TextExtractor,
    /// Bounds how many documents are decoded concurrently
    pub extract_permits: Arc<Semaphore>,
}

impl AppState {
    pub fn new(
        engine: ClauseEngine,
        extractor: TextExtractor,
        timeout_ms: u64,
        extract_workers: usize,
    ) -> Self {
        Self {
            timeout_ms,
            engine: Arc::new(engine),
            extractor,
            extract_permits: Arc::new(Semaphore::new(extract_workers.max(1))),
        }
    }
}

/// Routes and middleware shared by the binary and the tests
pub fn build_router(state: AppState, max_upload_bytes: usize) -> Router {
    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handle_health))
        .route("/analyze", post(handle_analyze))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting analyzer server on {}:{}", args.host, args.port);

    let ocr: Arc<dyn OcrEngine> = match args.ocr {
        OcrMode::Disabled => Arc::new(DisabledOcr),
        OcrMode::Tesseract => Arc::new(TesseractCli::new()),
    };
    info!(
        "OCR backend: {} (available: {})",
        ocr.name(),
        ocr.is_available()
    );

    let state = AppState::new(
        ClauseEngine::with_counterparty(&args.counterparty),
        TextExtractor::new(ocr),
        args.timeout_ms,
        args.extract_workers,
    );

    // Create rate limiter configuration
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(args.rate_limit.into())
            .burst_size(args.rate_limit * 2)
            .finish()
            .ok_or_else(|| anyhow::anyhow!("Invalid rate limit: {}", args.rate_limit))?,
    );

    let app = build_router(state, args.max_upload_bytes).layer(GovernorLayer {
        config: governor_conf,
    });

    // Start server
    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Server listening on http://{}", addr);
    info!("Rate limit: {} requests/second per IP", args.rate_limit);
    info!("Analysis timeout: {}ms", args.timeout_ms);

    // The rate limiter keys on peer IP
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
