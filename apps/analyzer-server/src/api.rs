//! API handlers for the analyzer server
//!
//! Provides REST endpoints for:
//! - Contract analysis (multipart upload)
//! - Health checks

use std::time::Duration;

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tokio::sync::OwnedSemaphorePermit;
use shared_types::{Card, Light, SignalReport};
use tracing::{info, warn};

use crate::error::ServerError;
use crate::AppState;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub ocr: &'static str,
}

/// Handler: GET /health
pub async fn handle_health(State(state): State<AppState>) -> Json<HealthResponse> {
    let ocr = state.extractor.ocr();
    Json(HealthResponse {
        status: "healthy",
        service: "analyzer-server",
        version: env!("CARGO_PKG_VERSION"),
        ocr: if ocr.is_available() { ocr.name() } else { "unavailable" },
    })
}

/// Analysis response
#[derive(Serialize, Deserialize, Debug)]
pub struct AnalyzeResponse {
    pub ok: bool,
    pub lights: Vec<Light>,
    pub cards: Vec<Card>,
}

impl From<SignalReport> for AnalyzeResponse {
    fn from(report: SignalReport) -> Self {
        Self {
            ok: true,
            lights: report.lights,
            cards: report.cards,
        }
    }
}

/// An uploaded document
pub struct Upload {
    pub filename: String,
    pub data: Vec<u8>,
}

/// Pull the `file` field out of a multipart body.
async fn read_upload(multipart: &mut Multipart) -> Result<Upload, ServerError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ServerError::InvalidRequest(format!("Malformed multipart body: {}", e)))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let filename = field.file_name().unwrap_or_default().to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| ServerError::InvalidRequest(format!("Failed to read upload: {}", e)))?;
        return Ok(Upload {
            filename,
            data: data.to_vec(),
        });
    }

    Err(ServerError::InvalidRequest(
        "Missing 'file' field in multipart body".to_string(),
    ))
}

/// Handler: POST /analyze
pub async fn handle_analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, ServerError> {
    let upload = read_upload(&mut multipart).await?;
    info!(
        "Analyze request: file={}, bytes={}",
        upload.filename,
        upload.data.len()
    );

    // Queue time waiting for a worker does not count against the deadline
    let permit = state
        .extract_permits
        .clone()
        .acquire_owned()
        .await
        .map_err(|e| ServerError::Internal(format!("Extraction pool closed: {}", e)))?;

    let timeout_ms = state.timeout_ms;
    match tokio::time::timeout(
        Duration::from_millis(timeout_ms),
        analyze_upload(state, upload, permit),
    )
    .await
    {
        Ok(result) => result.map(|report| Json(report.into())),
        Err(_elapsed) => {
            warn!("Analysis timed out after {}ms", timeout_ms);
            Err(ServerError::Unreadable)
        }
    }
}

/// Extract and analyze on the blocking pool. The permit is held until the
/// blocking work finishes, even if the deadline has already expired.
async fn analyze_upload(
    state: AppState,
    upload: Upload,
    permit: OwnedSemaphorePermit,
) -> Result<SignalReport, ServerError> {
    let extractor = state.extractor.clone();
    let engine = state.engine.clone();

    let task = tokio::task::spawn_blocking(move || {
        let _permit = permit;
        let raw = extractor
            .extract(&upload.filename, &upload.data)
            .map_err(|e| {
                warn!(file = %upload.filename, error = %e, "Text extraction failed");
                ServerError::from(e)
            })?;
        let result = engine.analyze_raw(&raw)?;
        info!(
            payment_term_days = ?result.payment_term_days,
            indemnity = result.indemnity.as_str(),
            "Contract analyzed"
        );
        Ok::<_, ServerError>(engine.report(&result))
    });

    match task.await {
        Ok(result) => result,
        Err(join_error) => {
            // A panic inside a decoder is still just an unreadable document
            warn!("Extraction task failed: {}", join_error);
            Err(ServerError::Unreadable)
        }
    }
}
