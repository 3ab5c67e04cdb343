use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{error, info};

use crate::{
    AnalysisInput, AnalysisResult, ClassificationResult, DomainError, IntentResult,
    SentimentResult, SummaryResult,
};

use super::Container;

/// Request body shared by every analysis endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextRequest {
    pub text: String,
}

/// Error response body: `{"error": true, "message", "status", "error_code"}`.
#[derive(Debug)]
pub struct ApiError {
    pub message: String,
    pub status_code: StatusCode,
    pub error_code: &'static str,
}

impl ApiError {
    fn new(status_code: StatusCode, error_code: &'static str, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status_code,
            error_code,
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match &err {
            DomainError::Extraction(_) => {
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "EXTRACTION_FAILED", err.to_string())
            }
            DomainError::Upstream(_) => {
                Self::new(StatusCode::BAD_GATEWAY, "UPSTREAM_ERROR", err.to_string())
            }
            DomainError::Configuration(_) => {
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", err.to_string())
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::new(rejection.status(), "INVALID_REQUEST", rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status_code.is_server_error() {
            error!("API error ({}): {}", self.status_code, self.message);
        }

        let body = json!({
            "error": true,
            "message": self.message,
            "status": self.status_code.as_u16(),
            "error_code": self.error_code,
        });

        (self.status_code, Json(body)).into_response()
    }
}

async fn health_handler(State(container): State<Arc<Container>>) -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "model": container.model(),
    }))
}

async fn analyze_handler<R: AnalysisResult>(
    State(container): State<Arc<Container>>,
    payload: Result<Json<TextRequest>, JsonRejection>,
) -> Result<Json<R>, ApiError> {
    let Json(request) = payload?;
    let use_case = container.analyze_use_case();
    let result = use_case.execute::<R>(&AnalysisInput::new(request.text)).await?;
    Ok(Json(result))
}

/// HTTP routes: one POST endpoint per operation under `/api/ai`, plus `/health`.
pub fn http_router(container: Arc<Container>) -> axum::Router {
    axum::Router::new()
        .route("/health", get(health_handler))
        .route("/api/ai/classify", post(analyze_handler::<ClassificationResult>))
        .route("/api/ai/sentiment", post(analyze_handler::<SentimentResult>))
        .route("/api/ai/summarize", post(analyze_handler::<SummaryResult>))
        .route("/api/ai/intent", post(analyze_handler::<IntentResult>))
        .with_state(container)
}

pub async fn serve(container: Arc<Container>, addr: SocketAddr) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, http_router(container)).await?;
    Ok(())
}
