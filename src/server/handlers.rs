use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Json, Response};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;

use crate::workflow::{ManualEntry, MSG_UPDATED};

use super::state::AppState;
use super::static_files;

// ─── Error response ──────────────────────────────────────────────

#[derive(Serialize)]
struct ApiErrorBody {
    error: String,
    code: u16,
}

pub(super) struct ApiError(StatusCode, String);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ApiErrorBody {
            error: self.1,
            code: self.0.as_u16(),
        };
        (self.0, Json(body)).into_response()
    }
}

fn api_error(status: StatusCode, msg: impl Into<String>) -> ApiError {
    ApiError(status, msg.into())
}

// ─── Static file handlers ────────────────────────────────────────

pub async fn index() -> Html<&'static str> {
    Html(static_files::INDEX_HTML)
}

pub async fn style() -> Response {
    (
        [(header::CONTENT_TYPE, "text/css")],
        static_files::STYLE_CSS,
    )
        .into_response()
}

pub async fn script() -> Response {
    (
        [(header::CONTENT_TYPE, "application/javascript")],
        static_files::APP_JS,
    )
        .into_response()
}

// ─── GET /api/position ───────────────────────────────────────────

#[derive(Serialize)]
pub struct PositionResponse {
    pub latitude: f64,
    pub longitude: f64,
    pub formatted: String,
}

pub async fn position(
    State(state): State<Arc<AppState>>,
) -> Result<Json<PositionResponse>, Response> {
    let start = Instant::now();

    let snapshot = {
        let mut workflow = state.workflow.lock().unwrap();
        workflow.refresh_position();
        workflow.snapshot()
    };

    match snapshot.coordinate {
        Some(fix) if snapshot.location_error.is_none() => {
            eprintln!(
                "[{}] GET /api/position -> {} ({:.1}ms)",
                Utc::now().format("%H:%M:%S"),
                fix,
                start.elapsed().as_secs_f64() * 1000.0,
            );
            Ok(Json(PositionResponse {
                latitude: fix.latitude,
                longitude: fix.longitude,
                formatted: fix.to_string(),
            }))
        }
        _ => {
            let msg = snapshot
                .location_error
                .unwrap_or_else(|| "Position unavailable".into());
            eprintln!(
                "[{}] GET /api/position -> error: {} ({:.1}ms)",
                Utc::now().format("%H:%M:%S"),
                msg,
                start.elapsed().as_secs_f64() * 1000.0,
            );
            Err(api_error(StatusCode::BAD_GATEWAY, msg).into_response())
        }
    }
}

// ─── POST /api/coordinates ───────────────────────────────────────

#[derive(Deserialize)]
pub struct SubmitRequest {
    pub latitude: String,
    pub longitude: String,
}

#[derive(Serialize)]
pub struct SubmitResponse {
    pub message: String,
}

pub async fn submit(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SubmitRequest>,
) -> Result<Json<SubmitResponse>, Response> {
    let entry = ManualEntry {
        latitude_field: request.latitude,
        longitude_field: request.longitude,
    };
    let record = entry
        .parse()
        .map_err(|e| api_error(StatusCode::UNPROCESSABLE_ENTITY, e.to_string()).into_response())?;

    match state.store.insert(record) {
        Ok(()) => {
            eprintln!(
                "[{}] POST /api/coordinates {} -> recorded",
                Utc::now().format("%H:%M:%S"),
                record,
            );
            Ok(Json(SubmitResponse {
                message: MSG_UPDATED.into(),
            }))
        }
        Err(e) => {
            eprintln!(
                "[{}] POST /api/coordinates {} -> error: {}",
                Utc::now().format("%H:%M:%S"),
                record,
                e,
            );
            Err(api_error(StatusCode::BAD_GATEWAY, format!("Error: {}", e)).into_response())
        }
    }
}
