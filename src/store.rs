//! Coordinate store: the persistence contract and the hosted-table adapter.
//!
//! Each submission is one best-effort insert. There is no retry, no
//! idempotency key, and deliberately no call timeout — a stalled network
//! stalls the submission until the socket gives up.

use crate::config::StoreConfig;
use crate::position::Coordinate;
use std::fmt;

/// Port for recording one coordinate reading per call.
///
/// The workflow never reads, updates, or deletes.
pub trait CoordinateStore {
    fn insert(&self, record: Coordinate) -> Result<(), StoreError>;
}

/// Submission failures.
#[derive(Debug, PartialEq)]
pub enum StoreError {
    Network(String),
    Rejected { status: u16, message: String },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network(msg) => write!(f, "Network error: {}", msg),
            Self::Rejected { message, .. } => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for StoreError {}

// ─── Hosted-table REST adapter ──────────────────────────────────

/// Inserts rows into a hosted `coordinates` table over its REST surface.
///
/// Configured once from the environment and reused for every call.
pub struct TableStore {
    endpoint: String,
    api_key: String,
}

impl TableStore {
    pub fn new(config: &StoreConfig) -> Self {
        Self {
            endpoint: insert_url(&config.url, &config.table),
            api_key: config.api_key.clone(),
        }
    }
}

impl CoordinateStore for TableStore {
    fn insert(&self, record: Coordinate) -> Result<(), StoreError> {
        match ureq::post(&self.endpoint)
            .set("apikey", &self.api_key)
            .set("Authorization", &format!("Bearer {}", self.api_key))
            .set("Prefer", "return=minimal")
            .send_json(serde_json::json!([record]))
        {
            Ok(_) => Ok(()),
            Err(ureq::Error::Status(status, response)) => {
                let body = response.into_string().unwrap_or_default();
                Err(StoreError::Rejected {
                    status,
                    message: rejection_message(status, &body),
                })
            }
            Err(e) => Err(StoreError::Network(e.to_string())),
        }
    }
}

fn insert_url(base: &str, table: &str) -> String {
    format!("{}/rest/v1/{}", base.trim_end_matches('/'), table)
}

/// PostgREST rejections carry a JSON body with a `message` field; fall back
/// to the raw body, then to the bare status.
fn rejection_message(status: u16, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(message) = value.get("message").and_then(|m| m.as_str()) {
            return message.to_string();
        }
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        format!("HTTP {}", status)
    } else {
        trimmed.to_string()
    }
}
