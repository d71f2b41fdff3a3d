use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::config::ClientConfig;

pub enum Endpoints<'a> {
    Moderate(&'a ClientConfig),
    Health(&'a ClientConfig),
}

/// Successful body of `POST /moderate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModerationResult {
    pub safe: bool,
    /// Scores in the order the service sent them.
    pub categories: IndexMap<String, f64>,
    pub confidence: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
}

/// Failure body the service sends alongside non-2xx statuses.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorDetail {
    pub detail: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: String,
}

impl fmt::Display for Endpoints<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoints::Moderate(config) => write!(f, "{}/moderate", config.base_url()),
            Endpoints::Health(config) => write!(f, "{}/health", config.base_url()),
        }
    }
}

impl ErrorDetail {
    /// Pulls `detail` out of a failure body, if the body is JSON and carries one.
    pub fn from_body(body: &str) -> Option<String> {
        serde_json::from_str::<ErrorDetail>(body)
            .ok()
            .and_then(|e| e.detail)
            .filter(|d| !d.trim().is_empty())
    }
}
