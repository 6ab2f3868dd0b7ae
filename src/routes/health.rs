// src/routes/health.rs

use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::config::VERSION;

#[derive(Serialize)]
pub struct HealthResp {
    pub status: &'static str,
    pub version: &'static str,
    pub timestamp: DateTime<Utc>,
}

pub async fn health() -> Json<HealthResp> {
    Json(HealthResp {
        status: "healthy",
        version: VERSION,
        timestamp: Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn health_reports_healthy() {
        let Json(body) = health().await;
        assert_eq!(body.status, "healthy");
        assert_eq!(body.version, VERSION);
        // Timestamp is taken at call time.
        let age = Utc::now() - body.timestamp;
        assert!(age.num_seconds() < 5);
    }

    #[tokio::test]
    async fn timestamp_serializes_as_rfc3339() {
        let Json(body) = health().await;
        let json = serde_json::to_value(&body).unwrap();
        let ts = json["timestamp"].as_str().unwrap();
        DateTime::parse_from_rfc3339(ts).unwrap();
    }
}
