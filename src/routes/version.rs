// src/routes/version.rs

use axum::Json;
use serde::Serialize;

use crate::config::VERSION;

#[derive(Serialize)]
pub struct VersionResp {
    pub version: &'static str,
}

pub async fn version() -> Json<VersionResp> {
    Json(VersionResp { version: VERSION })
}
