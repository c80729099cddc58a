//! Service banner and health check

use axum::{extract::State, Json};
use serde::Serialize;

use crate::state::AppState;

const PROJECT_NAME: &str = "Genloom AI Suite";
const MOTTO: &str = "Licensed to Create";

#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub project: &'static str,
    pub status: &'static str,
    pub version: &'static str,
    pub motto: &'static str,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub models_loaded: usize,
}

pub async fn root() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        project: PROJECT_NAME,
        status: "OPERATIONAL",
        version: env!("CARGO_PKG_VERSION"),
        motto: MOTTO,
    })
}

pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        models_loaded: state.service.models_loaded().await,
    })
}
