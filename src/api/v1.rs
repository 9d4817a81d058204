use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;

use crate::api::{error::ApiError, AppState};
use crate::config::{ScenarioConfig, TimeGridConfig};
use crate::fleet::{self, Fleet};
use crate::flexibility::GridSystem;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/evaluate", post(evaluate))
        .route("/scenario", get(get_scenario))
        .with_state(state)
}

/// Full evaluation scenario as supplied by an external input collector
#[derive(Debug, Deserialize)]
pub struct EvaluateRequest {
    pub time: TimeGridConfig,
    pub system: GridSystem,
    pub fleet: Fleet,
}

/// POST /api/v1/evaluate - run the flexibility/disturbance pipeline
///
/// Stateless: the whole scenario comes in the request and the full report
/// goes out. Invalid configurations and a never-crossing envelope are client
/// errors, not server faults.
pub async fn evaluate(
    State(_st): State<AppState>,
    Json(req): Json<EvaluateRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let time = req.time.build()?;
    let report = fleet::evaluate(&req.fleet, &req.system, &time)?;
    Ok((StatusCode::OK, Json(report)))
}

/// GET /api/v1/scenario - the configured default scenario
///
/// Lets a fresh client prefill its inputs with the defaults the service
/// ships with.
pub async fn get_scenario(State(st): State<AppState>) -> Json<ScenarioConfig> {
    Json(st.config.scenario.clone())
}
