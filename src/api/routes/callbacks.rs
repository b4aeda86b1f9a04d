//! Callback Routes
//!
//! - POST /_dash-update-component - Recompute a graph from control values

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::{CallbackRequest, CallbackResponse};
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::dashboard::{dispatch, Callback, ControlValues};

/// POST /_dash-update-component
///
/// Runs the callback that owns `output` against the launch table.
pub async fn update_component(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CallbackRequest>,
) -> ApiResult<Json<CallbackResponse>> {
    let callback = Callback::for_output(&req.output)?;

    let mut controls = ControlValues::new();
    for input in &req.inputs {
        controls.set(&input.id, &input.value)?;
    }

    let figure = dispatch(&state.table, callback, &controls)?;

    Ok(Json(CallbackResponse {
        output: req.output,
        figure,
    }))
}
