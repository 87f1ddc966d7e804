use axum::Json;
use axum::extract::State;
use serde_json::{Value, json};

use crate::errors::AppResult;
use crate::state::AppState;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub async fn healthcheck_handler(State(state): State<AppState>) -> AppResult<Json<Value>> {
    Ok(Json(json!({
        "status": "available",
        "environment": state.config.env,
        "version": VERSION,
    })))
}
