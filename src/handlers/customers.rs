use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use tracing::debug;

use crate::AppState;

// ── List ──────────────────────────────────────────────────────────────────────

/// `GET /customers` — the fixed customer list as a JSON array.
pub async fn list_customers(State(state): State<AppState>) -> Response {
    debug!(count = state.customers.len(), "Listed customers");

    Json(&*state.customers).into_response()
}
