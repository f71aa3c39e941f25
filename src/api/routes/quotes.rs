//! Quote batch endpoint.

use axum::extract::State;
use axum::{routing::get, Json, Router};

use crate::api::state::AppState;
use crate::models::QuotesResponse;
use crate::quotes;

/// GET /api/quotes
///
/// Always 200: upstream failures are absorbed into the fallback list.
async fn list_quotes(State(state): State<AppState>) -> Json<QuotesResponse> {
    let quotes = quotes::supply(state.quotes.as_ref()).await;
    Json(QuotesResponse { quotes })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/quotes", get(list_quotes))
}
