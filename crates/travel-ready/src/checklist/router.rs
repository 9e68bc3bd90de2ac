use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde_json::json;

use super::domain::TripParameters;
use super::repository::ChecklistRepository;
use super::service::{ChecklistService, ChecklistServiceError};

/// Router builder exposing the checklist generation endpoint.
pub fn checklist_router<R>(service: Arc<ChecklistService<R>>) -> Router
where
    R: ChecklistRepository + 'static,
{
    Router::new()
        .route("/api/checklist/generate", post(generate_handler::<R>))
        .with_state(service)
}

pub(crate) async fn generate_handler<R>(
    State(service): State<Arc<ChecklistService<R>>>,
    axum::Json(trip): axum::Json<TripParameters>,
) -> Response
where
    R: ChecklistRepository + 'static,
{
    match service.generate(trip) {
        Ok(response) => (StatusCode::OK, axum::Json(response)).into_response(),
        Err(ChecklistServiceError::InvalidTrip(error)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
