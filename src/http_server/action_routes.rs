//! Action listing HTTP route
//!
//! `POST /actions/list` takes a resolver event body and always answers
//! `200 OK` with the response envelope; failures live inside the envelope.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::post, Json, Router};

use crate::api::RequestHandler;
use crate::model::ListActionsResponse;

pub fn action_routes(handler: Arc<RequestHandler>) -> Router {
    Router::new()
        .route("/list", post(list_handler))
        .with_state(handler)
}

async fn list_handler(
    State(handler): State<Arc<RequestHandler>>,
    body: String,
) -> impl IntoResponse {
    // The store call is blocking
    let response = tokio::task::spawn_blocking(move || handler.handle_json(&body))
        .await
        .unwrap_or_else(|e| {
            ListActionsResponse::failure(format!("Internal error: {}", e))
        });

    (StatusCode::OK, Json(response))
}
