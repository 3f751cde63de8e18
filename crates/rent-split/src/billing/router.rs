use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tracing::debug;

use super::calculator::split;
use super::domain::RawBillForm;
use super::format::SplitView;
use super::validation::validate;

/// Router exposing the split calculation over HTTP. `defaults` seeds new forms.
pub fn split_router(defaults: RawBillForm) -> Router {
    Router::new()
        .route("/api/v1/bills/split", post(split_handler))
        .route("/api/v1/bills/defaults", get(defaults_handler))
        .with_state(Arc::new(defaults))
}

pub(crate) async fn split_handler(Json(form): Json<RawBillForm>) -> Response {
    match validate(&form) {
        Ok(input) => {
            let result = split(&input);
            debug!(
                days = input.days(),
                person = input.person(),
                "bill split computed"
            );
            (StatusCode::OK, Json(SplitView::from(&result))).into_response()
        }
        Err(errors) => {
            let payload = json!({ "errors": errors });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn defaults_handler(
    State(defaults): State<Arc<RawBillForm>>,
) -> Json<RawBillForm> {
    Json(defaults.as_ref().clone())
}
