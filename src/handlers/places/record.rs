use axum::{
    extract::{Path, State},
    response::Json,
    Extension,
};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::auth::guard;
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::validation::{validate_review, ReviewPayload};

/// GET /api/places/:id - Detail view of a single place
///
/// `reviewable` tells the presentation layer whether to offer the review
/// form; it is true exactly when the place has been visited.
pub async fn get(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, ApiError> {
    let place = state.store.get(id).await?;
    guard::authorize(&user, &place)?;

    let reviewable = place.visited;
    Ok(Json(json!({
        "success": true,
        "data": {
            "place": place,
            "reviewable": reviewable
        }
    })))
}

/// POST /api/places/:id/visit - Mark a place as visited
///
/// Idempotent; there is no path back to unvisited.
pub async fn visit(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, ApiError> {
    let place = state.store.get(id).await?;
    guard::authorize(&user, &place)?;

    let place = state.store.mark_visited(id).await?;

    Ok(Json(json!({ "success": true, "data": place })))
}

/// POST /api/places/:id/review - Update the review fields of a visited place
pub async fn review(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ReviewPayload>,
) -> Result<Json<Value>, ApiError> {
    let place = state.store.get(id).await?;
    guard::authorize(&user, &place)?;

    if !place.visited {
        return Err(ApiError::bad_request(
            "Reviews can only be added to visited places",
        ));
    }

    let patch = validate_review(&payload)
        .map_err(|errors| ApiError::validation_error("Invalid review", Some(errors)))?;

    let place = state.store.update_review(id, patch).await?;

    Ok(Json(json!({
        "success": true,
        "data": place,
        "message": "Review saved"
    })))
}

/// DELETE /api/places/:id - Remove a place entirely
pub async fn delete(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, ApiError> {
    let place = state.store.get(id).await?;
    guard::authorize(&user, &place)?;

    state.store.delete(id).await?;

    Ok(Json(json!({
        "success": true,
        "data": { "deleted": id }
    })))
}
