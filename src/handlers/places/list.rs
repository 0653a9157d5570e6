use axum::{extract::State, http::StatusCode, response::Json, Extension};
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::validation::{validate_create, CreatePlacePayload};

/// GET /api/places - The caller's wishlist: unvisited places sorted by name
pub async fn get(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Value>, ApiError> {
    let places = state.store.find_by_owner(user.user_id, false).await?;

    let mut body = json!({ "success": true, "data": places });
    if body["data"].as_array().map(|a| a.is_empty()).unwrap_or(true) {
        body["message"] = json!("You have no places in your wishlist");
    }

    Ok(Json(body))
}

/// POST /api/places - Add a place to the caller's wishlist
pub async fn post(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<CreatePlacePayload>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let new_place = validate_create(&payload)
        .map_err(|errors| ApiError::validation_error("Invalid place", Some(errors)))?;

    let place = state.store.insert(user.user_id, new_place).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "success": true, "data": place })),
    ))
}

/// GET /api/places/visited - The caller's visited places
pub async fn visited(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Value>, ApiError> {
    let places = state.store.find_by_owner(user.user_id, true).await?;

    let mut body = json!({ "success": true, "data": places });
    if body["data"].as_array().map(|a| a.is_empty()).unwrap_or(true) {
        body["message"] = json!("You have not visited any places yet");
    }

    Ok(Json(body))
}
