use axum::{http::StatusCode, response::Json, Extension};
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::auth::{generate_jwt, Claims};
use crate::config;
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;

#[derive(Debug, Deserialize)]
pub struct LoginPayload {
    pub username: Option<String>,
}

/// POST /auth/login - Issue a JWT for the given username
///
/// Credential verification is an external concern; this endpoint mints
/// bearer tokens for the API. The user id is derived deterministically from
/// the username so the same user keeps the same ownership across sessions.
pub async fn login(
    Json(payload): Json<LoginPayload>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let username = payload.username.as_deref().unwrap_or("").trim();
    if username.is_empty() {
        let mut field_errors = std::collections::HashMap::new();
        field_errors.insert("username".to_string(), "This field is required".to_string());
        return Err(ApiError::validation_error(
            "Missing required fields",
            Some(field_errors),
        ));
    }

    let user_id = Uuid::new_v5(&Uuid::NAMESPACE_OID, username.as_bytes());
    let token = generate_jwt(Claims::new(user_id, username.to_string())).map_err(|e| {
        tracing::error!("JWT generation failed: {}", e);
        ApiError::internal_server_error("Failed to issue token")
    })?;

    let expires_in = config::config().security.jwt_expiry_hours * 3600;

    Ok((
        StatusCode::OK,
        Json(json!({
            "success": true,
            "data": {
                "token": token,
                "user": {
                    "id": user_id,
                    "username": username
                },
                "expires_in": expires_in
            }
        })),
    ))
}

/// GET /api/auth/whoami - Echo the authenticated identity
pub async fn whoami(Extension(user): Extension<AuthUser>) -> Json<Value> {
    Json(json!({
        "success": true,
        "data": {
            "id": user.user_id,
            "username": user.name
        }
    }))
}
