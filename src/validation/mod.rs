//! Schema validation for untrusted request payloads.
//!
//! Pure functions: raw payload in, either a validated patch or a map of
//! field name to message out. No transport types and no store access, so
//! handlers can surface failures as a re-renderable error set without any
//! mutation having happened.

use serde::Deserialize;
use std::collections::HashMap;

use crate::database::models::{NewPlace, ReviewPatch};

pub const RATING_MIN: i16 = 1;
pub const RATING_MAX: i16 = 5;

/// Raw create payload as submitted by the client.
#[derive(Debug, Default, Deserialize)]
pub struct CreatePlacePayload {
    pub name: Option<String>,
    pub visited: Option<bool>,
}

/// Raw review payload as submitted by the client.
#[derive(Debug, Default, Deserialize)]
pub struct ReviewPayload {
    pub notes: Option<String>,
    pub rating: Option<i16>,
    pub photo_url: Option<String>,
}

pub type FieldErrors = HashMap<String, String>;

/// Create schema: `name` required non-empty, `visited` optional (default false).
pub fn validate_create(payload: &CreatePlacePayload) -> Result<NewPlace, FieldErrors> {
    let mut errors = FieldErrors::new();

    let name = payload.name.as_deref().unwrap_or("").trim();
    if name.is_empty() {
        errors.insert("name".to_string(), "This field is required".to_string());
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(NewPlace {
        name: name.to_string(),
        visited: payload.visited.unwrap_or(false),
    })
}

/// Review schema: all fields optional; `rating` must fall in 1..=5,
/// `photo_url` must be non-empty when present.
pub fn validate_review(payload: &ReviewPayload) -> Result<ReviewPatch, FieldErrors> {
    let mut errors = FieldErrors::new();

    if let Some(rating) = payload.rating {
        if !(RATING_MIN..=RATING_MAX).contains(&rating) {
            errors.insert(
                "rating".to_string(),
                format!("Rating must be between {} and {}", RATING_MIN, RATING_MAX),
            );
        }
    }

    if let Some(photo_url) = payload.photo_url.as_deref() {
        if photo_url.trim().is_empty() {
            errors.insert(
                "photo_url".to_string(),
                "Photo reference must not be empty".to_string(),
            );
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(ReviewPatch {
        notes: payload.notes.clone(),
        rating: payload.rating,
        photo_url: payload.photo_url.clone(),
    })
}
