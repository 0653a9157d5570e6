use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A single wishlist entry owned by one user.
///
/// `notes`, `rating` and `photo_url` are trip-review fields, meaningful only
/// once `visited` is true.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Place {
    pub id: Uuid,
    pub name: String,
    pub visited: bool,
    pub owner_id: Uuid,
    pub notes: Option<String>,
    pub rating: Option<i16>,
    pub photo_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated payload for creating a place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPlace {
    pub name: String,
    pub visited: bool,
}

/// Validated patch for the review fields of a visited place.
///
/// `None` fields are left untouched by the update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewPatch {
    pub notes: Option<String>,
    pub rating: Option<i16>,
    pub photo_url: Option<String>,
}
