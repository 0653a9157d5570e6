use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::database::models::{NewPlace, Place, ReviewPatch};

/// Errors from place stores
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

impl StoreError {
    pub fn place_not_found(id: Uuid) -> Self {
        StoreError::NotFound(format!("Place {} not found", id))
    }
}

/// Repository interface over the place table.
///
/// Every query and mutation is scoped to a single record or a single owner,
/// so callers never see another user's data through this trait. Ownership
/// checks themselves live in the guard, not here; `get` returns the record
/// regardless of owner so the caller can distinguish NotFound from Forbidden.
#[async_trait]
pub trait PlaceStore: Send + Sync {
    /// Places belonging to `owner_id` with the given visited flag.
    /// Unvisited listings come back sorted by name ascending, insertion
    /// order breaking ties between duplicate names.
    async fn find_by_owner(&self, owner_id: Uuid, visited: bool) -> Result<Vec<Place>, StoreError>;

    /// Fetch one place by id, or `NotFound`.
    async fn get(&self, id: Uuid) -> Result<Place, StoreError>;

    /// Insert a new place owned by `owner_id`. The owner is fixed here and
    /// never reassigned afterwards.
    async fn insert(&self, owner_id: Uuid, new_place: NewPlace) -> Result<Place, StoreError>;

    /// Set `visited = true`. Idempotent; there is no reverse transition.
    async fn mark_visited(&self, id: Uuid) -> Result<Place, StoreError>;

    /// Patch the review fields of a place. Fields that are `None` in the
    /// patch keep their current value.
    async fn update_review(&self, id: Uuid, patch: ReviewPatch) -> Result<Place, StoreError>;

    /// Hard-delete a place.
    async fn delete(&self, id: Uuid) -> Result<(), StoreError>;
}
