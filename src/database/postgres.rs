use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::database::models::{NewPlace, Place, ReviewPatch};
use crate::database::store::{PlaceStore, StoreError};

/// Postgres-backed place store.
pub struct PgPlaceStore {
    pool: PgPool,
}

impl PgPlaceStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PlaceStore for PgPlaceStore {
    async fn find_by_owner(&self, owner_id: Uuid, visited: bool) -> Result<Vec<Place>, StoreError> {
        // created_at carries store-assigned insertion order for the tie-break
        let places = sqlx::query_as::<_, Place>(
            "SELECT * FROM places
             WHERE owner_id = $1 AND visited = $2
             ORDER BY name ASC, created_at ASC",
        )
        .bind(owner_id)
        .bind(visited)
        .fetch_all(&self.pool)
        .await?;

        Ok(places)
    }

    async fn get(&self, id: Uuid) -> Result<Place, StoreError> {
        sqlx::query_as::<_, Place>("SELECT * FROM places WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| StoreError::place_not_found(id))
    }

    async fn insert(&self, owner_id: Uuid, new_place: NewPlace) -> Result<Place, StoreError> {
        let place = sqlx::query_as::<_, Place>(
            "INSERT INTO places (id, name, visited, owner_id)
             VALUES ($1, $2, $3, $4)
             RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(&new_place.name)
        .bind(new_place.visited)
        .bind(owner_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(place)
    }

    async fn mark_visited(&self, id: Uuid) -> Result<Place, StoreError> {
        sqlx::query_as::<_, Place>(
            "UPDATE places SET visited = TRUE, updated_at = now()
             WHERE id = $1
             RETURNING *",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| StoreError::place_not_found(id))
    }

    async fn update_review(&self, id: Uuid, patch: ReviewPatch) -> Result<Place, StoreError> {
        sqlx::query_as::<_, Place>(
            "UPDATE places SET
                 notes = COALESCE($2, notes),
                 rating = COALESCE($3, rating),
                 photo_url = COALESCE($4, photo_url),
                 updated_at = now()
             WHERE id = $1
             RETURNING *",
        )
        .bind(id)
        .bind(patch.notes)
        .bind(patch.rating)
        .bind(patch.photo_url)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| StoreError::place_not_found(id))
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM places WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::place_not_found(id));
        }

        Ok(())
    }
}
