//! Test utilities: an in-memory place store and helpers for driving the
//! router in-process.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use chrono::Utc;
use uuid::Uuid;

use crate::auth::{generate_jwt, Claims};
use crate::database::models::{NewPlace, Place, ReviewPatch};
use crate::database::store::{PlaceStore, StoreError};
use crate::state::AppState;

/// In-memory store with the same contract as the Postgres store.
///
/// Records are kept in insertion order; listings stable-sort by name so
/// duplicate names keep insertion order, matching the SQL ordering.
#[derive(Default)]
pub struct MemoryPlaceStore {
    places: Mutex<Vec<Place>>,
}

impl MemoryPlaceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total record count across all owners, for no-mutation assertions.
    pub fn len(&self) -> usize {
        self.places.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl PlaceStore for MemoryPlaceStore {
    async fn find_by_owner(&self, owner_id: Uuid, visited: bool) -> Result<Vec<Place>, StoreError> {
        let places = self.places.lock().unwrap();
        let mut found: Vec<Place> = places
            .iter()
            .filter(|p| p.owner_id == owner_id && p.visited == visited)
            .cloned()
            .collect();
        found.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(found)
    }

    async fn get(&self, id: Uuid) -> Result<Place, StoreError> {
        let places = self.places.lock().unwrap();
        places
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| StoreError::place_not_found(id))
    }

    async fn insert(&self, owner_id: Uuid, new_place: NewPlace) -> Result<Place, StoreError> {
        let now = Utc::now();
        let place = Place {
            id: Uuid::new_v4(),
            name: new_place.name,
            visited: new_place.visited,
            owner_id,
            notes: None,
            rating: None,
            photo_url: None,
            created_at: now,
            updated_at: now,
        };

        self.places.lock().unwrap().push(place.clone());
        Ok(place)
    }

    async fn mark_visited(&self, id: Uuid) -> Result<Place, StoreError> {
        let mut places = self.places.lock().unwrap();
        let place = places
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| StoreError::place_not_found(id))?;

        place.visited = true;
        place.updated_at = Utc::now();
        Ok(place.clone())
    }

    async fn update_review(&self, id: Uuid, patch: ReviewPatch) -> Result<Place, StoreError> {
        let mut places = self.places.lock().unwrap();
        let place = places
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| StoreError::place_not_found(id))?;

        if patch.notes.is_some() {
            place.notes = patch.notes;
        }
        if patch.rating.is_some() {
            place.rating = patch.rating;
        }
        if patch.photo_url.is_some() {
            place.photo_url = patch.photo_url;
        }
        place.updated_at = Utc::now();
        Ok(place.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        let mut places = self.places.lock().unwrap();
        let before = places.len();
        places.retain(|p| p.id != id);

        if places.len() == before {
            return Err(StoreError::place_not_found(id));
        }
        Ok(())
    }
}

/// Router over a fresh in-memory store. Returns the store handle too so
/// tests can assert on raw storage state.
pub fn test_app() -> (Router, Arc<MemoryPlaceStore>) {
    let store = Arc::new(MemoryPlaceStore::new());
    let app = crate::app(AppState::new(store.clone()));
    (app, store)
}

/// A deterministic test identity with its bearer header value.
pub fn test_user(name: &str) -> (Uuid, String) {
    let user_id = Uuid::new_v5(&Uuid::NAMESPACE_OID, name.as_bytes());
    let token =
        generate_jwt(Claims::new(user_id, name.to_string())).expect("test JWT generation");
    (user_id, format!("Bearer {}", token))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn memory_store_orders_by_name_then_insertion() {
        let store = MemoryPlaceStore::new();
        let owner = Uuid::new_v4();

        for name in ["Zion", "Abu Dhabi", "Moab"] {
            store
                .insert(
                    owner,
                    NewPlace {
                        name: name.to_string(),
                        visited: false,
                    },
                )
                .await
                .unwrap();
        }

        let names: Vec<String> = store
            .find_by_owner(owner, false)
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();

        assert_eq!(names, ["Abu Dhabi", "Moab", "Zion"]);
    }

    #[tokio::test]
    async fn memory_store_scopes_by_owner() {
        let store = MemoryPlaceStore::new();
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();

        store
            .insert(
                alice,
                NewPlace {
                    name: "Tokyo".to_string(),
                    visited: false,
                },
            )
            .await
            .unwrap();

        assert_eq!(store.find_by_owner(alice, false).await.unwrap().len(), 1);
        assert!(store.find_by_owner(bob, false).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn memory_store_not_found() {
        let store = MemoryPlaceStore::new();
        let missing = Uuid::new_v4();

        assert!(matches!(
            store.get(missing).await,
            Err(StoreError::NotFound(_))
        ));
        assert!(matches!(
            store.mark_visited(missing).await,
            Err(StoreError::NotFound(_))
        ));
        assert!(matches!(
            store.delete(missing).await,
            Err(StoreError::NotFound(_))
        ));
    }
}
