//! Ownership guard for record-targeted operations.
//!
//! Every detail read and every mutation of a specific place goes through
//! [`authorize`] before the record is used any further. A denied check
//! reveals nothing about the record's contents.

use crate::database::models::Place;
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;

/// Ownership predicate, kept separate so it stays testable on its own.
pub fn owns(user: &AuthUser, place: &Place) -> bool {
    place.owner_id == user.user_id
}

/// Allow iff the authenticated user owns the place.
pub fn authorize(user: &AuthUser, place: &Place) -> Result<(), ApiError> {
    if owns(user, place) {
        Ok(())
    } else {
        Err(ApiError::forbidden("You do not have access to this place"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn place_owned_by(owner_id: Uuid) -> Place {
        Place {
            id: Uuid::new_v4(),
            name: "Tokyo".to_string(),
            visited: false,
            owner_id,
            notes: None,
            rating: None,
            photo_url: None,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    fn user(user_id: Uuid) -> AuthUser {
        AuthUser {
            user_id,
            name: "alice".to_string(),
        }
    }

    #[test]
    fn owner_is_allowed() {
        let id = Uuid::new_v4();
        let place = place_owned_by(id);
        assert!(owns(&user(id), &place));
        assert!(authorize(&user(id), &place).is_ok());
    }

    #[test]
    fn non_owner_is_forbidden() {
        let place = place_owned_by(Uuid::new_v4());
        let other = user(Uuid::new_v4());
        assert!(!owns(&other, &place));

        let err = authorize(&other, &place).unwrap_err();
        assert_eq!(err.status_code(), 403);
        // Deny must not leak record contents
        assert!(!err.message().contains("Tokyo"));
    }
}
