use uuid::Uuid;

use models::{NewReview, Review, ReviewUpdate};

use crate::{errors::ServiceError, storage::ObjectStore};

/// List the reviews of a place; the place must exist.
pub async fn list_reviews_of_place(store: &ObjectStore, place_id: Uuid) -> Result<Vec<Review>, ServiceError> {
    if store.places().get(&place_id).await.is_none() {
        return Err(ServiceError::not_found("place"));
    }
    let reviews = store
        .reviews()
        .all()
        .await
        .into_iter()
        .filter(|r| r.place_id == place_id)
        .collect();
    Ok(reviews)
}

pub async fn get_review(store: &ObjectStore, id: Uuid) -> Option<Review> {
    store.reviews().get(&id).await
}

/// Create a review under a place. The place and the authoring user must
/// exist; `place_id` comes from the path.
pub async fn create_review(store: &ObjectStore, place_id: Uuid, input: NewReview) -> Result<Review, ServiceError> {
    if store.places().get(&place_id).await.is_none() {
        return Err(ServiceError::not_found("place"));
    }
    if store.users().get(&input.user_id).await.is_none() {
        return Err(ServiceError::not_found("user"));
    }
    let review = Review::new(place_id, input);
    store.reviews().insert(review.id, review.clone()).await?;
    Ok(review)
}

pub async fn update_review(store: &ObjectStore, id: Uuid, patch: ReviewUpdate) -> Result<Review, ServiceError> {
    let mut updated: Option<Review> = None;
    store
        .reviews()
        .mutate(|map| {
            let review = map.get_mut(&id).ok_or_else(|| ServiceError::not_found("review"))?;
            review.apply(patch);
            updated = Some(review.clone());
            Ok(())
        })
        .await?;
    Ok(updated.expect("updated set"))
}

pub async fn delete_review(store: &ObjectStore, id: Uuid) -> Result<bool, ServiceError> {
    store.reviews().remove(&id).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::{NewCity, NewPlace, NewState, NewUser};
    use crate::{city_service, place_service, state_service, test_support::temp_store, user_service};

    #[tokio::test]
    async fn review_lifecycle_with_parent_checks() -> Result<(), anyhow::Error> {
        let store = temp_store().await;
        let state = state_service::create_state(&store, NewState { name: "California".into() }).await?;
        let city = city_service::create_city(&store, state.id, NewCity { name: "Fremont".into() }).await?;
        let user = user_service::create_user(
            &store,
            NewUser {
                email: "guest@example.com".into(),
                password: "secret".into(),
                first_name: String::new(),
                last_name: String::new(),
            },
        )
        .await?;
        let place = place_service::create_place(
            &store,
            city.id,
            NewPlace {
                name: "Loft".into(),
                user_id: user.id,
                description: String::new(),
                number_rooms: 0,
                number_bathrooms: 0,
                max_guest: 0,
                price_by_night: 0,
                latitude: 0.0,
                longitude: 0.0,
                amenity_ids: Vec::new(),
            },
        )
        .await?;

        let orphan = create_review(
            &store,
            Uuid::new_v4(),
            NewReview { text: "Great".into(), user_id: user.id },
        )
        .await;
        assert!(matches!(orphan, Err(ServiceError::NotFound(_))));

        let ghost_author = create_review(
            &store,
            place.id,
            NewReview { text: "Great".into(), user_id: Uuid::new_v4() },
        )
        .await;
        assert!(matches!(ghost_author, Err(ServiceError::NotFound(_))));

        let review = create_review(
            &store,
            place.id,
            NewReview { text: "Great stay".into(), user_id: user.id },
        )
        .await?;
        assert_eq!(review.place_id, place.id);

        let listed = list_reviews_of_place(&store, place.id).await?;
        assert_eq!(listed.len(), 1);

        let updated = update_review(&store, review.id, ReviewUpdate { text: Some("Even better".into()) }).await?;
        assert_eq!(updated.text, "Even better");
        assert_eq!(updated.user_id, user.id);

        assert!(delete_review(&store, review.id).await?);
        assert!(get_review(&store, review.id).await.is_none());
        Ok(())
    }
}
