use uuid::Uuid;

use models::{Amenity, NewPlace, Place, PlaceUpdate};

use crate::{errors::ServiceError, storage::ObjectStore};

/// List the places of a city; the city must exist.
pub async fn list_places_of_city(store: &ObjectStore, city_id: Uuid) -> Result<Vec<Place>, ServiceError> {
    if store.cities().get(&city_id).await.is_none() {
        return Err(ServiceError::not_found("city"));
    }
    let places = store
        .places()
        .all()
        .await
        .into_iter()
        .filter(|p| p.city_id == city_id)
        .collect();
    Ok(places)
}

pub async fn get_place(store: &ObjectStore, id: Uuid) -> Option<Place> {
    store.places().get(&id).await
}

/// Create a place under a city. Both the parent city and the owning user
/// must exist; `city_id` comes from the path.
pub async fn create_place(store: &ObjectStore, city_id: Uuid, input: NewPlace) -> Result<Place, ServiceError> {
    if store.cities().get(&city_id).await.is_none() {
        return Err(ServiceError::not_found("city"));
    }
    if store.users().get(&input.user_id).await.is_none() {
        return Err(ServiceError::not_found("user"));
    }
    let place = Place::new(city_id, input);
    store.places().insert(place.id, place.clone()).await?;
    Ok(place)
}

pub async fn update_place(store: &ObjectStore, id: Uuid, patch: PlaceUpdate) -> Result<Place, ServiceError> {
    let mut updated: Option<Place> = None;
    store
        .places()
        .mutate(|map| {
            let place = map.get_mut(&id).ok_or_else(|| ServiceError::not_found("place"))?;
            place.apply(patch);
            updated = Some(place.clone());
            Ok(())
        })
        .await?;
    Ok(updated.expect("updated set"))
}

pub async fn delete_place(store: &ObjectStore, id: Uuid) -> Result<bool, ServiceError> {
    store.places().remove(&id).await
}

/// List the amenities linked to a place; the place must exist.
pub async fn list_place_amenities(store: &ObjectStore, place_id: Uuid) -> Result<Vec<Amenity>, ServiceError> {
    let place = store
        .places()
        .get(&place_id)
        .await
        .ok_or_else(|| ServiceError::not_found("place"))?;
    let mut amenities = Vec::with_capacity(place.amenity_ids.len());
    for amenity_id in &place.amenity_ids {
        if let Some(a) = store.amenities().get(amenity_id).await {
            amenities.push(a);
        }
    }
    Ok(amenities)
}

/// Link an amenity to a place. Returns the amenity and whether the link is
/// new; linking twice is not an error.
pub async fn link_amenity(
    store: &ObjectStore,
    place_id: Uuid,
    amenity_id: Uuid,
) -> Result<(Amenity, bool), ServiceError> {
    let amenity = store
        .amenities()
        .get(&amenity_id)
        .await
        .ok_or_else(|| ServiceError::not_found("amenity"))?;
    let mut newly_linked = false;
    store
        .places()
        .mutate(|map| {
            let place = map.get_mut(&place_id).ok_or_else(|| ServiceError::not_found("place"))?;
            if !place.amenity_ids.contains(&amenity_id) {
                place.amenity_ids.push(amenity_id);
                place.updated_at = chrono::Utc::now();
                newly_linked = true;
            }
            Ok(())
        })
        .await?;
    Ok((amenity, newly_linked))
}

/// Remove an amenity link. Not-found when either side is absent or the
/// place does not carry the amenity.
pub async fn unlink_amenity(store: &ObjectStore, place_id: Uuid, amenity_id: Uuid) -> Result<(), ServiceError> {
    if store.amenities().get(&amenity_id).await.is_none() {
        return Err(ServiceError::not_found("amenity"));
    }
    store
        .places()
        .mutate(|map| {
            let place = map.get_mut(&place_id).ok_or_else(|| ServiceError::not_found("place"))?;
            let before = place.amenity_ids.len();
            place.amenity_ids.retain(|a| *a != amenity_id);
            if place.amenity_ids.len() == before {
                return Err(ServiceError::not_found("amenity"));
            }
            place.updated_at = chrono::Utc::now();
            Ok(())
        })
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::{NewAmenity, NewCity, NewState, NewUser};
    use crate::{amenity_service, city_service, state_service, test_support::temp_store, user_service};

    async fn seed_city_and_user(store: &ObjectStore) -> Result<(Uuid, Uuid), anyhow::Error> {
        let state = state_service::create_state(store, NewState { name: "California".into() }).await?;
        let city = city_service::create_city(store, state.id, NewCity { name: "Fremont".into() }).await?;
        let user = user_service::create_user(
            store,
            NewUser {
                email: "host@example.com".into(),
                password: "secret".into(),
                first_name: "Ada".into(),
                last_name: "Lovelace".into(),
            },
        )
        .await?;
        Ok((city.id, user.id))
    }

    fn new_place(user_id: Uuid, name: &str) -> NewPlace {
        NewPlace {
            name: name.into(),
            user_id,
            description: String::new(),
            number_rooms: 2,
            number_bathrooms: 1,
            max_guest: 4,
            price_by_night: 120,
            latitude: 37.55,
            longitude: -121.98,
            amenity_ids: Vec::new(),
        }
    }

    #[tokio::test]
    async fn place_checks_city_and_user() -> Result<(), anyhow::Error> {
        let store = temp_store().await;
        let (city_id, user_id) = seed_city_and_user(&store).await?;

        let bad_city = create_place(&store, Uuid::new_v4(), new_place(user_id, "Loft")).await;
        assert!(matches!(bad_city, Err(ServiceError::NotFound(_))));

        let bad_user = create_place(&store, city_id, new_place(Uuid::new_v4(), "Loft")).await;
        assert!(matches!(bad_user, Err(ServiceError::NotFound(_))));

        let place = create_place(&store, city_id, new_place(user_id, "Loft")).await?;
        assert_eq!(place.city_id, city_id);
        assert_eq!(place.user_id, user_id);

        let listed = list_places_of_city(&store, city_id).await?;
        assert_eq!(listed.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn amenity_linking_roundtrip() -> Result<(), anyhow::Error> {
        let store = temp_store().await;
        let (city_id, user_id) = seed_city_and_user(&store).await?;
        let place = create_place(&store, city_id, new_place(user_id, "Loft")).await?;
        let wifi = amenity_service::create_amenity(&store, NewAmenity { name: "Wifi".into() }).await?;

        let (linked, newly) = link_amenity(&store, place.id, wifi.id).await?;
        assert_eq!(linked.id, wifi.id);
        assert!(newly);

        // idempotent second link
        let (_, newly) = link_amenity(&store, place.id, wifi.id).await?;
        assert!(!newly);

        let amenities = list_place_amenities(&store, place.id).await?;
        assert_eq!(amenities.len(), 1);

        unlink_amenity(&store, place.id, wifi.id).await?;
        assert!(list_place_amenities(&store, place.id).await?.is_empty());

        let gone = unlink_amenity(&store, place.id, wifi.id).await;
        assert!(matches!(gone, Err(ServiceError::NotFound(_))));
        Ok(())
    }
}
