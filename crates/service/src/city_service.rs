use uuid::Uuid;

use models::{City, CityUpdate, NewCity};

use crate::{errors::ServiceError, storage::ObjectStore};

/// List the cities of a state; the state must exist.
pub async fn list_cities_of_state(store: &ObjectStore, state_id: Uuid) -> Result<Vec<City>, ServiceError> {
    if store.states().get(&state_id).await.is_none() {
        return Err(ServiceError::not_found("state"));
    }
    let cities = store
        .cities()
        .all()
        .await
        .into_iter()
        .filter(|c| c.state_id == state_id)
        .collect();
    Ok(cities)
}

pub async fn get_city(store: &ObjectStore, id: Uuid) -> Option<City> {
    store.cities().get(&id).await
}

/// Create a city under a state. The parent id comes from the path and wins
/// over anything the body tried to set.
pub async fn create_city(store: &ObjectStore, state_id: Uuid, input: NewCity) -> Result<City, ServiceError> {
    if store.states().get(&state_id).await.is_none() {
        return Err(ServiceError::not_found("state"));
    }
    let city = City::new(state_id, input);
    store.cities().insert(city.id, city.clone()).await?;
    Ok(city)
}

pub async fn update_city(store: &ObjectStore, id: Uuid, patch: CityUpdate) -> Result<City, ServiceError> {
    let mut updated: Option<City> = None;
    store
        .cities()
        .mutate(|map| {
            let city = map.get_mut(&id).ok_or_else(|| ServiceError::not_found("city"))?;
            city.apply(patch);
            updated = Some(city.clone());
            Ok(())
        })
        .await?;
    Ok(updated.expect("updated set"))
}

pub async fn delete_city(store: &ObjectStore, id: Uuid) -> Result<bool, ServiceError> {
    store.cities().remove(&id).await
}
