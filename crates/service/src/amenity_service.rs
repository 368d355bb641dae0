use uuid::Uuid;

use models::{Amenity, AmenityUpdate, NewAmenity};

use crate::{errors::ServiceError, storage::ObjectStore};

pub async fn list_amenities(store: &ObjectStore) -> Vec<Amenity> {
    store.amenities().all().await
}

pub async fn get_amenity(store: &ObjectStore, id: Uuid) -> Option<Amenity> {
    store.amenities().get(&id).await
}

pub async fn create_amenity(store: &ObjectStore, input: NewAmenity) -> Result<Amenity, ServiceError> {
    let amenity = Amenity::new(input);
    store.amenities().insert(amenity.id, amenity.clone()).await?;
    Ok(amenity)
}

pub async fn update_amenity(store: &ObjectStore, id: Uuid, patch: AmenityUpdate) -> Result<Amenity, ServiceError> {
    let mut updated: Option<Amenity> = None;
    store
        .amenities()
        .mutate(|map| {
            let amenity = map.get_mut(&id).ok_or_else(|| ServiceError::not_found("amenity"))?;
            amenity.apply(patch);
            updated = Some(amenity.clone());
            Ok(())
        })
        .await?;
    Ok(updated.expect("updated set"))
}

pub async fn delete_amenity(store: &ObjectStore, id: Uuid) -> Result<bool, ServiceError> {
    store.amenities().remove(&id).await
}
