use uuid::Uuid;

use models::{NewUser, User, UserUpdate};

use crate::{errors::ServiceError, storage::ObjectStore};

pub async fn list_users(store: &ObjectStore) -> Vec<User> {
    store.users().all().await
}

pub async fn get_user(store: &ObjectStore, id: Uuid) -> Option<User> {
    store.users().get(&id).await
}

pub async fn create_user(store: &ObjectStore, input: NewUser) -> Result<User, ServiceError> {
    let user = User::new(input);
    store.users().insert(user.id, user.clone()).await?;
    Ok(user)
}

pub async fn update_user(store: &ObjectStore, id: Uuid, patch: UserUpdate) -> Result<User, ServiceError> {
    let mut updated: Option<User> = None;
    store
        .users()
        .mutate(|map| {
            let user = map.get_mut(&id).ok_or_else(|| ServiceError::not_found("user"))?;
            user.apply(patch);
            updated = Some(user.clone());
            Ok(())
        })
        .await?;
    Ok(updated.expect("updated set"))
}

pub async fn delete_user(store: &ObjectStore, id: Uuid) -> Result<bool, ServiceError> {
    store.users().remove(&id).await
}
