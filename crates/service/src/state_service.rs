use uuid::Uuid;

use models::{NewState, State, StateUpdate};

use crate::{errors::ServiceError, storage::ObjectStore};

/// List every state.
pub async fn list_states(store: &ObjectStore) -> Vec<State> {
    store.states().all().await
}

/// Get a state by id.
pub async fn get_state(store: &ObjectStore, id: Uuid) -> Option<State> {
    store.states().get(&id).await
}

/// Create and persist a new state.
pub async fn create_state(store: &ObjectStore, input: NewState) -> Result<State, ServiceError> {
    let state = State::new(input);
    store.states().insert(state.id, state.clone()).await?;
    Ok(state)
}

/// Apply a patch to a state and persist.
pub async fn update_state(store: &ObjectStore, id: Uuid, patch: StateUpdate) -> Result<State, ServiceError> {
    let mut updated: Option<State> = None;
    store
        .states()
        .mutate(|map| {
            let state = map.get_mut(&id).ok_or_else(|| ServiceError::not_found("state"))?;
            state.apply(patch);
            updated = Some(state.clone());
            Ok(())
        })
        .await?;
    Ok(updated.expect("updated set"))
}

/// Delete a state; returns whether it existed.
pub async fn delete_state(store: &ObjectStore, id: Uuid) -> Result<bool, ServiceError> {
    store.states().remove(&id).await
}
