use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct State {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewState {
    pub name: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct StateUpdate {
    pub name: Option<String>,
}

impl State {
    pub fn new(input: NewState) -> Self {
        let now = Utc::now();
        Self { id: Uuid::new_v4(), name: input.name, created_at: now, updated_at: now }
    }

    /// Apply a patch; `updated_at` is refreshed even when the patch is empty.
    pub fn apply(&mut self, patch: StateUpdate) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        self.updated_at = Utc::now();
    }
}
