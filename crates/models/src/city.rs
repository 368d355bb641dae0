use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A city always belongs to one state; `state_id` comes from the request
/// path at creation and never changes afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub id: Uuid,
    pub name: String,
    pub state_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewCity {
    pub name: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct CityUpdate {
    pub name: Option<String>,
}

impl City {
    pub fn new(state_id: Uuid, input: NewCity) -> Self {
        let now = Utc::now();
        Self { id: Uuid::new_v4(), name: input.name, state_id, created_at: now, updated_at: now }
    }

    pub fn apply(&mut self, patch: CityUpdate) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        self.updated_at = Utc::now();
    }
}
