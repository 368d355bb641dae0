use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Amenity {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewAmenity {
    pub name: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct AmenityUpdate {
    pub name: Option<String>,
}

impl Amenity {
    pub fn new(input: NewAmenity) -> Self {
        let now = Utc::now();
        Self { id: Uuid::new_v4(), name: input.name, created_at: now, updated_at: now }
    }

    pub fn apply(&mut self, patch: AmenityUpdate) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        self.updated_at = Utc::now();
    }
}
