use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A place belongs to one city and one user. The amenity relation is kept
/// denormalized as a list of amenity ids on the place itself.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub id: Uuid,
    pub name: String,
    pub city_id: Uuid,
    pub user_id: Uuid,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub number_rooms: i64,
    #[serde(default)]
    pub number_bathrooms: i64,
    #[serde(default)]
    pub max_guest: i64,
    #[serde(default)]
    pub price_by_night: i64,
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
    #[serde(default)]
    pub amenity_ids: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// `city_id` comes from the request path, not the body.
#[derive(Clone, Debug, Deserialize)]
pub struct NewPlace {
    pub name: String,
    pub user_id: Uuid,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub number_rooms: i64,
    #[serde(default)]
    pub number_bathrooms: i64,
    #[serde(default)]
    pub max_guest: i64,
    #[serde(default)]
    pub price_by_night: i64,
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
    #[serde(default)]
    pub amenity_ids: Vec<Uuid>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct PlaceUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub number_rooms: Option<i64>,
    pub number_bathrooms: Option<i64>,
    pub max_guest: Option<i64>,
    pub price_by_night: Option<i64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub amenity_ids: Option<Vec<Uuid>>,
}

impl Place {
    pub fn new(city_id: Uuid, input: NewPlace) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: input.name,
            city_id,
            user_id: input.user_id,
            description: input.description,
            number_rooms: input.number_rooms,
            number_bathrooms: input.number_bathrooms,
            max_guest: input.max_guest,
            price_by_night: input.price_by_night,
            latitude: input.latitude,
            longitude: input.longitude,
            amenity_ids: input.amenity_ids,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply(&mut self, patch: PlaceUpdate) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(number_rooms) = patch.number_rooms {
            self.number_rooms = number_rooms;
        }
        if let Some(number_bathrooms) = patch.number_bathrooms {
            self.number_bathrooms = number_bathrooms;
        }
        if let Some(max_guest) = patch.max_guest {
            self.max_guest = max_guest;
        }
        if let Some(price_by_night) = patch.price_by_night {
            self.price_by_night = price_by_night;
        }
        if let Some(latitude) = patch.latitude {
            self.latitude = latitude;
        }
        if let Some(longitude) = patch.longitude {
            self.longitude = longitude;
        }
        if let Some(amenity_ids) = patch.amenity_ids {
            self.amenity_ids = amenity_ids;
        }
        self.updated_at = Utc::now();
    }

    /// Whether the place offers every amenity in `wanted`.
    pub fn has_all_amenities(&self, wanted: &[Uuid]) -> bool {
        wanted.iter().all(|a| self.amenity_ids.contains(a))
    }
}
