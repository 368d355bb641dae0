use std::{path::PathBuf, sync::Arc};

use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use models::{Amenity, City, Place, Review, State, User};

use crate::errors::ServiceError;
use crate::storage::JsonStore;

/// Per-type object counts, keyed the way `GET /stats` reports them.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub struct StoreCounts {
    pub amenities: usize,
    pub cities: usize,
    pub places: usize,
    pub reviews: usize,
    pub states: usize,
    pub users: usize,
}

/// The storage facade: one file-backed map per entity type under a common
/// data directory. Opened once at startup and shared behind an `Arc`;
/// closed (final flush) at shutdown.
pub struct ObjectStore {
    states: JsonStore<Uuid, State>,
    cities: JsonStore<Uuid, City>,
    places: JsonStore<Uuid, Place>,
    users: JsonStore<Uuid, User>,
    reviews: JsonStore<Uuid, Review>,
    amenities: JsonStore<Uuid, Amenity>,
}

impl ObjectStore {
    pub async fn open<P: Into<PathBuf>>(data_dir: P) -> Result<Arc<Self>, ServiceError> {
        let dir = data_dir.into();
        let store = Self {
            states: JsonStore::open(dir.join("states.json")).await?,
            cities: JsonStore::open(dir.join("cities.json")).await?,
            places: JsonStore::open(dir.join("places.json")).await?,
            users: JsonStore::open(dir.join("users.json")).await?,
            reviews: JsonStore::open(dir.join("reviews.json")).await?,
            amenities: JsonStore::open(dir.join("amenities.json")).await?,
        };
        info!(data_dir = %dir.display(), "object store opened");
        Ok(Arc::new(store))
    }

    pub fn states(&self) -> &JsonStore<Uuid, State> { &self.states }
    pub fn cities(&self) -> &JsonStore<Uuid, City> { &self.cities }
    pub fn places(&self) -> &JsonStore<Uuid, Place> { &self.places }
    pub fn users(&self) -> &JsonStore<Uuid, User> { &self.users }
    pub fn reviews(&self) -> &JsonStore<Uuid, Review> { &self.reviews }
    pub fn amenities(&self) -> &JsonStore<Uuid, Amenity> { &self.amenities }

    pub async fn counts(&self) -> StoreCounts {
        StoreCounts {
            amenities: self.amenities.count().await,
            cities: self.cities.count().await,
            places: self.places.count().await,
            reviews: self.reviews.count().await,
            states: self.states.count().await,
            users: self.users.count().await,
        }
    }

    /// Flush every map. Writes already persist synchronously, so this is a
    /// final consistency pass before the process exits.
    pub async fn close(&self) -> Result<(), ServiceError> {
        self.states.save().await?;
        self.cities.save().await?;
        self.places.save().await?;
        self.users.save().await?;
        self.reviews.save().await?;
        self.amenities.save().await?;
        info!("object store closed");
        Ok(())
    }
}
