//! Domain entities shared across the workspace.
//!
//! Every entity carries the common base of `id`, `created_at` and
//! `updated_at`. Creation inputs (`New*`) and mutable-field patches
//! (`*Update`) live next to their entity; immutable fields (id, timestamps,
//! parent foreign keys) are simply absent from the patch structs, so a PUT
//! cannot touch them.

pub mod amenity;
pub mod city;
pub mod place;
pub mod review;
pub mod state;
pub mod user;

pub use amenity::{Amenity, AmenityUpdate, NewAmenity};
pub use city::{City, CityUpdate, NewCity};
pub use place::{NewPlace, Place, PlaceUpdate};
pub use review::{NewReview, Review, ReviewUpdate};
pub use state::{NewState, State, StateUpdate};
pub use user::{NewUser, User, UserUpdate};
