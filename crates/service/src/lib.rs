//! Service layer providing business-oriented CRUD operations on top of models.
//! - Separates resource lifecycle logic from the HTTP layer.
//! - Reuses entity definitions from the `models` crate.
//! - Persists through the file-backed object store in `storage`.

pub mod errors;
pub mod storage;

pub mod amenity_service;
pub mod city_service;
pub mod place_service;
pub mod review_service;
pub mod search_service;
pub mod state_service;
pub mod user_service;

#[cfg(test)]
pub mod test_support;
