pub mod json_store;
pub mod object_store;

pub use json_store::JsonStore;
pub use object_store::{ObjectStore, StoreCounts};
