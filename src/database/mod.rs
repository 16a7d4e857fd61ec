pub mod activity_store;
pub mod seed;

pub use activity_store::{ActivityStore, SharedStore};
