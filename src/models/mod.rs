pub mod activity;
pub mod activity_listing;

pub use activity::Activity;
pub use activity_listing::{ActivityListing, ActivityListingEntry, MessageResponse};
