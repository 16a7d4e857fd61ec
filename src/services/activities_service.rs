use crate::database::ActivityStore;
use crate::error::ActivityError;
use crate::models::{ActivityListing, ActivityListingEntry};
use crate::services::slug_service::slugify;

/// Maps a user-supplied identifier to the canonical activity name.
///
/// Tried in order, first hit wins: exact name, case-insensitive name, slug.
/// Two names sharing a slug resolve to whichever comes first in the store.
pub fn resolve<'a>(store: &'a ActivityStore, identifier: &str) -> Result<&'a str, ActivityError> {
    if let Some(activity) = store.get(identifier) {
        return Ok(activity.name.as_str());
    }

    let lowered = identifier.to_lowercase();
    if let Some(name) = store.names().find(|name| name.to_lowercase() == lowered) {
        return Ok(name);
    }

    let slug = slugify(identifier);
    store
        .names()
        .find(|name| slugify(name) == slug)
        .ok_or(ActivityError::NotFound)
}

pub fn list_activities(store: &ActivityStore) -> ActivityListing {
    let mut listing = ActivityListing::default();
    for activity in store.iter() {
        listing.push(
            activity.name.clone(),
            ActivityListingEntry {
                description: activity.description.clone(),
                schedule: activity.schedule.clone(),
                max_participants: activity.max_participants,
                participants: activity.participants.clone(),
                id: slugify(&activity.name),
            },
        );
    }
    listing
}
