//! Roster mutations.
//!
//! Both operations resolve the identifier first, so a bad identifier always
//! wins over a roster error. Failures leave the roster untouched.

use tracing::info;

use crate::database::ActivityStore;
use crate::error::ActivityError;
use crate::services::activities_service::resolve;

pub fn signup(
    store: &mut ActivityStore,
    identifier: &str,
    email: &str,
) -> Result<String, ActivityError> {
    let name = resolve(store, identifier)?.to_string();
    let activity = store.get_mut(&name).ok_or(ActivityError::NotFound)?;

    if activity.has_participant(email) {
        return Err(ActivityError::AlreadyRegistered);
    }

    activity.participants.push(email.to_string());
    info!(activity = %name, email, participants = activity.participants.len(), "signed up");
    Ok(format!("Signed up {} for {}", email, name))
}

pub fn unregister(
    store: &mut ActivityStore,
    identifier: &str,
    email: &str,
) -> Result<String, ActivityError> {
    let name = resolve(store, identifier)?.to_string();
    let activity = store.get_mut(&name).ok_or(ActivityError::NotFound)?;

    let Some(position) = activity.participants.iter().position(|p| p == email) else {
        return Err(ActivityError::NotRegistered);
    };

    activity.participants.remove(position);
    info!(activity = %name, email, participants = activity.participants.len(), "unregistered");
    Ok(format!("Unregistered {} from {}", email, name))
}
