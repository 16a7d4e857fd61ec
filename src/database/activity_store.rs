//! In-memory activity storage.
//!
//! The store owns the activities in insertion order and knows nothing about
//! locking; [`SharedStore`] is the handle the web layer passes around.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::warn;

use crate::database::seed;
use crate::models::Activity;

pub type SharedStore = Arc<RwLock<ActivityStore>>;

#[derive(Debug, Clone, Default)]
pub struct ActivityStore {
    activities: Vec<Activity>,
}

impl ActivityStore {
    /// Builds a store from `activities`, keeping the first of any duplicated name.
    pub fn new(activities: Vec<Activity>) -> Self {
        let mut store = Self {
            activities: Vec::with_capacity(activities.len()),
        };
        for activity in activities {
            if store.get(&activity.name).is_some() {
                warn!(activity = %activity.name, "duplicate activity name ignored");
                continue;
            }
            store.activities.push(activity);
        }
        store
    }

    pub fn seeded() -> Self {
        Self::new(seed::mergington_activities())
    }

    pub fn into_shared(self) -> SharedStore {
        Arc::new(RwLock::new(self))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Activity> {
        self.activities.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.activities.iter().map(|a| a.name.as_str())
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.activities.iter().find(|a| a.name == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Activity> {
        self.activities.iter_mut().find(|a| a.name == name)
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }
}
