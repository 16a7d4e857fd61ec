use serde::{Deserialize, Serialize, Serializer};

/// A single activity as seen by `GET /activities`; the name is the map key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityListingEntry {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
    pub id: String,
}

/// Name -> entry projection that serialises as a JSON object in store order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityListing {
    entries: Vec<(String, ActivityListingEntry)>,
}

impl ActivityListing {
    pub fn push(&mut self, name: String, entry: ActivityListingEntry) {
        self.entries.push((name, entry));
    }

    pub fn get(&self, name: &str) -> Option<&ActivityListingEntry> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, e)| e)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for ActivityListing {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter().map(|(name, entry)| (name, entry)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
