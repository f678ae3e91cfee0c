use serde::{Deserialize, Serialize};

/// A single upcoming event inside a sport group
///
/// Wire keys are the feed's short names. `favorite` lives only in the
/// model and is never read from or written to the feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "i")]
    pub id: String,
    #[serde(rename = "si")]
    pub sport_id: String,
    #[serde(rename = "d")]
    pub name: String,
    #[serde(rename = "sh", default)]
    pub short_name: String,
    #[serde(rename = "tt")]
    pub start_time: i64, // seconds since epoch
    #[serde(skip)]
    pub favorite: bool,
}

/// Two events are the same event when their identifiers match
impl PartialEq for Event {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Event {}

/// A named category of events sharing a sport identifier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SportGroup {
    #[serde(rename = "i")]
    pub id: String,
    #[serde(rename = "d")]
    pub name: String,
    #[serde(rename = "e")]
    pub events: Vec<Event>,
    #[serde(skip)]
    pub collapsed: bool,
}

impl SportGroup {
    pub fn favorite_count(&self) -> usize {
        self.events.iter().filter(|e| e.favorite).count()
    }

    /// Index of the event with the given identifier
    pub fn position_of(&self, event_id: &str) -> Option<usize> {
        self.events.iter().position(|e| e.id == event_id)
    }
}
