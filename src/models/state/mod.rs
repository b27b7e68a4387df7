// Calendar state module
// The single source-of-truth snapshot held by the store

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::event::Event;
use crate::models::resource::Resource;

/// Number of seed resources in the default state.
const SEED_RESOURCE_COUNT: u8 = 15;

/// Complete calendar state snapshot.
///
/// Exclusively owned and mutated by the store; every other component gets a
/// read-only borrow. Events are value objects, so "mutating" one means
/// replacing it by id through a store operation.
///
/// Serializes to the persisted blob shape:
/// `{ "events": [...], "resources": [...], "currentDate": "YYYY-MM-DD" }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarState {
    pub events: Vec<Event>,
    /// Insertion order is display order.
    pub resources: Vec<Resource>,
    /// Viewed month; only the year and month components are meaningful.
    pub current_date: NaiveDate,
}

impl CalendarState {
    /// Default fallback state: 15 resources lettered A through O, no events,
    /// viewing the given month.
    pub fn seeded(current_date: NaiveDate) -> Self {
        let resources = (0..SEED_RESOURCE_COUNT)
            .map(|i| {
                Resource::new(
                    (i + 1).to_string(),
                    format!("Resource {}", (b'A' + i) as char),
                )
            })
            .collect();

        Self {
            events: Vec::new(),
            resources,
            current_date,
        }
    }

    /// Find an event by id.
    pub fn event(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    /// Find a resource by id.
    pub fn resource(&self, id: &str) -> Option<&Resource> {
        self.resources.iter().find(|r| r.id == id)
    }
}
