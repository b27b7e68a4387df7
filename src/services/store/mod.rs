//! Calendar state store.
//!
//! Owns the single [`CalendarState`] snapshot and the injected storage port.
//! Every operation is a reducer transition `(state, action) -> new state`
//! followed by a synchronous persistence write before control returns, so a
//! read after any mutation always observes what was stored (write-then-read
//! consistency; writes are ordered by mutation sequence because nothing here
//! is concurrent). A failed save keeps the in-memory state authoritative for
//! the session and is surfaced as a warning, never an error to the caller.

use chrono::{Local, Months, NaiveDate};
use thiserror::Error;

use crate::models::event::Event;
use crate::models::resource::Resource;
use crate::models::state::CalendarState;
use crate::services::storage::{StoragePort, STORAGE_KEY};

/// Rejected store operations. These are all recoverable: the previous state
/// is retained unchanged.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("event with id {0} already exists")]
    DuplicateEvent(String),
    #[error("event with id {0} not found")]
    EventNotFound(String),
    #[error("resource with id {0} not found")]
    UnknownResource(String),
    #[error("resource with id {0} already exists")]
    DuplicateResource(String),
    #[error("invalid event: {0}")]
    InvalidEvent(String),
}

/// Single source of truth for calendar state, with injected persistence.
pub struct CalendarStore {
    state: CalendarState,
    storage: Box<dyn StoragePort>,
}

impl CalendarStore {
    /// Initialize from the persisted snapshot, falling back to the seeded
    /// default state when the blob is missing, unreadable, or malformed.
    /// A malformed blob is rejected whole; there is no partial load.
    pub fn load(storage: Box<dyn StoragePort>) -> Self {
        let state = match storage.load(STORAGE_KEY) {
            Ok(Some(blob)) => match serde_json::from_str::<CalendarState>(&blob) {
                Ok(state) => state,
                Err(err) => {
                    log::warn!("Stored calendar state is malformed, using defaults: {err}");
                    Self::default_state()
                }
            },
            Ok(None) => {
                log::info!("No stored calendar state, starting from defaults");
                Self::default_state()
            }
            Err(err) => {
                log::warn!("Failed to read stored calendar state, using defaults: {err}");
                Self::default_state()
            }
        };

        Self { state, storage }
    }

    fn default_state() -> CalendarState {
        CalendarState::seeded(Local::now().date_naive())
    }

    /// The current consistent snapshot. Read-only; mutations go through the
    /// operations below.
    pub fn state(&self) -> &CalendarState {
        &self.state
    }

    /// Add a new event. Rejects invalid events, duplicate ids, and events
    /// referencing an unknown resource.
    pub fn add_event(&mut self, event: Event) -> Result<(), StoreError> {
        event.validate().map_err(StoreError::InvalidEvent)?;
        if self.state.event(&event.id).is_some() {
            return Err(StoreError::DuplicateEvent(event.id));
        }
        if self.state.resource(&event.resource).is_none() {
            return Err(StoreError::UnknownResource(event.resource));
        }

        self.state.events.push(event);
        self.persist();
        Ok(())
    }

    /// Replace an event by id. A missing id is an error, never an insert,
    /// so an update can never create a duplicate.
    pub fn update_event(&mut self, event: Event) -> Result<(), StoreError> {
        event.validate().map_err(StoreError::InvalidEvent)?;
        if self.state.resource(&event.resource).is_none() {
            return Err(StoreError::UnknownResource(event.resource));
        }

        let slot = self
            .state
            .events
            .iter_mut()
            .find(|e| e.id == event.id)
            .ok_or_else(|| StoreError::EventNotFound(event.id.clone()))?;
        *slot = event;
        self.persist();
        Ok(())
    }

    /// Delete an event by id. Terminal: subsequent updates with the same id
    /// fail with `EventNotFound`.
    pub fn delete_event(&mut self, id: &str) -> Result<(), StoreError> {
        let before = self.state.events.len();
        self.state.events.retain(|e| e.id != id);
        if self.state.events.len() == before {
            return Err(StoreError::EventNotFound(id.to_string()));
        }

        self.persist();
        Ok(())
    }

    /// Append a resource. Insertion order is display order.
    pub fn add_resource(&mut self, resource: Resource) -> Result<(), StoreError> {
        if self.state.resource(&resource.id).is_some() {
            return Err(StoreError::DuplicateResource(resource.id));
        }

        self.state.resources.push(resource);
        self.persist();
        Ok(())
    }

    /// Change the viewed month. Only year and month of `date` matter.
    pub fn set_viewed_month(&mut self, date: NaiveDate) {
        self.state.current_date = date;
        self.persist();
    }

    /// Step the viewed month forward or backward, for header navigation.
    pub fn step_month(&mut self, months: i32) {
        let current = self.state.current_date;
        let stepped = if months >= 0 {
            current.checked_add_months(Months::new(months as u32))
        } else {
            current.checked_sub_months(Months::new(months.unsigned_abs()))
        };

        if let Some(date) = stepped {
            self.set_viewed_month(date);
        }
    }

    fn persist(&mut self) {
        let blob = match serde_json::to_string(&self.state) {
            Ok(blob) => blob,
            Err(err) => {
                log::warn!("Failed to serialize calendar state: {err}");
                return;
            }
        };

        if let Err(err) = self.storage.store(STORAGE_KEY, &blob) {
            log::warn!("Failed to persist calendar state, in-memory state remains authoritative: {err}");
        }
    }
}
