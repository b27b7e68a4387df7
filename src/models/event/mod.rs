// Event module
// Time-bounded calendar event owned by a single resource

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Fixed display palette. New events pick from here; the first entry is the
/// default color the edit form starts with.
pub const EVENT_PALETTE: [&str; 6] = [
    "#3788d8", "#f44336", "#4caf50", "#ff9800", "#9c27b0", "#00bcd4",
];

/// Pick a palette color deterministically from an arbitrary seed.
pub fn palette_color(seed: usize) -> &'static str {
    EVENT_PALETTE[seed % EVENT_PALETTE.len()]
}

/// A scheduled event anchored to one resource and one grid day.
///
/// `start < end` is an invariant enforced by [`Event::validate`]. The `end`
/// may spill past midnight; layout still anchors the event to its start day
/// and the bar simply overflows (known limitation, no adjacent-day render).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    /// Id of the owning resource.
    pub resource: String,
    /// Display color (hex). Orthogonal to scheduling logic.
    pub color: String,
    /// True for an event created by a single double-click that has not yet
    /// been explicitly moved or resized. Cleared on the first drop or resize.
    pub is_initial: bool,
}

impl Event {
    /// Create a new event with required fields.
    ///
    /// # Examples
    /// ```
    /// use resource_calendar::models::event::Event;
    /// use chrono::NaiveDate;
    ///
    /// let start = NaiveDate::from_ymd_opt(2026, 8, 24).unwrap().and_hms_opt(9, 0, 0).unwrap();
    /// let end = start + chrono::Duration::hours(1);
    /// let event = Event::new("1724486400000", "Team Meeting", start, end, "1").unwrap();
    /// ```
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
        resource: impl Into<String>,
    ) -> Result<Self, String> {
        let event = Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            start,
            end,
            resource: resource.into(),
            color: EVENT_PALETTE[0].to_string(),
            is_initial: false,
        };
        event.validate()?;
        Ok(event)
    }

    /// Create a builder for constructing events with optional fields.
    pub fn builder() -> EventBuilder {
        EventBuilder::new()
    }

    /// Validate the event.
    pub fn validate(&self) -> Result<(), String> {
        if self.id.trim().is_empty() {
            return Err("Event id cannot be empty".to_string());
        }

        if self.end <= self.start {
            return Err("Event end time must be after start time".to_string());
        }

        // Validate color format if present (should be hex color)
        if !self.color.is_empty()
            && (!self.color.starts_with('#') || (self.color.len() != 7 && self.color.len() != 4))
        {
            return Err("Color must be in hex format (#RRGGBB or #RGB)".to_string());
        }

        Ok(())
    }

    /// Get the duration of the event in whole minutes.
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// Half-open interval overlap test: `[start, end)` intersections count,
    /// shared endpoints do not.
    pub fn overlaps(&self, other: &Event) -> bool {
        !(self.end <= other.start || self.start >= other.end)
    }
}

/// Builder for creating events with optional fields.
pub struct EventBuilder {
    id: Option<String>,
    title: Option<String>,
    description: String,
    start: Option<NaiveDateTime>,
    end: Option<NaiveDateTime>,
    resource: Option<String>,
    color: String,
    is_initial: bool,
}

impl EventBuilder {
    pub fn new() -> Self {
        Self {
            id: None,
            title: None,
            description: String::new(),
            start: None,
            end: None,
            resource: None,
            color: EVENT_PALETTE[0].to_string(),
            is_initial: false,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn start(mut self, start: NaiveDateTime) -> Self {
        self.start = Some(start);
        self
    }

    pub fn end(mut self, end: NaiveDateTime) -> Self {
        self.end = Some(end);
        self
    }

    pub fn resource(mut self, resource: impl Into<String>) -> Self {
        self.resource = Some(resource.into());
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn is_initial(mut self, is_initial: bool) -> Self {
        self.is_initial = is_initial;
        self
    }

    /// Build the event.
    pub fn build(self) -> Result<Event, String> {
        let id = self.id.ok_or("Event id is required")?;
        let start = self.start.ok_or("Event start time is required")?;
        let end = self.end.ok_or("Event end time is required")?;
        let resource = self.resource.ok_or("Event resource is required")?;

        let event = Event {
            id,
            title: self.title.unwrap_or_default(),
            description: self.description,
            start,
            end,
            resource,
            color: self.color,
            is_initial: self.is_initial,
        };

        event.validate()?;
        Ok(event)
    }
}

impl Default for EventBuilder {
    fn default() -> Self {
        Self::new()
    }
}
