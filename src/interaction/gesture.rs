//! Drag and resize gesture resolution.
//!
//! One explicit state machine value per interaction layer: `Idle`,
//! `Dragging`, `ResizingStart`, or `ResizingEnd`. The resolver turns raw
//! pointer input (pixel offsets and deltas supplied by the host's
//! drag-and-drop transport) into candidate event mutations; invalid
//! candidates are dropped and the previous valid state stands.
//!
//! Resize candidates are emitted on every pointer move, matching the
//! live-apply reference behavior. A host that prefers to cut write
//! amplification can buffer the returned events and commit only the last
//! one when the gesture finishes; nothing here depends on intermediate
//! commits.

use chrono::{NaiveDate, NaiveDateTime, Utc};

use crate::layout::coords::{pixel_offset_to_minutes, pixels_to_minute_delta};
use crate::models::event::{palette_color, Event};
use crate::utils::date::{add_minutes, in_range};

/// Duration given to a fresh double-click event and to an `is_initial` event
/// on its first drop. The legacy default was 1500 minutes; an hour is sane.
pub const DEFAULT_INITIAL_DURATION_MINUTES: i64 = 60;

/// The in-progress interaction, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GestureState {
    Idle,
    Dragging { event_id: String, is_initial: bool },
    ResizingStart { event_id: String },
    ResizingEnd { event_id: String },
}

/// What a double-click on a cell resolves to.
#[derive(Debug, Clone, PartialEq)]
pub enum CellActivation {
    /// An existing event occupies the clicked time slot; surface it for
    /// editing (the host's edit modal takes it from here).
    EditExisting(String),
    /// Empty slot: a new `is_initial` event anchored at the clicked time,
    /// ready for `add_event`.
    CreateNew(Event),
}

/// Generate an event id from the current time. Millisecond timestamps keep
/// numeric-string ids ordered by creation.
pub fn generate_event_id() -> String {
    Utc::now().timestamp_millis().to_string()
}

/// Interprets pointer gestures against the current event set.
#[derive(Debug)]
pub struct GestureResolver {
    state: GestureState,
    initial_duration_minutes: i64,
}

impl Default for GestureResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl GestureResolver {
    pub fn new() -> Self {
        Self {
            state: GestureState::Idle,
            initial_duration_minutes: DEFAULT_INITIAL_DURATION_MINUTES,
        }
    }

    /// Override the duration applied to `is_initial` events.
    pub fn with_initial_duration(minutes: i64) -> Self {
        Self {
            state: GestureState::Idle,
            initial_duration_minutes: minutes,
        }
    }

    pub fn state(&self) -> &GestureState {
        &self.state
    }

    pub fn is_idle(&self) -> bool {
        self.state == GestureState::Idle
    }

    /// Start dragging an event's body. Carries the `is_initial` flag so the
    /// drop knows whether to apply the fixed initial duration.
    pub fn begin_drag(&mut self, event: &Event) {
        self.state = GestureState::Dragging {
            event_id: event.id.clone(),
            is_initial: event.is_initial,
        };
    }

    /// Resolve a drop onto a destination cell.
    ///
    /// The drop offset within the destination column becomes the new start
    /// time, anchored to the destination day. An `is_initial` event gets the
    /// fixed initial duration and loses the flag; any other event keeps its
    /// duration. The event moves to the destination resource. Returns the
    /// updated event to feed to `update_event`, or `None` when no mutation
    /// should be applied (wrong event, no active drag, unusable column
    /// width). The gesture ends either way.
    pub fn resolve_drop(
        &mut self,
        event: &Event,
        dest_resource: &str,
        dest_day: NaiveDate,
        drop_offset_px: f32,
        column_width_px: f32,
    ) -> Option<Event> {
        let GestureState::Dragging {
            event_id,
            is_initial,
        } = std::mem::replace(&mut self.state, GestureState::Idle)
        else {
            log::warn!("Drop without an active drag, ignoring");
            return None;
        };

        if event_id != event.id {
            log::warn!("Drop for event {} but drag was {}, ignoring", event.id, event_id);
            return None;
        }

        let minutes = pixel_offset_to_minutes(drop_offset_px, column_width_px)?;
        let new_start = day_time(dest_day, minutes);
        let new_end = if is_initial {
            add_minutes(new_start, self.initial_duration_minutes)
        } else {
            add_minutes(new_start, event.duration_minutes())
        };

        let mut moved = event.clone();
        moved.start = new_start;
        moved.end = new_end;
        moved.resource = dest_resource.to_string();
        moved.is_initial = false;
        Some(moved)
    }

    /// Grab the left edge handle (start time).
    pub fn begin_resize_start(&mut self, event: &Event) {
        self.state = GestureState::ResizingStart {
            event_id: event.id.clone(),
        };
    }

    /// Grab the right edge handle (end time).
    pub fn begin_resize_end(&mut self, event: &Event) {
        self.state = GestureState::ResizingEnd {
            event_id: event.id.clone(),
        };
    }

    /// Apply a pointer move while resizing. `delta_px` is the pixel distance
    /// from the grabbed edge's current position; it converts through the
    /// column's minute-per-pixel ratio onto the respective edge.
    ///
    /// A candidate that would invert the interval (`start >= end`) is
    /// rejected: the previous valid times stand and the gesture simply does
    /// not progress.
    pub fn update_resize(
        &mut self,
        event: &Event,
        delta_px: f32,
        column_width_px: f32,
    ) -> Option<Event> {
        let delta_minutes = pixels_to_minute_delta(delta_px, column_width_px)?;

        let (new_start, new_end) = match &self.state {
            GestureState::ResizingStart { event_id } if *event_id == event.id => {
                (add_minutes(event.start, delta_minutes), event.end)
            }
            GestureState::ResizingEnd { event_id } if *event_id == event.id => {
                (event.start, add_minutes(event.end, delta_minutes))
            }
            _ => return None,
        };

        if new_start >= new_end {
            log::warn!("Resize would invert event {}, ignoring", event.id);
            return None;
        }

        let mut resized = event.clone();
        resized.start = new_start;
        resized.end = new_end;
        // An explicit resize counts as sizing the event, like a first drop.
        resized.is_initial = false;
        Some(resized)
    }

    /// Pointer released: back to `Idle`. No extra mutation is needed since
    /// resize updates were already emitted continuously.
    pub fn finish(&mut self) {
        self.state = GestureState::Idle;
    }

    /// Resolve a double-click on the empty area of a cell.
    ///
    /// If an existing event's `[start, end)` contains the clicked instant,
    /// that event is surfaced for editing. Otherwise a new `is_initial`
    /// event with the default short duration and a palette color is
    /// proposed, anchored at the clicked time on the clicked resource/day.
    pub fn resolve_double_click(
        &self,
        cell_events: &[Event],
        resource: &str,
        day: NaiveDate,
        click_offset_px: f32,
        column_width_px: f32,
    ) -> Option<CellActivation> {
        let minutes = pixel_offset_to_minutes(click_offset_px, column_width_px)?;
        let instant = day_time(day, minutes);

        if let Some(hit) = cell_events
            .iter()
            .find(|e| in_range(instant, e.start, e.end))
        {
            return Some(CellActivation::EditExisting(hit.id.clone()));
        }

        let id = generate_event_id();
        let color_seed = id.parse::<usize>().unwrap_or(0);
        let event = Event {
            id,
            title: "New Event".to_string(),
            description: String::new(),
            start: instant,
            end: add_minutes(instant, self.initial_duration_minutes),
            resource: resource.to_string(),
            color: palette_color(color_seed).to_string(),
            is_initial: true,
        };
        Some(CellActivation::CreateNew(event))
    }
}

fn day_time(day: NaiveDate, minute_of_day: i64) -> NaiveDateTime {
    add_minutes(day.and_hms_opt(0, 0, 0).unwrap(), minute_of_day)
}
