// Test fixtures - reusable test data
// Provides consistent test data across all test files

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use resource_calendar::models::event::Event;

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Returns Aug 24, 2026 (a Monday)
    pub fn grid_day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 24).unwrap()
    }

    /// A time on the grid day
    pub fn at(hour: u32, minute: u32) -> NaiveDateTime {
        grid_day().and_hms_opt(hour, minute, 0).unwrap()
    }
}

/// Sample events for testing
pub mod events {
    use super::*;

    /// An event on the grid day with the given id, resource, and hour range
    pub fn timed(id: &str, resource: &str, start: (u32, u32), end: (u32, u32)) -> Event {
        Event::new(
            id,
            format!("Event {id}"),
            dates::at(start.0, start.1),
            dates::at(end.0, end.1),
            resource,
        )
        .unwrap()
    }

    /// The canonical 09:00-10:00 meeting on resource 1
    pub fn morning_meeting() -> Event {
        timed("42", "1", (9, 0), (10, 0))
    }
}

/// Pixel offset for a minute-of-day in a column of the given width
pub fn offset_for(minutes: i64, column_width_px: f32) -> f32 {
    minutes as f32 / 1440.0 * column_width_px
}
