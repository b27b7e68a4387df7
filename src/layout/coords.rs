//! Pixel/time coordinate mapping for day columns.
//!
//! A day column spans the full 1440 minutes of its grid day; every mapping
//! here is linear in the measured column width. The width comes from the
//! host's rendered layout and is treated as an opaque positive number; a
//! zero or negative width means no mapping is possible and every function
//! returns `None` rather than dividing by it.

use chrono::NaiveDateTime;

use crate::models::event::Event;
use crate::utils::date::minutes_between;

pub const MINUTES_PER_DAY: i64 = 1440;

/// Horizontal placement of an event bar inside its day column, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventGeometry {
    pub left_px: f32,
    pub width_px: f32,
}

/// Convert a pixel offset from the column's left edge to a minute-of-day,
/// clamped to `[0, 1439]`.
pub fn pixel_offset_to_minutes(offset_px: f32, column_width_px: f32) -> Option<i64> {
    if column_width_px <= 0.0 {
        return None;
    }
    let minutes = (offset_px / column_width_px * MINUTES_PER_DAY as f32).floor() as i64;
    Some(minutes.clamp(0, MINUTES_PER_DAY - 1))
}

/// Convert a minute-of-day back to a pixel offset from the column's left edge.
pub fn minutes_to_pixel_offset(minutes: i64, column_width_px: f32) -> Option<f32> {
    if column_width_px <= 0.0 {
        return None;
    }
    Some(minutes as f32 / MINUTES_PER_DAY as f32 * column_width_px)
}

/// Convert a signed pixel delta to a signed minute delta using the column's
/// minute-per-pixel ratio. Used for resize gestures.
pub fn pixels_to_minute_delta(delta_px: f32, column_width_px: f32) -> Option<i64> {
    if column_width_px <= 0.0 {
        return None;
    }
    Some((delta_px / column_width_px * MINUTES_PER_DAY as f32).round() as i64)
}

/// Bar geometry for an event within the column that starts at `day_start`.
///
/// The left edge derives from `event.start - day_start`, the width from the
/// event duration. An event ending past midnight simply produces a bar wider
/// than the column.
pub fn event_geometry(
    event: &Event,
    day_start: NaiveDateTime,
    column_width_px: f32,
) -> Option<EventGeometry> {
    let left_px = minutes_to_pixel_offset(minutes_between(day_start, event.start), column_width_px)?;
    let width_px = minutes_to_pixel_offset(event.duration_minutes(), column_width_px)?;
    Some(EventGeometry { left_px, width_px })
}
