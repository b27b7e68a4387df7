//! Month grid composition.
//!
//! Enumerates the day columns for the viewed month, binds each
//! (resource, day) cell to its events, and delegates to lane packing and
//! coordinate mapping for per-event placement. Purely a read layer: it
//! borrows the state and holds nothing beyond the measured column width.

use chrono::{Datelike, NaiveDate};

use super::coords::{event_geometry, EventGeometry};
use super::lanes::{pack_lanes, LaneLayout};
use crate::models::event::Event;
use crate::models::state::CalendarState;

/// Vertical space per lane when computing cell heights.
pub const LANE_HEIGHT_PX: f32 = 28.0;

/// All days of the month containing `current`, in order.
pub fn month_days(current: NaiveDate) -> Vec<NaiveDate> {
    let first = current.with_day(1).unwrap();
    let days_in_month = match first.month() {
        12 => NaiveDate::from_ymd_opt(first.year() + 1, 1, 1),
        m => NaiveDate::from_ymd_opt(first.year(), m + 1, 1),
    }
    .unwrap()
    .signed_duration_since(first)
    .num_days() as u32;

    (1..=days_in_month)
        .map(|day| first.with_day(day).unwrap())
        .collect()
}

/// Cell height scaling with the number of lanes. An empty cell still gets
/// one lane of height so the row never collapses.
pub fn cell_height(lane_count: usize) -> f32 {
    lane_count.max(1) as f32 * LANE_HEIGHT_PX
}

/// Placement of one event bar within its cell.
#[derive(Debug, Clone, PartialEq)]
pub struct EventPlacement {
    pub event_id: String,
    pub lane: usize,
    pub geometry: EventGeometry,
}

/// Fully laid-out cell: the lane assignment plus per-event bar placement.
#[derive(Debug, Clone, PartialEq)]
pub struct CellLayout {
    pub lanes: LaneLayout,
    pub placements: Vec<EventPlacement>,
}

impl CellLayout {
    pub fn height_px(&self) -> f32 {
        cell_height(self.lanes.lane_count())
    }
}

/// Read-only composer over a state snapshot plus the measured column width.
pub struct GridComposer<'a> {
    state: &'a CalendarState,
    column_width_px: f32,
}

impl<'a> GridComposer<'a> {
    pub fn new(state: &'a CalendarState, column_width_px: f32) -> Self {
        Self {
            state,
            column_width_px,
        }
    }

    /// Day columns for the currently viewed month.
    pub fn days(&self) -> Vec<NaiveDate> {
        month_days(self.state.current_date)
    }

    /// Events belonging to one cell: matching resource, starting on that day.
    pub fn events_in_cell(&self, resource_id: &str, date: NaiveDate) -> Vec<&'a Event> {
        self.state
            .events
            .iter()
            .filter(|e| e.resource == resource_id && e.start.date() == date)
            .collect()
    }

    /// Full layout for one cell. Placements follow lane-packing order
    /// (start time, then id); events are skipped from placement only when
    /// the column width admits no pixel mapping.
    pub fn cell_layout(&self, resource_id: &str, date: NaiveDate) -> CellLayout {
        let cell_events: Vec<Event> = self
            .events_in_cell(resource_id, date)
            .into_iter()
            .cloned()
            .collect();
        let lanes = pack_lanes(&cell_events);

        let day_start = date.and_hms_opt(0, 0, 0).unwrap();
        let mut placements: Vec<EventPlacement> = cell_events
            .iter()
            .filter_map(|event| {
                let lane = lanes.lane_of(&event.id)?;
                let geometry = event_geometry(event, day_start, self.column_width_px)?;
                Some(EventPlacement {
                    event_id: event.id.clone(),
                    lane,
                    geometry,
                })
            })
            .collect();
        placements.sort_by(|a, b| a.lane.cmp(&b.lane).then(a.event_id.cmp(&b.event_id)));

        CellLayout { lanes, placements }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use test_case::test_case;

    fn state_with_events(events: Vec<Event>) -> CalendarState {
        let mut state = CalendarState::seeded(NaiveDate::from_ymd_opt(2026, 8, 24).unwrap());
        state.events = events;
        state
    }

    fn event(id: &str, resource: &str, day: u32, start_h: u32, end_h: u32) -> Event {
        let date = NaiveDate::from_ymd_opt(2026, 8, day).unwrap();
        Event::new(
            id,
            id,
            date.and_hms_opt(start_h, 0, 0).unwrap(),
            date.and_hms_opt(end_h, 0, 0).unwrap(),
            resource,
        )
        .unwrap()
    }

    #[test_case(2026, 2, 28 ; "february non leap")]
    #[test_case(2028, 2, 29 ; "february leap")]
    #[test_case(2026, 8, 31 ; "august")]
    #[test_case(2026, 12, 31 ; "december crosses year")]
    #[test_case(2026, 4, 30 ; "april")]
    fn test_month_days_count(year: i32, month: u32, expected: usize) {
        let mid_month = NaiveDate::from_ymd_opt(year, month, 15).unwrap();
        let days = month_days(mid_month);

        assert_eq!(days.len(), expected);
        assert_eq!(days[0].day(), 1);
        assert_eq!(days[expected - 1].day(), expected as u32);
    }

    #[test]
    fn test_day_of_month_component_is_ignored() {
        let first = NaiveDate::from_ymd_opt(2026, 8, 1).unwrap();
        let last = NaiveDate::from_ymd_opt(2026, 8, 31).unwrap();
        assert_eq!(month_days(first), month_days(last));
    }

    #[test]
    fn test_events_in_cell_filters_resource_and_day() {
        let state = state_with_events(vec![
            event("a", "1", 24, 9, 10),
            event("b", "2", 24, 9, 10),
            event("c", "1", 25, 9, 10),
        ]);
        let composer = GridComposer::new(&state, 150.0);

        let cell = composer.events_in_cell("1", NaiveDate::from_ymd_opt(2026, 8, 24).unwrap());
        assert_eq!(cell.len(), 1);
        assert_eq!(cell[0].id, "a");
    }

    #[test]
    fn test_cell_layout_assigns_lanes_and_geometry() {
        let state = state_with_events(vec![
            event("a", "1", 24, 9, 11),
            event("b", "1", 24, 10, 12),
        ]);
        let composer = GridComposer::new(&state, 144.0);

        let layout = composer.cell_layout("1", NaiveDate::from_ymd_opt(2026, 8, 24).unwrap());
        assert_eq!(layout.lanes.lane_count(), 2);
        assert_eq!(layout.placements.len(), 2);
        assert_eq!(layout.placements[0].event_id, "a");
        assert_eq!(layout.placements[0].lane, 0);
        assert_eq!(layout.placements[1].lane, 1);
        // 09:00 = 540 min; 540/1440 * 144px = 54px
        assert_eq!(layout.placements[0].geometry.left_px, 54.0);
        assert_eq!(layout.height_px(), 2.0 * LANE_HEIGHT_PX);
    }

    #[test]
    fn test_empty_cell_keeps_single_lane_height() {
        let state = state_with_events(vec![]);
        let composer = GridComposer::new(&state, 144.0);

        let layout = composer.cell_layout("1", NaiveDate::from_ymd_opt(2026, 8, 24).unwrap());
        assert!(layout.placements.is_empty());
        assert_eq!(layout.height_px(), LANE_HEIGHT_PX);
    }

    #[test]
    fn test_unmeasured_column_still_packs_lanes() {
        let state = state_with_events(vec![event("a", "1", 24, 9, 10)]);
        let composer = GridComposer::new(&state, 0.0);

        let layout = composer.cell_layout("1", NaiveDate::from_ymd_opt(2026, 8, 24).unwrap());
        assert_eq!(layout.lanes.lane_count(), 1);
        assert!(layout.placements.is_empty());
    }
}
