//! Lane packing for overlapping events within one (resource, day) cell.
//!
//! Greedy first-fit interval coloring: events are sorted by start time (ties
//! by id) and each is placed in the lowest-indexed lane where it overlaps
//! nothing already assigned. Not minimum-lane-optimal; the binding
//! guarantees are visual non-overlap within a lane and a deterministic
//! assignment for identical input sets, regardless of input order.

use std::collections::HashMap;

use crate::models::event::Event;

/// Result of packing one cell: lane index per event id plus the lane count.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LaneLayout {
    assignments: HashMap<String, usize>,
    lane_count: usize,
}

impl LaneLayout {
    /// Lane index (0-based) assigned to the given event id.
    pub fn lane_of(&self, event_id: &str) -> Option<usize> {
        self.assignments.get(event_id).copied()
    }

    /// Total number of lanes the cell needs. Zero for an empty cell.
    pub fn lane_count(&self) -> usize {
        self.lane_count
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}

/// Assign each event to a display lane so that no two events in the same
/// lane overlap in time (half-open intervals).
pub fn pack_lanes(events: &[Event]) -> LaneLayout {
    let mut ordered: Vec<&Event> = events.iter().collect();
    ordered.sort_by(|a, b| a.start.cmp(&b.start).then_with(|| a.id.cmp(&b.id)));

    let mut lanes: Vec<Vec<&Event>> = Vec::new();
    let mut assignments = HashMap::with_capacity(events.len());

    for event in ordered {
        let slot = lanes
            .iter()
            .position(|lane| lane.iter().all(|placed| !placed.overlaps(event)));

        let lane_index = match slot {
            Some(index) => {
                lanes[index].push(event);
                index
            }
            None => {
                lanes.push(vec![event]);
                lanes.len() - 1
            }
        };

        assignments.insert(event.id.clone(), lane_index);
    }

    LaneLayout {
        assignments,
        lane_count: lanes.len(),
    }
}
