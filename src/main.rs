// Resource Calendar demo
// Loads (or seeds) the persisted calendar state and dumps the current
// month's grid occupancy to stdout.

use anyhow::Result;

use resource_calendar::layout::grid::GridComposer;
use resource_calendar::services::storage::FileStorage;
use resource_calendar::services::store::CalendarStore;

const DEMO_COLUMN_WIDTH_PX: f32 = 150.0;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Resource Calendar demo");

    let storage = FileStorage::in_data_dir()?;
    log::info!("Using storage root {:?}", storage.root());

    let store = CalendarStore::load(Box::new(storage));
    let state = store.state();

    let composer = GridComposer::new(state, DEMO_COLUMN_WIDTH_PX);
    let days = composer.days();

    println!(
        "Viewing {} ({} days, {} resources, {} events)",
        state.current_date.format("%B %Y"),
        days.len(),
        state.resources.len(),
        state.events.len()
    );

    for resource in &state.resources {
        let mut occupied = 0usize;
        let mut max_lanes = 0usize;
        for day in &days {
            let layout = composer.cell_layout(&resource.id, *day);
            if !layout.placements.is_empty() {
                occupied += 1;
                max_lanes = max_lanes.max(layout.lanes.lane_count());
            }
        }
        println!(
            "  {:<14} {:>2} occupied day(s), widest cell {} lane(s)",
            resource.name, occupied, max_lanes
        );
    }

    Ok(())
}
