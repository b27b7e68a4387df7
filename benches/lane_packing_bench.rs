// Benchmark for lane packing
// Measures greedy first-fit packing over cells of increasing event density

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chrono::NaiveDate;
use resource_calendar::layout::lanes::pack_lanes;
use resource_calendar::models::event::Event;
use resource_calendar::utils::date::add_minutes;

/// Build a cell's worth of events with staggered, overlapping intervals.
fn dense_cell(count: usize) -> Vec<Event> {
    let midnight = NaiveDate::from_ymd_opt(2026, 8, 24)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();

    (0..count)
        .map(|i| {
            let start = add_minutes(midnight, (i as i64 * 37) % 1200);
            Event::new(
                format!("{i:05}"),
                format!("Event {i}"),
                start,
                add_minutes(start, 90),
                "1",
            )
            .unwrap()
        })
        .collect()
}

fn bench_pack_lanes(c: &mut Criterion) {
    let mut group = c.benchmark_group("pack_lanes");

    for count in [4, 16, 64, 256].iter() {
        let events = dense_cell(*count);
        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, _| {
            b.iter(|| pack_lanes(black_box(&events)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_pack_lanes);
criterion_main!(benches);
