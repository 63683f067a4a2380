use super::*;
use crate::{events::index::EventLabel, layout::measure::HeuristicEstimator};

fn index_with(events: &[(u32, u32, &str)]) -> EventIndex {
    let mut index = EventIndex::new(2024);
    for (m, d, t) in events {
        index.push(*m, *d, EventLabel::plain(*t));
    }
    index
}

#[test]
fn no_events_yields_base_cell() {
    let index = EventIndex::new(2024);
    let m = LayoutMetrics::compute(&index, MetricsScope::Month(3), &HeuristicEstimator);
    assert_eq!(m.cell_size, BASE_CELL_SIZE);
    assert_eq!(m, LayoutMetrics::base());

    let y = LayoutMetrics::compute(&index, MetricsScope::Year, &HeuristicEstimator);
    assert_eq!(y.cell_size, BASE_CELL_SIZE);
}

#[test]
fn line_count_drives_height() {
    let events: Vec<(u32, u32, &str)> = (0..5).map(|_| (1, 10, "x")).collect();
    let m = LayoutMetrics::compute(&index_with(&events), MetricsScope::Month(1), &HeuristicEstimator);
    assert_eq!(m.max_event_lines, 5);
    assert_eq!(m.cell_size, BASE_PADDING + 5.0 * LINE_HEIGHT);
}

#[test]
fn longest_title_drives_width() {
    let title = "a".repeat(20);
    let m = LayoutMetrics::compute(
        &index_with(&[(1, 2, title.as_str()), (1, 3, "short")]),
        MetricsScope::Month(1),
        &HeuristicEstimator,
    );
    let expected = BASE_PADDING + 20.0 * EVENT_FONT_SIZE * 0.6;
    assert!((m.cell_size - expected).abs() < 1e-9);
}

#[test]
fn prefix_counts_toward_title_length() {
    let mut plain = EventIndex::new(2024);
    plain.push(1, 1, EventLabel::plain("x".repeat(15)));
    let mut prefixed = EventIndex::new(2024);
    prefixed.push(1, 1, EventLabel::prefixed("📅", "x".repeat(15)));

    let a = LayoutMetrics::compute(&plain, MetricsScope::Month(1), &HeuristicEstimator);
    let b = LayoutMetrics::compute(&prefixed, MetricsScope::Month(1), &HeuristicEstimator);
    assert!(b.cell_size > a.cell_size);
    assert!((b.max_title_width - 17.0 * EVENT_FONT_SIZE * 0.6).abs() < 1e-9);
}

#[test]
fn adding_events_never_shrinks_cells() {
    let mut index = EventIndex::new(2024);
    let mut prev = LayoutMetrics::compute(&index, MetricsScope::Month(6), &HeuristicEstimator).cell_size;
    for i in 0..12u32 {
        let title = "w".repeat((i as usize * 3) % 17 + 1);
        index.push(6, 1 + i % 3, EventLabel::plain(title));
        let next = LayoutMetrics::compute(&index, MetricsScope::Month(6), &HeuristicEstimator).cell_size;
        assert!(next >= prev);
        prev = next;
    }
}

#[test]
fn annual_scope_is_max_of_months() {
    let mut index = EventIndex::new(2024);
    index.push(2, 3, EventLabel::plain("one"));
    for t in ["a", "b", "c", "d"] {
        index.push(12, 25, EventLabel::plain(t));
    }
    index.push(7, 4, EventLabel::plain("a fairly long independence day title"));

    let annual = LayoutMetrics::compute(&index, MetricsScope::Year, &HeuristicEstimator);
    let per_month_max = (1..=12)
        .map(|m| LayoutMetrics::compute(&index, MetricsScope::Month(m), &HeuristicEstimator).cell_size)
        .fold(0.0, f64::max);
    assert_eq!(annual.cell_size, per_month_max);
    assert_eq!(annual.max_event_lines, 4);
}

#[test]
fn december_stack_sets_annual_size() {
    let mut index = EventIndex::new(2024);
    for m in 1..=11 {
        index.push(m, 1, EventLabel::plain("x"));
    }
    for t in ["a", "b", "c", "d"] {
        index.push(12, 24, EventLabel::plain(t));
    }
    let annual = LayoutMetrics::compute(&index, MetricsScope::Year, &HeuristicEstimator);
    let december = LayoutMetrics::compute(&index, MetricsScope::Month(12), &HeuristicEstimator);
    let january = LayoutMetrics::compute(&index, MetricsScope::Month(1), &HeuristicEstimator);
    assert_eq!(annual.cell_size, december.cell_size);
    assert!(annual.cell_size >= january.cell_size);
}
