// Integration tests for the replay scheduler driving panel state
//
// All timing is manufactured: ticks are driven with explicit Instants, so
// nothing here sleeps.

use std::time::{Duration, Instant};

use structty::constants::{FLASH_TTL, HIGHLIGHT_TTL, SORT_CADENCE, STRUCT_CADENCE};
use structty::recorder::sorting::SortAlgo;
use structty::recorder::structural;
use structty::recorder::traversal::Algo;
use structty::recorder::{StepEvent, Target};
use structty::replay::{Highlights, Playback};
use structty::ui::panels::Panels;

#[test]
fn structural_delete_lands_one_cadence_after_the_highlight() {
    let mut panels = Panels::new();
    let t0 = Instant::now();

    let outcome = structural::array_delete(&panels.array.core.state, 1).unwrap();
    panels.array.core.start(outcome, &mut panels.flash, t0);

    // Tick at submit time: the highlight releases, the value is still there
    panels.array.core.tick(t0);
    assert!(panels
        .array
        .core
        .highlights
        .contains(&Target::Index(1)));
    assert_eq!(panels.array.core.state.items(), &[10, 25, 5, 42, 18]);

    // One cadence later the net effect applies
    panels.array.core.tick(t0 + STRUCT_CADENCE);
    assert_eq!(panels.array.core.state.items(), &[10, 5, 42, 18]);
}

#[test]
fn pure_search_applies_immediately_and_mutates_nothing() {
    let mut panels = Panels::new();
    let t0 = Instant::now();

    let outcome = structural::array_search(&panels.array.core.state, 42);
    panels.array.core.start(outcome, &mut panels.flash, t0);
    panels.array.core.tick(t0);

    assert_eq!(panels.array.core.state.items(), &[10, 25, 5, 42, 18]);
    assert!(panels.array.core.highlights.contains(&Target::Index(3)));
    assert_eq!(panels.array.core.insight.title, "Search: Found");
}

#[test]
fn supersession_drops_the_stale_run_whole() {
    let t0 = Instant::now();
    let mut playback = Playback::new();
    playback.submit(
        vec![
            StepEvent::MarkSorted(0),
            StepEvent::MarkSorted(1),
            StepEvent::MarkSorted(2),
        ],
        STRUCT_CADENCE,
        t0,
    );
    assert_eq!(playback.poll(t0).events.len(), 1);

    playback.submit(vec![StepEvent::MarkSorted(7)], STRUCT_CADENCE, t0);
    let replayed: Vec<StepEvent> = playback.poll(t0 + STRUCT_CADENCE * 10).events;
    // Only the superseding run's event ever releases
    assert_eq!(replayed, vec![StepEvent::MarkSorted(7)]);
}

#[test]
fn sorting_panel_full_run_terminal_rule() {
    let mut panels = Panels::new();
    let t0 = Instant::now();
    panels.sorting.sort(SortAlgo::Insertion, t0);
    assert!(panels.sorting.is_sorting());

    // Drive the clock one cadence at a time until the run finishes
    let mut now = t0;
    for _ in 0..100_000 {
        if !panels.sorting.is_sorting() {
            break;
        }
        panels.sorting.tick(now);
        now += SORT_CADENCE;
    }
    assert!(!panels.sorting.is_sorting());

    let mut expected = panels.sorting.items.clone();
    expected.sort_unstable();
    assert_eq!(panels.sorting.items, expected);

    // Every index is marked sorted, whatever the algorithm emitted
    let mut sorted: Vec<usize> = panels.sorting.sorted.iter().copied().collect();
    sorted.sort_unstable();
    let all: Vec<usize> = (0..panels.sorting.items.len()).collect();
    assert_eq!(sorted, all);
    assert!(panels.sorting.highlighted.is_empty());
}

#[test]
fn traversal_highlights_release_one_per_tick() {
    let mut panels = Panels::new();
    let t0 = Instant::now();
    panels.graph.traverse(Algo::Bfs, &mut panels.flash, t0);

    panels.graph.tick(t0);
    assert_eq!(panels.graph.visited, vec!["A"]);
    panels.graph.tick(t0 + STRUCT_CADENCE);
    assert_eq!(panels.graph.visited, vec!["A", "B"]);
    panels.graph.tick(t0 + STRUCT_CADENCE * 3);
    assert_eq!(panels.graph.visited, vec!["A", "B", "C", "D"]);
}

#[test]
fn highlight_expiry_runs_on_its_own_clock() {
    let t0 = Instant::now();
    let mut highlights = Highlights::new(HIGHLIGHT_TTL);
    highlights.flash(Target::Index(0), t0);

    // Still lit well past several cadences, because the TTL is longer
    highlights.purge(t0 + STRUCT_CADENCE * 2);
    assert!(highlights.contains(&Target::Index(0)));

    highlights.purge(t0 + HIGHLIGHT_TTL);
    assert!(!highlights.contains(&Target::Index(0)));
}

#[test]
fn flash_message_self_clears_after_its_ttl() {
    let mut panels = Panels::new();
    let t0 = Instant::now();

    // Underflow on an emptied stack is a warning, not a fault
    panels.stack.clear();
    panels.stack.pop(&mut panels.flash, t0);
    assert_eq!(panels.flash.message(), Some("Stack is empty (underflow)."));

    panels.tick(t0 + FLASH_TTL - Duration::from_millis(1));
    assert!(panels.flash.message().is_some());
    panels.tick(t0 + FLASH_TTL);
    assert!(panels.flash.message().is_none());
}

#[test]
fn warning_outcomes_flash_and_still_animate() {
    let mut panels = Panels::new();
    let t0 = Instant::now();

    // Duplicate hash insert: the existing entry lights up and a warning
    // flashes, but the table is unchanged
    panels.hash.key.push('5');
    panels.hash.insert(&mut panels.flash, t0);
    panels.hash.core.tick(t0 + STRUCT_CADENCE * 3);

    panels.hash.key.push('5');
    panels.hash.insert(&mut panels.flash, t0 + Duration::from_secs(5));
    assert_eq!(
        panels.flash.message(),
        Some("Key 5 already exists in the table.")
    );
    assert_eq!(panels.hash.core.state.len(), 1);
}

#[test]
fn flash_is_a_fresh_default_before_any_warning() {
    let panels = Panels::new();
    assert!(panels.flash.message().is_none());
}

#[test]
fn bst_duplicate_insert_flashes_and_keeps_shape() {
    let mut panels = Panels::new();
    let t0 = Instant::now();
    panels.bst.value.push('4');
    panels.bst.value.push('0');
    panels.bst.insert(&mut panels.flash, t0);
    assert_eq!(
        panels.flash.message(),
        Some("Value 40 already exists in the BST.")
    );
    assert_eq!(panels.bst.core.state.node_count(), 7);
    // The existing node still animates
    panels.bst.core.tick(t0);
    assert!(panels
        .bst
        .core
        .highlights
        .contains(&Target::TreeValue(40)));
}
