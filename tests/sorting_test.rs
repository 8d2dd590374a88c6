// Integration tests for the sorting engine

use structty::recorder::sorting::{apply, record, run, SortAlgo};
use structty::recorder::StepEvent;

const ALGOS: [SortAlgo; 4] = [
    SortAlgo::Bubble,
    SortAlgo::Selection,
    SortAlgo::Insertion,
    SortAlgo::Merge,
];

/// Replay a recorded trace over a copy of the input
fn replay(algo: SortAlgo, input: &[i32]) -> Vec<i32> {
    let mut displayed = input.to_vec();
    for event in record(algo, input) {
        apply(&mut displayed, &event);
    }
    displayed
}

#[test]
fn traces_sort_every_input() {
    let inputs: &[&[i32]] = &[
        &[38, 27, 43, 3, 9, 82, 10],
        &[5, 4, 3, 2, 1],
        &[1, 2, 3, 4, 5],
        &[7, 7, 7],
        &[2, 1],
        &[1],
        &[],
        &[-3, 0, -10, 5],
    ];
    for algo in ALGOS {
        for input in inputs {
            let mut expected = input.to_vec();
            expected.sort_unstable();
            assert_eq!(
                replay(algo, input),
                expected,
                "{} failed on {:?}",
                algo.label(),
                input
            );
        }
    }
}

#[test]
fn traces_are_permutation_preserving() {
    // Swaps and overwrites may shuffle values around, but the multiset of
    // values never changes once the trace has fully replayed
    let input = vec![9, 1, 8, 2, 8, 3];
    for algo in ALGOS {
        let mut result = replay(algo, &input);
        let mut original = input.clone();
        result.sort_unstable();
        original.sort_unstable();
        assert_eq!(result, original, "{}", algo.label());
    }
}

#[test]
fn traces_use_only_the_shared_protocol() {
    for algo in ALGOS {
        for event in record(algo, &[4, 2, 5, 1]) {
            assert!(
                matches!(
                    event,
                    StepEvent::Compare(..)
                        | StepEvent::Swap(..)
                        | StepEvent::Overwrite(..)
                        | StepEvent::MarkSorted(..)
                ),
                "{} emitted {:?}",
                algo.label(),
                event
            );
        }
    }
}

#[test]
fn traces_are_deterministic() {
    let input = [12, 7, 3, 9, 30, 1];
    for algo in ALGOS {
        assert_eq!(record(algo, &input), record(algo, &input));
    }
}

#[test]
fn bubble_compares_before_every_swap() {
    let events = record(SortAlgo::Bubble, &[3, 2, 1]);
    for (i, event) in events.iter().enumerate() {
        if let StepEvent::Swap(a, b) = event {
            assert_eq!(
                events[i - 1],
                StepEvent::Compare(*a, *b),
                "swap at {} without a preceding compare",
                i
            );
        }
    }
}

#[test]
fn selection_ends_each_pass_with_swap_and_mark() {
    let events = record(SortAlgo::Selection, &[3, 1, 2]);
    // Pass 0: compares over indices 1..3, then Swap(0, min), MarkSorted(0)
    assert_eq!(events[0], StepEvent::Compare(0, 1));
    assert_eq!(events[1], StepEvent::Compare(1, 2));
    assert_eq!(events[2], StepEvent::Swap(0, 1));
    assert_eq!(events[3], StepEvent::MarkSorted(0));
}

#[test]
fn insertion_shifts_with_overwrites_not_swaps() {
    let events = record(SortAlgo::Insertion, &[4, 3, 2, 1]);
    assert!(!events.iter().any(|e| matches!(e, StepEvent::Swap(..))));
    assert!(events
        .iter()
        .any(|e| matches!(e, StepEvent::Overwrite(..))));
}

#[test]
fn merge_resolves_ties_from_the_left_run() {
    // [2a, 2b] split into [2a] and [2b]; <= keeps the left copy first, so
    // the merge overwrites each slot with the value already there
    let events = record(SortAlgo::Merge, &[2, 2]);
    assert_eq!(
        events,
        vec![
            StepEvent::Compare(0, 1),
            StepEvent::Overwrite(0, 2),
            StepEvent::Compare(1, 1),
            StepEvent::Overwrite(1, 2),
        ]
    );
}

#[test]
fn run_returns_sorted_state_and_insight() {
    let outcome = run(SortAlgo::Selection, &[10, 5, 20]);
    assert_eq!(outcome.state, vec![5, 10, 20]);
    assert_eq!(outcome.insight.unwrap().title, "Selection Sort");
}
