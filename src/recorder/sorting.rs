//! Sorting engine
//!
//! Four algorithms, one event protocol. Each records its full
//! `Compare`/`Swap`/`Overwrite`/`MarkSorted` trace eagerly against a
//! working copy before the first playback tick; the trace replayed over the
//! displayed array reproduces the sort exactly.
//!
//! Comparison discipline: bubble, selection, and insertion use strict
//! comparisons (equal values never move past each other); merge resolves
//! its merge-compare with `<=`, which keeps it stable.

use crate::insight;
use crate::recorder::{Outcome, StepEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortAlgo {
    Bubble,
    Selection,
    Insertion,
    Merge,
}

impl SortAlgo {
    pub fn label(&self) -> &'static str {
        match self {
            SortAlgo::Bubble => "Bubble Sort",
            SortAlgo::Selection => "Selection Sort",
            SortAlgo::Insertion => "Insertion Sort",
            SortAlgo::Merge => "Merge Sort",
        }
    }
}

/// Record a full sorting run.
///
/// The outcome's state is the sorted array (the net effect the panel
/// installs when playback completes).
pub fn run(algo: SortAlgo, items: &[i32]) -> Outcome<Vec<i32>> {
    let events = record(algo, items);
    let mut sorted = items.to_vec();
    sorted.sort_unstable();
    Outcome::new(sorted, events, insight::sorting::algorithm(algo))
}

/// Record the step-event trace for one algorithm without insight attached
pub fn record(algo: SortAlgo, items: &[i32]) -> Vec<StepEvent> {
    if items.len() < 2 {
        return (0..items.len()).map(StepEvent::MarkSorted).collect();
    }
    match algo {
        SortAlgo::Bubble => bubble(items),
        SortAlgo::Selection => selection(items),
        SortAlgo::Insertion => insertion(items),
        SortAlgo::Merge => merge_sort(items),
    }
}

/// Apply one event to a displayed array.
///
/// `Compare` and `MarkSorted` carry no value change; the panel tracks those
/// through its highlight/sorted projections instead.
pub fn apply(items: &mut [i32], event: &StepEvent) {
    match *event {
        StepEvent::Swap(i, j) => items.swap(i, j),
        StepEvent::Overwrite(i, value) => items[i] = value,
        StepEvent::Compare(..) | StepEvent::MarkSorted(..) | StepEvent::Highlight(..) => {}
    }
}

fn bubble(items: &[i32]) -> Vec<StepEvent> {
    let mut arr = items.to_vec();
    let mut events = Vec::new();
    let n = arr.len();
    for i in 0..n - 1 {
        for j in 0..n - i - 1 {
            events.push(StepEvent::Compare(j, j + 1));
            if arr[j] > arr[j + 1] {
                events.push(StepEvent::Swap(j, j + 1));
                arr.swap(j, j + 1);
            }
        }
        events.push(StepEvent::MarkSorted(n - 1 - i));
    }
    events
}

fn selection(items: &[i32]) -> Vec<StepEvent> {
    let mut arr = items.to_vec();
    let mut events = Vec::new();
    let n = arr.len();
    for i in 0..n - 1 {
        let mut min_idx = i;
        for j in i + 1..n {
            events.push(StepEvent::Compare(min_idx, j));
            if arr[j] < arr[min_idx] {
                min_idx = j;
            }
        }
        // Swap is emitted even when the minimum was already in place
        events.push(StepEvent::Swap(i, min_idx));
        arr.swap(i, min_idx);
        events.push(StepEvent::MarkSorted(i));
    }
    events
}

fn insertion(items: &[i32]) -> Vec<StepEvent> {
    let mut arr = items.to_vec();
    let mut events = Vec::new();
    let n = arr.len();
    for i in 1..n {
        let key = arr[i];
        // p is the slot the key will land in; the probe index is p - 1
        let mut p = i;
        events.push(StepEvent::Compare(i, p - 1));
        while p > 0 && arr[p - 1] > key {
            events.push(StepEvent::Overwrite(p, arr[p - 1]));
            arr[p] = arr[p - 1];
            p -= 1;
            if p > 0 {
                events.push(StepEvent::Compare(i, p - 1));
            }
        }
        events.push(StepEvent::Overwrite(p, key));
        arr[p] = key;
    }
    for i in 0..n {
        events.push(StepEvent::MarkSorted(i));
    }
    events
}

fn merge_sort(items: &[i32]) -> Vec<StepEvent> {
    let mut main = items.to_vec();
    let mut aux = items.to_vec();
    let mut events = Vec::new();
    sort_range(&mut main, &mut aux, 0, items.len() - 1, &mut events);
    events
}

/// Sort `main[start..=end]`, alternating buffer roles per level so each
/// merge reads one buffer and writes the other
fn sort_range(
    main: &mut Vec<i32>,
    aux: &mut Vec<i32>,
    start: usize,
    end: usize,
    events: &mut Vec<StepEvent>,
) {
    if start == end {
        return;
    }
    let middle = (start + end) / 2;
    sort_range(aux, main, start, middle, events);
    sort_range(aux, main, middle + 1, end, events);
    merge(main, aux, start, middle, end, events);
}

fn merge(
    main: &mut [i32],
    aux: &[i32],
    start: usize,
    middle: usize,
    end: usize,
    events: &mut Vec<StepEvent>,
) {
    let mut k = start;
    let mut i = start;
    let mut j = middle + 1;
    while i <= middle && j <= end {
        events.push(StepEvent::Compare(i, j));
        if aux[i] <= aux[j] {
            events.push(StepEvent::Overwrite(k, aux[i]));
            main[k] = aux[i];
            i += 1;
        } else {
            events.push(StepEvent::Overwrite(k, aux[j]));
            main[k] = aux[j];
            j += 1;
        }
        k += 1;
    }
    while i <= middle {
        events.push(StepEvent::Compare(i, i));
        events.push(StepEvent::Overwrite(k, aux[i]));
        main[k] = aux[i];
        i += 1;
        k += 1;
    }
    while j <= end {
        events.push(StepEvent::Compare(j, j));
        events.push(StepEvent::Overwrite(k, aux[j]));
        main[k] = aux[j];
        j += 1;
        k += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn replay(algo: SortAlgo, input: &[i32]) -> Vec<i32> {
        let mut displayed = input.to_vec();
        for event in record(algo, input) {
            apply(&mut displayed, &event);
        }
        displayed
    }

    const ALGOS: [SortAlgo; 4] = [
        SortAlgo::Bubble,
        SortAlgo::Selection,
        SortAlgo::Insertion,
        SortAlgo::Merge,
    ];

    #[test]
    fn every_algorithm_sorts_through_its_trace() {
        let inputs: &[&[i32]] = &[
            &[5, 2, 9, 1, 7],
            &[3, 3, 1, 2, 3],
            &[1, 2, 3, 4],
            &[9, 8, 7, 6, 5, 4],
            &[42],
            &[],
        ];
        for algo in ALGOS {
            for input in inputs {
                let mut expected = input.to_vec();
                expected.sort_unstable();
                assert_eq!(replay(algo, input), expected, "{:?} on {:?}", algo, input);
            }
        }
    }

    #[test]
    fn bubble_emits_no_swaps_when_sorted() {
        let events = record(SortAlgo::Bubble, &[1, 2, 3, 4]);
        assert!(!events.iter().any(|e| matches!(e, StepEvent::Swap(..))));
    }

    #[test]
    fn bubble_trace_on_reversed_pair() {
        let events = record(SortAlgo::Bubble, &[2, 1]);
        assert_eq!(
            events,
            vec![
                StepEvent::Compare(0, 1),
                StepEvent::Swap(0, 1),
                StepEvent::MarkSorted(1),
            ]
        );
    }

    #[test]
    fn selection_swaps_once_per_pass_even_in_place() {
        let events = record(SortAlgo::Selection, &[1, 2, 3]);
        let swaps: Vec<_> = events
            .iter()
            .filter(|e| matches!(e, StepEvent::Swap(..)))
            .collect();
        // n - 1 passes, each ending in a (possibly self) swap
        assert_eq!(swaps.len(), 2);
        assert_eq!(*swaps[0], StepEvent::Swap(0, 0));
    }

    #[test]
    fn insertion_marks_every_index_sorted() {
        let events = record(SortAlgo::Insertion, &[4, 1, 3]);
        let marked: Vec<usize> = events
            .iter()
            .filter_map(|e| match e {
                StepEvent::MarkSorted(i) => Some(*i),
                _ => None,
            })
            .collect();
        assert_eq!(marked, vec![0, 1, 2]);
    }

    #[test]
    fn merge_keeps_equal_values_stable() {
        // With <= on the merge-compare, the left run's copy of an equal
        // value is emitted first
        let events = record(SortAlgo::Merge, &[2, 2, 1]);
        let mut displayed = vec![2, 2, 1];
        for event in &events {
            apply(&mut displayed, event);
        }
        assert_eq!(displayed, vec![1, 2, 2]);
    }

    #[test]
    fn run_reports_sorted_net_state() {
        let outcome = run(SortAlgo::Merge, &[5, 1, 4]);
        assert_eq!(outcome.state, vec![1, 4, 5]);
        assert!(outcome.insight.is_some());
    }
}
