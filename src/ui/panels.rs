//! Per-panel state: one structure, its playback, projections, and inputs
//!
//! [`PanelCore`] carries the animation plumbing every structural panel
//! shares: the displayed state, the pending net effect, the replay
//! scheduler, the transient highlight set, and the current insight. Each
//! concrete panel adds its input fields and wires key-triggered operations
//! to the recorder.
//!
//! Operations never touch the displayed state directly. They hand the
//! recorder's outcome to [`PanelCore::start`]; the event loop then calls
//! `tick` until the run finishes and the net effect lands.

use crate::constants::{FLASH_TTL, HIGHLIGHT_TTL, SORT_ARRAY_SIZE, SORT_CADENCE, STRUCT_CADENCE};
use crate::insight::{self, Insight};
use crate::recorder::sorting::{self, SortAlgo};
use crate::recorder::structural;
use crate::recorder::traversal::Algo;
use crate::recorder::{Outcome, StepEvent, Target};
use crate::replay::{Flash, Highlights, Playback, PollResult};
use crate::structures::array::ArraySeq;
use crate::structures::bst::Bst;
use crate::structures::graph::Graph;
use crate::structures::hash::HashTable;
use crate::structures::list::{End, LinkedList};
use crate::structures::queue::Queue;
use crate::structures::stack::Stack;
use crate::ui::input::InputField;
use rand::Rng;
use rustc_hash::FxHashSet;
use std::time::Instant;

/// Shared animation plumbing for the structural panels
pub struct PanelCore<S> {
    pub state: S,
    pending: Option<S>,
    pub playback: Playback,
    pub highlights: Highlights,
    pub insight: Insight,
}

impl<S> PanelCore<S> {
    pub fn new(state: S, insight: Insight) -> Self {
        PanelCore {
            state,
            pending: None,
            playback: Playback::new(),
            highlights: Highlights::new(HIGHLIGHT_TTL),
            insight,
        }
    }

    /// Begin playing an operation outcome.
    ///
    /// Supersedes any in-flight run: pending events are dropped whole and
    /// stale highlight timers are cancelled before the new trace starts.
    pub fn start(&mut self, outcome: Outcome<S>, flash: &mut Flash, now: Instant) {
        self.highlights.clear();
        if let Some(warning) = outcome.warning {
            flash.show(warning, now);
        }
        if let Some(insight) = outcome.insight {
            self.insight = insight;
        }
        self.pending = Some(outcome.state);
        self.playback.submit(outcome.events, STRUCT_CADENCE, now);
    }

    /// Play a highlight-only trace that leaves the structure unchanged
    /// (traversals); supersedes any in-flight run and its pending effect
    pub fn start_trace(&mut self, events: Vec<StepEvent>, insight: Option<Insight>, now: Instant) {
        self.highlights.clear();
        self.pending = None;
        if let Some(insight) = insight {
            self.insight = insight;
        }
        self.playback.submit(events, STRUCT_CADENCE, now);
    }

    /// Replace the structure wholesale (Clear/Randomize), dropping all
    /// pending timers
    pub fn reset(&mut self, state: S, insight: Insight) {
        self.playback.cancel();
        self.highlights.clear();
        self.pending = None;
        self.state = state;
        self.insight = insight;
    }

    /// Advance timers; flash released highlights and apply the net effect
    /// when the run completes. Returns the released events for panels that
    /// track extra projections.
    pub fn tick(&mut self, now: Instant) -> PollResult {
        self.highlights.purge(now);
        let result = self.playback.poll(now);
        for event in &result.events {
            if let StepEvent::Highlight(target) = event {
                self.highlights.flash(target.clone(), now);
            }
        }
        if result.finished {
            if let Some(state) = self.pending.take() {
                self.state = state;
            }
        }
        result
    }
}

// ---- Array panel ----

pub struct ArrayPanel {
    pub core: PanelCore<ArraySeq>,
    pub value: InputField,
    pub index: InputField,
    pub focus: usize,
}

impl ArrayPanel {
    pub fn new() -> Self {
        ArrayPanel {
            core: PanelCore::new(ArraySeq::seeded(), insight::array::default()),
            value: InputField::new("Value"),
            index: InputField::new("Index"),
            focus: 0,
        }
    }

    pub fn field_count(&self) -> usize {
        2
    }

    pub fn focused_field_mut(&mut self) -> &mut InputField {
        match self.focus {
            0 => &mut self.value,
            _ => &mut self.index,
        }
    }

    pub fn insert(&mut self, flash: &mut Flash, now: Instant) {
        let parsed = self.value.parse_i32().and_then(|v| {
            self.index.parse_index().map(|i| (v, i))
        });
        let (value, index) = match parsed {
            Ok(pair) => pair,
            Err(_) => {
                flash.show("Value and Index must be valid numbers.", now);
                return;
            }
        };
        match structural::array_insert(&self.core.state, index, value) {
            Ok(outcome) => {
                self.core.start(outcome, flash, now);
                self.value.clear();
                self.index.clear();
            }
            Err(e) => flash.show(e.to_string(), now),
        }
    }

    pub fn delete(&mut self, flash: &mut Flash, now: Instant) {
        let index = match self.index.parse_index() {
            Ok(i) => i,
            Err(e) => {
                flash.show(e.to_string(), now);
                return;
            }
        };
        match structural::array_delete(&self.core.state, index) {
            Ok(outcome) => {
                self.core.start(outcome, flash, now);
                self.index.clear();
            }
            Err(e) => flash.show(e.to_string(), now),
        }
    }

    pub fn search(&mut self, flash: &mut Flash, now: Instant) {
        match self.value.parse_i32() {
            Ok(value) => {
                let outcome = structural::array_search(&self.core.state, value);
                self.core.start(outcome, flash, now);
                self.value.clear();
            }
            Err(e) => flash.show(e.to_string(), now),
        }
    }

    pub fn randomize(&mut self) {
        self.core
            .reset(ArraySeq::randomized(), insight::array::default());
    }

    pub fn clear(&mut self) {
        self.core.reset(ArraySeq::new(), insight::array::default());
    }
}

// ---- Stack panel ----

pub struct StackPanel {
    pub core: PanelCore<Stack>,
    pub value: InputField,
}

impl StackPanel {
    pub fn new() -> Self {
        StackPanel {
            core: PanelCore::new(Stack::seeded(), insight::stack::default()),
            value: InputField::new("Value"),
        }
    }

    pub fn push(&mut self, flash: &mut Flash, now: Instant) {
        match self.value.parse_i32() {
            Ok(value) => {
                let outcome = structural::stack_push(&self.core.state, value);
                self.core.start(outcome, flash, now);
                self.value.clear();
            }
            Err(e) => flash.show(e.to_string(), now),
        }
    }

    pub fn pop(&mut self, flash: &mut Flash, now: Instant) {
        match structural::stack_pop(&self.core.state) {
            Ok(outcome) => self.core.start(outcome, flash, now),
            Err(e) => flash.show(e.to_string(), now),
        }
    }

    pub fn peek(&mut self, flash: &mut Flash, now: Instant) {
        match structural::stack_peek(&self.core.state) {
            Ok(outcome) => self.core.start(outcome, flash, now),
            Err(e) => flash.show(e.to_string(), now),
        }
    }

    pub fn clear(&mut self) {
        self.core.reset(Stack::new(), insight::stack::default());
    }
}

// ---- Queue panel ----

pub struct QueuePanel {
    pub core: PanelCore<Queue>,
    pub value: InputField,
}

impl QueuePanel {
    pub fn new() -> Self {
        QueuePanel {
            core: PanelCore::new(Queue::seeded(), insight::queue::default()),
            value: InputField::new("Value"),
        }
    }

    pub fn enqueue(&mut self, flash: &mut Flash, now: Instant) {
        match self.value.parse_i32() {
            Ok(value) => {
                let outcome = structural::queue_enqueue(&self.core.state, value);
                self.core.start(outcome, flash, now);
                self.value.clear();
            }
            Err(e) => flash.show(e.to_string(), now),
        }
    }

    pub fn dequeue(&mut self, flash: &mut Flash, now: Instant) {
        match structural::queue_dequeue(&self.core.state) {
            Ok(outcome) => self.core.start(outcome, flash, now),
            Err(e) => flash.show(e.to_string(), now),
        }
    }

    pub fn peek(&mut self, flash: &mut Flash, now: Instant) {
        match structural::queue_peek(&self.core.state) {
            Ok(outcome) => self.core.start(outcome, flash, now),
            Err(e) => flash.show(e.to_string(), now),
        }
    }

    pub fn clear(&mut self) {
        self.core.reset(Queue::new(), insight::queue::default());
    }
}

// ---- Linked list panel ----

pub struct ListPanel {
    pub core: PanelCore<LinkedList>,
    pub value: InputField,
}

impl ListPanel {
    pub fn new() -> Self {
        ListPanel {
            core: PanelCore::new(LinkedList::new(), insight::list::default()),
            value: InputField::new("Value"),
        }
    }

    pub fn insert(&mut self, end: End, flash: &mut Flash, now: Instant) {
        let value = match self.value.parse_i32() {
            Ok(v) => v,
            Err(e) => {
                flash.show(e.to_string(), now);
                return;
            }
        };
        match structural::list_insert(&self.core.state, end, value) {
            Ok(outcome) => {
                self.core.start(outcome, flash, now);
                self.value.clear();
            }
            Err(e) => flash.show(e.to_string(), now),
        }
    }

    pub fn delete(&mut self, flash: &mut Flash, now: Instant) {
        let value = match self.value.parse_i32() {
            Ok(v) => v,
            Err(e) => {
                flash.show(e.to_string(), now);
                return;
            }
        };
        match structural::list_delete(&self.core.state, value) {
            Ok(outcome) => {
                self.core.start(outcome, flash, now);
                self.value.clear();
            }
            Err(e) => flash.show(e.to_string(), now),
        }
    }

    pub fn search(&mut self, flash: &mut Flash, now: Instant) {
        match self.value.parse_i32() {
            Ok(value) => {
                let outcome = structural::list_search(&self.core.state, value);
                self.core.start(outcome, flash, now);
                self.value.clear();
            }
            Err(e) => flash.show(e.to_string(), now),
        }
    }

    pub fn clear(&mut self) {
        self.core.reset(LinkedList::new(), insight::list::default());
    }
}

// ---- BST panel ----

pub struct BstPanel {
    pub core: PanelCore<Bst>,
    pub value: InputField,
}

impl BstPanel {
    pub fn new() -> Self {
        BstPanel {
            core: PanelCore::new(Bst::seeded(), insight::bst::default()),
            value: InputField::new("Value"),
        }
    }

    pub fn insert(&mut self, flash: &mut Flash, now: Instant) {
        match self.value.parse_i32() {
            Ok(value) => {
                let outcome = structural::bst_insert(&self.core.state, value);
                self.core.start(outcome, flash, now);
                self.value.clear();
            }
            Err(e) => flash.show(e.to_string(), now),
        }
    }

    pub fn search(&mut self, flash: &mut Flash, now: Instant) {
        match self.value.parse_i32() {
            Ok(value) => {
                let outcome = structural::bst_search(&self.core.state, value);
                self.core.start(outcome, flash, now);
                self.value.clear();
            }
            Err(e) => flash.show(e.to_string(), now),
        }
    }

    pub fn clear(&mut self) {
        self.core.reset(Bst::new(), insight::bst::default());
    }
}

// ---- Graph panel ----

pub struct GraphPanel {
    pub core: PanelCore<Graph>,
    /// Nodes visited by the current traversal run, in visit order
    pub visited: Vec<String>,
    pub node: InputField,
    pub source: InputField,
    pub target: InputField,
    pub start: InputField,
    pub focus: usize,
}

impl GraphPanel {
    pub fn new() -> Self {
        let mut start = InputField::new("Start");
        start.push('A');
        GraphPanel {
            core: PanelCore::new(Graph::seeded(), insight::graph::default()),
            visited: Vec::new(),
            node: InputField::new("Node"),
            source: InputField::new("Source"),
            target: InputField::new("Target"),
            start,
            focus: 0,
        }
    }

    pub fn field_count(&self) -> usize {
        4
    }

    pub fn focused_field_mut(&mut self) -> &mut InputField {
        match self.focus {
            0 => &mut self.node,
            1 => &mut self.source,
            2 => &mut self.target,
            _ => &mut self.start,
        }
    }

    pub fn add_node(&mut self, flash: &mut Flash, now: Instant) {
        let id = match self.node.parse_label() {
            Ok(id) => id,
            Err(e) => {
                flash.show(e.to_string(), now);
                return;
            }
        };
        match structural::graph_add_node(&self.core.state, &id) {
            Ok(outcome) => {
                self.core.start(outcome, flash, now);
                self.node.clear();
            }
            Err(e) => flash.show(e.to_string(), now),
        }
    }

    pub fn add_edge(&mut self, flash: &mut Flash, now: Instant) {
        if self.source.is_empty() || self.target.is_empty() {
            flash.show("Source and Target IDs are required.", now);
            return;
        }
        let (source, target) = match (self.source.parse_label(), self.target.parse_label()) {
            (Ok(s), Ok(t)) => (s, t),
            _ => {
                flash.show("Source and Target IDs are required.", now);
                return;
            }
        };
        match structural::graph_add_edge(&self.core.state, &source, &target) {
            Ok(outcome) => {
                self.core.start(outcome, flash, now);
                self.source.clear();
                self.target.clear();
            }
            Err(e) => flash.show(e.to_string(), now),
        }
    }

    pub fn traverse(&mut self, algo: Algo, flash: &mut Flash, now: Instant) {
        let start = match self.start.parse_label() {
            Ok(s) => s,
            Err(e) => {
                flash.show(e.to_string(), now);
                return;
            }
        };
        match structural::graph_traverse(&self.core.state, algo, &start) {
            Ok(outcome) => {
                self.visited.clear();
                self.core.start_trace(outcome.events, outcome.insight, now);
            }
            Err(e) => flash.show(e.to_string(), now),
        }
    }

    pub fn clear(&mut self) {
        self.visited.clear();
        self.core.reset(Graph::new(), insight::graph::default());
    }

    /// Extends the visited projection as traversal highlights release
    pub fn tick(&mut self, now: Instant) {
        let result = self.core.tick(now);
        for event in &result.events {
            if let StepEvent::Highlight(Target::Vertex(id)) = event {
                self.visited.push(id.clone());
            }
        }
    }
}

// ---- Hash table panel ----

pub struct HashPanel {
    pub core: PanelCore<HashTable>,
    pub key: InputField,
}

impl HashPanel {
    pub fn new() -> Self {
        HashPanel {
            core: PanelCore::new(HashTable::new(), insight::hash::default()),
            key: InputField::new("Key"),
        }
    }

    fn parse_key(&self, flash: &mut Flash, now: Instant) -> Option<i32> {
        match self.key.parse_i32() {
            Ok(key) => Some(key),
            Err(_) => {
                flash.show("Please enter a valid number for the key.", now);
                None
            }
        }
    }

    pub fn insert(&mut self, flash: &mut Flash, now: Instant) {
        if let Some(key) = self.parse_key(flash, now) {
            let outcome = structural::hash_insert(&self.core.state, key);
            self.core.start(outcome, flash, now);
            self.key.clear();
        }
    }

    pub fn search(&mut self, flash: &mut Flash, now: Instant) {
        if let Some(key) = self.parse_key(flash, now) {
            let outcome = structural::hash_search(&self.core.state, key);
            self.core.start(outcome, flash, now);
            self.key.clear();
        }
    }

    pub fn delete(&mut self, flash: &mut Flash, now: Instant) {
        if let Some(key) = self.parse_key(flash, now) {
            let outcome = structural::hash_delete(&self.core.state, key);
            self.core.start(outcome, flash, now);
            self.key.clear();
        }
    }

    pub fn clear(&mut self) {
        self.core.reset(HashTable::new(), insight::hash::default());
    }
}

// ---- Sorting panel ----

/// The sorting panel replays its trace over a displayed working array:
/// swaps and overwrites mutate it per tick, compares drive the highlighted
/// pair, and the sorted set fills as marks arrive. When the run finishes
/// every index is marked sorted regardless of what the algorithm emitted.
pub struct SortingPanel {
    pub items: Vec<i32>,
    final_items: Option<Vec<i32>>,
    pub playback: Playback,
    /// Pair (or single index) emphasized by the latest event; replaced per
    /// tick rather than expiring on a timer
    pub highlighted: Vec<usize>,
    pub sorted: FxHashSet<usize>,
    pub insight: Insight,
}

impl SortingPanel {
    pub fn new() -> Self {
        SortingPanel {
            items: Self::random_items(),
            final_items: None,
            playback: Playback::new(),
            highlighted: Vec::new(),
            sorted: FxHashSet::default(),
            insight: insight::sorting::default(),
        }
    }

    fn random_items() -> Vec<i32> {
        let mut rng = rand::thread_rng();
        (0..SORT_ARRAY_SIZE)
            .map(|_| rng.gen_range(0..100) + 5)
            .collect()
    }

    pub fn is_sorting(&self) -> bool {
        self.playback.is_playing()
    }

    pub fn reset(&mut self) {
        if self.is_sorting() {
            return;
        }
        self.playback.cancel();
        self.items = Self::random_items();
        self.final_items = None;
        self.highlighted.clear();
        self.sorted.clear();
        self.insight = insight::sorting::default();
    }

    pub fn sort(&mut self, algo: SortAlgo, now: Instant) {
        if self.is_sorting() {
            return;
        }
        self.highlighted.clear();
        self.sorted.clear();
        let outcome = sorting::run(algo, &self.items);
        if let Some(insight) = outcome.insight {
            self.insight = insight;
        }
        self.final_items = Some(outcome.state);
        self.playback.submit(outcome.events, SORT_CADENCE, now);
    }

    pub fn tick(&mut self, now: Instant) {
        let result = self.playback.poll(now);
        for event in &result.events {
            match *event {
                StepEvent::Compare(i, j) => self.highlighted = vec![i, j],
                StepEvent::Swap(i, j) => {
                    self.highlighted = vec![i, j];
                    sorting::apply(&mut self.items, event);
                }
                StepEvent::Overwrite(i, _) => {
                    self.highlighted = vec![i];
                    sorting::apply(&mut self.items, event);
                }
                StepEvent::MarkSorted(i) => {
                    self.highlighted = vec![i];
                    self.sorted.insert(i);
                }
                StepEvent::Highlight(_) => {}
            }
        }
        if result.finished {
            self.highlighted.clear();
            if let Some(items) = self.final_items.take() {
                self.items = items;
            }
            // Terminal consistency rule: everything is sorted now
            self.sorted = (0..self.items.len()).collect();
        }
    }
}

/// All panels plus the app-wide flash message
pub struct Panels {
    pub array: ArrayPanel,
    pub stack: StackPanel,
    pub queue: QueuePanel,
    pub list: ListPanel,
    pub bst: BstPanel,
    pub graph: GraphPanel,
    pub hash: HashPanel,
    pub sorting: SortingPanel,
    pub flash: Flash,
}

impl Panels {
    pub fn new() -> Self {
        Panels {
            array: ArrayPanel::new(),
            stack: StackPanel::new(),
            queue: QueuePanel::new(),
            list: ListPanel::new(),
            bst: BstPanel::new(),
            graph: GraphPanel::new(),
            hash: HashPanel::new(),
            sorting: SortingPanel::new(),
            flash: Flash::new(FLASH_TTL),
        }
    }

    /// Advance every panel's timers; inactive panels finish their runs too
    pub fn tick(&mut self, now: Instant) {
        self.flash.purge(now);
        self.array.core.tick(now);
        self.stack.core.tick(now);
        self.queue.core.tick(now);
        self.list.core.tick(now);
        self.bst.core.tick(now);
        self.graph.tick(now);
        self.hash.core.tick(now);
        self.sorting.tick(now);
    }
}

impl Default for Panels {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn array_delete_applies_net_effect_when_run_finishes() {
        let mut panels = Panels::new();
        let t0 = Instant::now();
        let outcome = structural::array_delete(&panels.array.core.state, 0).unwrap();
        panels.array.core.start(outcome, &mut panels.flash, t0);

        // Highlight releases immediately; the deletion itself has not landed
        panels.array.core.tick(t0);
        assert_eq!(panels.array.core.state.items(), &[10, 25, 5, 42, 18]);

        // One cadence later the run finishes and the net effect applies
        panels.array.core.tick(t0 + STRUCT_CADENCE);
        assert_eq!(panels.array.core.state.items(), &[25, 5, 42, 18]);
    }

    #[test]
    fn superseding_operation_discards_stale_pending_state() {
        let mut panels = Panels::new();
        let t0 = Instant::now();
        let delete = structural::array_delete(&panels.array.core.state, 0).unwrap();
        panels.array.core.start(delete, &mut panels.flash, t0);

        // A new insert supersedes the unfinished delete
        let insert = structural::array_insert(&panels.array.core.state, 2, 99).unwrap();
        panels
            .array
            .core
            .start(insert, &mut panels.flash, t0 + Duration::from_millis(100));

        panels
            .array
            .core
            .tick(t0 + Duration::from_millis(100) + STRUCT_CADENCE);
        assert_eq!(
            panels.array.core.state.items(),
            &[10, 25, 99, 5, 42, 18],
            "only the superseding operation's net effect applies"
        );
    }

    #[test]
    fn sorting_run_fills_sorted_set_at_the_end() {
        let mut panel = SortingPanel::new();
        let t0 = Instant::now();
        panel.sort(SortAlgo::Bubble, t0);
        // Jump far past the end of the run; the backlog replays in order
        panel.tick(t0 + Duration::from_secs(3600));
        assert!(!panel.is_sorting());
        let mut expected = panel.items.clone();
        expected.sort_unstable();
        assert_eq!(panel.items, expected);
        assert_eq!(panel.sorted.len(), panel.items.len());
        assert!(panel.highlighted.is_empty());
    }

    #[test]
    fn sort_keys_ignored_while_a_run_is_playing() {
        let mut panel = SortingPanel::new();
        let t0 = Instant::now();
        panel.sort(SortAlgo::Bubble, t0);
        let before = panel.insight.title.clone();
        panel.sort(SortAlgo::Merge, t0 + Duration::from_millis(10));
        assert_eq!(panel.insight.title, before);
    }

    #[test]
    fn traversal_builds_visited_projection() {
        let mut panels = Panels::new();
        let t0 = Instant::now();
        panels.graph.traverse(Algo::Bfs, &mut panels.flash, t0);
        panels.graph.tick(t0 + STRUCT_CADENCE * 10);
        assert_eq!(panels.graph.visited, vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn clear_cancels_playback_and_restores_default_insight() {
        let mut panels = Panels::new();
        let t0 = Instant::now();
        let outcome = structural::array_delete(&panels.array.core.state, 0).unwrap();
        panels.array.core.start(outcome, &mut panels.flash, t0);
        panels.array.clear();
        assert!(!panels.array.core.playback.is_playing());
        assert!(panels.array.core.state.is_empty());
        assert_eq!(panels.array.core.insight.title, "Array (Vector)");

        // The cancelled run's net effect never lands
        panels.array.core.tick(t0 + STRUCT_CADENCE * 4);
        assert!(panels.array.core.state.is_empty());
    }
}
