//! Operation-to-animation compiler
//!
//! A recorder takes an operation request plus the panel's current structure
//! state, runs the algorithm against a working copy, and returns an
//! [`Outcome`]: the state after the net effect, the ordered [`StepEvent`]
//! trace describing how it got there, and the [`Insight`] to display. The
//! displayed state is never touched — the replay scheduler owns applying
//! the trace and, on the final tick, the net effect.
//!
//! Three recorder families share the one event protocol:
//!
//! - [`structural`] — single-mutation panels (array, stack, queue, list,
//!   BST, graph edits, hash table)
//! - [`sorting`] — the four sorting algorithms
//! - [`traversal`] — BFS/DFS over the graph

use crate::insight::Insight;
use crate::structures::NodeId;

pub mod sorting;
pub mod structural;
pub mod traversal;

/// What a highlight event points at
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// Position in an index-addressed panel (array, stack, queue)
    Index(usize),
    /// A chained node by identity (linked list, hash entries)
    Node(NodeId),
    /// A BST node by value (values are unique in the tree)
    TreeValue(i32),
    /// A hash bucket slot
    Bucket(usize),
    /// A graph node by label
    Vertex(String),
    /// A directed graph edge by endpoint labels
    EdgeBetween(String, String),
}

/// One atomic, replayable unit of visual change
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepEvent {
    /// Two positions were compared
    Compare(usize, usize),
    /// Two positions exchanged values in place
    Swap(usize, usize),
    /// A position was assigned a value with no partner position
    Overwrite(usize, i32),
    /// A position joined the sorted prefix/suffix
    MarkSorted(usize),
    /// A transient visual emphasis with no value change
    Highlight(Target),
}

/// Result of recording one operation
#[derive(Debug, Clone)]
pub struct Outcome<S> {
    /// Structure state after the net effect; the panel installs this when
    /// playback of `events` completes
    pub state: S,
    /// The replayable trace, immutable once returned
    pub events: Vec<StepEvent>,
    /// `None` leaves the panel's current insight in place (duplicate
    /// inserts animate the existing element without changing the lesson)
    pub insight: Option<Insight>,
    /// Non-fatal, user-visible warning (search miss, duplicate); flashed by
    /// the panel alongside the animation
    pub warning: Option<String>,
}

impl<S> Outcome<S> {
    pub fn new(state: S, events: Vec<StepEvent>, insight: Insight) -> Self {
        Outcome {
            state,
            events,
            insight: Some(insight),
            warning: None,
        }
    }

    /// An outcome that animates but keeps the current insight
    pub fn keep_insight(state: S, events: Vec<StepEvent>) -> Self {
        Outcome {
            state,
            events,
            insight: None,
            warning: None,
        }
    }

    pub fn warn(mut self, message: impl Into<String>) -> Self {
        self.warning = Some(message.into());
        self
    }
}
