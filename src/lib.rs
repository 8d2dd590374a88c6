//! # Introduction
//!
//! StrucTTY is an interactive terminal visualizer for classic data
//! structures. Each panel owns one structure; the user runs operations
//! against it and watches the change replay step by step next to a
//! textbook code snippet and a complexity summary.
//!
//! ## Operation pipeline
//!
//! ```text
//! Operation → Recorder → StepEvents → Replay Scheduler → TUI
//! ```
//!
//! 1. [`structures`] — pure, immutable-update models (array, stack, queue,
//!    linked list, BST, graph, hash table).
//! 2. [`recorder`] — runs an operation on a working copy and records the
//!    replayable [`recorder::StepEvent`] trace plus an [`insight::Insight`].
//! 3. [`replay`] — meters the trace out on a fixed cadence, applies the net
//!    effect when the run finishes, and expires transient highlights on
//!    their own timers.
//! 4. [`insight`] — the pedagogical metadata catalog.
//! 5. [`ui`] — ratatui-based TUI; not part of the stable library API.

pub mod constants;
pub mod insight;
pub mod recorder;
pub mod replay;
pub mod structures;
pub mod ui;
