//! Timed, cancellable playback of step-event sequences
//!
//! The recorder computes a full [`StepEvent`] trace synchronously;
//! [`Playback`] then meters it out one event per tick of a fixed cadence.
//! Nothing here blocks: the UI event loop polls every timer with the
//! current `Instant`, which keeps every deadline on the single
//! event-processing thread and makes the whole module testable with
//! manufactured clocks.
//!
//! Three timer shapes cover the visualizer:
//!
//! - [`Playback`] — the `Idle`/`Playing` replay state machine
//! - [`Highlights`] — transient emphasis markers, each with its own expiry
//! - [`Flash`] — the single self-clearing status message

use crate::recorder::{StepEvent, Target};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Events released by one poll, plus whether the run just completed
#[derive(Debug, Default)]
pub struct PollResult {
    pub events: Vec<StepEvent>,
    /// True exactly once per run, one cadence after the final event; the
    /// panel applies the operation's net structural effect on it
    pub finished: bool,
}

/// Replay state machine for one panel
///
/// `submit` while a run is still playing supersedes it: the pending queue
/// is dropped whole — no partial apply of abandoned future events — and the
/// new run starts immediately.
#[derive(Debug)]
pub struct Playback {
    queue: VecDeque<StepEvent>,
    cadence: Duration,
    next_due: Instant,
    playing: bool,
}

impl Playback {
    pub fn new() -> Self {
        Playback {
            queue: VecDeque::new(),
            cadence: Duration::from_millis(500),
            playing: false,
            next_due: Instant::now(),
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Start a new run; the first event releases on the next poll
    pub fn submit(&mut self, events: Vec<StepEvent>, cadence: Duration, now: Instant) {
        self.queue = VecDeque::from(events);
        self.cadence = cadence;
        self.next_due = now;
        self.playing = true;
    }

    /// Drop the in-flight run without applying anything further
    pub fn cancel(&mut self) {
        self.queue.clear();
        self.playing = false;
    }

    /// Release every event that has come due.
    ///
    /// Normally one event per cadence tick; a laggy poll releases the
    /// backlog in order rather than stretching the run.
    pub fn poll(&mut self, now: Instant) -> PollResult {
        let mut result = PollResult::default();
        if !self.playing {
            return result;
        }
        while self.next_due <= now {
            match self.queue.pop_front() {
                Some(event) => {
                    result.events.push(event);
                    self.next_due += self.cadence;
                }
                None => {
                    self.playing = false;
                    result.finished = true;
                    break;
                }
            }
        }
        result
    }
}

impl Default for Playback {
    fn default() -> Self {
        Self::new()
    }
}

/// Transient highlight markers with independent expiry
///
/// Each flashed target stays lit for the configured TTL regardless of the
/// playback cadence; re-flashing a target restarts its timer.
#[derive(Debug)]
pub struct Highlights {
    entries: Vec<(Target, Instant)>,
    ttl: Duration,
}

impl Highlights {
    pub fn new(ttl: Duration) -> Self {
        Highlights {
            entries: Vec::new(),
            ttl,
        }
    }

    pub fn flash(&mut self, target: Target, now: Instant) {
        self.entries.retain(|(t, _)| *t != target);
        self.entries.push((target, now + self.ttl));
    }

    /// Drop expired markers; call once per event-loop pass
    pub fn purge(&mut self, now: Instant) {
        self.entries.retain(|(_, expiry)| *expiry > now);
    }

    pub fn contains(&self, target: &Target) -> bool {
        self.entries.iter().any(|(t, _)| t == target)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Target> {
        self.entries.iter().map(|(t, _)| t)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// One self-clearing user-facing message (the `error` projection)
#[derive(Debug)]
pub struct Flash {
    current: Option<(String, Instant)>,
    ttl: Duration,
}

impl Flash {
    pub fn new(ttl: Duration) -> Self {
        Flash { current: None, ttl }
    }

    pub fn show(&mut self, message: impl Into<String>, now: Instant) {
        self.current = Some((message.into(), now + self.ttl));
    }

    pub fn purge(&mut self, now: Instant) {
        if let Some((_, expiry)) = &self.current {
            if *expiry <= now {
                self.current = None;
            }
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.current.as_ref().map(|(m, _)| m.as_str())
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}
