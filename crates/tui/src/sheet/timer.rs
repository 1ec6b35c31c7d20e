//! Fire-once deferred actions on a single-threaded loop.
//!
//! Responsibilities:
//! - Hold actions scheduled for a later instant, tagged with the mount that
//!   scheduled them.
//! - Hand back the actions that are due, in due order.
//! - Cancel pending actions by mount or by predicate.
//!
//! Does NOT handle:
//! - Waking anything up. The owner polls with `drain_due(now)`.
//! - Deciding whether a due action is still relevant (see `CoverSheet::tick`).
//!
//! Invariants:
//! - Every scheduled action is returned by `drain_due` at most once.
//! - Actions due at the same instant are returned in scheduling order.

use std::fmt;
use std::time::{Duration, Instant};

/// Generation token identifying one mount of an overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MountId(u64);

impl MountId {
    pub const FIRST: Self = Self(1);

    /// The token for the mount after this one.
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for MountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mount#{}", self.0)
    }
}

/// A scheduled action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deferred<A> {
    pub mount: MountId,
    pub due: Instant,
    pub action: A,
    seq: u64,
}

/// Queue of deferred actions, polled by the owner.
#[derive(Debug)]
pub struct DeferredQueue<A> {
    entries: Vec<Deferred<A>>,
    next_seq: u64,
}

impl<A> Default for DeferredQueue<A> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            next_seq: 0,
        }
    }
}

impl<A> DeferredQueue<A> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `action` to become due `after` the given `now`.
    pub fn schedule(&mut self, mount: MountId, after: Duration, now: Instant, action: A) {
        let seq = self.next_seq;
        self.next_seq += 1;
        tracing::trace!(%mount, delay_ms = after.as_millis() as u64, seq, "Scheduled deferred action");
        self.entries.push(Deferred {
            mount,
            due: now + after,
            action,
            seq,
        });
    }

    /// Drop every pending action scheduled by `mount`. Returns how many were dropped.
    pub fn cancel_mount(&mut self, mount: MountId) -> usize {
        self.cancel_where(|d| d.mount == mount)
    }

    /// Drop every pending action matching `pred`. Returns how many were dropped.
    pub fn cancel_where(&mut self, mut pred: impl FnMut(&Deferred<A>) -> bool) -> usize {
        let before = self.entries.len();
        self.entries.retain(|d| !pred(d));
        before - self.entries.len()
    }

    /// Remove and return every action due at or before `now`, earliest first.
    pub fn drain_due(&mut self, now: Instant) -> Vec<Deferred<A>> {
        if self.entries.iter().all(|d| d.due > now) {
            return Vec::new();
        }
        let (mut due, pending): (Vec<_>, Vec<_>) =
            std::mem::take(&mut self.entries)
                .into_iter()
                .partition(|d| d.due <= now);
        self.entries = pending;
        due.sort_by_key(|d| (d.due, d.seq));
        due
    }

    /// Earliest pending deadline, if any.
    pub fn next_due(&self) -> Option<Instant> {
        self.entries.iter().map(|d| d.due).min()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Deferred<A>> {
        self.entries.iter()
    }
}
