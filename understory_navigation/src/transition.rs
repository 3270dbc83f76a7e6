// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stack transitions: minimal enter/leave events between two stack snapshots.
//!
//! Renderers diff the navigation stack on [`DestinationId`]. Because a stack
//! only ever grows at the top or shrinks from the top, the difference between
//! two snapshots is always "drop some entries above a shared prefix, then add
//! some new ones". [`transition`] reports exactly that:
//!
//! - [`StackEvent::Leave`] for each removed entry, top first (inner → outer).
//! - [`StackEvent::Enter`] for each added entry, root first (outer → inner).
//!
//! Entries in the shared prefix are untouched and produce no events, so hosts
//! keep their widget state.
//!
//! [`StackObserver`] keeps the last seen snapshot and revision for one
//! navigator and produces events only when something changed.
//!
//! ```
//! use understory_navigation::{NavHandle, Navigator, StackEvent, StackObserver, Waypoint};
//!
//! #[derive(Debug, PartialEq, Eq, Hash)]
//! struct Page(u8);
//!
//! impl Waypoint for Page {
//!     type View = u8;
//!     fn resolve(&self, _: &NavHandle<Self>) -> u8 {
//!         self.0
//!     }
//! }
//!
//! let mut nav = Navigator::new();
//! let mut observer = StackObserver::new();
//!
//! let a = nav.push(Page(1));
//! let b = nav.push(Page(2));
//! assert_eq!(observer.sync(&nav).as_slice(), &[StackEvent::Enter(a), StackEvent::Enter(b)]);
//!
//! nav.pop();
//! let c = nav.push(Page(3));
//! assert_eq!(observer.sync(&nav).as_slice(), &[StackEvent::Leave(b), StackEvent::Enter(c)]);
//!
//! // Nothing changed since the last sync.
//! assert!(observer.sync(&nav).is_empty());
//! ```

use alloc::vec::Vec;

use smallvec::SmallVec;

use crate::navigator::Navigator;
use crate::types::{Destination, DestinationId};
use crate::waypoint::Waypoint;

/// A single change between two stack snapshots.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum StackEvent {
    /// The destination appeared on the stack.
    Enter(DestinationId),
    /// The destination was removed from the stack.
    Leave(DestinationId),
}

/// Event list returned by [`transition`]; pushes and pops usually fit inline.
pub type StackEvents = SmallVec<[StackEvent; 2]>;

/// Computes the minimal leave/enter sequence that turns `old` into `new`.
#[must_use]
pub fn transition(old: &[DestinationId], new: &[DestinationId]) -> StackEvents {
    let shared = old
        .iter()
        .zip(new.iter())
        .take_while(|(a, b)| a == b)
        .count();
    let mut events = StackEvents::new();
    events.extend(old[shared..].iter().rev().map(|&id| StackEvent::Leave(id)));
    events.extend(new[shared..].iter().map(|&id| StackEvent::Enter(id)));
    events
}

/// Tracks the last observed stack of one navigator.
#[derive(Clone, Debug, Default)]
pub struct StackObserver {
    ids: Vec<DestinationId>,
    revision: Option<u64>,
}

impl StackObserver {
    /// Creates an observer that has seen an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the ids from the last update, root first.
    #[must_use]
    pub fn current(&self) -> &[DestinationId] {
        &self.ids
    }

    /// Returns the top id from the last update.
    #[must_use]
    pub fn top(&self) -> Option<DestinationId> {
        self.ids.last().copied()
    }

    /// Replaces the snapshot with `stack` and returns what changed.
    pub fn update<V>(&mut self, stack: &[Destination<V>]) -> StackEvents {
        let next: Vec<DestinationId> = stack.iter().map(Destination::id).collect();
        let events = transition(&self.ids, &next);
        self.ids = next;
        self.revision = None;
        events
    }

    /// Catches up with `navigator`, skipping the diff if its revision is unchanged.
    ///
    /// An observer should follow a single navigator; revisions of different
    /// navigators are unrelated.
    pub fn sync<W: Waypoint>(&mut self, navigator: &Navigator<W>) -> StackEvents {
        if self.revision == Some(navigator.revision()) {
            return StackEvents::new();
        }
        let events = self.update(navigator.destinations());
        self.revision = Some(navigator.revision());
        events
    }

    /// Forgets the snapshot, emitting a leave for every tracked entry (top first).
    pub fn clear(&mut self) -> StackEvents {
        let events = transition(&self.ids, &[]);
        self.ids.clear();
        self.revision = None;
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn ids(n: usize) -> Vec<DestinationId> {
        (0..n).map(|_| DestinationId::fresh()).collect()
    }

    #[test]
    fn push_enters_one() {
        let v = ids(3);
        let events = transition(&v[..2], &v);
        assert_eq!(events.as_slice(), &[StackEvent::Enter(v[2])]);
        assert!(!events.spilled());
    }

    #[test]
    fn reset_leaves_top_first() {
        let v = ids(3);
        let events = transition(&v, &[]);
        assert_eq!(
            events.as_slice(),
            &[
                StackEvent::Leave(v[2]),
                StackEvent::Leave(v[1]),
                StackEvent::Leave(v[0]),
            ]
        );
    }

    #[test]
    fn replace_leaves_then_enters_above_shared_prefix() {
        let v = ids(5);
        let old = vec![v[0], v[1], v[2]];
        let new = vec![v[0], v[3], v[4]];
        let events = transition(&old, &new);
        assert_eq!(
            events.as_slice(),
            &[
                StackEvent::Leave(v[2]),
                StackEvent::Leave(v[1]),
                StackEvent::Enter(v[3]),
                StackEvent::Enter(v[4]),
            ]
        );
    }

    #[test]
    fn identical_snapshots_produce_nothing() {
        let v = ids(2);
        assert!(transition(&v, &v).is_empty());
        assert!(transition(&[], &[]).is_empty());
    }

    #[test]
    fn update_tracks_destinations() {
        let mut observer = StackObserver::new();
        let a = Destination::new(());
        let b = Destination::new(());

        let events = observer.update(&[a.clone(), b.clone()]);
        assert_eq!(
            events.as_slice(),
            &[StackEvent::Enter(a.id()), StackEvent::Enter(b.id())]
        );
        assert_eq!(observer.current(), &[a.id(), b.id()]);
        assert_eq!(observer.top(), Some(b.id()));

        let events = observer.update(&[a.clone()]);
        assert_eq!(events.as_slice(), &[StackEvent::Leave(b.id())]);

        let events = observer.clear();
        assert_eq!(events.as_slice(), &[StackEvent::Leave(a.id())]);
        assert!(observer.current().is_empty());
    }
}
