// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the navigation stack: destination identifiers, destinations, and errors.

use core::fmt;
use core::hash::{Hash, Hasher};
use core::sync::atomic::{AtomicU64, Ordering};

static NEXT_DESTINATION_ID: AtomicU64 = AtomicU64::new(1);

/// Identifier for a [`Destination`] on a navigation stack.
///
/// Ids are drawn from a single process-wide counter, so they are unique across
/// every [`Navigator`](crate::navigator::Navigator) in the process and are
/// never handed out twice, even after the destination they named was removed.
/// They carry no information about the waypoint that produced them.
///
/// The counter is an `AtomicU64`, which requires a target with 64-bit atomics.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct DestinationId(u64);

impl DestinationId {
    /// Mints a new, never before seen identifier.
    ///
    /// The navigator calls this once per push. Hosts only need it when
    /// constructing destinations by hand (for example in tests).
    #[must_use]
    pub fn fresh() -> Self {
        Self(NEXT_DESTINATION_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw counter value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for DestinationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A resolved, renderable entry on the navigation stack.
///
/// `Destination` pairs an opaque view handle with a stable [`DestinationId`].
/// Equality and hashing look at the id only; the view is ignored, so it does
/// not need to implement `Eq`, `Hash`, or `Debug`. Two pushes of the same
/// waypoint therefore produce two distinct destinations, which is what a
/// renderer diffing on identity wants.
///
/// ```
/// use understory_navigation::{Destination, DestinationId};
///
/// let id = DestinationId::fresh();
/// let a = Destination::with_id(id, "first view");
/// let b = Destination::with_id(id, "second view");
/// assert_eq!(a, b);
///
/// let c = Destination::new("first view");
/// assert_ne!(a, c);
/// ```
#[derive(Clone)]
pub struct Destination<V> {
    id: DestinationId,
    view: V,
}

impl<V> Destination<V> {
    /// Wraps `view` with a freshly minted id.
    #[must_use]
    pub fn new(view: V) -> Self {
        Self::with_id(DestinationId::fresh(), view)
    }

    /// Wraps `view` with an explicit id.
    ///
    /// The navigator never accepts externally built destinations, so reusing
    /// an id here cannot put duplicates on a stack.
    #[must_use]
    pub const fn with_id(id: DestinationId, view: V) -> Self {
        Self { id, view }
    }

    /// Returns the destination's identifier.
    #[must_use]
    pub const fn id(&self) -> DestinationId {
        self.id
    }

    /// Returns a shared reference to the wrapped view.
    #[must_use]
    pub const fn view(&self) -> &V {
        &self.view
    }

    /// Consumes the destination and returns the wrapped view.
    #[must_use]
    pub fn into_view(self) -> V {
        self.view
    }
}

impl<V> PartialEq for Destination<V> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<V> Eq for Destination<V> {}

impl<V> Hash for Destination<V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl<V> fmt::Debug for Destination<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Destination")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

/// Errors reported by fallible navigation operations.
///
/// Push, pop, and reset are total and never fail. Every operation that can
/// fail leaves the stack untouched when it does.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    /// The requested destination is not on the navigation stack.
    #[error("destination {0} is not on the navigation stack")]
    UnknownDestination(DestinationId),
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use alloc::string::ToString;
    use std::hash::{BuildHasher, RandomState};

    #[test]
    fn fresh_ids_are_distinct_and_increasing() {
        let a = DestinationId::fresh();
        let b = DestinationId::fresh();
        assert_ne!(a, b);
        assert!(b > a);
    }

    #[test]
    fn equality_and_hash_ignore_the_view() {
        let hasher = RandomState::new();
        let id = DestinationId::fresh();
        let dest1 = Destination::with_id(id, "A");
        let dest2 = Destination::with_id(id, "B");
        let dest3 = Destination::new("A");

        assert_eq!(dest1, dest2);
        assert_ne!(dest1, dest3);
        assert_eq!(hasher.hash_one(&dest1), hasher.hash_one(&dest2));
        assert_ne!(hasher.hash_one(&dest1), hasher.hash_one(&dest3));
    }

    #[test]
    fn view_without_eq_or_debug_is_allowed() {
        struct Opaque;
        let dest = Destination::new(Opaque);
        let copy = Destination::with_id(dest.id(), Opaque);
        assert_eq!(dest, copy);
        assert!(alloc::format!("{dest:?}").starts_with("Destination { id: "));
    }

    #[test]
    fn error_names_the_missing_destination() {
        let id = DestinationId::fresh();
        let err = NavigationError::UnknownDestination(id);
        assert_eq!(
            err.to_string(),
            alloc::format!("destination #{} is not on the navigation stack", id.get())
        );
    }
}
