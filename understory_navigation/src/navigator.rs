// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The navigator: sole owner and mutator of a navigation stack.
//!
//! ## Overview
//!
//! [`Navigator`] keeps an ordered stack of [`Destination`]s, root first and the
//! visible screen last. Transitions are:
//!
//! - [`Navigator::push`]: resolve a waypoint and append it.
//! - [`Navigator::pop`]: remove the top entry. A no-op on an empty stack.
//! - [`Navigator::pop_to`]: remove everything above a given entry.
//! - [`Navigator::reset`]: clear the stack. A no-op when already empty.
//!
//! Every call is synchronous; the new stack is observable as soon as the call
//! returns. [`Navigator::revision`] changes whenever the contents change, so a
//! renderer can poll cheaply or feed a [`StackObserver`](crate::transition::StackObserver).
//!
//! ## Logging
//!
//! Transitions are reported as `tracing` events under the
//! `understory_navigation` target. When logging is disabled through
//! [`NavigatorOptions::logging`] or [`Navigator::set_logging_enabled`], no
//! events are emitted at all; stack behavior is unaffected.
//!
//! ## Threading
//!
//! A navigator is bound to the thread that created it (it is `!Send` and
//! `!Sync`). Hosts that need to drive navigation from elsewhere should forward
//! requests to the UI thread, or wrap the navigator in their own lock.

use alloc::vec::Vec;
use core::fmt;

use crate::types::{Destination, DestinationId, NavigationError};
use crate::waypoint::{NavCommand, NavHandle, Waypoint};

const LOG_TARGET: &str = "understory_navigation";

/// Configuration for a [`Navigator`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct NavigatorOptions {
    /// Emit `tracing` events for transitions.
    pub logging: bool,
}

impl Default for NavigatorOptions {
    fn default() -> Self {
        Self { logging: true }
    }
}

/// Navigation stack controller, generic over the application's [`Waypoint`] type.
///
/// ## Usage
///
/// - Construct with [`Navigator::new`] or [`Navigator::with_options`].
/// - Drive it with [`push`](Self::push), [`pop`](Self::pop),
///   [`pop_to`](Self::pop_to), and [`reset`](Self::reset), or queue the same
///   requests from inside views through a [`NavHandle`] and call
///   [`apply_pending`](Self::apply_pending) once per frame.
/// - Render from [`destinations`](Self::destinations) and diff on
///   [`Destination::id`].
pub struct Navigator<W: Waypoint> {
    stack: Vec<Destination<W::View>>,
    handle: NavHandle<W>,
    logging: bool,
    revision: u64,
}

impl<W: Waypoint> Navigator<W> {
    /// Creates an empty navigator with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(NavigatorOptions::default())
    }

    /// Creates an empty navigator with the given options.
    #[must_use]
    pub fn with_options(options: NavigatorOptions) -> Self {
        Self {
            stack: Vec::new(),
            handle: NavHandle::new(),
            logging: options.logging,
            revision: 0,
        }
    }

    /// Returns whether transitions are logged.
    #[must_use]
    pub const fn is_logging_enabled(&self) -> bool {
        self.logging
    }

    /// Enables or disables transition logging.
    pub fn set_logging_enabled(&mut self, enabled: bool) {
        self.logging = enabled;
    }

    /// Returns a handle that queues commands for this navigator.
    #[must_use]
    pub fn handle(&self) -> NavHandle<W> {
        self.handle.clone()
    }

    /// Resolves `waypoint` and pushes the result on top of the stack.
    ///
    /// The same waypoint may be pushed any number of times; each push gets its
    /// own [`DestinationId`]. There is no depth limit.
    pub fn push(&mut self, waypoint: W) -> DestinationId {
        if self.logging {
            tracing::info!(target: LOG_TARGET, waypoint = ?waypoint, "routing");
        }
        let view = waypoint.resolve(&self.handle);
        let id = DestinationId::fresh();
        self.stack.push(Destination::with_id(id, view));
        self.revision += 1;
        id
    }

    /// Removes and returns the top destination.
    ///
    /// Returns `None` and leaves the stack empty if there was nothing to pop.
    pub fn pop(&mut self) -> Option<Destination<W::View>> {
        if self.logging {
            tracing::info!(target: LOG_TARGET, depth = self.stack.len(), "navigate back");
        }
        let popped = self.stack.pop();
        if popped.is_some() {
            self.revision += 1;
        }
        popped
    }

    /// Removes every destination above `id`, leaving `id` on top.
    ///
    /// The removed destinations are returned top first. If `id` is not on the
    /// stack the stack is left unchanged and
    /// [`NavigationError::UnknownDestination`] is returned.
    pub fn pop_to(
        &mut self,
        id: DestinationId,
    ) -> Result<Vec<Destination<W::View>>, NavigationError> {
        let pos = self
            .position(id)
            .ok_or(NavigationError::UnknownDestination(id))?;
        if self.logging {
            tracing::info!(
                target: LOG_TARGET,
                %id,
                removed = self.stack.len() - pos - 1,
                "navigate back to"
            );
        }
        let mut removed = self.stack.split_off(pos + 1);
        if !removed.is_empty() {
            removed.reverse();
            self.revision += 1;
        }
        Ok(removed)
    }

    /// Clears the stack and returns the removed destinations, root first.
    pub fn reset(&mut self) -> Vec<Destination<W::View>> {
        if self.logging {
            tracing::info!(target: LOG_TARGET, removed = self.stack.len(), "navigate to root");
        }
        if self.stack.is_empty() {
            return Vec::new();
        }
        self.revision += 1;
        core::mem::take(&mut self.stack)
    }

    /// Applies a single command.
    pub fn apply(&mut self, command: NavCommand<W>) -> Result<(), NavigationError> {
        match command {
            NavCommand::Push(waypoint) => {
                self.push(waypoint);
            }
            NavCommand::Pop => {
                self.pop();
            }
            NavCommand::PopTo(id) => {
                self.pop_to(id)?;
            }
            NavCommand::Reset => {
                self.reset();
            }
        }
        Ok(())
    }

    /// Applies commands queued through this navigator's handles, oldest first.
    ///
    /// Only the commands pending on entry are applied. Anything queued during
    /// the call (for example by a resolver) waits for the next call, so a
    /// waypoint that redirects to itself advances one step per call.
    /// Returns the number of commands applied. On error the failing command is
    /// dropped and commands queued behind it stay pending.
    pub fn apply_pending(&mut self) -> Result<usize, NavigationError> {
        let budget = self.handle.pending();
        let mut applied = 0;
        while applied < budget {
            let Some(command) = self.handle.take_next() else {
                break;
            };
            if let Err(err) = self.apply(command) {
                if self.logging {
                    tracing::warn!(
                        target: LOG_TARGET,
                        error = %err,
                        pending = self.handle.pending(),
                        "dropped navigation command"
                    );
                }
                return Err(err);
            }
            applied += 1;
        }
        Ok(applied)
    }

    /// Returns the stack, root first.
    #[must_use]
    pub fn destinations(&self) -> &[Destination<W::View>] {
        &self.stack
    }

    /// Iterates over the stack, root first.
    pub fn iter(&self) -> core::slice::Iter<'_, Destination<W::View>> {
        self.stack.iter()
    }

    /// Iterates over destination ids, root first.
    pub fn ids(&self) -> impl Iterator<Item = DestinationId> + '_ {
        self.stack.iter().map(Destination::id)
    }

    /// Returns the visible destination, if any.
    #[must_use]
    pub fn top(&self) -> Option<&Destination<W::View>> {
        self.stack.last()
    }

    /// Returns the bottom-most destination, if any.
    #[must_use]
    pub fn root(&self) -> Option<&Destination<W::View>> {
        self.stack.first()
    }

    /// Returns the destination with `id`, if it is on the stack.
    #[must_use]
    pub fn get(&self, id: DestinationId) -> Option<&Destination<W::View>> {
        self.stack.iter().find(|d| d.id() == id)
    }

    /// Returns the stack index of `id`, counted from the root.
    #[must_use]
    pub fn position(&self, id: DestinationId) -> Option<usize> {
        self.stack.iter().position(|d| d.id() == id)
    }

    /// Returns `true` if `id` is on the stack.
    #[must_use]
    pub fn contains(&self, id: DestinationId) -> bool {
        self.position(id).is_some()
    }

    /// Returns the number of destinations on the stack.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    /// Returns `true` if the stack is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Returns a counter that changes whenever the stack contents change.
    ///
    /// No-op calls (popping an empty stack, resetting an empty stack, popping
    /// to the current top) leave it untouched.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }
}

impl<W: Waypoint> Default for Navigator<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Waypoint> Extend<W> for Navigator<W> {
    fn extend<I: IntoIterator<Item = W>>(&mut self, waypoints: I) {
        for waypoint in waypoints {
            self.push(waypoint);
        }
    }
}

impl<'a, W: Waypoint> IntoIterator for &'a Navigator<W> {
    type Item = &'a Destination<W::View>;
    type IntoIter = core::slice::Iter<'a, Destination<W::View>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<W: Waypoint> fmt::Debug for Navigator<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Navigator")
            .field("stack", &self.stack)
            .field("handle", &self.handle)
            .field("logging", &self.logging)
            .field("revision", &self.revision)
            .finish()
    }
}
