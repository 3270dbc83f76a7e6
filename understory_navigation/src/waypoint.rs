// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Waypoints and the handle views use to request navigation.
//!
//! ## Resolving
//!
//! A [`Waypoint`] is a *description* of a screen: usually a small enum owned by
//! the application. [`Waypoint::resolve`] turns it into whatever the host
//! renders (`Self::View`) and is called exactly once per push.
//!
//! The resolver receives a [`NavHandle`] rather than the navigator itself. A
//! view that needs to navigate further (a list row opening a detail page, a
//! "done" button going back) keeps a clone of the handle and queues
//! [`NavCommand`]s through it. The navigator applies them when the host calls
//! [`Navigator::apply_pending`](crate::navigator::Navigator::apply_pending),
//! typically once per frame after event handling. Because the handle can only
//! queue commands, a resolver can never mutate the stack it is being pushed onto.
//!
//! ```
//! use understory_navigation::{NavHandle, Navigator, Waypoint};
//!
//! #[derive(Debug, PartialEq, Eq, Hash)]
//! enum Route {
//!     Inbox,
//!     Message(u32),
//! }
//!
//! struct Screen {
//!     title: String,
//!     nav: NavHandle<Route>,
//! }
//!
//! impl Waypoint for Route {
//!     type View = Screen;
//!
//!     fn resolve(&self, handle: &NavHandle<Self>) -> Screen {
//!         let title = match self {
//!             Self::Inbox => "Inbox".to_string(),
//!             Self::Message(n) => format!("Message {n}"),
//!         };
//!         Screen { title, nav: handle.clone() }
//!     }
//! }
//!
//! let mut nav = Navigator::new();
//! nav.push(Route::Inbox);
//!
//! // A tap inside the inbox view opens a message.
//! nav.top().unwrap().view().nav.push(Route::Message(3));
//! assert_eq!(nav.len(), 1);
//!
//! assert_eq!(nav.apply_pending(), Ok(1));
//! assert_eq!(nav.top().unwrap().view().title, "Message 3");
//! ```

use alloc::collections::VecDeque;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt::{self, Debug};
use core::hash::Hash;

use crate::types::DestinationId;

/// An application-defined navigation target.
///
/// Implement this for the closed set of screens an app can show. The `Debug`
/// representation is used as the human-readable description in log events.
pub trait Waypoint: Debug + Eq + Hash + Sized {
    /// The renderable handle the host draws for a destination.
    ///
    /// The navigator never inspects it. Use a boxed trait object, an enum, or
    /// a key into the host's own widget storage.
    type View;

    /// Produces the view for this waypoint.
    ///
    /// Must be a pure function of `self` and `handle`. The handle may be
    /// cloned into the view so it can request further navigation later.
    fn resolve(&self, handle: &NavHandle<Self>) -> Self::View;
}

/// A navigation request queued through a [`NavHandle`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavCommand<W> {
    /// Push a new destination resolved from the waypoint.
    Push(W),
    /// Remove the top destination, if any.
    Pop,
    /// Remove every destination above the given one.
    PopTo(DestinationId),
    /// Clear the stack.
    Reset,
}

/// Cheap, clonable capability for requesting navigation.
///
/// All clones share one FIFO queue. Handles from
/// [`Navigator::handle`](crate::navigator::Navigator::handle) feed that
/// navigator; a handle made with [`NavHandle::new`] is detached and only
/// collects commands for the caller to inspect. The handle is single-threaded (`!Send`, `!Sync`),
/// matching the navigator's UI-thread affinity.
pub struct NavHandle<W> {
    queue: Rc<RefCell<VecDeque<NavCommand<W>>>>,
}

impl<W> NavHandle<W> {
    /// Creates a handle with its own empty queue.
    ///
    /// A navigator makes one of these for itself. Creating one by hand gives a
    /// detached handle for resolving views outside a navigator, for example to
    /// check in a test which commands a view queues.
    #[must_use]
    pub fn new() -> Self {
        Self {
            queue: Rc::new(RefCell::new(VecDeque::new())),
        }
    }

    /// Queues a push of `waypoint`.
    pub fn push(&self, waypoint: W) {
        self.send(NavCommand::Push(waypoint));
    }

    /// Queues a pop of the top destination.
    pub fn pop(&self) {
        self.send(NavCommand::Pop);
    }

    /// Queues a pop back to `id`.
    pub fn pop_to(&self, id: DestinationId) {
        self.send(NavCommand::PopTo(id));
    }

    /// Queues a reset to the root.
    pub fn reset(&self) {
        self.send(NavCommand::Reset);
    }

    /// Queues an arbitrary command.
    pub fn send(&self, command: NavCommand<W>) {
        self.queue.borrow_mut().push_back(command);
    }

    /// Returns the number of commands waiting to be applied.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Removes and returns the oldest queued command.
    pub fn take_next(&self) -> Option<NavCommand<W>> {
        self.queue.borrow_mut().pop_front()
    }

    /// Removes and returns every queued command, oldest first.
    pub fn drain(&self) -> Vec<NavCommand<W>> {
        self.queue.borrow_mut().drain(..).collect()
    }
}

impl<W> Default for NavHandle<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W> Clone for NavHandle<W> {
    fn clone(&self) -> Self {
        Self {
            queue: Rc::clone(&self.queue),
        }
    }
}

impl<W> Debug for NavHandle<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavHandle")
            .field("pending", &self.pending())
            .finish()
    }
}
