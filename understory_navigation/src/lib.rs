// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_navigation --heading-base-level=0

//! Understory Navigation: a renderer-agnostic navigation stack.
//!
//! ## Overview
//!
//! This crate models screen-to-screen navigation as a stack of resolved destinations:
//!
//! - **Waypoints** ([`Waypoint`]) are application-defined descriptions of a screen,
//!   typically a small enum. Each one knows how to resolve itself into a view.
//! - **Destinations** ([`Destination`]) are resolved stack entries. Each carries a
//!   process-unique [`DestinationId`]; equality and hashing look at the id only.
//! - The **navigator** ([`Navigator`]) owns the stack and is the only thing that
//!   mutates it: push, pop, pop-to, and reset.
//! - **Handles** ([`NavHandle`]) are given to resolvers so views can request further
//!   navigation without holding the navigator.
//! - **Observers** ([`StackObserver`]) turn stack changes into enter/leave events a
//!   renderer can apply by id.
//!
//! This crate deliberately does **not** know about widgets, display trees, or any
//! particular UI framework. Host frameworks are responsible for:
//!
//! - Choosing the view type ([`Waypoint::View`]) and drawing the top destination
//!   (or the whole back stack).
//! - Calling [`Navigator::apply_pending`] after event handling so queued requests
//!   take effect.
//! - Installing a `tracing` subscriber if they want the transition log.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_navigation::{NavHandle, Navigator, Waypoint};
//!
//! #[derive(Debug, PartialEq, Eq, Hash)]
//! enum Route {
//!     Home,
//!     Article(u32),
//! }
//!
//! impl Waypoint for Route {
//!     type View = String;
//!
//!     fn resolve(&self, _handle: &NavHandle<Self>) -> String {
//!         match self {
//!             Self::Home => "home".to_string(),
//!             Self::Article(n) => format!("article {n}"),
//!         }
//!     }
//! }
//!
//! let mut nav = Navigator::new();
//! nav.push(Route::Home);
//! nav.push(Route::Article(7));
//! assert_eq!(nav.top().map(|d| d.view().as_str()), Some("article 7"));
//!
//! nav.pop();
//! assert_eq!(nav.len(), 1);
//!
//! nav.reset();
//! assert!(nav.is_empty());
//!
//! // Popping an empty stack is a no-op.
//! assert!(nav.pop().is_none());
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support in `tracing` and `thiserror`.
//!
//! This crate is `no_std` and uses `alloc`. Destination ids come from a global
//! `AtomicU64`, so the target must support 64-bit atomics
//! (`target_has_atomic = "64"`); most 32-bit microcontrollers such as
//! `thumbv7em` do not.

#![no_std]

extern crate alloc;

pub mod navigator;
pub mod transition;
pub mod types;
pub mod waypoint;

pub use navigator::{Navigator, NavigatorOptions};
pub use transition::{StackEvent, StackEvents, StackObserver, transition};
pub use types::{Destination, DestinationId, NavigationError};
pub use waypoint::{NavCommand, NavHandle, Waypoint};
