// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drive a navigator the way a UI frame loop would.
//!
//! This example shows how to combine:
//! - `Navigator` as the single owner of the stack,
//! - screens that request navigation through their `NavHandle`,
//! - `StackObserver` to turn stack changes into enter/leave events for a renderer,
//! - `tracing-subscriber` to print the transition log.
//!
//! Run:
//! - `cargo run -p understory_navigation_demos --example navigation_flow`

use understory_navigation::{Navigator, NavigatorOptions, StackEvent, StackObserver};
use understory_navigation_demos::MailRoute;

fn render(nav: &Navigator<MailRoute>, observer: &mut StackObserver) {
    for event in observer.sync(nav) {
        match event {
            StackEvent::Enter(id) => {
                let title = nav.get(id).map(|d| d.view().title()).unwrap_or_default();
                println!("  mount   {id} {title}");
            }
            StackEvent::Leave(id) => println!("  unmount {id}"),
        }
    }
    let path: Vec<String> = nav.iter().map(|d| d.view().title()).collect();
    println!("  stack: [{}]", path.join(" > "));
}

fn main() {
    tracing_subscriber::fmt().with_target(false).init();

    let mut nav = Navigator::with_options(NavigatorOptions::default());
    let mut observer = StackObserver::new();

    println!("frame 0: launch");
    nav.push(MailRoute::Home);
    render(&nav, &mut observer);

    // Each frame: the user taps the primary action on the visible screen, then
    // the host applies queued requests and re-renders.
    for frame in 1..=4 {
        println!("frame {frame}: tap");
        if let Some(top) = nav.top() {
            top.view().activate();
        }
        if let Err(err) = nav.apply_pending() {
            println!("  navigation failed: {err}");
        }
        render(&nav, &mut observer);
    }

    println!("frame 5: deep link (logging off)");
    nav.set_logging_enabled(false);
    nav.extend([MailRoute::Home, MailRoute::Inbox, MailRoute::Message(42)]);
    render(&nav, &mut observer);

    println!("frame 6: back to inbox");
    nav.set_logging_enabled(true);
    if let Some(inbox) = nav.iter().nth(1).map(|d| d.id()) {
        if let Err(err) = nav.pop_to(inbox) {
            println!("  navigation failed: {err}");
        }
    }
    render(&nav, &mut observer);

    println!("frame 7: back, back, back");
    nav.pop();
    nav.pop();
    nav.pop();
    render(&nav, &mut observer);
}
