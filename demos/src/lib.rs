// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A tiny mail-client flow shared by the navigation demos.
//!
//! Every screen keeps a clone of the navigator's handle and requests its own
//! follow-up navigation when activated, the way a button tap would.

use understory_navigation::{NavHandle, Waypoint};

/// The screens the demo app can show.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum MailRoute {
    /// Landing screen.
    Home,
    /// Message list.
    Inbox,
    /// A single message.
    Message(u32),
    /// Preferences.
    Settings,
}

/// A rendered screen.
pub trait Screen {
    /// Text a renderer would put in the title bar.
    fn title(&self) -> String;

    /// Performs the screen's primary action.
    fn activate(&self);
}

/// Boxed screen, the view type of [`MailRoute`].
pub type BoxedScreen = Box<dyn Screen>;

impl Waypoint for MailRoute {
    type View = BoxedScreen;

    fn resolve(&self, handle: &NavHandle<Self>) -> BoxedScreen {
        let nav = handle.clone();
        match *self {
            Self::Home => Box::new(HomeScreen { nav }),
            Self::Inbox => Box::new(InboxScreen { nav, unread: 3 }),
            Self::Message(id) => Box::new(MessageScreen { nav, id }),
            Self::Settings => Box::new(SettingsScreen { nav }),
        }
    }
}

struct HomeScreen {
    nav: NavHandle<MailRoute>,
}

impl Screen for HomeScreen {
    fn title(&self) -> String {
        "Home".to_string()
    }

    fn activate(&self) {
        self.nav.push(MailRoute::Inbox);
    }
}

struct InboxScreen {
    nav: NavHandle<MailRoute>,
    unread: u32,
}

impl Screen for InboxScreen {
    fn title(&self) -> String {
        format!("Inbox ({})", self.unread)
    }

    fn activate(&self) {
        self.nav.push(MailRoute::Message(self.unread));
    }
}

struct MessageScreen {
    nav: NavHandle<MailRoute>,
    id: u32,
}

impl Screen for MessageScreen {
    fn title(&self) -> String {
        format!("Message {}", self.id)
    }

    fn activate(&self) {
        // Open preferences from the message toolbar.
        self.nav.push(MailRoute::Settings);
    }
}

struct SettingsScreen {
    nav: NavHandle<MailRoute>,
}

impl Screen for SettingsScreen {
    fn title(&self) -> String {
        "Settings".to_string()
    }

    fn activate(&self) {
        // "Sign out" returns to the start of the flow.
        self.nav.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use understory_navigation::{NavCommand, Navigator};

    fn titles(nav: &Navigator<MailRoute>) -> Vec<String> {
        nav.iter().map(|d| d.view().title()).collect()
    }

    #[test]
    fn activating_each_screen_walks_the_flow() {
        let mut nav = Navigator::new();
        nav.set_logging_enabled(false);
        nav.push(MailRoute::Home);

        for _ in 0..3 {
            nav.top().unwrap().view().activate();
            assert_eq!(nav.apply_pending(), Ok(1));
        }
        assert_eq!(
            titles(&nav),
            vec!["Home", "Inbox (3)", "Message 3", "Settings"]
        );

        nav.top().unwrap().view().activate();
        assert_eq!(nav.apply_pending(), Ok(1));
        assert!(nav.is_empty());
    }

    #[test]
    fn screens_queue_commands_on_a_detached_handle() {
        let handle = NavHandle::new();

        MailRoute::Home.resolve(&handle).activate();
        assert_eq!(handle.drain(), vec![NavCommand::Push(MailRoute::Inbox)]);

        MailRoute::Message(7).resolve(&handle).activate();
        MailRoute::Settings.resolve(&handle).activate();
        assert_eq!(
            handle.drain(),
            vec![NavCommand::Push(MailRoute::Settings), NavCommand::Reset]
        );
        assert_eq!(handle.pending(), 0);
    }
}
