//! core::events
//!
//! Change notifications emitted by a terminal strip.
//!
//! # Contract
//!
//! Observers learn *that* something changed, never *what*: they receive the
//! strip id and one of two categories and re-query the strip. Notifications
//! are delivered synchronously, after the mutation is fully applied, on the
//! caller's thread. Rejected calls notify nobody.
//!
//! # Example
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use terminalstrip::core::element::TerminalData;
//! use terminalstrip::core::events::StripEvent;
//! use terminalstrip::core::strip::TerminalStrip;
//!
//! let mut strip = TerminalStrip::new("plant", "cabinet 1", "X1");
//! let seen = Rc::new(RefCell::new(Vec::new()));
//! let sink = seen.clone();
//! strip.subscribe(move |_, event| sink.borrow_mut().push(event));
//!
//! strip.add_virtual_terminal(TerminalData::labeled("spare"));
//! assert_eq!(*seen.borrow(), vec![StripEvent::OrderChanged]);
//! ```

use std::fmt;

use super::types::StripId;

/// Category of a strip change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StripEvent {
    /// Physical order, grouping, levels or the terminal set changed
    OrderChanged,
    /// The bridge set or a bridge's membership or color changed
    BridgeChanged,
}

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback = Box<dyn FnMut(StripId, StripEvent)>;

/// The observer list of one strip.
#[derive(Default)]
pub(crate) struct Observers {
    next_id: u64,
    callbacks: Vec<(SubscriptionId, Callback)>,
}

impl Observers {
    pub(crate) fn subscribe<F>(&mut self, f: F) -> SubscriptionId
    where
        F: FnMut(StripId, StripEvent) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.callbacks.push((id, Box::new(f)));
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.callbacks.len();
        self.callbacks.retain(|(sub, _)| *sub != id);
        self.callbacks.len() != before
    }

    pub(crate) fn emit(&mut self, strip: StripId, event: StripEvent) {
        for (_, callback) in &mut self.callbacks {
            callback(strip, event);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.callbacks.len()
    }
}

impl fmt::Debug for Observers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("subscribers", &self.callbacks.len())
            .finish()
    }
}
