//! Event dispatch system
//!
//! Events delivered to the card scene by a host loop or the headless runner.

use rustc_hash::FxHashMap;

/// Event type identifier
pub type EventType = u32;

/// Common event types
pub mod event_types {
    use super::EventType;

    /// Boolean toggle control changed (or was tapped with no explicit value)
    pub const TOGGLE: EventType = 3;
    pub const RESIZE: EventType = 40;

    // Element lifecycle events
    pub const MOUNT: EventType = 60;
    pub const UNMOUNT: EventType = 61;
}

/// A UI event with associated data
#[derive(Clone, Debug)]
pub struct Event {
    pub event_type: EventType,
    pub target: u64, // Widget ID
    pub data: EventData,
    pub timestamp: u64,
}

/// Event-specific data
#[derive(Clone, Debug, PartialEq)]
pub enum EventData {
    /// `Some(value)` sets the toggle, `None` flips it
    Toggle {
        value: Option<bool>,
    },
    Resize {
        width: u32,
        height: u32,
    },
    None,
}

impl Event {
    pub fn new(event_type: EventType, target: u64, data: EventData) -> Self {
        Self {
            event_type,
            target,
            data,
            timestamp: 0,
        }
    }

    /// Toggle event that flips the current value
    pub fn toggle(target: u64) -> Self {
        Self::new(
            event_types::TOGGLE,
            target,
            EventData::Toggle { value: None },
        )
    }

    /// Toggle event that sets an explicit value
    pub fn set_toggle(target: u64, value: bool) -> Self {
        Self::new(
            event_types::TOGGLE,
            target,
            EventData::Toggle { value: Some(value) },
        )
    }

    pub fn mount(target: u64) -> Self {
        Self::new(event_types::MOUNT, target, EventData::None)
    }

    pub fn unmount(target: u64) -> Self {
        Self::new(event_types::UNMOUNT, target, EventData::None)
    }

    pub fn resize(target: u64, width: u32, height: u32) -> Self {
        Self::new(event_types::RESIZE, target, EventData::Resize { width, height })
    }

    pub fn with_timestamp(mut self, timestamp: u64) -> Self {
        self.timestamp = timestamp;
        self
    }
}

/// Event handler function type
pub type EventHandler = Box<dyn Fn(&Event)>;

/// Dispatches events to registered handlers
pub struct EventDispatcher {
    handlers: FxHashMap<(u64, EventType), Vec<EventHandler>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self {
            handlers: FxHashMap::default(),
        }
    }

    /// Register an event handler for a widget and event type
    pub fn register<F>(&mut self, widget_id: u64, event_type: EventType, handler: F)
    where
        F: Fn(&Event) + 'static,
    {
        self.handlers
            .entry((widget_id, event_type))
            .or_default()
            .push(Box::new(handler));
    }

    /// Dispatch an event to all registered handlers
    ///
    /// Returns the number of handlers invoked.
    pub fn dispatch(&self, event: &Event) -> usize {
        let Some(handlers) = self.handlers.get(&(event.target, event.event_type)) else {
            return 0;
        };
        for handler in handlers {
            handler(event);
        }
        handlers.len()
    }
}

impl Default for EventDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_dispatch_to_matching_handler() {
        let hits = Rc::new(Cell::new(0));
        let hits_clone = hits.clone();

        let mut dispatcher = EventDispatcher::new();
        dispatcher.register(7, event_types::TOGGLE, move |event| {
            if let EventData::Toggle { value } = event.data {
                assert_eq!(value, Some(true));
            }
            hits_clone.set(hits_clone.get() + 1);
        });

        assert_eq!(dispatcher.dispatch(&Event::set_toggle(7, true)), 1);
        assert_eq!(dispatcher.dispatch(&Event::set_toggle(8, true)), 0);
        assert_eq!(dispatcher.dispatch(&Event::mount(7)), 0);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_every_handler_for_a_key_runs() {
        let hits = Rc::new(Cell::new(0));
        let mut dispatcher = EventDispatcher::new();
        for _ in 0..3 {
            let hits = hits.clone();
            dispatcher.register(1, event_types::UNMOUNT, move |_| hits.set(hits.get() + 1));
        }

        assert_eq!(dispatcher.dispatch(&Event::unmount(1)), 3);
        assert_eq!(hits.get(), 3);
    }
}
