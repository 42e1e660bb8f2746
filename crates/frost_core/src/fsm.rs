//! State Machine Runtime
//!
//! Flat state machines for widget interaction states.
//!
//! Events that have no matching transition from the current state are
//! ignored, so sending the same event twice is a no-op the second time.

/// Identifier for a state within a state machine
pub type StateId = u32;

/// Identifier for an event type
pub type EventId = u32;

/// A transition in the state machine
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub from_state: StateId,
    pub event: EventId,
    pub to_state: StateId,
}

impl Transition {
    pub const fn new(from: StateId, event: EventId, to: StateId) -> Self {
        Self {
            from_state: from,
            event,
            to_state: to,
        }
    }

    fn matches(&self, state: StateId, event: EventId) -> bool {
        self.from_state == state && self.event == event
    }
}

/// A state machine instance
#[derive(Clone, Debug)]
pub struct StateMachine {
    current_state: StateId,
    transitions: Vec<Transition>,
    /// Transitions taken so far
    taken: u64,
}

impl StateMachine {
    /// Create a new state machine with an initial state and transitions
    pub fn new(initial_state: StateId, transitions: Vec<Transition>) -> Self {
        Self {
            current_state: initial_state,
            transitions,
            taken: 0,
        }
    }

    /// Get the current state
    pub fn current_state(&self) -> StateId {
        self.current_state
    }

    /// Number of transitions taken since creation
    pub fn transition_count(&self) -> u64 {
        self.taken
    }

    /// Send an event to the state machine, potentially triggering a transition
    ///
    /// Returns the state after the event has been handled.
    pub fn send(&mut self, event: EventId) -> StateId {
        let current = self.current_state;

        let Some(to_state) = self
            .transitions
            .iter()
            .find(|t| t.matches(current, event))
            .map(|t| t.to_state)
        else {
            tracing::trace!(state = current, event, "no transition");
            return current;
        };

        self.current_state = to_state;
        self.taken = self.taken.saturating_add(1);
        tracing::trace!(from = current, event, to = to_state, "transition");
        to_state
    }
}
