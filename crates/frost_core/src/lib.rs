//! Frostcard Core
//!
//! Foundational primitives shared by the animation system and the app:
//!
//! - **Layer primitives**: geometry, colors, gradients, shadows, blend modes
//! - **Backdrop filters**: blur radius and saturation as first-class values
//! - **State Machines**: flat statecharts for widget interaction states
//! - **Event Dispatch**: toggle, resize and lifecycle events
//!
//! # Example
//!
//! ```rust
//! use frost_core::BackdropFilter;
//!
//! let filter = BackdropFilter::new(10.0, 1.8);
//! assert_eq!(filter.to_css(), "blur(10px) saturate(1.8)");
//! ```

pub mod events;
pub mod fsm;
pub mod layer;

pub use events::{event_types, Event, EventData, EventDispatcher, EventType};
pub use fsm::{EventId, StateId, StateMachine, Transition};
pub use layer::{
    BackdropFilter, BlendMode, Brush, Color, CornerRadius, FilterOp, Gradient, GradientStop,
    LayerId, LayerIdGenerator, Point, Rect, Shadow, Size,
};
