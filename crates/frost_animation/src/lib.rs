//! Frostcard Animation System
//!
//! Easing curves, retargetable tweens, and a frame scheduler.
//!
//! # Features
//!
//! - **Easing**: CSS-style curves, including arbitrary cubic beziers
//! - **Tweens**: fixed-duration interpolation that reaches its target exactly
//! - **Interruptible**: retargeting restarts from the displayed value
//! - **Deterministic**: frames can be ticked by explicit deltas

pub mod easing;
pub mod scheduler;
pub mod tween;

pub use easing::Easing;
pub use scheduler::{AnimationScheduler, TweenId};
pub use tween::Tween;
