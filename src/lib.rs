//! carousel-rs: headless horizontal carousel engine.
//!
//! Given same-axis slides inside a fixed-width viewport, the engine computes
//! the horizontal offset of the sliding layer in response to drag gestures,
//! programmatic index changes, resize, and an optional autoplay schedule,
//! with elastic resistance at the edges of the content.
//!
//! The crate is deliberately headless: slide measurement, rendering, pointer
//! translation, and timers live on the host side behind small traits, so the
//! whole state machine is deterministic and testable without a rendering
//! surface.

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use api::{CarouselConfig, CarouselEngine};
pub use error::{CarouselError, CarouselResult};
