pub mod autoplay;
pub mod engine;
pub mod engine_config;
pub mod events;
mod index_owner;

pub use autoplay::{AutoplayScheduler, ManualScheduleState, ManualScheduler, NullScheduler};
pub use engine::{AnimationState, CarouselEngine, RenderState};
pub use engine_config::{Bullets, CarouselConfig};
pub use events::{ArrowDirection, CarouselEvent, EventSink, NullSink, RecordingSink};
