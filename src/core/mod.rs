pub mod bounds;
pub mod drag;
pub mod geometry;
pub mod indent;
pub mod types;

pub use bounds::{compute_bounds, offset_max, offset_min};
pub use drag::{DragSession, GestureFrame, live_offset, resolve_target};
pub use geometry::{MeasurementArena, SlideMeasurer, SlideRect, measure_layout};
pub use indent::indent_for;
pub use types::{Align, Bounds, LayoutSnapshot, SlideGeometry, SlideVec, SlideWidth};
