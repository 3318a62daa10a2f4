use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Horizontal alignment of the slide layer inside the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Align {
    #[default]
    Left,
    Right,
    Center,
}

/// Slide sizing mode.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum SlideWidth {
    /// Every slide spans the full viewport width.
    #[default]
    Full,
    /// Every slide has a fixed pixel width.
    Fixed(f64),
    /// Slides size themselves; geometry comes entirely from measurement.
    Custom,
}

impl SlideWidth {
    #[must_use]
    pub fn is_custom(self) -> bool {
        matches!(self, Self::Custom)
    }
}

/// Measured position and width of one slide, relative to the layer start.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SlideGeometry {
    pub coord_x: f64,
    pub width: f64,
}

/// Inclusive range of valid layer offsets.
///
/// `max` may itself be negative when content is centered; the only invariant
/// is `min <= max` while at least one slide exists. Empty geometry falls back
/// to `{0, 0}`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub fn clamp(self, value: f64) -> f64 {
        if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        }
    }
}

pub type SlideVec = SmallVec<[SlideGeometry; 8]>;

/// Frozen measurement inputs to all offset math for one layout pass.
///
/// `layer_width` is the sum of slide widths; `slides.len()` is the visible
/// slide count.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LayoutSnapshot {
    pub container_width: f64,
    pub viewport_width: f64,
    pub layer_width: f64,
    /// Slides size themselves (`SlideWidth::Custom`) in this layout pass.
    pub custom_width: bool,
    pub slides: SlideVec,
}

impl LayoutSnapshot {
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// The whole layer fits in the container, so no scrolling is needed.
    #[must_use]
    pub fn is_fully_visible(&self) -> bool {
        self.layer_width <= self.container_width
    }

    #[must_use]
    pub fn slide(&self, index: usize) -> Option<SlideGeometry> {
        self.slides.get(index).copied()
    }
}
