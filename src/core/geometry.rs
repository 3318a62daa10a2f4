use smallvec::SmallVec;

use crate::core::types::{LayoutSnapshot, SlideGeometry, SlideVec};
use crate::error::{CarouselError, CarouselResult};

/// One measured slide rectangle along the carousel axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SlideRect {
    /// Offset of the slide's left edge from the layer start.
    pub offset_left: f64,
    pub offset_width: f64,
}

impl SlideRect {
    #[must_use]
    pub fn new(offset_left: f64, offset_width: f64) -> Self {
        Self {
            offset_left,
            offset_width,
        }
    }
}

/// Host measurement capability consumed by the geometry cache.
///
/// The engine never touches a layout surface directly; hosts supply measured
/// rects through this trait so the whole offset math stays deterministic and
/// testable without a rendering surface.
pub trait SlideMeasurer {
    /// Measured rect for the slide at `index`; `None` when the slide has no
    /// handle yet (it then measures as `0, 0`).
    fn slide_rect(&self, index: usize) -> Option<SlideRect>;

    fn container_width(&self) -> f64;

    fn viewport_width(&self) -> f64;
}

/// Ordered arena of per-slide measurement handles.
///
/// Handles live at their slide position: assigned when a slide mounts,
/// cleared when it unmounts, truncated when the slide count shrinks. This is
/// the stock `SlideMeasurer` for hosts that own their own layout numbers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeasurementArena {
    slots: Vec<Option<SlideRect>>,
    container_width: f64,
    viewport_width: f64,
}

impl MeasurementArena {
    #[must_use]
    pub fn new(container_width: f64, viewport_width: f64) -> Self {
        Self {
            slots: Vec::new(),
            container_width,
            viewport_width,
        }
    }

    pub fn set_widths(&mut self, container_width: f64, viewport_width: f64) {
        self.container_width = container_width;
        self.viewport_width = viewport_width;
    }

    /// Assigns the handle for the slide at `index`, growing the arena as
    /// needed.
    pub fn assign(&mut self, index: usize, rect: SlideRect) {
        if index >= self.slots.len() {
            self.slots.resize(index + 1, None);
        }
        self.slots[index] = Some(rect);
    }

    /// Clears the handle at `index` (slide unmounted); the position itself
    /// stays valid.
    pub fn clear(&mut self, index: usize) {
        if let Some(slot) = self.slots.get_mut(index) {
            *slot = None;
        }
    }

    /// Drops handles past the new slide count.
    pub fn truncate(&mut self, len: usize) {
        self.slots.truncate(len);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl SlideMeasurer for MeasurementArena {
    fn slide_rect(&self, index: usize) -> Option<SlideRect> {
        self.slots.get(index).copied().flatten()
    }

    fn container_width(&self) -> f64 {
        self.container_width
    }

    fn viewport_width(&self) -> f64 {
        self.viewport_width
    }
}

/// Builds the layout snapshot for `slide_count` slides.
///
/// Pure: identical measurements yield a bit-identical snapshot. Safe for
/// `slide_count == 0` (empty slides, zero layer width). Unmeasured slides
/// default to `0, 0`; non-finite or negative host measurements are rejected.
pub fn measure_layout<M: SlideMeasurer>(
    measurer: &M,
    slide_count: usize,
    custom_width: bool,
) -> CarouselResult<LayoutSnapshot> {
    let mut slides: SlideVec = SmallVec::with_capacity(slide_count);
    let mut layer_width = 0.0;

    for index in 0..slide_count {
        let rect = measurer.slide_rect(index).unwrap_or_default();
        if !rect.offset_left.is_finite()
            || !rect.offset_width.is_finite()
            || rect.offset_width < 0.0
        {
            return Err(CarouselError::InvalidSlideMeasure {
                index,
                left: rect.offset_left,
                width: rect.offset_width,
            });
        }
        slides.push(SlideGeometry {
            coord_x: rect.offset_left,
            width: rect.offset_width,
        });
        layer_width += rect.offset_width;
    }

    let container_width = measurer.container_width();
    let viewport_width = measurer.viewport_width();
    if !container_width.is_finite() || container_width < 0.0 {
        return Err(CarouselError::InvalidMeasure(format!(
            "container width must be finite and >= 0, got {container_width}"
        )));
    }
    if !viewport_width.is_finite() || viewport_width < 0.0 {
        return Err(CarouselError::InvalidMeasure(format!(
            "viewport width must be finite and >= 0, got {viewport_width}"
        )));
    }

    Ok(LayoutSnapshot {
        container_width,
        viewport_width,
        layer_width,
        custom_width,
        slides,
    })
}
