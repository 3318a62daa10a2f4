use crate::core::types::{Align, Bounds, LayoutSnapshot};

/// Rest offset of the layer for `target_index`.
///
/// Returns `0` when all content fits in the container, and `0` when the
/// target has no measured slide (out of range, or geometry not available
/// yet). Center-aligned custom-width slides are centered by their own
/// midpoint and left unclamped; every other case clamps `-coord_x` into the
/// bounds.
///
/// Pure: identical snapshot/bounds always yield the same offset.
#[must_use]
pub fn indent_for(
    target_index: usize,
    snapshot: &LayoutSnapshot,
    bounds: Bounds,
    align: Align,
) -> f64 {
    if snapshot.is_fully_visible() {
        return 0.0;
    }

    let Some(slide) = snapshot.slide(target_index) else {
        return 0.0;
    };

    if align == Align::Center && snapshot.custom_width {
        return snapshot.viewport_width / 2.0 - slide.coord_x - slide.width / 2.0;
    }

    bounds.clamp(-slide.coord_x)
}
